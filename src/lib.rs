pub mod config;
pub mod error;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use config::{Config, SeedMessage, ServerConfig};
pub use error::{PostboxError, Result};
pub use schema::{GraphQlSchema, SchemaVariant};
pub use store::{Message, MessageInput, MessageStore};
