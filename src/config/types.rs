use crate::schema::SchemaVariant;
use crate::store::MessageInput;
use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,

    /// Messages loaded into the store before the server accepts requests
    #[serde(default, rename = "message")]
    pub messages: Vec<SeedMessage>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Which schema form to serve
    #[serde(default)]
    pub schema: SchemaVariant,
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// A message present in the store at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMessage {
    /// Store key; must be unique across seed entries
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl SeedMessage {
    /// Validate a seed entry
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("Seed message id must not be empty".to_string());
        }

        Ok(())
    }

    /// Split into the store's key and body
    pub fn into_record(self) -> (String, MessageInput) {
        (
            self.id,
            MessageInput {
                content: self.content,
                author: self.author,
            },
        )
    }
}
