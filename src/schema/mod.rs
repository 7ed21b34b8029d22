//! GraphQL schema descriptions wired to the message store.
//!
//! The same schema exists in two equivalent forms: a derive-based one
//! (`model`) and one assembled at runtime with `async_graphql::dynamic`
//! (`builder` + `resolver`). Both delegate every operation to the shared
//! `MessageStore` held in schema context data.

mod builder;
mod model;
mod resolver;

pub use builder::SchemaBuilder;
pub use model::{build_static_schema, MutationRoot, QueryRoot, StaticSchema};
pub use resolver::message_to_graphql_value;

use crate::error::Result;
use crate::store::MessageStore;
use async_graphql::{Request, Response};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which schema form to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Derive-based types and roots
    #[default]
    Static,
    /// Programmatic construction via `async_graphql::dynamic`
    Dynamic,
}

/// An executable schema of either form.
pub enum GraphQlSchema {
    Static(StaticSchema),
    Dynamic(async_graphql::dynamic::Schema),
}

impl GraphQlSchema {
    /// Build the requested schema form around `store`.
    pub fn build(variant: SchemaVariant, store: Arc<MessageStore>) -> Result<Self> {
        match variant {
            SchemaVariant::Static => Ok(Self::Static(build_static_schema(store))),
            SchemaVariant::Dynamic => Ok(Self::Dynamic(SchemaBuilder::new(store).build_schema()?)),
        }
    }

    /// Execute one GraphQL request.
    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        match self {
            Self::Static(schema) => schema.execute(request).await,
            Self::Dynamic(schema) => schema.execute(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MessageInput;

    fn seeded_store() -> Arc<MessageStore> {
        Arc::new(MessageStore::with_seed([(
            "one".to_string(),
            MessageInput {
                content: Some("hello world".to_string()),
                author: Some("joey".to_string()),
            },
        )]))
    }

    #[tokio::test]
    async fn test_both_variants_answer_the_same_query() {
        let query = r#"query { getMessage(id: "one") { id author content } }"#;

        for variant in [SchemaVariant::Static, SchemaVariant::Dynamic] {
            let schema = GraphQlSchema::build(variant, seeded_store())
                .expect("schema should build");

            let response = schema.execute(query).await;
            assert!(
                response.errors.is_empty(),
                "{:?} variant had errors: {:?}",
                variant,
                response.errors
            );

            let data = response.data.into_json().expect("Failed to get data");
            assert_eq!(
                data,
                serde_json::json!({
                    "getMessage": {
                        "id": "one",
                        "author": "joey",
                        "content": "hello world"
                    }
                })
            );
        }
    }
}
