//! Dynamic GraphQL schema construction.
//!
//! This module provides the `SchemaBuilder` which assembles the message
//! schema programmatically with `async_graphql::dynamic` — the direct
//! object-construction counterpart of the derive-based variant in `model`.

use crate::error::{PostboxError, Result};
use crate::schema::resolver::{
    create_create_message_resolver, create_get_message_resolver, create_update_message_resolver,
};
use crate::store::MessageStore;
use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputObject, InputValue, Object, Schema, TypeRef,
};
use async_graphql::Value;
use std::sync::Arc;

/// Builder for the dynamically constructed message schema.
pub struct SchemaBuilder {
    /// Store shared with every resolver via schema data
    store: Arc<MessageStore>,
}

impl SchemaBuilder {
    /// Create a new schema builder around a message store.
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }

    /// Build the complete executable schema.
    ///
    /// Registers the `Message` object type, the `MessageInput` input type,
    /// and the query/mutation roots, then attaches the store as schema data.
    pub fn build_schema(self) -> Result<Schema> {
        let message = build_message_type();
        let message_input = build_message_input_type();

        let query = Object::new("Query").field(create_get_message_resolver());

        let mutation = Object::new("Mutation")
            .field(create_create_message_resolver())
            .field(create_update_message_resolver());

        let schema = Schema::build(query.type_name(), Some(mutation.type_name()), None)
            .register(message)
            .register(message_input)
            .register(query)
            .register(mutation)
            .data(self.store)
            .finish()
            .map_err(|e| PostboxError::SchemaBuild(format!("Failed to build schema: {}", e)))?;

        Ok(schema)
    }
}

/// Build the `Message` object type.
///
/// Field resolvers extract their value by name from the parent object value
/// produced by the root resolvers.
fn build_message_type() -> Object {
    Object::new("Message")
        .field(message_field("id", TypeRef::named_nn(TypeRef::ID)))
        .field(message_field("content", TypeRef::named(TypeRef::STRING)))
        .field(message_field("author", TypeRef::named(TypeRef::STRING)))
}

/// Build the `MessageInput` input type.
fn build_message_input_type() -> InputObject {
    InputObject::new("MessageInput")
        .field(InputValue::new("content", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("author", TypeRef::named(TypeRef::STRING)))
}

fn message_field(name: &'static str, type_ref: TypeRef) -> Field {
    Field::new(name, type_ref, move |ctx| {
        FieldFuture::new(async move {
            // Extract the field value from the parent object
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Object(obj) = parent {
                if let Some(value) = obj.get(name) {
                    return Ok(Some(FieldValue::value(value.clone())));
                }
            }

            Ok(Some(FieldValue::NULL))
        })
    })
}
