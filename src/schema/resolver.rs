//! Resolvers for the dynamically constructed schema variant.
//!
//! Each `create_*_resolver` function returns a root field whose closure
//! extracts arguments from the resolver context, calls the message store
//! held in schema data, and hands the result back as a GraphQL object value.

use crate::store::{Message, MessageInput, MessageStore};
use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, ObjectAccessor, ResolverContext, TypeRef,
};
use async_graphql::{Name, Value};
use indexmap::IndexMap;
use std::sync::Arc;

/// Create the getMessage(id) resolver.
///
/// Fails with a field-level error when no message exists under `id`.
pub fn create_get_message_resolver() -> Field {
    Field::new(
        "getMessage",
        TypeRef::named("Message"),
        move |ctx: ResolverContext| {
            FieldFuture::new(async move {
                let id = ctx.args.try_get("id")?.string()?.to_string();

                let store = ctx
                    .data::<Arc<MessageStore>>()
                    .map_err(|_e| "Failed to get message store")?;

                tracing::debug!("Fetching message {}", id);

                let message = store.fetch(&id)?;
                Ok(Some(FieldValue::owned_any(message_to_graphql_value(
                    &message,
                ))))
            })
        },
    )
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::STRING)))
}

/// Create the createMessage(input) resolver.
pub fn create_create_message_resolver() -> Field {
    Field::new(
        "createMessage",
        TypeRef::named("Message"),
        move |ctx: ResolverContext| {
            FieldFuture::new(async move {
                let input = match ctx.args.get("input") {
                    Some(value) => message_input_from_args(&value.object()?),
                    None => MessageInput::default(),
                };

                let store = ctx
                    .data::<Arc<MessageStore>>()
                    .map_err(|_e| "Failed to get message store")?;

                let message = store.create(input);
                tracing::debug!("Created message {}", message.id);

                Ok(Some(FieldValue::owned_any(message_to_graphql_value(
                    &message,
                ))))
            })
        },
    )
    .argument(InputValue::new("input", TypeRef::named("MessageInput")))
}

/// Create the updateMessage(id, input) resolver.
///
/// The stored body is fully overwritten with `input`; fails with a
/// field-level error when `id` names no existing message.
pub fn create_update_message_resolver() -> Field {
    Field::new(
        "updateMessage",
        TypeRef::named("Message"),
        move |ctx: ResolverContext| {
            FieldFuture::new(async move {
                let id = ctx.args.try_get("id")?.string()?.to_string();
                let input = match ctx.args.get("input") {
                    Some(value) => message_input_from_args(&value.object()?),
                    None => MessageInput::default(),
                };

                let store = ctx
                    .data::<Arc<MessageStore>>()
                    .map_err(|_e| "Failed to get message store")?;

                let message = store.replace(&id, input)?;
                tracing::debug!("Updated message {}", message.id);

                Ok(Some(FieldValue::owned_any(message_to_graphql_value(
                    &message,
                ))))
            })
        },
    )
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
    .argument(InputValue::new("input", TypeRef::named("MessageInput")))
}

/// Read a MessageInput out of the engine-provided argument object.
fn message_input_from_args(input: &ObjectAccessor) -> MessageInput {
    MessageInput {
        content: input
            .get("content")
            .and_then(|v| v.string().ok().map(str::to_string)),
        author: input
            .get("author")
            .and_then(|v| v.string().ok().map(str::to_string)),
    }
}

/// Convert a message to a GraphQL object value.
///
/// The `Message` type's field resolvers extract their values from this
/// object by name.
pub fn message_to_graphql_value(message: &Message) -> Value {
    let mut object_map = IndexMap::new();

    object_map.insert(Name::new("id"), Value::String(message.id.clone()));
    object_map.insert(Name::new("content"), optional_string_value(&message.content));
    object_map.insert(Name::new("author"), optional_string_value(&message.author));

    Value::Object(object_map)
}

fn optional_string_value(field: &Option<String>) -> Value {
    match field {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_to_graphql_value_all_fields() {
        let message = Message {
            id: "one".to_string(),
            content: Some("hello world".to_string()),
            author: Some("joey".to_string()),
        };

        let value = message_to_graphql_value(&message);

        if let Value::Object(obj) = value {
            assert_eq!(obj.get("id").unwrap(), &Value::String("one".to_string()));
            assert_eq!(
                obj.get("content").unwrap(),
                &Value::String("hello world".to_string())
            );
            assert_eq!(
                obj.get("author").unwrap(),
                &Value::String("joey".to_string())
            );
        } else {
            panic!("Expected Value::Object");
        }
    }

    #[test]
    fn test_message_to_graphql_value_absent_fields_are_null() {
        let message = Message {
            id: "two".to_string(),
            content: None,
            author: None,
        };

        let value = message_to_graphql_value(&message);

        if let Value::Object(obj) = value {
            assert_eq!(obj.get("content").unwrap(), &Value::Null);
            assert_eq!(obj.get("author").unwrap(), &Value::Null);
        } else {
            panic!("Expected Value::Object");
        }
    }
}
