//! Integration tests for the derive-based schema variant.
//!
//! Exercises the same operations as the dynamic-variant tests so that the
//! two schema forms stay observably equivalent, plus the declared-but-unbacked
//! queryMessage field.

mod static_schema_tests {
    use async_graphql::{Request, Variables};
    use postbox::schema::{build_static_schema, StaticSchema};
    use postbox::store::{MessageInput, MessageStore};
    use std::sync::Arc;

    fn seeded_schema() -> StaticSchema {
        build_static_schema(Arc::new(MessageStore::with_seed([(
            "one".to_string(),
            MessageInput {
                content: Some("hello world".to_string()),
                author: Some("joey".to_string()),
            },
        )])))
    }

    #[tokio::test]
    async fn test_create_message() {
        let _ = tracing_subscriber::fmt::try_init();

        let schema = build_static_schema(Arc::new(MessageStore::new()));

        let query = r#"
mutation($input: MessageInput) {
  createMessage(input: $input) {
    id
    author
    content
  }
}"#;
        let variables = Variables::from_json(serde_json::json!({
            "input": {
                "author": "joey",
                "content": "world is good"
            }
        }));

        let response = schema
            .execute(Request::new(query).variables(variables))
            .await;
        assert!(
            response.errors.is_empty(),
            "Mutation had errors: {:?}",
            response.errors
        );

        let data = response.data.into_json().expect("Failed to get data");
        let created = data
            .get("createMessage")
            .expect("Missing createMessage field");

        let id = created.get("id").unwrap().as_str().unwrap();
        assert_eq!(id.len(), 20, "Expected a generated 20-char hex id");
        assert_eq!(created.get("author").unwrap().as_str().unwrap(), "joey");
        assert_eq!(
            created.get("content").unwrap().as_str().unwrap(),
            "world is good"
        );
    }

    #[tokio::test]
    async fn test_get_message() {
        let _ = tracing_subscriber::fmt::try_init();

        let schema = seeded_schema();

        let query = r#"
query($id: String!) {
# query message id
  getMessage(id: $id) {
    author
    content
  }
}"#;
        let variables = Variables::from_json(serde_json::json!({ "id": "one" }));

        let response = schema
            .execute(Request::new(query).variables(variables))
            .await;
        assert!(
            response.errors.is_empty(),
            "Query had errors: {:?}",
            response.errors
        );

        let data = response.data.into_json().expect("Failed to get data");
        assert_eq!(
            data,
            serde_json::json!({
                "getMessage": {
                    "author": "joey",
                    "content": "hello world"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_get_missing_message_surfaces_error() {
        let _ = tracing_subscriber::fmt::try_init();

        let schema = seeded_schema();

        let response = schema
            .execute(r#"query { getMessage(id: "nope") { id } }"#)
            .await;

        assert!(!response.errors.is_empty(), "Expected a field-level error");
        assert!(
            response.errors[0]
                .message
                .contains("no message exists with id nope"),
            "Unexpected error message: {}",
            response.errors[0].message
        );
    }

    #[tokio::test]
    async fn test_update_message_fully_replaces() {
        let _ = tracing_subscriber::fmt::try_init();

        let schema = seeded_schema();

        let update = r#"
mutation($id: ID!, $input: MessageInput) {
  updateMessage(id: $id, input: $input) {
    id
    author
    content
  }
}"#;
        let variables = Variables::from_json(serde_json::json!({
            "id": "one",
            "input": { "author": "X" }
        }));

        let response = schema
            .execute(Request::new(update).variables(variables))
            .await;
        assert!(
            response.errors.is_empty(),
            "Mutation had errors: {:?}",
            response.errors
        );

        let data = response.data.into_json().expect("Failed to get data");
        assert_eq!(
            data,
            serde_json::json!({
                "updateMessage": {
                    "id": "one",
                    "author": "X",
                    "content": null
                }
            })
        );

        // Repeating the identical update observes the same record
        let variables = Variables::from_json(serde_json::json!({
            "id": "one",
            "input": { "author": "X" }
        }));
        let response = schema
            .execute(Request::new(update).variables(variables))
            .await;
        assert!(response.errors.is_empty());

        let data = response.data.into_json().unwrap();
        assert_eq!(
            data,
            serde_json::json!({
                "updateMessage": {
                    "id": "one",
                    "author": "X",
                    "content": null
                }
            })
        );
    }

    #[tokio::test]
    async fn test_update_missing_message_surfaces_error() {
        let _ = tracing_subscriber::fmt::try_init();

        let schema = build_static_schema(Arc::new(MessageStore::new()));

        let query = r#"
mutation($id: ID!, $input: MessageInput) {
  updateMessage(id: $id, input: $input) {
    id
  }
}"#;
        let variables = Variables::from_json(serde_json::json!({
            "id": "missing",
            "input": { "author": "joey" }
        }));

        let response = schema
            .execute(Request::new(query).variables(variables))
            .await;

        assert!(!response.errors.is_empty(), "Expected a field-level error");
        assert!(response.errors[0]
            .message
            .contains("no message exists with id missing"));
    }

    #[tokio::test]
    async fn test_query_message_resolves_to_null() {
        let _ = tracing_subscriber::fmt::try_init();

        let schema = seeded_schema();

        let response = schema
            .execute(r#"query { queryMessage(skip: 0) { id } }"#)
            .await;
        assert!(
            response.errors.is_empty(),
            "Query had errors: {:?}",
            response.errors
        );

        let data = response.data.into_json().expect("Failed to get data");
        assert_eq!(data, serde_json::json!({ "queryMessage": null }));
    }
}
