use async_graphql::{InputObject, SimpleObject};

/// A stored message, shaped for the GraphQL `Message` type.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Message {
    /// Identifier assigned by the store at creation time, immutable thereafter
    pub id: String,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Message {
    /// Attach an id to a message body.
    pub fn new(id: impl Into<String>, body: MessageInput) -> Self {
        Self {
            id: id.into(),
            content: body.content,
            author: body.author,
        }
    }
}

/// Field values for a message, as accepted by the create and update
/// operations. This is also the value type kept in the store: the record
/// body is exactly what the caller supplied, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, InputObject)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}
