//! Derive-based schema variant.
//!
//! The declarative form of the message schema: types and roots are plain
//! structs, and `async-graphql` derives the GraphQL surface from them.

use crate::store::{Message, MessageInput, MessageStore};
use async_graphql::{Context, EmptySubscription, Object, Schema, ID};
use std::sync::Arc;

/// Executable schema for the derive-based variant.
pub type StaticSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch a single message by id.
    async fn get_message(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Message> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.fetch(&id)?)
    }

    /// Declared for schema parity only; nothing backs it, so it always
    /// resolves to null.
    async fn query_message(&self, skip: Option<i32>) -> Option<Vec<Message>> {
        let _ = skip;
        None
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Store a new message under a generated id.
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<Message> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.create(input.unwrap_or_default()))
    }

    /// Fully overwrite an existing message.
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<Message> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.replace(id.as_str(), input.unwrap_or_default())?)
    }
}

/// Build the derive-based schema around `store`.
pub fn build_static_schema(store: Arc<MessageStore>) -> StaticSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
