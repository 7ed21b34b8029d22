//! In-memory message store and its resolver-facing operations.
//!
//! The store is an explicitly constructed instance, never a module-level
//! global; whoever builds a schema owns it (behind an `Arc`) and hands it to
//! resolvers as schema context data.

mod id;
mod types;

pub use id::new_message_id;
pub use types::{Message, MessageInput};

use crate::error::{PostboxError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory mapping from message id to message body.
///
/// Each operation takes the lock exactly once and completes while holding
/// it, so the read-then-write pair inside `replace` is atomic with respect
/// to other operations even when the GraphQL engine runs resolvers
/// concurrently.
pub struct MessageStore {
    records: RwLock<HashMap<String, MessageInput>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with seed records.
    pub fn with_seed(seed: impl IntoIterator<Item = (String, MessageInput)>) -> Self {
        Self {
            records: RwLock::new(seed.into_iter().collect()),
        }
    }

    /// Look up a message by id.
    ///
    /// An unknown id is an error, never an implicit default.
    pub fn fetch(&self, id: &str) -> Result<Message> {
        let records = self.records.read().expect("message store lock poisoned");

        records
            .get(id)
            .cloned()
            .map(|body| Message::new(id, body))
            .ok_or_else(|| PostboxError::MessageNotFound(id.to_string()))
    }

    /// Insert a new message under a freshly generated id and return it.
    pub fn create(&self, input: MessageInput) -> Message {
        let id = new_message_id();

        let mut records = self.records.write().expect("message store lock poisoned");
        records.insert(id.clone(), input.clone());

        Message::new(id, input)
    }

    /// Overwrite the message stored under `id` with `input`.
    ///
    /// The whole body is replaced: fields omitted from `input` do not
    /// survive from the previous record. Fails when `id` names no existing
    /// record.
    pub fn replace(&self, id: &str, input: MessageInput) -> Result<Message> {
        let mut records = self.records.write().expect("message store lock poisoned");

        if !records.contains_key(id) {
            return Err(PostboxError::MessageNotFound(id.to_string()));
        }
        records.insert(id.to_string(), input.clone());

        Ok(Message::new(id, input))
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
