//! Domain factories for creating identifiers.

use super::{AccountId, ChatroomId, PostId};

/// Factory for generating entity identifiers.
///
/// Keeps id generation out of the value objects, which only validate.
pub struct IdFactory;

impl IdFactory {
    /// Generate a new AccountId with a random UUID v4.
    pub fn account_id() -> AccountId {
        AccountId::from_uuid(uuid::Uuid::new_v4())
    }

    /// Generate a new ChatroomId with a random UUID v4.
    pub fn chatroom_id() -> ChatroomId {
        ChatroomId::from_uuid(uuid::Uuid::new_v4())
    }

    /// Generate a new PostId with a random UUID v4.
    pub fn post_id() -> PostId {
        PostId::from_uuid(uuid::Uuid::new_v4())
    }
}
