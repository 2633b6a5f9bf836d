//! Core domain models for the chatroom service.

use serde::{Deserialize, Serialize};

use super::{
    error::AccountError,
    value_object::{
        AccountId, ChatroomId, ChatroomName, ChatroomStatus, ChatroomType, Email, MaxAllowedRooms,
        PostContent, PostId, Timestamp,
    },
};

/// Tenant owning chatrooms, bounded by a room quota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier
    pub id: AccountId,
    /// Maximum number of chatrooms this account may own
    pub max_allowed_rooms: MaxAllowedRooms,
}

impl Account {
    /// Create a new account
    pub fn new(id: AccountId, max_allowed_rooms: MaxAllowedRooms) -> Self {
        Self {
            id,
            max_allowed_rooms,
        }
    }

    /// Check that one more chatroom fits in the quota
    ///
    /// # Arguments
    ///
    /// * `current` - Number of chatrooms the account already owns
    ///
    /// # Errors
    ///
    /// Returns `AccountError::RoomLimitExceeded` if the quota is already used up
    pub fn ensure_room_available(&self, current: usize) -> Result<(), AccountError> {
        let max = self.max_allowed_rooms.value();
        if current >= max as usize {
            return Err(AccountError::RoomLimitExceeded { max, current });
        }
        Ok(())
    }
}

/// A conversation space owned by an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chatroom {
    /// Chatroom identifier
    pub id: ChatroomId,
    /// Owning account
    pub account_id: AccountId,
    /// Display name
    pub name: ChatroomName,
    /// Lifecycle type (trial / standard)
    pub chatroom_type: ChatroomType,
    /// Operational status (active / suspended)
    pub status: ChatroomStatus,
}

impl Chatroom {
    /// Create a new chatroom
    pub fn new(
        id: ChatroomId,
        account_id: AccountId,
        name: ChatroomName,
        chatroom_type: ChatroomType,
        status: ChatroomStatus,
    ) -> Self {
        Self {
            id,
            account_id,
            name,
            chatroom_type,
            status,
        }
    }

    /// Replace type and status together
    pub fn change_settings(&mut self, chatroom_type: ChatroomType, status: ChatroomStatus) {
        self.chatroom_type = chatroom_type;
        self.status = status;
    }
}

/// Grant allowing a user to take part in a chatroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccess {
    pub chatroom_id: ChatroomId,
    pub user_email: Email,
    /// Whether the user may read posts written before the grant
    pub can_see_all_history: bool,
}

impl UserAccess {
    /// Create a new grant
    pub fn new(chatroom_id: ChatroomId, user_email: Email, can_see_all_history: bool) -> Self {
        Self {
            chatroom_id,
            user_email,
            can_see_all_history,
        }
    }

    /// Whether this grant is for the given (chatroom, user) pair
    pub fn is_for(&self, chatroom_id: &ChatroomId, user_email: &Email) -> bool {
        &self.chatroom_id == chatroom_id && &self.user_email == user_email
    }
}

/// Immutable message written into a chatroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Chatroom the post belongs to
    pub chatroom_id: ChatroomId,
    /// Author
    pub user_email: Email,
    /// Message body
    pub content: PostContent,
    /// Timestamp when the post was created (ordering key)
    pub created_at: Timestamp,
}

impl Post {
    /// Create a new post
    pub fn new(
        id: PostId,
        chatroom_id: ChatroomId,
        user_email: Email,
        content: PostContent,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            chatroom_id,
            user_email,
            content,
            created_at,
        }
    }
}
