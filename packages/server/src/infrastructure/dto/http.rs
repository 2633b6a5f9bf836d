//! HTTP API request and response DTOs for the chatroom service.
//!
//! Mandatory request fields are still `Option`: the handler reports a missing
//! field as `missing <field> param` instead of a generic decode failure.

use serde::{Deserialize, Serialize};

use chatrooms_shared::time::timestamp_to_rfc3339;

use crate::domain::{Account, Chatroom, Post, UserAccess};

/// Body of `POST /accounts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAccountRequest {
    /// Kept as raw JSON so a non-integer is reported as invalid input
    pub max_allowed_rooms: Option<serde_json::Value>,
}

/// Body of `POST /accounts/{account_id}/chatrooms`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChatroomRequest {
    pub name: Option<String>,
    /// Optional, defaults to `standard`
    #[serde(rename = "type")]
    pub chatroom_type: Option<String>,
    /// Optional, defaults to `active`
    pub status: Option<String>,
}

/// Body of `PUT /chatrooms/{chatroom_id}`; both fields are mandatory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChatroomRequest {
    #[serde(rename = "type")]
    pub chatroom_type: Option<String>,
    pub status: Option<String>,
}

/// Body of `PUT /chatrooms/{chatroom_id}/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrantUserAccessRequest {
    pub email: Option<String>,
    #[serde(rename = "canSeeAllHistory")]
    pub can_see_all_history: Option<bool>,
}

/// Body of `POST /chatrooms/{chatroom_id}/posts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    pub user_email: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: String,
    pub max_allowed_rooms: u32,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            max_allowed_rooms: account.max_allowed_rooms.value(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatroomDto {
    pub id: String,
    pub account_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub chatroom_type: String,
    pub status: String,
}

impl From<Chatroom> for ChatroomDto {
    fn from(chatroom: Chatroom) -> Self {
        Self {
            id: chatroom.id.to_string(),
            account_id: chatroom.account_id.to_string(),
            name: chatroom.name.as_str().to_string(),
            chatroom_type: chatroom.chatroom_type.as_str().to_string(),
            status: chatroom.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccessDto {
    pub chatroom_id: String,
    pub email: String,
    #[serde(rename = "canSeeAllHistory")]
    pub can_see_all_history: bool,
}

impl From<UserAccess> for UserAccessDto {
    fn from(access: UserAccess) -> Self {
        Self {
            chatroom_id: access.chatroom_id.to_string(),
            email: access.user_email.as_str().to_string(),
            can_see_all_history: access.can_see_all_history,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: String,
    pub chatroom_id: String,
    pub user_email: String,
    pub content: String,
    pub created_at: String, // RFC 3339
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            chatroom_id: post.chatroom_id.to_string(),
            user_email: post.user_email.as_str().to_string(),
            content: post.content.as_str().to_string(),
            created_at: timestamp_to_rfc3339(post.created_at.value()),
        }
    }
}

/// Confirmation body for update/delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
