//! Chatroom field validators.
//!
//! Pure functions run before any write that touches a chatroom's type or
//! status. Matching is case-sensitive.

use super::{
    error::ValueObjectError,
    value_object::{ChatroomStatus, ChatroomType},
};

/// Validate a raw chatroom type.
///
/// # Errors
///
/// Returns `ValueObjectError::InvalidChatroomType` unless `value` is `trial` or `standard`
pub fn validate_chatroom_type(value: &str) -> Result<ChatroomType, ValueObjectError> {
    value.parse()
}

/// Validate a raw chatroom status.
///
/// # Errors
///
/// Returns `ValueObjectError::InvalidChatroomStatus` unless `value` is `active` or `suspended`
pub fn validate_chatroom_status(value: &str) -> Result<ChatroomStatus, ValueObjectError> {
    value.parse()
}
