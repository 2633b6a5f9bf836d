//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Identifier is not a valid UUID
    #[error("{kind} must be a valid UUID format (got: {value})")]
    InvalidId { kind: &'static str, value: String },

    /// Chatroom type outside the allowed set
    #[error("A chatroom type must be either 'trial' or 'standard' (got: {0})")]
    InvalidChatroomType(String),

    /// Chatroom status outside the allowed set
    #[error("A chatroom status must be either 'active' or 'suspended' (got: {0})")]
    InvalidChatroomStatus(String),

    /// Room quota is negative or does not fit
    #[error("max_allowed_rooms must be an integer between 0 and {max} (got {actual})")]
    MaxAllowedRoomsOutOfRange { max: u32, actual: i64 },

    /// ChatroomName validation error
    #[error("Chatroom name cannot be empty")]
    ChatroomNameEmpty,

    /// ChatroomName too long error
    #[error("Chatroom name cannot exceed {max} characters (got {actual})")]
    ChatroomNameTooLong { max: usize, actual: usize },

    /// Email validation error
    #[error("Email cannot be empty")]
    EmailEmpty,

    #[error("Email must contain '@' (got: {0})")]
    EmailInvalidFormat(String),

    /// Email too long error
    #[error("Email cannot exceed {max} characters (got {actual})")]
    EmailTooLong { max: usize, actual: usize },

    /// PostContent validation error
    #[error("Post content cannot be empty")]
    PostContentEmpty,

    /// PostContent too long error
    #[error("Post content cannot exceed {max} characters (got {actual})")]
    PostContentTooLong { max: usize, actual: usize },
}

/// Errors related to Account domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Room quota exhausted
    #[error("Room limit exceeded: maximum {max} chatrooms allowed (current: {current})")]
    RoomLimitExceeded { max: u32, current: usize },
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Backing store could not serve the request
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}
