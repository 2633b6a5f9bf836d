//! UseCase 層のエラー定義
//!
//! 全ての UseCase はこの型で失敗を返します。UI 層はバリアントごとに
//! HTTP ステータスを決定します。

use thiserror::Error;

use crate::domain::{AccountError, RepositoryError, ValueObjectError};

/// Typed failure of a domain service operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// Malformed or out-of-range input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid chatroom type: {0}")]
    InvalidChatroomType(String),

    #[error("Invalid chatroom status: {0}")]
    InvalidChatroomStatus(String),

    /// Identifier that cannot be decoded into an entity key
    #[error("Invalid entity key: {0}")]
    PersistenceDecode(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Chatroom not found: {0}")]
    ChatroomNotFound(String),

    /// Account already owns as many chatrooms as it may
    #[error("Room limit exceeded: maximum {max} chatrooms allowed (current: {current})")]
    RoomLimitExceeded { max: u32, current: usize },

    /// Posting requires a prior grant for the chatroom
    #[error("User '{user_email}' has no access to chatroom {chatroom_id}")]
    UserAccessNotGranted {
        chatroom_id: String,
        user_email: String,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<ValueObjectError> for UseCaseError {
    fn from(err: ValueObjectError) -> Self {
        match err {
            ValueObjectError::InvalidId { value, .. } => Self::PersistenceDecode(value),
            ValueObjectError::InvalidChatroomType(value) => Self::InvalidChatroomType(value),
            ValueObjectError::InvalidChatroomStatus(value) => Self::InvalidChatroomStatus(value),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<AccountError> for UseCaseError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::RoomLimitExceeded { max, current } => {
                Self::RoomLimitExceeded { max, current }
            }
        }
    }
}
