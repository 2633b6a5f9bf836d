//! Domain layer for the chatroom service.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod validator;
pub mod value_object;

pub use entity::{Account, Chatroom, Post, UserAccess};
pub use error::{AccountError, RepositoryError, ValueObjectError};
pub use factory::IdFactory;
pub use repository::{AccountRepository, ChatroomRepository, PostRepository, UserAccessRepository};
#[cfg(test)]
pub use repository::{
    MockAccountRepository, MockChatroomRepository, MockPostRepository, MockUserAccessRepository,
};
pub use validator::{validate_chatroom_status, validate_chatroom_type};
pub use value_object::{
    AccountId, ChatroomId, ChatroomName, ChatroomStatus, ChatroomType, Email, MaxAllowedRooms,
    PostContent, PostId, Timestamp,
};
