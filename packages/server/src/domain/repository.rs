//! Repository traits (the persistence contract).
//!
//! The domain layer defines these traits; infrastructure provides the
//! implementations (dependency inversion). Each call is atomic for a single
//! entity. No multi-entity transactions are offered.

use async_trait::async_trait;

use super::{
    entity::{Account, Chatroom, Post, UserAccess},
    error::RepositoryError,
    value_object::{AccountId, ChatroomId, Email},
};

/// Account persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account
    async fn save(&self, account: Account) -> Result<(), RepositoryError>;

    /// Look up an account by id
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError>;

    /// All accounts, in insertion order
    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError>;
}

/// Chatroom persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatroomRepository: Send + Sync {
    /// Insert a new chatroom if its owner still has room in its quota.
    ///
    /// Counting the owner's chatrooms and inserting happen as one atomic step.
    /// Returns `false` (and stores nothing) when the quota is used up.
    async fn insert_within_quota(
        &self,
        account: &Account,
        chatroom: Chatroom,
    ) -> Result<bool, RepositoryError>;

    /// Replace a stored chatroom. Never inserts.
    ///
    /// Returns `false` when no chatroom with the same id exists.
    async fn update(&self, chatroom: Chatroom) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, id: &ChatroomId) -> Result<Option<Chatroom>, RepositoryError>;

    /// Chatrooms owned by an account, in creation order
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<Chatroom>, RepositoryError>;

    /// All chatrooms, in creation order
    async fn find_all(&self) -> Result<Vec<Chatroom>, RepositoryError>;

    /// Remove a chatroom. Returns whether something was removed.
    async fn delete(&self, id: &ChatroomId) -> Result<bool, RepositoryError>;
}

/// UserAccess persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccessRepository: Send + Sync {
    /// Insert the grant, or overwrite the one stored for the same (chatroom, email)
    async fn upsert(&self, access: UserAccess) -> Result<(), RepositoryError>;

    async fn find(
        &self,
        chatroom_id: &ChatroomId,
        user_email: &Email,
    ) -> Result<Option<UserAccess>, RepositoryError>;

    /// Grants of a chatroom, in first-grant order
    async fn find_by_chatroom(
        &self,
        chatroom_id: &ChatroomId,
    ) -> Result<Vec<UserAccess>, RepositoryError>;

    /// Remove every grant of a chatroom. Returns how many were removed.
    async fn delete_by_chatroom(&self, chatroom_id: &ChatroomId) -> Result<usize, RepositoryError>;
}

/// Post persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn save(&self, post: Post) -> Result<(), RepositoryError>;

    /// Posts of a chatroom ordered by `created_at` ascending (ties keep insertion order)
    async fn find_by_chatroom(&self, chatroom_id: &ChatroomId)
    -> Result<Vec<Post>, RepositoryError>;

    /// Remove every post of a chatroom. Returns how many were removed.
    async fn delete_by_chatroom(&self, chatroom_id: &ChatroomId) -> Result<usize, RepositoryError>;
}
