//! Server state shared by every handler.

use std::sync::Arc;

use crate::{
    domain::{AccountRepository, ChatroomRepository, PostRepository, UserAccessRepository},
    infrastructure::repository::{
        InMemoryAccountRepository, InMemoryChatroomRepository, InMemoryPostRepository,
        InMemoryUserAccessRepository,
    },
};

/// Shared application state
///
/// Repositories are injected as trait objects; handlers build one use case per request.
pub struct AppState {
    pub account_repository: Arc<dyn AccountRepository>,
    pub chatroom_repository: Arc<dyn ChatroomRepository>,
    pub user_access_repository: Arc<dyn UserAccessRepository>,
    pub post_repository: Arc<dyn PostRepository>,
}

impl AppState {
    /// State backed by the in-memory repositories
    pub fn in_memory() -> Self {
        Self {
            account_repository: Arc::new(InMemoryAccountRepository::new()),
            chatroom_repository: Arc::new(InMemoryChatroomRepository::new()),
            user_access_repository: Arc::new(InMemoryUserAccessRepository::new()),
            post_repository: Arc::new(InMemoryPostRepository::new()),
        }
    }
}
