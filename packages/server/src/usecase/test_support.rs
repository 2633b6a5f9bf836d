//! UseCase テスト用のフィクスチャ

use std::sync::Arc;

use crate::{
    domain::{Account, Chatroom},
    infrastructure::repository::{
        InMemoryAccountRepository, InMemoryChatroomRepository, InMemoryPostRepository,
        InMemoryUserAccessRepository,
    },
};

use super::{CreateAccountUseCase, CreateChatroomUseCase, GrantUserAccessUseCase};

/// インメモリ Repository 一式
pub(crate) struct TestRepositories {
    pub accounts: Arc<InMemoryAccountRepository>,
    pub chatrooms: Arc<InMemoryChatroomRepository>,
    pub user_accesses: Arc<InMemoryUserAccessRepository>,
    pub posts: Arc<InMemoryPostRepository>,
}

impl TestRepositories {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepository::new()),
            chatrooms: Arc::new(InMemoryChatroomRepository::new()),
            user_accesses: Arc::new(InMemoryUserAccessRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    pub async fn create_account(&self, max_allowed_rooms: i64) -> Account {
        CreateAccountUseCase::new(self.accounts.clone())
            .execute(max_allowed_rooms)
            .await
            .unwrap()
    }

    /// standard / active のチャットルームを作成
    pub async fn create_chatroom(&self, account: &Account, name: &str) -> Chatroom {
        CreateChatroomUseCase::new(self.accounts.clone(), self.chatrooms.clone())
            .execute(&account.id.to_string(), name.to_string(), None, None)
            .await
            .unwrap()
    }

    pub async fn grant(&self, chatroom: &Chatroom, email: &str, can_see_all_history: bool) {
        GrantUserAccessUseCase::new(self.chatrooms.clone(), self.user_accesses.clone())
            .execute(
                &chatroom.id.to_string(),
                email.to_string(),
                can_see_all_history,
            )
            .await
            .unwrap();
    }
}
