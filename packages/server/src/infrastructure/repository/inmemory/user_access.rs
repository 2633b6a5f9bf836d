use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatroomId, Email, RepositoryError, UserAccess, UserAccessRepository};

/// インメモリ UserAccess Repository 実装
///
/// (chatroom_id, user_email) の組ごとに 1 件だけ保持します。
#[derive(Default, Clone)]
pub struct InMemoryUserAccessRepository {
    grants: Arc<Mutex<Vec<UserAccess>>>,
}

impl InMemoryUserAccessRepository {
    /// 新しい InMemoryUserAccessRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserAccessRepository for InMemoryUserAccessRepository {
    async fn upsert(&self, access: UserAccess) -> Result<(), RepositoryError> {
        let mut grants = self.grants.lock().await;
        match grants
            .iter_mut()
            .find(|g| g.is_for(&access.chatroom_id, &access.user_email))
        {
            Some(existing) => existing.can_see_all_history = access.can_see_all_history,
            None => grants.push(access),
        }
        Ok(())
    }

    async fn find(
        &self,
        chatroom_id: &ChatroomId,
        user_email: &Email,
    ) -> Result<Option<UserAccess>, RepositoryError> {
        let grants = self.grants.lock().await;
        Ok(grants
            .iter()
            .find(|g| g.is_for(chatroom_id, user_email))
            .cloned())
    }

    async fn find_by_chatroom(
        &self,
        chatroom_id: &ChatroomId,
    ) -> Result<Vec<UserAccess>, RepositoryError> {
        let grants = self.grants.lock().await;
        Ok(grants
            .iter()
            .filter(|g| &g.chatroom_id == chatroom_id)
            .cloned()
            .collect())
    }

    async fn delete_by_chatroom(&self, chatroom_id: &ChatroomId) -> Result<usize, RepositoryError> {
        let mut grants = self.grants.lock().await;
        let before = grants.len();
        grants.retain(|g| &g.chatroom_id != chatroom_id);
        Ok(before - grants.len())
    }
}
