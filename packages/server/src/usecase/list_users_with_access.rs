//! UseCase: アクセス付与済みユーザー一覧取得

use std::sync::Arc;

use crate::domain::{ChatroomId, UserAccess, UserAccessRepository};

use super::error::UseCaseError;

/// アクセス付与済みユーザー一覧取得のユースケース
pub struct ListUsersWithAccessUseCase {
    user_access_repository: Arc<dyn UserAccessRepository>,
}

impl ListUsersWithAccessUseCase {
    pub fn new(user_access_repository: Arc<dyn UserAccessRepository>) -> Self {
        Self {
            user_access_repository,
        }
    }

    /// チャットルームの付与一覧を最初の付与順に返す
    pub async fn execute(&self, chatroom_id: &str) -> Result<Vec<UserAccess>, UseCaseError> {
        let chatroom_id = ChatroomId::parse(chatroom_id)?;
        Ok(self
            .user_access_repository
            .find_by_chatroom(&chatroom_id)
            .await?)
    }
}
