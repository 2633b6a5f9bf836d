//! UseCase: チャットルームへのアクセス付与
//!
//! 同じ (chatroom_id, email) への付与は上書き（upsert）になり、重複しません。

use std::sync::Arc;

use crate::domain::{ChatroomId, ChatroomRepository, Email, UserAccess, UserAccessRepository};

use super::error::UseCaseError;

/// アクセス付与のユースケース
pub struct GrantUserAccessUseCase {
    chatroom_repository: Arc<dyn ChatroomRepository>,
    user_access_repository: Arc<dyn UserAccessRepository>,
}

impl GrantUserAccessUseCase {
    /// 新しい GrantUserAccessUseCase を作成
    pub fn new(
        chatroom_repository: Arc<dyn ChatroomRepository>,
        user_access_repository: Arc<dyn UserAccessRepository>,
    ) -> Self {
        Self {
            chatroom_repository,
            user_access_repository,
        }
    }

    /// アクセス付与を実行
    ///
    /// # Arguments
    ///
    /// * `chatroom_id` - 対象チャットルームの ID
    /// * `email` - 付与するユーザーのメールアドレス
    /// * `can_see_all_history` - 付与前の投稿も閲覧できるか
    ///
    /// # Returns
    ///
    /// * `Ok(UserAccess)` - 保存された付与
    /// * `Err(UseCaseError::ChatroomNotFound)` - チャットルームが存在しない
    pub async fn execute(
        &self,
        chatroom_id: &str,
        email: String,
        can_see_all_history: bool,
    ) -> Result<UserAccess, UseCaseError> {
        let chatroom_id = ChatroomId::parse(chatroom_id)?;
        let email = Email::new(email)?;

        if self
            .chatroom_repository
            .find_by_id(&chatroom_id)
            .await?
            .is_none()
        {
            return Err(UseCaseError::ChatroomNotFound(chatroom_id.to_string()));
        }

        let access = UserAccess::new(chatroom_id, email, can_see_all_history);
        self.user_access_repository.upsert(access.clone()).await?;

        // 保存までの間にチャットルームが削除された場合は、残った付与を取り除く
        if self
            .chatroom_repository
            .find_by_id(&chatroom_id)
            .await?
            .is_none()
        {
            self.user_access_repository
                .delete_by_chatroom(&chatroom_id)
                .await?;
            return Err(UseCaseError::ChatroomNotFound(chatroom_id.to_string()));
        }

        Ok(access)
    }
}
