//! UseCase: チャットルーム更新処理
//!
//! type と status はどちらも必須で、検証が全て通ってから 1 回の update で置き換えます。
//! 失敗時は保存済みのチャットルームは変更されません。
//! 読み取り後に削除されたチャットルームは復活させず、ChatroomNotFound を返します。

use std::sync::Arc;

use crate::domain::{
    Chatroom, ChatroomId, ChatroomRepository, validate_chatroom_status, validate_chatroom_type,
};

use super::error::UseCaseError;

/// チャットルーム更新のユースケース
pub struct UpdateChatroomUseCase {
    chatroom_repository: Arc<dyn ChatroomRepository>,
}

impl UpdateChatroomUseCase {
    /// 新しい UpdateChatroomUseCase を作成
    pub fn new(chatroom_repository: Arc<dyn ChatroomRepository>) -> Self {
        Self {
            chatroom_repository,
        }
    }

    /// チャットルーム更新を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Chatroom)` - 更新後のチャットルーム
    /// * `Err(UseCaseError)` - 検証失敗、またはチャットルーム不在
    pub async fn execute(
        &self,
        chatroom_id: &str,
        chatroom_type: &str,
        status: &str,
    ) -> Result<Chatroom, UseCaseError> {
        let chatroom_id = ChatroomId::parse(chatroom_id)?;
        let chatroom_type = validate_chatroom_type(chatroom_type)?;
        let status = validate_chatroom_status(status)?;

        let mut chatroom = self
            .chatroom_repository
            .find_by_id(&chatroom_id)
            .await?
            .ok_or_else(|| UseCaseError::ChatroomNotFound(chatroom_id.to_string()))?;

        chatroom.change_settings(chatroom_type, status);
        if !self.chatroom_repository.update(chatroom.clone()).await? {
            return Err(UseCaseError::ChatroomNotFound(chatroom_id.to_string()));
        }

        Ok(chatroom)
    }
}
