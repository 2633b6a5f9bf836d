//! UseCase: チャットルーム一覧取得

use std::sync::Arc;

use crate::domain::{AccountId, Chatroom, ChatroomRepository};

use super::error::UseCaseError;

/// アカウント単位のチャットルーム一覧取得
pub struct ListChatroomsForAccountUseCase {
    chatroom_repository: Arc<dyn ChatroomRepository>,
}

impl ListChatroomsForAccountUseCase {
    pub fn new(chatroom_repository: Arc<dyn ChatroomRepository>) -> Self {
        Self {
            chatroom_repository,
        }
    }

    /// アカウントが所有するチャットルームを作成順に返す
    ///
    /// 存在しないアカウントでは空のリストを返す。
    pub async fn execute(&self, account_id: &str) -> Result<Vec<Chatroom>, UseCaseError> {
        let account_id = AccountId::parse(account_id)?;
        Ok(self.chatroom_repository.find_by_account(&account_id).await?)
    }
}

/// 全チャットルームの一覧取得
pub struct ListAllChatroomsUseCase {
    chatroom_repository: Arc<dyn ChatroomRepository>,
}

impl ListAllChatroomsUseCase {
    pub fn new(chatroom_repository: Arc<dyn ChatroomRepository>) -> Self {
        Self {
            chatroom_repository,
        }
    }

    pub async fn execute(&self) -> Result<Vec<Chatroom>, UseCaseError> {
        Ok(self.chatroom_repository.find_all().await?)
    }
}
