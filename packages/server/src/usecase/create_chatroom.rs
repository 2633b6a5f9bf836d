//! UseCase: チャットルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateChatroomUseCase::execute() メソッド
//! - type / status の既定値と検証、アカウントの存在確認、ルーム数上限
//!
//! ### なぜこのテストが必要か
//! - 保存されるチャットルームの type / status が常に許可された値であることを保証
//! - 検証に失敗した場合に何も保存されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：既定値での作成、明示した type / status での作成
//! - 異常系：不正な type / status、存在しないアカウント、不正な ID 形式
//! - エッジケース：ルーム数上限ちょうど、上限 1 のアカウントへの同時作成

use std::sync::Arc;

use crate::domain::{
    AccountError, AccountId, AccountRepository, Chatroom, ChatroomName, ChatroomRepository, ChatroomStatus,
    ChatroomType, IdFactory, validate_chatroom_status, validate_chatroom_type,
};

use super::error::UseCaseError;

/// チャットルーム作成のユースケース
pub struct CreateChatroomUseCase {
    account_repository: Arc<dyn AccountRepository>,
    chatroom_repository: Arc<dyn ChatroomRepository>,
}

impl CreateChatroomUseCase {
    /// 新しい CreateChatroomUseCase を作成
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        chatroom_repository: Arc<dyn ChatroomRepository>,
    ) -> Self {
        Self {
            account_repository,
            chatroom_repository,
        }
    }

    /// チャットルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `account_id` - 所有アカウントの ID
    /// * `name` - チャットルーム名
    /// * `chatroom_type` - 省略時は `standard`
    /// * `status` - 省略時は `active`
    ///
    /// # Returns
    ///
    /// * `Ok(Chatroom)` - 作成されたチャットルーム
    /// * `Err(UseCaseError)` - 検証失敗、アカウント不在、ルーム数上限超過
    pub async fn execute(
        &self,
        account_id: &str,
        name: String,
        chatroom_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<Chatroom, UseCaseError> {
        // 1. 入力の検証（書き込み前に全て完了させる）
        let account_id = AccountId::parse(account_id)?;
        let name = ChatroomName::new(name)?;
        let chatroom_type = chatroom_type
            .map(validate_chatroom_type)
            .transpose()?
            .unwrap_or(ChatroomType::Standard);
        let status = status
            .map(validate_chatroom_status)
            .transpose()?
            .unwrap_or(ChatroomStatus::Active);

        // 2. アカウントの存在確認
        let account = self
            .account_repository
            .find_by_id(&account_id)
            .await?
            .ok_or_else(|| UseCaseError::AccountNotFound(account_id.to_string()))?;

        // 3. ルーム数上限の確認と保存（Repository 内で原子的に行う）
        let chatroom = Chatroom::new(
            IdFactory::chatroom_id(),
            account_id,
            name,
            chatroom_type,
            status,
        );
        let inserted = self
            .chatroom_repository
            .insert_within_quota(&account, chatroom.clone())
            .await?;
        if !inserted {
            let current = self
                .chatroom_repository
                .find_by_account(&account_id)
                .await?
                .len();
            return Err(AccountError::RoomLimitExceeded {
                max: account.max_allowed_rooms.value(),
                current,
            }
            .into());
        }

        Ok(chatroom)
    }
}
