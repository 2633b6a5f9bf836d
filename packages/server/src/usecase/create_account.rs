//! UseCase: アカウント作成処理

use std::sync::Arc;

use crate::domain::{Account, AccountRepository, IdFactory, MaxAllowedRooms};

use super::error::UseCaseError;

/// アカウント作成のユースケース
pub struct CreateAccountUseCase {
    /// Repository（データアクセス層の抽象化）
    account_repository: Arc<dyn AccountRepository>,
}

impl CreateAccountUseCase {
    /// 新しい CreateAccountUseCase を作成
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }

    /// アカウント作成を実行
    ///
    /// # Arguments
    ///
    /// * `max_allowed_rooms` - 所有できるチャットルーム数の上限（0 以上）
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - 新しい ID を持つアカウント
    /// * `Err(UseCaseError::InvalidInput)` - 上限値が負、または大きすぎる
    pub async fn execute(&self, max_allowed_rooms: i64) -> Result<Account, UseCaseError> {
        let max_allowed_rooms = MaxAllowedRooms::new(max_allowed_rooms)?;
        let account = Account::new(IdFactory::account_id(), max_allowed_rooms);

        self.account_repository.save(account.clone()).await?;
        tracing::debug!(
            "Created account {} (max_allowed_rooms={})",
            account.id,
            max_allowed_rooms
        );

        Ok(account)
    }
}
