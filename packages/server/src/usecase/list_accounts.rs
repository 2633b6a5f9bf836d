//! UseCase: アカウント一覧取得

use std::sync::Arc;

use crate::domain::{Account, AccountRepository};

use super::error::UseCaseError;

/// アカウント一覧取得のユースケース
pub struct ListAccountsUseCase {
    account_repository: Arc<dyn AccountRepository>,
}

impl ListAccountsUseCase {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }

    /// 全アカウントを登録順に返す
    pub async fn execute(&self) -> Result<Vec<Account>, UseCaseError> {
        Ok(self.account_repository.find_all().await?)
    }
}
