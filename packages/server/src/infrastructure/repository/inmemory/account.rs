use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Account, AccountId, AccountRepository, RepositoryError};

/// インメモリ Account Repository 実装
#[derive(Default, Clone)]
pub struct InMemoryAccountRepository {
    /// 登録順に保持するアカウント
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl InMemoryAccountRepository {
    /// 新しい InMemoryAccountRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: Account) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.lock().await;
        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => *existing = account,
            None => accounts.push(account),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.clone())
    }
}
