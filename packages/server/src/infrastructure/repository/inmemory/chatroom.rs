use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Account, AccountId, Chatroom, ChatroomId, ChatroomRepository, RepositoryError,
};

/// インメモリ Chatroom Repository 実装
#[derive(Default, Clone)]
pub struct InMemoryChatroomRepository {
    /// 作成順に保持するチャットルーム
    chatrooms: Arc<Mutex<Vec<Chatroom>>>,
}

impl InMemoryChatroomRepository {
    /// 新しい InMemoryChatroomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatroomRepository for InMemoryChatroomRepository {
    async fn insert_within_quota(
        &self,
        account: &Account,
        chatroom: Chatroom,
    ) -> Result<bool, RepositoryError> {
        // 件数の確認と追加を同じロックの中で行う
        let mut chatrooms = self.chatrooms.lock().await;
        let owned = chatrooms
            .iter()
            .filter(|c| c.account_id == account.id)
            .count();
        if account.ensure_room_available(owned).is_err() {
            return Ok(false);
        }
        chatrooms.push(chatroom);
        Ok(true)
    }

    async fn update(&self, chatroom: Chatroom) -> Result<bool, RepositoryError> {
        let mut chatrooms = self.chatrooms.lock().await;
        // 位置を保ったまま置き換える。存在しない場合は追加しない
        match chatrooms.iter_mut().find(|c| c.id == chatroom.id) {
            Some(existing) => {
                *existing = chatroom;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(&self, id: &ChatroomId) -> Result<Option<Chatroom>, RepositoryError> {
        let chatrooms = self.chatrooms.lock().await;
        Ok(chatrooms.iter().find(|c| &c.id == id).cloned())
    }

    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<Chatroom>, RepositoryError> {
        let chatrooms = self.chatrooms.lock().await;
        Ok(chatrooms
            .iter()
            .filter(|c| &c.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Chatroom>, RepositoryError> {
        let chatrooms = self.chatrooms.lock().await;
        Ok(chatrooms.clone())
    }

    async fn delete(&self, id: &ChatroomId) -> Result<bool, RepositoryError> {
        let mut chatrooms = self.chatrooms.lock().await;
        let before = chatrooms.len();
        chatrooms.retain(|c| &c.id != id);
        Ok(chatrooms.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatroomName, ChatroomStatus, ChatroomType, IdFactory, MaxAllowedRooms};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryChatroomRepository の基本的な CRUD 操作
    // - update が既存のチャットルームだけを置き換えること（削除済みを復活させない）
    // - insert_within_quota が上限を超えて追加しないこと
    // - アカウント単位の絞り込みと削除
    //
    // 【なぜこのテストが必要か】
    // - UpdateChatroom は update の「存在しなければ false」に依存している
    // - ルーム数上限は insert_within_quota の中で原子的に守られる
    // ========================================

    fn account(quota: i64) -> Account {
        Account::new(
            IdFactory::account_id(),
            MaxAllowedRooms::new(quota).unwrap(),
        )
    }

    fn chatroom(account_id: AccountId, name: &str) -> Chatroom {
        Chatroom::new(
            IdFactory::chatroom_id(),
            account_id,
            ChatroomName::new(name.to_string()).unwrap(),
            ChatroomType::Standard,
            ChatroomStatus::Active,
        )
    }

    #[tokio::test]
    async fn test_update_replaces_existing_chatroom() {
        // テスト項目: 同じ ID で update すると置き換えられ、件数は増えない
        // given (前提条件):
        let repo = InMemoryChatroomRepository::new();
        let owner = account(5);
        let mut room = chatroom(owner.id, "general");
        assert!(repo.insert_within_quota(&owner, room.clone()).await.unwrap());

        // when (操作):
        room.change_settings(ChatroomType::Trial, ChatroomStatus::Suspended);
        let updated = repo.update(room.clone()).await.unwrap();

        // then (期待する結果):
        assert!(updated);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].chatroom_type, ChatroomType::Trial);
        assert_eq!(all[0].status, ChatroomStatus::Suspended);
    }

    #[tokio::test]
    async fn test_update_does_not_insert_missing_chatroom() {
        // テスト項目: 削除済み（未登録）のチャットルームは update で復活しない
        // given (前提条件):
        let repo = InMemoryChatroomRepository::new();
        let owner = account(5);
        let room = chatroom(owner.id, "general");
        repo.insert_within_quota(&owner, room.clone()).await.unwrap();
        repo.delete(&room.id).await.unwrap();

        // when (操作):
        let updated = repo.update(room.clone()).await.unwrap();

        // then (期待する結果):
        assert!(!updated);
        assert!(repo.find_by_id(&room.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_within_quota_stops_at_limit() {
        // テスト項目: 上限に達した後の追加は false を返し、保存されない
        // given (前提条件): 上限 2 のアカウント
        let repo = InMemoryChatroomRepository::new();
        let owner = account(2);

        // when (操作):
        let first = repo
            .insert_within_quota(&owner, chatroom(owner.id, "one"))
            .await
            .unwrap();
        let second = repo
            .insert_within_quota(&owner, chatroom(owner.id, "two"))
            .await
            .unwrap();
        let third = repo
            .insert_within_quota(&owner, chatroom(owner.id, "three"))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(first && second);
        assert!(!third);
        assert_eq!(repo.find_by_account(&owner.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_account_filters_owner() {
        // テスト項目: find_by_account は指定アカウントのチャットルームだけを返す
        // given (前提条件):
        let repo = InMemoryChatroomRepository::new();
        let owner = account(5);
        let other = account(5);
        repo.insert_within_quota(&owner, chatroom(owner.id, "general"))
            .await
            .unwrap();
        repo.insert_within_quota(&other, chatroom(other.id, "random"))
            .await
            .unwrap();
        repo.insert_within_quota(&owner, chatroom(owner.id, "support"))
            .await
            .unwrap();

        // when (操作):
        let owned = repo.find_by_account(&owner.id).await.unwrap();

        // then (期待する結果):
        let names: Vec<&str> = owned.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["general", "support"]);
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        // テスト項目: 削除は存在する場合のみ true を返す
        // given (前提条件):
        let repo = InMemoryChatroomRepository::new();
        let owner = account(5);
        let room = chatroom(owner.id, "general");
        repo.insert_within_quota(&owner, room.clone()).await.unwrap();

        // when (操作):
        let first = repo.delete(&room.id).await.unwrap();
        let second = repo.delete(&room.id).await.unwrap();

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert!(repo.find_by_id(&room.id).await.unwrap().is_none());
    }
}
