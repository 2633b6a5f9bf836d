//! UseCase: チャットルーム削除処理
//!
//! チャットルームが所有する UserAccess と Post も合わせて削除します（カスケード削除）。
//! 存在しない ID の削除は何もせず成功します。
//!
//! チャットルームの行を先に削除し、その後に所有データを削除します。
//! 付与・投稿の作成側は書き込み後にチャットルームの存在を再確認するため、
//! 削除と並行して書き込まれたデータも残りません。

use std::sync::Arc;

use crate::domain::{ChatroomId, ChatroomRepository, PostRepository, UserAccessRepository};

use super::error::UseCaseError;

/// チャットルーム削除のユースケース
pub struct DeleteChatroomUseCase {
    chatroom_repository: Arc<dyn ChatroomRepository>,
    user_access_repository: Arc<dyn UserAccessRepository>,
    post_repository: Arc<dyn PostRepository>,
}

impl DeleteChatroomUseCase {
    /// 新しい DeleteChatroomUseCase を作成
    pub fn new(
        chatroom_repository: Arc<dyn ChatroomRepository>,
        user_access_repository: Arc<dyn UserAccessRepository>,
        post_repository: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            chatroom_repository,
            user_access_repository,
            post_repository,
        }
    }

    /// チャットルーム削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 削除した
    /// * `Ok(false)` - 該当するチャットルームが無かった
    /// * `Err(UseCaseError::PersistenceDecode)` - ID の形式が不正
    pub async fn execute(&self, chatroom_id: &str) -> Result<bool, UseCaseError> {
        let chatroom_id = ChatroomId::parse(chatroom_id)?;

        // チャットルームを先に削除する。以降の付与・投稿は存在確認で失敗する
        let removed = self.chatroom_repository.delete(&chatroom_id).await?;

        // 所有データはチャットルームの有無に関わらず削除する
        let posts = self.post_repository.delete_by_chatroom(&chatroom_id).await?;
        let grants = self
            .user_access_repository
            .delete_by_chatroom(&chatroom_id)
            .await?;

        if removed {
            tracing::debug!(
                "Deleted chatroom {} ({} posts, {} grants)",
                chatroom_id,
                posts,
                grants
            );
        } else {
            tracing::debug!("Chatroom {} not found, nothing to delete", chatroom_id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::IdFactory,
        usecase::{CreatePostUseCase, test_support::TestRepositories},
    };

    fn usecase(repos: &TestRepositories) -> DeleteChatroomUseCase {
        DeleteChatroomUseCase::new(
            repos.chatrooms.clone(),
            repos.user_accesses.clone(),
            repos.posts.clone(),
        )
    }

    #[tokio::test]
    async fn test_delete_chatroom_cascades() {
        // テスト項目: 削除するとチャットルームの付与と投稿も削除される
        // given (前提条件):
        let repos = TestRepositories::new();
        let account = repos.create_account(5).await;
        let room = repos.create_chatroom(&account, "general").await;
        let other = repos.create_chatroom(&account, "random").await;
        repos.grant(&room, "a@x.com", true).await;
        repos.grant(&other, "a@x.com", true).await;
        CreatePostUseCase::new(
            repos.chatrooms.clone(),
            repos.user_accesses.clone(),
            repos.posts.clone(),
        )
        .execute(&room.id.to_string(), "a@x.com".to_string(), "hi".to_string())
        .await
        .unwrap();

        // when (操作):
        let removed = usecase(&repos).execute(&room.id.to_string()).await.unwrap();

        // then (期待する結果):
        assert!(removed);
        assert!(repos.chatrooms.find_by_id(&room.id).await.unwrap().is_none());
        assert!(repos.user_accesses.find_by_chatroom(&room.id).await.unwrap().is_empty());
        assert!(repos.posts.find_by_chatroom(&room.id).await.unwrap().is_empty());
        // 他のチャットルームには影響しない
        assert!(repos.chatrooms.find_by_id(&other.id).await.unwrap().is_some());
        assert_eq!(
            repos.user_accesses.find_by_chatroom(&other.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_chatroom_is_noop() {
        // テスト項目: 存在しないチャットルームの削除はエラーにならない
        // given (前提条件):
        let repos = TestRepositories::new();

        // when (操作):
        let result = usecase(&repos)
            .execute(&IdFactory::chatroom_id().to_string())
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(false));
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        // テスト項目: 不正な形式の ID は PersistenceDecode になる
        // given (前提条件):
        let repos = TestRepositories::new();

        // when (操作):
        let result = usecase(&repos).execute("garbage").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::PersistenceDecode("garbage".to_string()))
        );
    }

    #[tokio::test]
    async fn test_deleted_room_frees_quota() {
        // テスト項目: 削除したチャットルームはルーム数上限に数えない
        // given (前提条件): 上限 1 のアカウントに 1 部屋
        let repos = TestRepositories::new();
        let account = repos.create_account(1).await;
        let room = repos.create_chatroom(&account, "first").await;

        // when (操作):
        usecase(&repos).execute(&room.id.to_string()).await.unwrap();
        let second = repos.create_chatroom(&account, "second").await;

        // then (期待する結果):
        assert_eq!(second.name.as_str(), "second");
    }
}
