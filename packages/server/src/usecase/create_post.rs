//! UseCase: 投稿作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreatePostUseCase::execute() メソッド
//! - チャットルームの存在確認と、投稿者へのアクセス付与の確認
//!
//! ### なぜこのテストが必要か
//! - 投稿者は事前に GrantUserAccess で付与されている必要がある
//! - 失敗時に投稿が保存されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：付与済みユーザーの投稿
//! - 異常系：存在しないチャットルーム、未付与のユーザー、空の本文
//! - 並行処理：確認後、保存前にチャットルームが削除された場合

use std::sync::Arc;

use crate::domain::{
    ChatroomId, ChatroomRepository, Email, IdFactory, Post, PostContent, PostRepository,
    Timestamp, UserAccessRepository,
};

use super::error::UseCaseError;

/// 投稿作成のユースケース
pub struct CreatePostUseCase {
    chatroom_repository: Arc<dyn ChatroomRepository>,
    user_access_repository: Arc<dyn UserAccessRepository>,
    post_repository: Arc<dyn PostRepository>,
}

impl CreatePostUseCase {
    /// 新しい CreatePostUseCase を作成
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

    /// 投稿作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Post)` - 新しい ID と作成時刻を持つ投稿
    /// * `Err(UseCaseError::ChatroomNotFound)` - チャットルームが存在しない
    /// * `Err(UseCaseError::UserAccessNotGranted)` - 投稿者にアクセスが付与されていない
    pub async fn execute(
        &self,
        chatroom_id: &str,
        user_email: String,
        content: String,
    ) -> Result<Post, UseCaseError> {
        let chatroom_id = ChatroomId::parse(chatroom_id)?;
        let user_email = Email::new(user_email)?;
        let content = PostContent::new(content)?;

        if self
            .chatroom_repository
            .find_by_id(&chatroom_id)
            .await?
            .is_none()
        {
            return Err(UseCaseError::ChatroomNotFound(chatroom_id.to_string()));
        }

        if self
            .user_access_repository
            .find(&chatroom_id, &user_email)
            .await?
            .is_none()
        {
            return Err(UseCaseError::UserAccessNotGranted {
                chatroom_id: chatroom_id.to_string(),
                user_email: user_email.to_string(),
            });
        }

        let post = Post::new(
            IdFactory::post_id(),
            chatroom_id,
            user_email,
            content,
            Timestamp::now(),
        );
        self.post_repository.save(post.clone()).await?;

        // 保存までの間にチャットルームが削除された場合は、残った投稿を取り除く
        if self
            .chatroom_repository
            .find_by_id(&chatroom_id)
            .await?
            .is_none()
        {
            self.post_repository.delete_by_chatroom(&chatroom_id).await?;
            return Err(UseCaseError::ChatroomNotFound(chatroom_id.to_string()));
        }

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        domain::RepositoryError,
        infrastructure::repository::InMemoryPostRepository,
        usecase::{DeleteChatroomUseCase, test_support::TestRepositories},
    };

    /// save の直前に DeleteChatroom を割り込ませる Repository
    struct DeleteBeforeSaveRepository {
        inner: Arc<InMemoryPostRepository>,
        delete: DeleteChatroomUseCase,
    }

    #[async_trait]
    impl PostRepository for DeleteBeforeSaveRepository {
        async fn save(&self, post: Post) -> Result<(), RepositoryError> {
            if let Err(e) = self.delete.execute(&post.chatroom_id.to_string()).await {
                return Err(RepositoryError::Unavailable(e.to_string()));
            }
            self.inner.save(post).await
        }

        async fn find_by_chatroom(
            &self,
            chatroom_id: &ChatroomId,
        ) -> Result<Vec<Post>, RepositoryError> {
            self.inner.find_by_chatroom(chatroom_id).await
        }

        async fn delete_by_chatroom(
            &self,
            chatroom_id: &ChatroomId,
        ) -> Result<usize, RepositoryError> {
            self.inner.delete_by_chatroom(chatroom_id).await
        }
    }

    fn usecase(repos: &TestRepositories) -> CreatePostUseCase {
        CreatePostUseCase::new(
            repos.chatrooms.clone(),
            repos.user_accesses.clone(),
            repos.posts.clone(),
        )
    }

    #[tokio::test]
    async fn test_create_post_success() {
        // テスト項目: 付与済みユーザーは投稿できる
        // given (前提条件):
        let repos = TestRepositories::new();
        let account = repos.create_account(5).await;
        let room = repos.create_chatroom(&account, "general").await;
        repos.grant(&room, "a@x.com", true).await;

        // when (操作):
        let post = usecase(&repos)
            .execute(&room.id.to_string(), "a@x.com".to_string(), "hi".to_string())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(post.chatroom_id, room.id);
        assert_eq!(post.content.as_str(), "hi");
        let stored = repos.posts.find_by_chatroom(&room.id).await.unwrap();
        assert_eq!(stored, vec![post]);
    }

    #[tokio::test]
    async fn test_create_post_in_missing_chatroom() {
        // テスト項目: 存在しないチャットルームへの投稿は ChatroomNotFound になり、保存されない
        // given (前提条件):
        let repos = TestRepositories::new();
        let missing = IdFactory::chatroom_id();

        // when (操作):
        let result = usecase(&repos)
            .execute(&missing.to_string(), "a@x.com".to_string(), "hi".to_string())
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::ChatroomNotFound(missing.to_string()))
        );
        assert!(repos.posts.find_by_chatroom(&missing).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post_without_grant() {
        // テスト項目: アクセスが付与されていないユーザーは投稿できない
        // given (前提条件): b@x.com にのみ付与
        let repos = TestRepositories::new();
        let account = repos.create_account(5).await;
        let room = repos.create_chatroom(&account, "general").await;
        repos.grant(&room, "b@x.com", true).await;

        // when (操作):
        let result = usecase(&repos)
            .execute(&room.id.to_string(), "a@x.com".to_string(), "hi".to_string())
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::UserAccessNotGranted {
                chatroom_id: room.id.to_string(),
                user_email: "a@x.com".to_string(),
            })
        );
        assert!(repos.posts.find_by_chatroom(&room.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post_grant_in_other_room_is_not_enough() {
        // テスト項目: 別のチャットルームへの付与では投稿できない
        // given (前提条件):
        let repos = TestRepositories::new();
        let account = repos.create_account(5).await;
        let room = repos.create_chatroom(&account, "general").await;
        let other = repos.create_chatroom(&account, "random").await;
        repos.grant(&other, "a@x.com", true).await;

        // when (操作):
        let result = usecase(&repos)
            .execute(&room.id.to_string(), "a@x.com".to_string(), "hi".to_string())
            .await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(UseCaseError::UserAccessNotGranted { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_post_empty_content() {
        // テスト項目: 空の本文は InvalidInput になる
        // given (前提条件):
        let repos = TestRepositories::new();
        let account = repos.create_account(5).await;
        let room = repos.create_chatroom(&account, "general").await;
        repos.grant(&room, "a@x.com", true).await;

        // when (操作):
        let result = usecase(&repos)
            .execute(&room.id.to_string(), "a@x.com".to_string(), String::new())
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_post_racing_delete_leaves_no_orphan() {
        // テスト項目: 確認後にチャットルームが削除されても、投稿は残らない
        // given (前提条件): 付与済みユーザーと、保存直前に削除が走る Repository
        let repos = TestRepositories::new();
        let account = repos.create_account(5).await;
        let room = repos.create_chatroom(&account, "general").await;
        repos.grant(&room, "a@x.com", true).await;
        let racing = DeleteBeforeSaveRepository {
            inner: repos.posts.clone(),
            delete: DeleteChatroomUseCase::new(
                repos.chatrooms.clone(),
                repos.user_accesses.clone(),
                repos.posts.clone(),
            ),
        };
        let usecase = CreatePostUseCase::new(
            repos.chatrooms.clone(),
            repos.user_accesses.clone(),
            Arc::new(racing),
        );

        // when (操作):
        let result = usecase
            .execute(&room.id.to_string(), "a@x.com".to_string(), "hi".to_string())
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::ChatroomNotFound(room.id.to_string()))
        );
        assert!(repos.posts.find_by_chatroom(&room.id).await.unwrap().is_empty());
    }
}
