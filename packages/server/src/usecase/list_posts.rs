//! UseCase: 投稿一覧取得

use std::sync::Arc;

use crate::domain::{ChatroomId, Post, PostRepository};

use super::error::UseCaseError;

/// 投稿一覧取得のユースケース
pub struct ListPostsUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl ListPostsUseCase {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// チャットルームの投稿を作成時刻の昇順で返す
    pub async fn execute(&self, chatroom_id: &str) -> Result<Vec<Post>, UseCaseError> {
        let chatroom_id = ChatroomId::parse(chatroom_id)?;
        Ok(self.post_repository.find_by_chatroom(&chatroom_id).await?)
    }
}
