use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatroomId, Post, PostRepository, RepositoryError};

/// インメモリ Post Repository 実装
#[derive(Default, Clone)]
pub struct InMemoryPostRepository {
    /// 投稿順に保持する投稿
    posts: Arc<Mutex<Vec<Post>>>,
}

impl InMemoryPostRepository {
    /// 新しい InMemoryPostRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, post: Post) -> Result<(), RepositoryError> {
        let mut posts = self.posts.lock().await;
        posts.push(post);
        Ok(())
    }

    async fn find_by_chatroom(&self, chatroom_id: &ChatroomId) -> Result<Vec<Post>, RepositoryError> {
        let posts = self.posts.lock().await;
        let mut found: Vec<Post> = posts
            .iter()
            .filter(|p| &p.chatroom_id == chatroom_id)
            .cloned()
            .collect();
        // stable sort: 同一時刻の投稿は投稿順のまま
        found.sort_by_key(|p| p.created_at);
        Ok(found)
    }

    async fn delete_by_chatroom(&self, chatroom_id: &ChatroomId) -> Result<usize, RepositoryError> {
        let mut posts = self.posts.lock().await;
        let before = posts.len();
        posts.retain(|p| &p.chatroom_id != chatroom_id);
        Ok(before - posts.len())
    }
}
