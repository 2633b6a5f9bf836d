//! Chatroom post endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{CreatePostRequest, PostDto},
    ui::{
        error::{ApiError, required},
        extract::JsonBody,
        state::AppState,
    },
    usecase::{CreatePostUseCase, ListPostsUseCase},
};

/// `GET /chatrooms/{chatroom_id}/posts`
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Path(chatroom_id): Path<String>,
) -> Result<Json<Vec<PostDto>>, ApiError> {
    let posts = ListPostsUseCase::new(state.post_repository.clone())
        .execute(&chatroom_id)
        .await?;
    Ok(Json(posts.into_iter().map(PostDto::from).collect()))
}

/// `POST /chatrooms/{chatroom_id}/posts`
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Path(chatroom_id): Path<String>,
    JsonBody(body): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostDto>), ApiError> {
    let user_email = required(body.user_email, "user_email")?;
    let content = required(body.content, "content")?;

    let post = CreatePostUseCase::new(
        state.chatroom_repository.clone(),
        state.user_access_repository.clone(),
        state.post_repository.clone(),
    )
    .execute(&chatroom_id, user_email, content)
    .await?;
    tracing::info!(
        "Post '{}' by '{}' created in chatroom '{}'",
        post.id,
        post.user_email,
        post.chatroom_id
    );

    Ok((StatusCode::CREATED, Json(post.into())))
}
