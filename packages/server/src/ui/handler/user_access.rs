//! Chatroom user access endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{GrantUserAccessRequest, UserAccessDto},
    ui::{
        error::{ApiError, required},
        extract::JsonBody,
        state::AppState,
    },
    usecase::{GrantUserAccessUseCase, ListUsersWithAccessUseCase},
};

/// `GET /chatrooms/{chatroom_id}/users`
pub async fn list_users_with_access(
    State(state): State<Arc<AppState>>,
    Path(chatroom_id): Path<String>,
) -> Result<Json<Vec<UserAccessDto>>, ApiError> {
    let grants = ListUsersWithAccessUseCase::new(state.user_access_repository.clone())
        .execute(&chatroom_id)
        .await?;
    Ok(Json(grants.into_iter().map(UserAccessDto::from).collect()))
}

/// `PUT /chatrooms/{chatroom_id}/users`
pub async fn grant_user_access(
    State(state): State<Arc<AppState>>,
    Path(chatroom_id): Path<String>,
    JsonBody(body): JsonBody<GrantUserAccessRequest>,
) -> Result<StatusCode, ApiError> {
    let email = required(body.email, "email")?;
    let can_see_all_history = required(body.can_see_all_history, "canSeeAllHistory")?;

    let access = GrantUserAccessUseCase::new(
        state.chatroom_repository.clone(),
        state.user_access_repository.clone(),
    )
    .execute(&chatroom_id, email, can_see_all_history)
    .await?;
    tracing::info!(
        "Granted '{}' access to chatroom '{}' (can_see_all_history={})",
        access.user_email,
        access.chatroom_id,
        access.can_see_all_history
    );

    Ok(StatusCode::NO_CONTENT)
}
