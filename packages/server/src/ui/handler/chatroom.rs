//! Chatroom endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{
        ChatroomDto, CreateChatroomRequest, MessageDto, UpdateChatroomRequest,
    },
    ui::{
        error::{ApiError, required},
        extract::JsonBody,
        state::AppState,
    },
    usecase::{
        CreateChatroomUseCase, DeleteChatroomUseCase, ListAllChatroomsUseCase,
        ListChatroomsForAccountUseCase, UpdateChatroomUseCase,
    },
};

/// `POST /accounts/{account_id}/chatrooms`
pub async fn create_chatroom(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
    JsonBody(body): JsonBody<CreateChatroomRequest>,
) -> Result<(StatusCode, Json<ChatroomDto>), ApiError> {
    let name = required(body.name, "name")?;

    let chatroom = CreateChatroomUseCase::new(
        state.account_repository.clone(),
        state.chatroom_repository.clone(),
    )
    .execute(
        &account_id,
        name,
        body.chatroom_type.as_deref(),
        body.status.as_deref(),
    )
    .await?;
    tracing::info!(
        "Chatroom '{}' created for account '{}'",
        chatroom.id,
        account_id
    );

    Ok((StatusCode::CREATED, Json(chatroom.into())))
}

/// `GET /accounts/{account_id}/chatrooms`
pub async fn list_chatrooms_for_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<ChatroomDto>>, ApiError> {
    let chatrooms = ListChatroomsForAccountUseCase::new(state.chatroom_repository.clone())
        .execute(&account_id)
        .await?;
    Ok(Json(chatrooms.into_iter().map(ChatroomDto::from).collect()))
}

/// `GET /chatrooms`
pub async fn list_all_chatrooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChatroomDto>>, ApiError> {
    let chatrooms = ListAllChatroomsUseCase::new(state.chatroom_repository.clone())
        .execute()
        .await?;
    Ok(Json(chatrooms.into_iter().map(ChatroomDto::from).collect()))
}

/// `DELETE /chatrooms/{chatroom_id}`
pub async fn delete_chatroom(
    State(state): State<Arc<AppState>>,
    Path(chatroom_id): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    let removed = DeleteChatroomUseCase::new(
        state.chatroom_repository.clone(),
        state.user_access_repository.clone(),
        state.post_repository.clone(),
    )
    .execute(&chatroom_id)
    .await?;
    if removed {
        tracing::info!("Chatroom '{}' deleted", chatroom_id);
    }

    Ok(Json(MessageDto::new("Delete successful")))
}

/// `PUT /chatrooms/{chatroom_id}`
pub async fn update_chatroom(
    State(state): State<Arc<AppState>>,
    Path(chatroom_id): Path<String>,
    JsonBody(body): JsonBody<UpdateChatroomRequest>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let chatroom_type = required(body.chatroom_type, "type")?;
    let status = required(body.status, "status")?;

    let chatroom = UpdateChatroomUseCase::new(state.chatroom_repository.clone())
        .execute(&chatroom_id, &chatroom_type, &status)
        .await?;
    tracing::info!(
        "Chatroom '{}' updated to {}/{}",
        chatroom.id,
        chatroom.chatroom_type,
        chatroom.status
    );

    Ok((StatusCode::CREATED, Json(MessageDto::new("Update successful"))))
}
