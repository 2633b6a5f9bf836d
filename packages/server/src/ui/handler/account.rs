//! Account endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{AccountDto, CreateAccountRequest},
    ui::{
        error::{ApiError, required},
        extract::JsonBody,
        state::AppState,
    },
    usecase::{CreateAccountUseCase, ListAccountsUseCase, UseCaseError},
};

/// `POST /accounts`
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountDto>), ApiError> {
    let raw = required(body.max_allowed_rooms, "max_allowed_rooms")?;
    let max_allowed_rooms = raw.as_i64().ok_or_else(|| {
        UseCaseError::InvalidInput(format!("max_allowed_rooms must be an integer (got {raw})"))
    })?;

    let account = CreateAccountUseCase::new(state.account_repository.clone())
        .execute(max_allowed_rooms)
        .await?;
    tracing::info!("Account '{}' created", account.id);

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// `GET /accounts`
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountDto>>, ApiError> {
    let accounts = ListAccountsUseCase::new(state.account_repository.clone())
        .execute()
        .await?;
    Ok(Json(accounts.into_iter().map(AccountDto::from).collect()))
}
