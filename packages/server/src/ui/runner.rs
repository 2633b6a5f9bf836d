//! Router construction and server lifecycle.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, put},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::{handler, signal::shutdown_signal, state::AppState};

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server terminated unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the HTTP router over the given state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handler::health_check))
        .route(
            "/accounts",
            get(handler::list_accounts).post(handler::create_account),
        )
        .route(
            "/accounts/{account_id}/chatrooms",
            get(handler::list_chatrooms_for_account).post(handler::create_chatroom),
        )
        .route("/chatrooms", get(handler::list_all_chatrooms))
        .route(
            "/chatrooms/{chatroom_id}",
            put(handler::update_chatroom).delete(handler::delete_chatroom),
        )
        .route(
            "/chatrooms/{chatroom_id}/users",
            get(handler::list_users_with_access).put(handler::grant_user_access),
        )
        .route(
            "/chatrooms/{chatroom_id}/posts",
            get(handler::list_posts).post(handler::create_post),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Chatroom server listening on http://{}", addr);
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Run the server with in-memory storage until Ctrl-C / SIGTERM
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, Arc::new(AppState::in_memory()), shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
