//! Test fixtures for integration tests.

use std::sync::Arc;

use chatrooms_server::ui::{serve, state::AppState};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::oneshot};

/// In-process server on an ephemeral port, stopped on drop
pub struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Start a server backed by fresh in-memory repositories
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            serve(listener, Arc::new(AppState::in_memory()), shutdown)
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /accounts`, returning the account id
    pub async fn create_account(&self, max_allowed_rooms: i64) -> String {
        let body: Value = self
            .client
            .post(self.url("/accounts"))
            .json(&json!({ "max_allowed_rooms": max_allowed_rooms }))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        body["id"].as_str().expect("id missing").to_string()
    }

    /// `POST /accounts/{id}/chatrooms` with defaults, returning the chatroom id
    pub async fn create_chatroom(&self, account_id: &str, name: &str) -> String {
        let body: Value = self
            .client
            .post(self.url(&format!("/accounts/{account_id}/chatrooms")))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        body["id"].as_str().expect("id missing").to_string()
    }

    /// `PUT /chatrooms/{id}/users`
    pub async fn grant(&self, chatroom_id: &str, email: &str, can_see_all_history: bool) {
        let response = self
            .client
            .put(self.url(&format!("/chatrooms/{chatroom_id}/users")))
            .json(&json!({ "email": email, "canSeeAllHistory": can_see_all_history }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 204);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
