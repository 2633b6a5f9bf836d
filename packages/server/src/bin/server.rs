//! Multi-tenant chatroom HTTP server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatrooms-server -- --port 8080
//! ```

use clap::Parser;

use chatrooms_server::ServerConfig;
use chatrooms_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = chatrooms_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
