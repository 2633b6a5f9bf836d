//! Multi-tenant chatroom service library.
//!
//! Accounts own chatrooms, users are granted access to chatrooms, and granted
//! users post into them. The crate is layered: `domain` (entities, validators,
//! repository traits), `usecase` (one struct per operation), `infrastructure`
//! (in-memory repositories, DTOs) and `ui` (axum HTTP transport).

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
