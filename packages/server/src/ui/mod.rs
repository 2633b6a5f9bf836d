//! HTTP server for the chatroom service.

pub mod error;
pub mod extract;
mod handler;
pub mod runner;
mod signal;
pub mod state;

pub use runner::{ServerError, build_router, run, serve};
