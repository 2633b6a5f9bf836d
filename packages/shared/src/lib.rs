//! Shared utilities for the tenant chatrooms service.

pub mod logger;
pub mod time;
