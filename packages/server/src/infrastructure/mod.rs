//! Infrastructure layer: repository implementations and transport DTOs.

pub mod dto;
pub mod repository;
