//! Shared types for the onboarding service
//!
//! Error types, response envelopes, validated value types and the entity
//! models used by the server and by any API client.

pub mod error;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use response::{Keyed, Mutation, Selection};
pub use types::{Email, InvalidValue, MaskedCard, PhoneNumber};
