//! Unified error system for the onboarding service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON error body returned by the HTTP API
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Customer errors
//! - 2xxx: Business / location errors
//! - 3xxx: Contract errors
//! - 4xxx: Payment errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::InvalidReference, "Customer 99 does not exist")
//!     .with_detail("resource", "Customer")
//!     .with_detail("id", "99");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//!
//! let body = serde_json::to_value(ErrorBody::from(err)).unwrap();
//! assert_eq!(body["code"], 10);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
