//! Store error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

use super::Resource;

/// Store / repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: String },

    #[error("{resource} {id} already exists")]
    Conflict { resource: Resource, id: String },

    #[error("{0}")]
    InvalidArgument(String),

    /// Foreign key pointing at a record that does not exist
    #[error("{resource} {id} does not exist")]
    MissingReference { resource: Resource, id: String },

    /// Contract / payment naming a business another customer owns
    #[error("Business {legal_id} does not belong to customer {customer_id}")]
    ForeignBusiness { legal_id: String, customer_id: u64 },

    /// A business must keep one or more locations
    #[error("Business {legal_id} needs at least one location")]
    LocationRequired { legal_id: String },

    /// Update with no field set (an invalid argument with its own code)
    #[error("No parameters provided for update")]
    EmptyPatch,
}

impl StoreError {
    pub fn not_found(resource: Resource, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn conflict(resource: Resource, id: impl ToString) -> Self {
        Self::Conflict {
            resource,
            id: id.to_string(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn missing_reference(resource: Resource, id: impl ToString) -> Self {
        Self::MissingReference {
            resource,
            id: id.to_string(),
        }
    }

    /// Everything the caller got wrong, as opposed to missing / taken ids
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::MissingReference { .. }
                | Self::ForeignBusiness { .. }
                | Self::LocationRequired { .. }
                | Self::EmptyPatch
        )
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<shared::InvalidValue> for StoreError {
    fn from(err: shared::InvalidValue) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { resource, id } => {
                let code = match resource {
                    Resource::Customer => ErrorCode::CustomerNotFound,
                    Resource::Business => ErrorCode::BusinessNotFound,
                    Resource::Location => ErrorCode::LocationNotFound,
                    Resource::Contract => ErrorCode::ContractNotFound,
                    Resource::Payment => ErrorCode::PaymentNotFound,
                };
                AppError::with_message(code, message)
                    .with_detail("resource", resource.name())
                    .with_detail("id", id)
            }
            StoreError::Conflict { resource, id } => {
                let code = match resource {
                    Resource::Customer => ErrorCode::CustomerAlreadyExists,
                    Resource::Business => ErrorCode::BusinessAlreadyExists,
                    Resource::Contract => ErrorCode::ContractAlreadyExists,
                    Resource::Payment => ErrorCode::PaymentAlreadyExists,
                    Resource::Location => ErrorCode::AlreadyExists,
                };
                AppError::with_message(code, message)
                    .with_detail("resource", resource.name())
                    .with_detail("id", id)
            }
            StoreError::InvalidArgument(msg) => AppError::validation(msg),
            StoreError::MissingReference { resource, id } => {
                AppError::with_message(ErrorCode::InvalidReference, message)
                    .with_detail("resource", resource.name())
                    .with_detail("id", id)
            }
            StoreError::ForeignBusiness {
                legal_id,
                customer_id,
            } => AppError::with_message(ErrorCode::BusinessNotOwned, message)
                .with_detail("legal_id", legal_id)
                .with_detail("customer_id", customer_id),
            StoreError::LocationRequired { legal_id } => {
                AppError::with_message(ErrorCode::LocationRequired, message)
                    .with_detail("legal_id", legal_id)
            }
            StoreError::EmptyPatch => AppError::empty_update(),
        }
    }
}
