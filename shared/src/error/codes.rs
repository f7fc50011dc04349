//! Unified error codes for the onboarding service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Customer errors
//! - 2xxx: Business / location errors
//! - 3xxx: Contract errors
//! - 4xxx: Payment errors
//! - 9xxx: System errors

use serde::Serialize;
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Update carried no field to change
    EmptyUpdate = 9,
    /// Referenced record does not exist
    InvalidReference = 10,

    // ==================== 1xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 1001,
    /// Customer id already taken (or retired)
    CustomerAlreadyExists = 1002,

    // ==================== 2xxx: Business ====================
    /// Business not found
    BusinessNotFound = 2001,
    /// Business legal id already taken (or retired)
    BusinessAlreadyExists = 2002,
    /// Location not found
    LocationNotFound = 2101,
    /// A business must keep at least one location
    LocationRequired = 2102,
    /// Business is owned by a different customer
    BusinessNotOwned = 2103,

    // ==================== 3xxx: Contract ====================
    /// Contract not found
    ContractNotFound = 3001,
    /// Contract id already taken (or retired)
    ContractAlreadyExists = 3002,

    // ==================== 4xxx: Payment ====================
    /// Payment record not found
    PaymentNotFound = 4001,
    /// Payment record already exists for this customer/business pair
    PaymentAlreadyExists = 4002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::EmptyUpdate => "No parameters provided for update",
            ErrorCode::InvalidReference => "Referenced record does not exist",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerAlreadyExists => "Customer already exists",

            // Business
            ErrorCode::BusinessNotFound => "Business not found",
            ErrorCode::BusinessAlreadyExists => "Business already exists",
            ErrorCode::LocationNotFound => "Location not found",
            ErrorCode::LocationRequired => "A business needs at least one location",
            ErrorCode::BusinessNotOwned => "Business belongs to another customer",

            // Contract
            ErrorCode::ContractNotFound => "Contract not found",
            ErrorCode::ContractAlreadyExists => "Contract already exists",

            // Payment
            ErrorCode::PaymentNotFound => "Payment record not found",
            ErrorCode::PaymentAlreadyExists => "Payment record already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::EmptyUpdate.code(), 9);
        assert_eq!(ErrorCode::InvalidReference.code(), 10);

        assert_eq!(ErrorCode::CustomerNotFound.code(), 1001);
        assert_eq!(ErrorCode::BusinessNotFound.code(), 2001);
        assert_eq!(ErrorCode::LocationNotFound.code(), 2101);
        assert_eq!(ErrorCode::ContractNotFound.code(), 3001);
        assert_eq!(ErrorCode::PaymentNotFound.code(), 4001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "3");

        let json = serde_json::to_string(&ErrorCode::ContractNotFound).unwrap();
        assert_eq!(json, "3001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::EmptyUpdate.message(),
            "No parameters provided for update"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}
