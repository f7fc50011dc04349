//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Customer errors
/// - 2xxx: Business / location errors
/// - 3xxx: Contract errors
/// - 4xxx: Payment errors
/// - 9xxx: System errors
///
/// Codes between the domain ranges and 9xxx are unassigned and classify as
/// System.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Customer errors (1xxx)
    Customer,
    /// Business and location errors (2xxx)
    Business,
    /// Contract errors (3xxx)
    Contract,
    /// Payment errors (4xxx)
    Payment,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Customer,
            2000..3000 => Self::Business,
            3000..4000 => Self::Contract,
            4000..5000 => Self::Payment,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Customer);
        assert_eq!(ErrorCategory::from_code(2101), ErrorCategory::Business);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Contract);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::EmptyUpdate.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::CustomerNotFound.category(),
            ErrorCategory::Customer
        );
        assert_eq!(
            ErrorCode::LocationRequired.category(),
            ErrorCategory::Business
        );
        assert_eq!(
            ErrorCode::ContractAlreadyExists.category(),
            ErrorCategory::Contract
        );
        assert_eq!(ErrorCode::PaymentNotFound.category(), ErrorCategory::Payment);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }
}
