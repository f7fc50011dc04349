//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! repositories before anything is written to a store.

use rust_decimal::prelude::*;
use shared::models::Location;

use super::{StoreError, StoreResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: customer, business, location, bank, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: role, country, postcode, status, legal id, account
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / websites
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Maximum allowed contract fee (€1,000,000)
const MAX_FEE: f64 = 1_000_000.0;

/// Fee precision (2 decimal places)
const FEE_DECIMAL_PLACES: u32 = 2;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::invalid(format!("{field} must not be empty")));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> StoreResult<()> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> StoreResult<()> {
    if value.len() > max_len {
        return Err(StoreError::invalid(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

// ── Locations ───────────────────────────────────────────────────────

pub fn validate_location(location: &Location) -> StoreResult<()> {
    validate_required_text(&location.name, "location name", MAX_NAME_LEN)?;
    validate_required_text(&location.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&location.postcode, "postcode", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&location.country, "country", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&location.website, "website", MAX_URL_LEN)?;
    Ok(())
}

/// A business owns one or more locations
pub fn validate_locations(legal_id: &str, locations: &[Location]) -> StoreResult<()> {
    if locations.is_empty() {
        return Err(StoreError::LocationRequired {
            legal_id: legal_id.to_string(),
        });
    }
    locations.iter().try_for_each(validate_location)
}

// ── Money ───────────────────────────────────────────────────────────

/// Check a contract fee and round it to 2 decimal places (half-up)
pub fn normalize_fee(fee: f64) -> StoreResult<f64> {
    if !fee.is_finite() {
        return Err(StoreError::invalid(format!(
            "fee must be a finite number, got {fee}"
        )));
    }
    if fee < 0.0 {
        return Err(StoreError::invalid(format!(
            "fee must be non-negative, got {fee}"
        )));
    }
    if fee > MAX_FEE {
        return Err(StoreError::invalid(format!(
            "fee exceeds maximum allowed ({MAX_FEE}), got {fee}"
        )));
    }

    let rounded = Decimal::from_f64(fee)
        .ok_or_else(|| StoreError::invalid(format!("fee {fee} is not representable")))?
        .round_dp_with_strategy(FEE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded
        .to_f64()
        .ok_or_else(|| StoreError::invalid(format!("fee {fee} is not representable")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str) -> Location {
        Location {
            name: name.to_string(),
            address: "Calle Mayor 1".to_string(),
            postcode: "28013".to_string(),
            country: "Spain".to_string(),
            phone: None,
            website: None,
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Anna", "full_name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "full_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "full_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "website", MAX_URL_LEN).is_ok());
        assert!(validate_optional_text(&Some(String::new()), "website", MAX_URL_LEN).is_err());
    }

    #[test]
    fn test_locations_must_not_be_empty() {
        assert_eq!(
            validate_locations("B-1", &[]).unwrap_err(),
            StoreError::LocationRequired {
                legal_id: "B-1".to_string()
            }
        );
        assert!(validate_locations("B-1", &[location("Centro")]).is_ok());
        assert!(validate_locations("B-1", &[location("Centro"), location("")]).is_err());
    }

    #[test]
    fn test_normalize_fee() {
        assert_eq!(normalize_fee(49.999).unwrap(), 50.0);
        assert_eq!(normalize_fee(19.994).unwrap(), 19.99);
        assert_eq!(normalize_fee(0.0).unwrap(), 0.0);
        assert_eq!(normalize_fee(10.125).unwrap(), 10.13);

        assert!(normalize_fee(-0.01).is_err());
        assert!(normalize_fee(f64::NAN).is_err());
        assert!(normalize_fee(f64::INFINITY).is_err());
        assert!(normalize_fee(2_000_000.0).is_err());
    }
}
