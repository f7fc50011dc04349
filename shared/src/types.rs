//! Validated value types
//!
//! Contact and billing values are never stored as bare strings: each type
//! can only be built through its parser, and deserialization goes through
//! the same parser, so a malformed body is rejected before it reaches the
//! store.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// E.164 allows at most 15 digits
const MAX_PHONE_DIGITS: usize = 15;
const MIN_PHONE_DIGITS: usize = 6;

/// Digits kept from a card number
const CARD_VISIBLE_DIGITS: usize = 4;

/// Rejected value, reported to the caller as an invalid argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {reason}")]
pub struct InvalidValue {
    pub kind: &'static str,
    pub reason: String,
}

impl InvalidValue {
    fn new(kind: &'static str, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

// ── Email ───────────────────────────────────────────────────────────

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, InvalidValue> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(InvalidValue::new("email", "must not be empty"));
        }
        if value.len() > MAX_EMAIL_LEN {
            return Err(InvalidValue::new(
                "email",
                format!("too long ({} chars, max {MAX_EMAIL_LEN})", value.len()),
            ));
        }
        if !value.validate_email() {
            return Err(InvalidValue::new("email", format!("'{value}' is not an email address")));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── PhoneNumber ─────────────────────────────────────────────────────

/// Validated phone number
///
/// Accepts an optional leading `+` followed by digits and the usual
/// separators (space, `-`, `.`, parentheses). Bare JSON integers are
/// accepted too, since older clients send phones as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPhone", into = "String")]
pub struct PhoneNumber(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPhone {
    Text(String),
    Number(u64),
}

impl PhoneNumber {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, InvalidValue> {
        let value = value.as_ref().trim();
        let body = value.strip_prefix('+').unwrap_or(value);

        let mut digits = 0;
        for c in body.chars() {
            match c {
                '0'..='9' => digits += 1,
                ' ' | '-' | '.' | '(' | ')' => {}
                other => {
                    return Err(InvalidValue::new(
                        "phone",
                        format!("unexpected character '{other}'"),
                    ));
                }
            }
        }

        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
            return Err(InvalidValue::new(
                "phone",
                format!("expected {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS} digits, got {digits}"),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<RawPhone> for PhoneNumber {
    type Error = InvalidValue;

    fn try_from(raw: RawPhone) -> Result<Self, Self::Error> {
        match raw {
            RawPhone::Text(s) => Self::parse(s),
            RawPhone::Number(n) => Self::parse(n.to_string()),
        }
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── MaskedCard ──────────────────────────────────────────────────────

/// Card reference with everything but the last four digits masked
///
/// Parsing a full card number and parsing an already masked value
/// (`**** 1234`) give the same result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaskedCard(String);

impl MaskedCard {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, InvalidValue> {
        let digits: Vec<char> = value
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if digits.len() < CARD_VISIBLE_DIGITS {
            return Err(InvalidValue::new(
                "card",
                format!("expected at least {CARD_VISIBLE_DIGITS} digits"),
            ));
        }

        let last: String = digits[digits.len() - CARD_VISIBLE_DIGITS..].iter().collect();
        Ok(Self(format!("**** {last}")))
    }

    /// Last four digits
    pub fn last_digits(&self) -> &str {
        &self.0[self.0.len() - CARD_VISIBLE_DIGITS..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MaskedCard {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<MaskedCard> for String {
    fn from(card: MaskedCard) -> Self {
        card.0
    }
}

impl fmt::Display for MaskedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_parse() {
        let email = Email::parse("  anna@example.com ").unwrap();
        assert_eq!(email.as_str(), "anna@example.com");

        assert!(Email::parse("").is_err());
        assert!(Email::parse("anna").is_err());
        assert!(Email::parse("anna@").is_err());

        let long = format!("{}@example.com", "a".repeat(260));
        assert!(Email::parse(long).is_err());
    }

    #[test]
    fn test_email_deserialize_rejects_malformed() {
        let ok: Result<Email, _> = serde_json::from_str("\"lloyd@example.com\"");
        assert!(ok.is_ok());

        let err: Result<Email, _> = serde_json::from_str("\"not-an-email\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_phone_parse() {
        assert!(PhoneNumber::parse("+34 600 123 456").is_ok());
        assert!(PhoneNumber::parse("(030) 1234-567").is_ok());
        assert!(PhoneNumber::parse("12345").is_err());
        assert!(PhoneNumber::parse("+1234567890123456").is_err());
        assert!(PhoneNumber::parse("600-ABC-123").is_err());
    }

    #[test]
    fn test_phone_accepts_json_number() {
        let phone: PhoneNumber = serde_json::from_str("600123456").unwrap();
        assert_eq!(phone.as_str(), "600123456");

        let phone: PhoneNumber = serde_json::from_str("\"+351 912 345 678\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+351 912 345 678\"");
    }

    #[test]
    fn test_card_is_masked() {
        let card = MaskedCard::parse("4111 1111 1111 1234").unwrap();
        assert_eq!(card.as_str(), "**** 1234");
        assert_eq!(card.last_digits(), "1234");

        // Masked input parses to the same value
        assert_eq!(MaskedCard::parse(card.as_str()).unwrap(), card);

        assert!(MaskedCard::parse("12").is_err());
    }

    #[test]
    fn test_invalid_value_display() {
        let err = Email::parse("nope").unwrap_err();
        assert_eq!(err.kind, "email");
        assert!(err.to_string().starts_with("invalid email:"));
    }
}
