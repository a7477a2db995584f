//! Record id value object
//!
//! A finds.org.uk record id as typed by an author into the `id` shortcode
//! attribute. Raw input is first cleaned with [`clean`] and then checked with
//! [`RecordId::validate`]; a [`RecordId`] only exists once validation passed.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Longest id (in digits) the finds.org.uk database is expected to hand out.
pub const MAX_RECORD_ID_LEN: usize = 6;

/// Reasons a record id is rejected before any fetch is attempted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordIdError {
    #[error(r#"No record ID provided. Please check your "id" attribute and try again."#)]
    MissingId,

    #[error(
        r#"There's a problem with your record ID (not a number). Please check your "id" attribute and try again."#
    )]
    NotNumeric,

    #[error(
        r#"There's a problem with your record ID (number is too long). Please check your "id" attribute and try again."#
    )]
    TooLong,
}

/// Turn a raw `id` attribute into a validation candidate.
///
/// Stringifies the value and strips `/` from both ends, so ids pasted with a
/// trailing slash (`"12345/"`) still work. A missing attribute becomes the
/// empty string.
pub fn clean<T: fmt::Display + ?Sized>(raw: Option<&T>) -> String {
    match raw {
        Some(value) => value.to_string().trim_matches('/').to_string(),
        None => String::new(),
    }
}

/// A validated finds.org.uk record id (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecordId(String);

impl RecordId {
    /// Validate a cleaned candidate.
    ///
    /// Checks run in a fixed order and the first failure wins: empty, then
    /// non-digit, then length. `"0"` counts as empty.
    pub fn validate(candidate: &str) -> Result<Self, RecordIdError> {
        if candidate.trim().is_empty() || candidate == "0" {
            return Err(RecordIdError::MissingId);
        }
        if !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordIdError::NotNumeric);
        }
        if candidate.len() > MAX_RECORD_ID_LEN {
            return Err(RecordIdError::TooLong);
        }
        Ok(Self(candidate.to_string()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(&clean(Some(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_slashes() {
        assert_eq!(clean(Some("12345/")), "12345");
        assert_eq!(clean(Some("12345///")), "12345");
        assert_eq!(clean(Some("/12345/")), "12345");
    }

    #[test]
    fn test_clean_stringifies_numbers() {
        assert_eq!(clean(Some(&123456u32)), "123456");
    }

    #[test]
    fn test_clean_missing() {
        assert_eq!(clean::<str>(None), "");
    }

    #[test]
    fn test_validate_missing() {
        assert_eq!(RecordId::validate(""), Err(RecordIdError::MissingId));
        assert_eq!(RecordId::validate("   "), Err(RecordIdError::MissingId));
        assert_eq!(RecordId::validate("0"), Err(RecordIdError::MissingId));
        assert_eq!(
            RecordId::validate(&clean::<str>(None)),
            Err(RecordIdError::MissingId)
        );
    }

    #[test]
    fn test_validate_not_numeric() {
        assert_eq!(RecordId::validate("12a45"), Err(RecordIdError::NotNumeric));
        assert_eq!(RecordId::validate("-1"), Err(RecordIdError::NotNumeric));
        assert_eq!(RecordId::validate("١٢٣"), Err(RecordIdError::NotNumeric));
    }

    #[test]
    fn test_validate_order_digit_check_before_length() {
        assert_eq!(
            RecordId::validate("abcdefghij"),
            Err(RecordIdError::NotNumeric)
        );
    }

    #[test]
    fn test_validate_length_boundary() {
        assert_eq!(RecordId::validate("1234567"), Err(RecordIdError::TooLong));
        let id = RecordId::validate("123456").unwrap();
        assert_eq!(id.as_str(), "123456");
        assert!(RecordId::validate("1").is_ok());
    }

    #[test]
    fn test_from_str_cleans_first() {
        let id: RecordId = "987654/".parse().unwrap();
        assert_eq!(id.to_string(), "987654");
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert!(
            RecordIdError::MissingId
                .to_string()
                .starts_with("No record ID provided")
        );
        assert!(RecordIdError::NotNumeric.to_string().contains("not a number"));
        assert!(
            RecordIdError::TooLong
                .to_string()
                .contains("number is too long")
        );
    }
}
