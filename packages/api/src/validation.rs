//! Client-side input checks. Each returns `ApiError::Validation` with the message the
//! form shows, so callers fail before any request is sent.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ApiError, ApiResult};

pub const MIN_PASSWORD_LEN: usize = 8;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid code regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"));

/// Fail with `message` when `value` is empty after trimming.
pub fn require(value: &str, message: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(message));
    }
    Ok(())
}

pub fn email(value: &str) -> ApiResult<()> {
    require(value, "Email is required")?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(ApiError::validation("Please enter a valid email address"));
    }
    Ok(())
}

/// `YYYY-MM-DD` that is also a real calendar date.
pub fn birth_date(value: &str) -> ApiResult<NaiveDate> {
    require(value, "Birth date is required")?;
    let value = value.trim();
    if !DATE_RE.is_match(value) {
        return Err(ApiError::validation("Birth date must be in format YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Birth date is not a valid date"))
}

/// New password: present, long enough and confirmed.
pub fn new_password(password: &str, confirmation: &str) -> ApiResult<()> {
    require(password, "Password is required")?;
    if password != confirmation {
        return Err(ApiError::validation("Passwords do not match"));
    }
    password_length(password)
}

pub fn password_length(password: &str) -> ApiResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

/// Class access code: exactly four digits.
pub fn access_code(code: &str) -> ApiResult<()> {
    require(code, "Access code is required")?;
    if !CODE_RE.is_match(code) {
        return Err(ApiError::validation("Access code must be a 4-digit number"));
    }
    Ok(())
}

/// Account activation code: exactly four digits.
pub fn activation_code(code: &str) -> ApiResult<()> {
    require(code, "Activation code is required")?;
    if !CODE_RE.is_match(code) {
        return Err(ApiError::validation("Activation code must be 4 digits"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("x", "Name is required").is_ok());
        let err = require("   ", "Name is required").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_email() {
        assert!(email("parent@school.pl").is_ok());
        assert_eq!(email("").unwrap_err().to_string(), "Email is required");
        assert!(email("parent").is_err());
        assert!(email("a b@c.d").is_err());
    }

    #[test]
    fn test_birth_date_format() {
        assert_eq!(
            birth_date("2012-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2012, 3, 15).unwrap()
        );
        assert_eq!(
            birth_date("15-03-2012").unwrap_err().to_string(),
            "Birth date must be in format YYYY-MM-DD"
        );
        assert!(birth_date("2012-3-15").is_err());
        assert!(birth_date("2012-02-30").is_err());
        assert!(birth_date("٢٠١٢-03-15").is_err());
        assert_eq!(birth_date("").unwrap_err().to_string(), "Birth date is required");
    }

    #[test]
    fn test_new_password() {
        assert!(new_password("longenough", "longenough").is_ok());
        assert_eq!(
            new_password("short", "short").unwrap_err().to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            new_password("longenough", "longenougH").unwrap_err().to_string(),
            "Passwords do not match"
        );
        assert!(new_password("", "").is_err());
    }

    #[test]
    fn test_access_code() {
        assert!(access_code("0427").is_ok());
        for bad in ["12a4", "123", "12345", " 1234", "", "١٢٣٤"] {
            assert!(access_code(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_activation_code() {
        assert!(activation_code("9981").is_ok());
        assert_eq!(
            activation_code("99").unwrap_err().to_string(),
            "Activation code must be 4 digits"
        );
        assert!(activation_code("١٢٣٤").is_err());
        assert!(activation_code("１２３４").is_err());
    }
}
