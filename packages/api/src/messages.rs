//! User-facing messages chosen by HTTP status for the auth screens.

use crate::error::ApiError;

pub fn activation_error(err: &ApiError) -> String {
    match err.http_status() {
        Some(404) => "Invalid activation code. Please check and try again.".to_string(),
        Some(409) => "Account is already activated. Please login.".to_string(),
        Some(410) => "Activation code has expired. Please request a new code.".to_string(),
        _ => or_default(err, "Activation failed. Please try again."),
    }
}

pub fn resend_error(err: &ApiError) -> String {
    match err.http_status() {
        Some(404) => "User not found. Please register first.".to_string(),
        Some(409) => "Account is already activated. Please login.".to_string(),
        _ => or_default(err, "Failed to resend code. Please try again."),
    }
}

pub fn registration_error(err: &ApiError) -> String {
    match err.http_status() {
        Some(409) => "An account with this email already exists. Please use a different email or try logging in.".to_string(),
        _ => or_default(err, "Registration failed. Please try again."),
    }
}

fn or_default(err: &ApiError, default: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        default.to_string()
    } else {
        message
    }
}
