//! Request bodies, serialized with the backend's camelCase field names.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub stay_signed_in: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountActivationRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResendCodeRequest {
    pub email: String,
}

/// Profile fields the user can edit. Email is not editable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdateRequest {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Body for creating or editing a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
}

impl StudentRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: birth_date.into(),
        }
    }

    pub(crate) fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassEditRequest {
    pub name: String,
}
