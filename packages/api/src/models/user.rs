//! # User DTO
//!
//! [`User`] is the signed-in parent, a student's parent, or a class treasurer. It is
//! fetched from `GET /api/user/` on start-up, cached in session storage, and updated
//! through the profile page.
//!
//! The backend may return `avatar` as a path relative to the API host; services call
//! [`User::with_resolved_avatar`] so views always get a loadable URL.

use serde::{Deserialize, Serialize};

use super::{nullable, Id};
use crate::config::ApiConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<Id>,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub surname: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub bio: String,
}

impl User {
    /// Resolve a relative avatar path against the API base URL.
    pub fn with_resolved_avatar(mut self, config: &ApiConfig) -> Self {
        self.avatar = config.resolve_asset(&self.avatar);
        self
    }

    /// `"name surname"`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.trim(), self.surname.trim())
            .trim()
            .to_string()
    }

    /// Full name, falling back to the email address, then `"User"`.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if !full.is_empty() {
            full
        } else if !self.email.is_empty() {
            self.email.clone()
        } else {
            "User".to_string()
        }
    }
}

/// Body of a successful avatar upload: `{ data: { avatar } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AvatarUpload {
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_for_null_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 5,
            "email": "ana@example.com",
            "name": null,
            "avatar": null
        }))
        .unwrap();

        assert_eq!(user.id, Some(Id::from(5)));
        assert_eq!(user.name, "");
        assert_eq!(user.surname, "");
        assert_eq!(user.avatar, "");
        assert_eq!(user.display_name(), "ana@example.com");
    }

    #[test]
    fn test_resolved_avatar() {
        let config = ApiConfig::new("https://api.example.com");
        let user = User {
            avatar: "uploads/avatars/5.png".to_string(),
            ..Default::default()
        }
        .with_resolved_avatar(&config);
        assert_eq!(user.avatar, "https://api.example.com/uploads/avatars/5.png");
    }

    #[test]
    fn test_full_name() {
        let user = User {
            name: "Maria ".to_string(),
            surname: " Lopez".to_string(),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Maria Lopez");
        assert_eq!(User::default().display_name(), "User");
    }

    #[test]
    fn test_session_snapshot_roundtrip() {
        let user = User {
            id: Some(Id::from("u-1")),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            ..Default::default()
        };
        let raw = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, user);
    }
}
