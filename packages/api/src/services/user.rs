use tracing::info;

use super::{envelope_message, failed, SchoolMoney};
use crate::error::{ApiError, ApiResult};
use crate::models::{AvatarUpload, ChangePasswordRequest, Envelope, User, UserUpdateRequest};
use crate::resources;
use crate::resources::user::AVATAR_FIELD;
use crate::transport::{FilePart, Transport};
use crate::validation;

/// Largest avatar accepted for upload.
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

impl<T: Transport> SchoolMoney<T> {
    /// The signed-in user, with the avatar resolved to an absolute URL.
    pub async fn get_user(&self) -> ApiResult<User> {
        async {
            let value = resources::user::get_user(&self.transport).await?;
            let user = Envelope::<User>::from_value(value)?.require_data("user")?;
            info!("User data retrieved");
            Ok::<_, ApiError>(user.with_resolved_avatar(&self.config))
        }
        .await
        .map_err(failed("Get user", "Failed to retrieve user data."))
    }

    pub async fn update_user(&self, update: &UserUpdateRequest) -> ApiResult<User> {
        async {
            validation::require(&update.name, "First name is required")?;
            validation::require(&update.surname, "Last name is required")?;

            let body = UserUpdateRequest {
                name: update.name.trim().to_string(),
                surname: update.surname.trim().to_string(),
                phone: update.phone.trim().to_string(),
                bio: update.bio.trim().to_string(),
            };
            let value = resources::user::update_user(&self.transport, &body).await?;
            let user = Envelope::<User>::from_value(value)?.require_data("user")?;
            info!("Profile updated");
            Ok::<_, ApiError>(user.with_resolved_avatar(&self.config))
        }
        .await
        .map_err(failed("Update user", "Failed to update profile"))
    }

    /// Upload a new avatar image and return its absolute URL.
    pub async fn upload_avatar(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<String> {
        async {
            if !content_type.starts_with("image/") {
                return Err(ApiError::validation("Please select an image file"));
            }
            if bytes.len() > MAX_AVATAR_BYTES {
                return Err(ApiError::validation(format!(
                    "File is too large (max {} MB)",
                    MAX_AVATAR_BYTES / 1024 / 1024
                )));
            }

            let part = FilePart {
                field: AVATAR_FIELD.to_string(),
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                bytes,
            };
            let value = resources::user::upload_avatar(&self.transport, part).await?;
            let upload = Envelope::<AvatarUpload>::from_value(value)?.require_data("avatar")?;
            if upload.avatar.trim().is_empty() {
                return Err(ApiError::Decode("No avatar URL returned from API".to_string()));
            }
            info!("Avatar uploaded");
            Ok::<_, ApiError>(self.config.resolve_asset(&upload.avatar))
        }
        .await
        .map_err(failed("Upload avatar", "Failed to upload avatar"))
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirmation: &str,
    ) -> ApiResult<String> {
        async {
            validation::require(current_password, "Current password is required")?;
            validation::require(new_password, "New password is required")?;
            if new_password != confirmation {
                return Err(ApiError::validation("New passwords do not match"));
            }
            validation::password_length(new_password)?;

            let body = ChangePasswordRequest {
                current_password: current_password.to_string(),
                new_password: new_password.to_string(),
            };
            let message =
                envelope_message(resources::user::change_password(&self.transport, &body).await?)?;
            info!("Password changed");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Change password", "Failed to change password"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::MAX_AVATAR_BYTES;
    use crate::config::ApiConfig;
    use crate::mock::MockTransport;
    use crate::services::SchoolMoney;

    fn api(transport: &MockTransport) -> SchoolMoney<MockTransport> {
        SchoolMoney::new(transport.clone(), ApiConfig::new("https://api.example.com"))
    }

    #[tokio::test]
    async fn test_get_user_resolves_avatar() {
        let transport = MockTransport::new(|_| {
            Ok(json!({
                "data": { "id": 3, "email": "p@s.pl", "name": "Ana", "avatar": "uploads/ana.png" },
                "message": "OK",
                "httpStatus": "OK"
            }))
        });
        let user = api(&transport).get_user().await.unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.avatar, "https://api.example.com/uploads/ana.png");
        assert_eq!(user.surname, "");
    }

    #[tokio::test]
    async fn test_get_user_without_data() {
        let transport = MockTransport::new(|_| Ok(json!({ "message": "OK" })));
        let err = api(&transport).get_user().await.unwrap_err();
        assert_eq!(err.to_string(), "Unexpected response: No user data returned from API");
    }

    #[tokio::test]
    async fn test_upload_avatar_pinned_shape() {
        let transport =
            MockTransport::new(|_| Ok(json!({ "data": { "avatar": "/uploads/new.png" } })));
        let url = api(&transport)
            .upload_avatar("me.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(url, "https://api.example.com/uploads/new.png");

        let request = &transport.requests()[0];
        let file = request.file.as_ref().unwrap();
        assert_eq!(request.path, "/api/user/avatar");
        assert_eq!(file.field, "avatar");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_upload_avatar_rejects_locally() {
        let transport = MockTransport::empty();
        let api = api(&transport);

        let err = api
            .upload_avatar("notes.txt", "text/plain", vec![0])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please select an image file");

        let err = api
            .upload_avatar("big.png", "image/png", vec![0; MAX_AVATAR_BYTES + 1])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "File is too large (max 5 MB)");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_change_password_validation() {
        let transport = MockTransport::empty();
        let api = api(&transport);

        let err = api.change_password("", "newpassword", "newpassword").await.unwrap_err();
        assert_eq!(err.to_string(), "Current password is required");

        let err = api.change_password("old", "newpassword", "other").await.unwrap_err();
        assert_eq!(err.to_string(), "New passwords do not match");

        let err = api.change_password("old", "short", "short").await.unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
        assert!(transport.requests().is_empty());

        api.change_password("old", "newpassword", "newpassword")
            .await
            .unwrap();
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({ "currentPassword": "old", "newPassword": "newpassword" }))
        );
    }
}
