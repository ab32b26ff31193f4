use tracing::info;

use super::{envelope_message, failed, SchoolMoney};
use crate::error::{ApiError, ApiResult};
use crate::models::{AccountActivationRequest, LoginRequest, RegisterRequest, ResendCodeRequest};
use crate::resources;
use crate::transport::Transport;
use crate::validation;

impl<T: Transport> SchoolMoney<T> {
    /// Ask the backend for a CSRF token. Called once at start-up; the HTTP client also
    /// fetches one on demand when none is known.
    pub async fn initialize_csrf(&self) -> ApiResult<()> {
        resources::auth::csrf(&self.transport)
            .await
            .map(|_| info!("CSRF token initialized"))
            .map_err(|err| {
                tracing::error!("Failed to initialize CSRF: {err}");
                ApiError::Http {
                    message: "Failed to initialize security token".to_string(),
                    status: err.http_status(),
                }
            })
    }

    /// Sign in. Returns the server's confirmation message.
    pub async fn login(&self, email: &str, password: &str, stay_signed_in: bool) -> ApiResult<String> {
        async {
            validation::require(email, "Email is required")?;
            validation::require(password, "Password is required")?;

            let body = LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
                stay_signed_in,
            };
            let message = envelope_message(resources::auth::login(&self.transport, &body).await?)?;
            info!("Login successful: {message}");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Login", "Login failed. Please check your credentials."))
    }

    pub async fn register(&self, email: &str, password: &str, confirmation: &str) -> ApiResult<String> {
        async {
            validation::email(email)?;
            validation::new_password(password, confirmation)?;

            let body = RegisterRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            };
            let message =
                envelope_message(resources::auth::register(&self.transport, &body).await?)?;
            info!("Registration successful: {message}");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Registration", "Registration failed. Please try again."))
    }

    pub async fn logout(&self) -> ApiResult<()> {
        resources::auth::logout(&self.transport)
            .await
            .map(|_| info!("User logged out"))
            .map_err(failed("Logout", "Logout failed. Please try again."))
    }

    pub async fn activate_account(&self, email: &str, code: &str) -> ApiResult<String> {
        async {
            validation::require(email, "Email is required")?;
            validation::activation_code(code)?;

            let body = AccountActivationRequest {
                email: email.trim().to_string(),
                code: code.to_string(),
            };
            let message =
                envelope_message(resources::auth::activate_account(&self.transport, &body).await?)?;
            info!("Account activated");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Account activation", "Account activation failed. Please try again."))
    }

    pub async fn resend_activation_code(&self, email: &str) -> ApiResult<String> {
        async {
            validation::require(email, "Email is required")?;

            let body = ResendCodeRequest {
                email: email.trim().to_string(),
            };
            let message = envelope_message(
                resources::auth::resend_activation_code(&self.transport, &body).await?,
            )?;
            info!("Activation code resent");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed(
            "Resend activation code",
            "Failed to resend activation code. Please try again.",
        ))
    }
}
