use dioxus::prelude::*;

use crate::auth::{use_auth, use_services, AppServices, AuthState};

#[derive(Clone, PartialEq)]
pub struct UseLogin {
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub success: Signal<Option<String>>,
    auth: Signal<AuthState>,
    services: AppServices,
}

pub fn use_login() -> UseLogin {
    UseLogin {
        loading: use_signal(|| false),
        error: use_signal(|| None),
        success: use_signal(|| None),
        auth: use_auth(),
        services: use_services(),
    }
}

impl UseLogin {
    /// Log in, fetch the user and store the session. Returns whether it worked.
    pub async fn login(&self, email: &str, password: &str, stay_signed_in: bool) -> bool {
        let (mut loading, mut error, mut success, mut auth) =
            (self.loading, self.error, self.success, self.auth);
        loading.set(true);
        error.set(None);
        success.set(None);

        let result = self
            .services
            .sessions
            .sign_in(&self.services.api, email, password, stay_signed_in)
            .await;
        loading.set(false);

        match result {
            Ok(signed_in) => {
                success.set(Some("Login successful!".to_string()));
                auth.set(AuthState::signed_in(
                    signed_in.user,
                    signed_in.session.stay_signed_in,
                ));
                true
            }
            Err(err) => {
                error.set(Some(err.to_string()));
                false
            }
        }
    }

    pub fn clear_messages(&self) {
        let (mut error, mut success) = (self.error, self.success);
        error.set(None);
        success.set(None);
    }
}
