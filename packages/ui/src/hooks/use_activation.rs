use api::messages::{activation_error, resend_error};
use dioxus::prelude::*;

use crate::auth::{use_services, AppServices};

#[derive(Clone, PartialEq)]
pub struct UseActivation {
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub success: Signal<Option<String>>,
    pub resending: Signal<bool>,
    pub resend_error: Signal<Option<String>>,
    pub resend_success: Signal<Option<String>>,
    services: AppServices,
}

pub fn use_activation() -> UseActivation {
    UseActivation {
        loading: use_signal(|| false),
        error: use_signal(|| None),
        success: use_signal(|| None),
        resending: use_signal(|| false),
        resend_error: use_signal(|| None),
        resend_success: use_signal(|| None),
        services: use_services(),
    }
}

impl UseActivation {
    pub async fn activate(&self, email: &str, code: &str) -> bool {
        let (mut loading, mut error, mut success) = (self.loading, self.error, self.success);
        loading.set(true);
        error.set(None);
        success.set(None);

        let result = self.services.api.activate_account(email, code).await;
        loading.set(false);

        match result {
            Ok(_) => {
                success.set(Some(
                    "Account activated successfully! Redirecting to login...".to_string(),
                ));
                true
            }
            Err(err) => {
                error.set(Some(activation_error(&err)));
                false
            }
        }
    }

    pub async fn resend(&self, email: &str) -> bool {
        let (mut resending, mut resend_error_msg, mut resend_success) =
            (self.resending, self.resend_error, self.resend_success);
        resending.set(true);
        resend_error_msg.set(None);
        resend_success.set(None);

        let result = self.services.api.resend_activation_code(email).await;
        resending.set(false);

        match result {
            Ok(_) => {
                resend_success.set(Some(
                    "A new activation code has been sent to your email.".to_string(),
                ));
                true
            }
            Err(err) => {
                resend_error_msg.set(Some(resend_error(&err)));
                false
            }
        }
    }

    pub fn clear_messages(&self) {
        let (mut error, mut success, mut resend_error_msg, mut resend_success) = (
            self.error,
            self.success,
            self.resend_error,
            self.resend_success,
        );
        error.set(None);
        success.set(None);
        resend_error_msg.set(None);
        resend_success.set(None);
    }
}
