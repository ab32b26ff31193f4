use api::messages::registration_error;
use dioxus::prelude::*;

use crate::auth::{use_services, AppServices};

#[derive(Clone, PartialEq)]
pub struct UseRegister {
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub success: Signal<Option<String>>,
    services: AppServices,
}

pub fn use_register() -> UseRegister {
    UseRegister {
        loading: use_signal(|| false),
        error: use_signal(|| None),
        success: use_signal(|| None),
        services: use_services(),
    }
}

impl UseRegister {
    pub async fn register(&self, email: &str, password: &str, confirmation: &str) -> bool {
        let (mut loading, mut error, mut success) = (self.loading, self.error, self.success);
        loading.set(true);
        error.set(None);
        success.set(None);

        let result = self.services.api.register(email, password, confirmation).await;
        loading.set(false);

        match result {
            Ok(_) => {
                success.set(Some(
                    "Registration successful! Check your email for the activation code."
                        .to_string(),
                ));
                true
            }
            Err(err) => {
                error.set(Some(registration_error(&err)));
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
