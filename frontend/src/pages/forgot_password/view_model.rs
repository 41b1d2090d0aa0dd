use crate::api::{ApiError, MessageResponse};
use crate::state::auth;
use crate::utils::validation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    /// Backend confirmation, set once a link has been requested.
    pub sent: RwSignal<Option<String>>,
    pub request_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl ForgotPasswordViewModel {
    /// Validates locally first so a typo never costs a round trip.
    pub fn submit(&self) -> bool {
        if self.request_action.pending().get_untracked() {
            return false;
        }
        let email = self.email.get_untracked();
        if let Err(msg) = validation::validate_email(&email) {
            self.error.set(Some(ApiError::validation(msg)));
            return false;
        }
        self.error.set(None);
        self.request_action.dispatch(email);
        true
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let repo = auth::use_auth_repository();
    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let sent = create_rw_signal(None::<String>);

    let request_action = create_action(move |email: &String| {
        let repo = repo.clone();
        let email = email.clone();
        async move { auth::forgot_password(email, &repo).await }
    });

    create_effect(move |_| match request_action.value().get() {
        Some(Ok(resp)) => sent.set(Some(resp.message)),
        Some(Err(err)) => {
            log::warn!("password reset request failed: {}", err);
            error.set(Some(err));
        }
        None => {}
    });

    ForgotPasswordViewModel {
        email,
        error,
        sent,
        request_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_email_is_rejected_before_dispatch() {
        with_runtime(|| {
            let vm = use_forgot_password_view_model();
            vm.email.set("not-an-email".into());
            assert!(!vm.submit());
            assert_eq!(
                vm.error.get().map(|e| e.error).as_deref(),
                Some("Please enter a valid email address")
            );
            assert!(vm.sent.get().is_none());
        });
    }
}
