use crate::api::{ApiError, MessageResponse, ResetPasswordRequest};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub token: StoredValue<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_confirmation: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<ResetPasswordRequest, Result<MessageResponse, ApiError>>,
}

impl ResetPasswordViewModel {
    pub fn request(&self) -> ResetPasswordRequest {
        ResetPasswordRequest {
            token: self.token.get_value(),
            email: self.email.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
            password_confirmation: self.password_confirmation.get_untracked(),
        }
    }
}

/// Token and email arrive in the emailed link: `/reset-password?token=..&email=..`.
pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let repo = auth::use_auth_repository();
    let search = navigation::current_search();
    let token = store_value(navigation::query_value(&search, "token").unwrap_or_default());
    let email = create_rw_signal(navigation::query_value(&search, "email").unwrap_or_default());

    let password = create_rw_signal(String::new());
    let password_confirmation = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let submit_action = create_action(move |request: &ResetPasswordRequest| {
        let repo = repo.clone();
        let request = request.clone();
        async move { auth::reset_password(request, &repo).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    success.set(Some(resp.message));
                    error.set(None);
                    password.set(String::new());
                    password_confirmation.set(String::new());
                }
                Err(err) => {
                    error.set(Some(err));
                    success.set(None);
                }
            }
        }
    });

    ResetPasswordViewModel {
        token,
        email,
        password,
        password_confirmation,
        error,
        success,
        submit_action,
    }
}
