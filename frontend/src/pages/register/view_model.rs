use super::utils::RegisterFormState;
use crate::api::{ApiError, RegisterRequest, UserProfile};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub register_action: Action<RegisterRequest, Result<UserProfile, ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) -> bool {
        if self.register_action.pending().get_untracked() {
            return false;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
                true
            }
            Err(msg) => {
                self.error.set(Some(ApiError::validation(msg)));
                false
            }
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = RegisterFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let register_action = auth::use_register_action();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(user) => navigation::redirect_to(user.role.home_path()),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        register_action,
    }
}
