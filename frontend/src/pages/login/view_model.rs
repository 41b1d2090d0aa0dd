use super::utils::{self, LoginFormState};
use crate::api::{ApiError, LoginRequest, UserProfile};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<UserProfile, ApiError>>,
}

impl LoginViewModel {
    /// Validates the form and dispatches the login; returns false when nothing was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(ApiError::validation(msg)));
            return false;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
            remember: self.form.remember.get_untracked(),
        });
        true
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    form.password.set(String::new());
                    navigation::redirect_to(user.role.home_path());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
            assert!(!vm.form.remember.get());
        });
    }

    #[test]
    fn invalid_form_is_not_dispatched() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.email.set("bad".into());
            vm.form.password.set("secret".into());
            assert!(!vm.submit());
            assert_eq!(vm.login_action.version().get_untracked(), 0);
            assert_eq!(
                vm.error.get().map(|e| e.error).as_deref(),
                Some("Please enter a valid email address")
            );
        });
    }
}
