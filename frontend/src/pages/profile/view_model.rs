use super::utils::{PasswordFormState, ProfileFormState};
use crate::api::{ApiError, ChangePasswordRequest, MessageResponse, UpdateProfileRequest, UserProfile};
use crate::state::auth::{self, use_auth};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub profile: ProfileFormState,
    pub password: PasswordFormState,
    pub profile_error: RwSignal<Option<ApiError>>,
    pub profile_success: RwSignal<Option<String>>,
    pub password_error: RwSignal<Option<ApiError>>,
    pub password_success: RwSignal<Option<String>>,
    pub update_action: Action<UpdateProfileRequest, Result<UserProfile, ApiError>>,
    pub password_action: Action<ChangePasswordRequest, Result<MessageResponse, ApiError>>,
}

impl ProfileViewModel {
    pub fn save_profile(&self) -> bool {
        if self.update_action.pending().get_untracked() {
            return false;
        }
        self.profile_success.set(None);
        match self.profile.to_request() {
            Ok(request) => {
                self.profile_error.set(None);
                self.update_action.dispatch(request);
                true
            }
            Err(msg) => {
                self.profile_error.set(Some(ApiError::validation(msg)));
                false
            }
        }
    }

    pub fn change_password(&self) -> bool {
        if self.password_action.pending().get_untracked() {
            return false;
        }
        self.password_success.set(None);
        match self.password.to_request() {
            Ok(request) => {
                self.password_error.set(None);
                self.password_action.dispatch(request);
                true
            }
            Err(msg) => {
                self.password_error.set(Some(ApiError::validation(msg)));
                false
            }
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let (auth_state, _) = use_auth();
    let profile = ProfileFormState::new();
    let password = PasswordFormState::new();
    if let Some(user) = auth_state.get_untracked().user {
        profile.load(&user);
    }

    let profile_error = create_rw_signal(None);
    let profile_success = create_rw_signal(None);
    let password_error = create_rw_signal(None);
    let password_success = create_rw_signal(None);
    let update_action = auth::use_update_profile_action();
    let password_action = auth::use_change_password_action();

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(user) => {
                    profile.load(&user);
                    profile_success.set(Some("Profile updated".to_string()));
                }
                Err(err) => profile_error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = password_action.value().get() {
            match result {
                Ok(resp) => {
                    password.clear();
                    password_success.set(Some(resp.message));
                }
                Err(err) => password_error.set(Some(err)),
            }
        }
    });

    ProfileViewModel {
        profile,
        password,
        profile_error,
        profile_success,
        password_error,
        password_success,
        update_action,
        password_action,
    }
}
