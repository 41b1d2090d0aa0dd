use crate::utils::validation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub remember: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            remember: create_rw_signal(false),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    validation::validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}

/// Banner copy for the `?error=` value set by the OAuth callback pages.
pub fn notice_for_error_param(error: Option<&str>) -> Option<&'static str> {
    match error? {
        "oauth_failed" => Some("Social sign-in failed. Please try again or use your email."),
        "session_expired" => Some("Your session has expired. Please sign in again."),
        _ => None,
    }
}
