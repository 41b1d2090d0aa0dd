use crate::{
    api::{RegisterRequest, UserRole},
    utils::validation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_confirmation: RwSignal<String>,
    pub as_seller: RwSignal<bool>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            password_confirmation: create_rw_signal(String::new()),
            as_seller: create_rw_signal(false),
        }
    }
}

impl RegisterFormState {
    pub fn to_request(&self) -> Result<RegisterRequest, String> {
        build_request(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.phone.get_untracked(),
            &self.password.get_untracked(),
            &self.password_confirmation.get_untracked(),
            self.as_seller.get_untracked(),
        )
    }
}

pub fn build_request(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirmation: &str,
    as_seller: bool,
) -> Result<RegisterRequest, String> {
    validation::require("Name", name)?;
    validation::validate_email(email)?;
    validation::validate_new_password(password, confirmation)?;
    Ok(RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        password_confirmation: confirmation.to_string(),
        phone: validation::optional(phone),
        role: Some(if as_seller {
            UserRole::Seller
        } else {
            UserRole::User
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_builds_customer_request() {
        let request = build_request(
            " Alice ",
            "alice@example.com",
            "",
            "longenough",
            "longenough",
            false,
        )
        .unwrap();
        assert_eq!(request.name, "Alice");
        assert!(request.phone.is_none());
        assert_eq!(request.role, Some(UserRole::User));
    }

    #[test]
    fn seller_flag_sets_role() {
        let request = build_request(
            "Shop",
            "shop@example.com",
            "+1 555 0100",
            "longenough",
            "longenough",
            true,
        )
        .unwrap();
        assert_eq!(request.role, Some(UserRole::Seller));
        assert_eq!(request.phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn short_or_mismatched_password_is_rejected() {
        assert_eq!(
            build_request("A", "a@b.co", "", "short", "short", false).unwrap_err(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            build_request("A", "a@b.co", "", "longenough", "different", false).unwrap_err(),
            "Passwords do not match"
        );
        assert_eq!(
            build_request("", "a@b.co", "", "longenough", "longenough", false).unwrap_err(),
            "Name is required"
        );
    }
}
