use crate::{
    api::{ChangePasswordRequest, UpdateProfileRequest, UserProfile},
    utils::validation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub address: RwSignal<String>,
}

impl ProfileFormState {
    pub fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
        }
    }

    pub fn load(&self, user: &UserProfile) {
        self.name.set(user.name.clone());
        self.email.set(user.email.clone());
        self.phone.set(user.phone.clone().unwrap_or_default());
        self.address.set(user.address.clone().unwrap_or_default());
    }

    pub fn to_request(&self) -> Result<UpdateProfileRequest, String> {
        build_profile_update(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.phone.get_untracked(),
            &self.address.get_untracked(),
        )
    }
}

#[derive(Clone, Copy)]
pub struct PasswordFormState {
    pub current: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirmation: RwSignal<String>,
}

impl PasswordFormState {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(String::new()),
            new_password: create_rw_signal(String::new()),
            confirmation: create_rw_signal(String::new()),
        }
    }

    pub fn clear(&self) {
        self.current.set(String::new());
        self.new_password.set(String::new());
        self.confirmation.set(String::new());
    }

    pub fn to_request(&self) -> Result<ChangePasswordRequest, String> {
        build_password_change(
            &self.current.get_untracked(),
            &self.new_password.get_untracked(),
            &self.confirmation.get_untracked(),
        )
    }
}

pub fn build_profile_update(
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
) -> Result<UpdateProfileRequest, String> {
    validation::require("Name", name)?;
    validation::validate_email(email)?;
    Ok(UpdateProfileRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: validation::optional(phone),
        address: validation::optional(address),
    })
}

pub fn build_password_change(
    current: &str,
    new_password: &str,
    confirmation: &str,
) -> Result<ChangePasswordRequest, String> {
    if current.is_empty() {
        return Err("Current password is required".into());
    }
    validation::validate_new_password(new_password, confirmation)?;
    if current == new_password {
        return Err("New password must differ from the current one".into());
    }
    Ok(ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new_password.to_string(),
        new_password_confirmation: confirmation.to_string(),
    })
}
