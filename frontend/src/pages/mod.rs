pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod legal;
pub mod login;
pub mod oauth_callback;
pub mod payouts;
pub mod profile;
pub mod register;
pub mod reset_password;
