use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 8;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_match(raw.trim())
}

pub fn require(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

pub fn validate_email(raw: &str) -> Result<(), String> {
    require("Email", raw)?;
    if is_valid_email(raw) {
        Ok(())
    } else {
        Err("Please enter a valid email address".into())
    }
}

pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirmation {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

/// Empty inputs become `None` so optional fields are omitted from payloads.
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format_check() {
        assert!(is_valid_email("rider@velomart.shop"));
        assert!(is_valid_email("  rider@velomart.shop "));
        assert!(!is_valid_email("rider@velomart"));
        assert!(!is_valid_email("rider velomart.shop"));
        assert_eq!(validate_email("").unwrap_err(), "Email is required");
    }

    #[test]
    fn password_rules() {
        assert!(validate_new_password("short", "short").is_err());
        assert_eq!(
            validate_new_password("longenough", "different").unwrap_err(),
            "Passwords do not match"
        );
        assert!(validate_new_password("longenough", "longenough").is_ok());
    }

    #[test]
    fn optional_trims_blank_values() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" 555 "), Some("555".into()));
    }
}
