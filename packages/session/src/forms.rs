//! Client-side form checks, evaluated before any network dispatch.
//!
//! Minimal by design: presence checks for login, plus the
//! password-confirmation and minimum-length rules for registration. A
//! failing check means the screen shows the message inline and no request is
//! ever issued.

use api::NewAccount;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Presence checks for the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email".to_string());
    }
    if password.is_empty() {
        return Err("Please enter your password".to_string());
    }
    Ok(())
}

/// Checks for the registration form.
pub fn validate_registration(account: &NewAccount, confirm_password: &str) -> Result<(), String> {
    if account.name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }
    if account.email.trim().is_empty() {
        return Err("Please enter your email".to_string());
    }
    if account.password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if account.password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(password: &str) -> NewAccount {
        NewAccount {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: password.to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("", "secret1").is_err());
        assert!(validate_login("a@b.com", "").is_err());
        assert!(validate_login("a@b.com", "secret1").is_ok());
    }

    #[test]
    fn test_mismatched_passwords_rejected() {
        let err = validate_registration(&account("abcdef"), "abcdez").unwrap_err();
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn test_short_password_rejected() {
        // The mismatch check runs first, so keep both fields equal here.
        assert!(validate_registration(&account("abc"), "abc").is_err());
        assert!(validate_registration(&account("abcdef"), "abcdef").is_ok());
    }
}
