//! Signup and login forms.

use crate::{AuthError, UserSession};
use serde::{Deserialize, Serialize};
use shop_commerce::validate::{
    validate_confirm_password, validate_email, validate_name, validate_password, Field, FormErrors,
};
use tracing::debug;

/// The signup dialog.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Validate every field into `errors`. Returns whether all passed.
    pub fn validate(&self, errors: &mut FormErrors) -> bool {
        let results = [
            errors.check(Field::FirstName, validate_name(Field::FirstName, &self.first_name)),
            errors.check(Field::LastName, validate_name(Field::LastName, &self.last_name)),
            errors.check(Field::Email, validate_email(&self.email)),
            errors.check(Field::Password, validate_password(&self.password)),
            errors.check(
                Field::ConfirmPassword,
                validate_confirm_password(&self.password, &self.confirm_password),
            ),
        ];
        results.iter().all(|ok| *ok)
    }

    /// Validate and start a session named after the trimmed first name.
    pub fn sign_up(&self) -> Result<UserSession, AuthError> {
        let mut errors = FormErrors::new();
        if !self.validate(&mut errors) {
            return Err(AuthError::InvalidCredentials(errors));
        }
        let session = UserSession::new(self.first_name.trim());
        debug!(user = %session.first_name, "Signed up");
        Ok(session)
    }
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// The login dialog.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate both fields into `errors`. Returns whether both passed.
    pub fn validate(&self, errors: &mut FormErrors) -> bool {
        let email_ok = errors.check(Field::Email, validate_email(&self.email));
        let password_ok = errors.check(Field::Password, validate_password(&self.password));
        email_ok && password_ok
    }

    /// Validate and start a session named after the email's local part.
    pub fn log_in(&self) -> Result<UserSession, AuthError> {
        let mut errors = FormErrors::new();
        if !self.validate(&mut errors) {
            return Err(AuthError::InvalidCredentials(errors));
        }
        let email = self.email.trim();
        let local = email.split('@').next().unwrap_or(email);
        let session = UserSession::new(local);
        debug!(user = %session.first_name, "Logged in");
        Ok(session)
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::validate::FieldError;

    fn signup() -> SignupForm {
        SignupForm {
            first_name: "  Ann ".to_string(),
            last_name: "Santos".to_string(),
            email: "ann@shop.ph".to_string(),
            password: "Secret1!".to_string(),
            confirm_password: "Secret1!".to_string(),
        }
    }

    #[test]
    fn test_signup_uses_trimmed_first_name() {
        let session = signup().sign_up().unwrap();
        assert_eq!(session.first_name, "Ann");
    }

    #[test]
    fn test_signup_reports_every_field() {
        let form = SignupForm {
            first_name: String::new(),
            email: "ann@shop".to_string(),
            confirm_password: "Secret2!".to_string(),
            ..signup()
        };
        let err = form.sign_up().unwrap_err();
        let errors = err.form_errors().unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::FirstName), Some(FieldError::Required(Field::FirstName)));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::PasswordMismatch));
    }

    #[test]
    fn test_login_uses_local_part() {
        let session = LoginForm::new("juan.dc@shop.ph", "Secret1!").log_in().unwrap();
        assert_eq!(session.first_name, "juan.dc");
    }

    #[test]
    fn test_login_validates_both_fields() {
        let mut errors = FormErrors::new();
        assert!(!LoginForm::new("", "short").validate(&mut errors));
        assert_eq!(errors.get(Field::Email), Some(FieldError::Required(Field::Email)));
        assert_eq!(errors.get(Field::Password), Some(FieldError::PasswordTooShort));
    }

    #[test]
    fn test_debug_hides_passwords() {
        let debug = format!("{:?} {:?}", signup(), LoginForm::new("a@b.co", "Secret1!"));
        assert!(!debug.contains("Secret1!"));
    }
}
