//! Required-field checks for the app's forms. Failures carry the message
//! shown to the user; nothing here is fatal.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !self.agree_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// The "apply now" form on a job. The resume is only tracked by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub cover_letter: String,
    pub resume_file: Option<String>,
    pub portfolio: String,
}

impl JobApplicationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.resume_file.is_none()
        {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            password: "longenough".into(),
            confirm_password: "longenough".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn login_needs_both_fields() {
        assert_eq!(validate_login("", "x"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("a@b.co", ""), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("a@b.co", "x"), Ok(()));
    }

    #[test]
    fn signup_checks_in_order() {
        assert_eq!(signup().validate(), Ok(()));

        let mut form = signup();
        form.name.clear();
        form.agree_terms = false;
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let mut form = signup();
        form.confirm_password = "different".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let mut form = signup();
        form.password = "short".into();
        form.confirm_password = "short".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));

        let mut form = signup();
        form.agree_terms = false;
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn application_form_requires_resume() {
        let mut form = JobApplicationForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            ..JobApplicationForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingRequiredFields));

        form.resume_file = Some("resume.pdf".into());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn messages_match_ui_copy() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
    }
}
