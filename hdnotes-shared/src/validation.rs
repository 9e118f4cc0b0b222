//! Client-side validation for the registration and sign-in forms.
//!
//! Validation failures are field-local: the forms show them inline next to
//! the offending input and make no network call until the schema passes.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{LoginRequest, RegisterRequest};

/// Rough shape check, the backend stays authoritative on deliverability.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern compiles"));

const DOB_FORMAT: &str = "%Y-%m-%d";

/// Form fields that can carry an inline validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Display name (registration only).
    Name,
    /// Date of birth (registration only).
    Dob,
    /// Email address.
    Email,
    /// One-time code.
    Otp,
}

/// A single field-local validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Which input the message belongs to.
    pub field: Field,
    /// Human-readable message shown inline.
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All inline errors produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Message for a given field, if that field failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Whether the validation pass succeeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }
}

/// Whether a string looks like a well-formed email address.
#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Raw input of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Display name input.
    pub name: String,
    /// Date of birth input, expected as `YYYY-MM-DD`.
    pub dob: String,
    /// Email input.
    pub email: String,
    /// One-time code input.
    pub otp: String,
}

impl RegistrationForm {
    /// Validate the form and produce the register request.
    ///
    /// All fields are required, the email must be well-formed and the date of
    /// birth must name a real calendar day. The date is re-emitted in
    /// canonical `YYYY-MM-DD` form.
    ///
    /// # Errors
    /// Returns every inline error at once so the form can annotate all
    /// offending inputs in a single pass.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(Field::Name, "Name is required"));
        }

        let dob = validate_dob(&self.dob, &mut errors);
        validate_email(&self.email, &mut errors);

        if self.otp.trim().is_empty() {
            errors.push(FieldError::new(Field::Otp, "OTP is required"));
        }

        match (dob, errors.is_empty()) {
            (Some(date), true) => Ok(RegisterRequest {
                name: self.name.clone(),
                dob: date.format(DOB_FORMAT).to_string(),
                email: self.email.clone(),
                otp: self.otp.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Raw input of the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    /// Email input.
    pub email: String,
    /// One-time code input.
    pub otp: String,
}

impl SignInForm {
    /// Validate the form and produce the login request.
    ///
    /// # Errors
    /// Returns every inline error at once, same contract as
    /// [`RegistrationForm::validate`].
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        validate_email(&self.email, &mut errors);

        if self.otp.trim().is_empty() {
            errors.push(FieldError::new(Field::Otp, "OTP is required"));
        }

        if errors.is_empty() {
            Ok(LoginRequest {
                email: self.email.clone(),
                otp: self.otp.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

fn validate_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required"));
    } else if !email_is_valid(email) {
        errors.push(FieldError::new(Field::Email, "Invalid email"));
    }
}

fn validate_dob(dob: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
    if dob.trim().is_empty() {
        errors.push(FieldError::new(Field::Dob, "Date of birth is required"));
        return None;
    }
    match NaiveDate::parse_from_str(dob.trim(), DOB_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(
                Field::Dob,
                "Date of birth must be a valid date",
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_registration() -> RegistrationForm {
        RegistrationForm {
            name: "Ada Lovelace".to_string(),
            dob: "1990-12-01".to_string(),
            email: "ada@example.com".to_string(),
            otp: "123456".to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(email_is_valid("user@example.com"));
        assert!(email_is_valid("first.last@sub.domain.co"));
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("no-at-sign"));
        assert!(!email_is_valid("two@@example.com"));
        assert!(!email_is_valid("user@nodot"));
        assert!(!email_is_valid("spaces in@example.com"));
    }

    #[test]
    fn test_valid_registration_passes() {
        let request = filled_registration().validate().expect("form is valid");
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.dob, "1990-12-01");
        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn test_empty_registration_reports_every_field() {
        let errors = RegistrationForm::default()
            .validate()
            .expect_err("empty form is invalid");
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Dob), Some("Date of birth is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Otp), Some("OTP is required"));
    }

    #[test]
    fn test_malformed_email_is_field_local() {
        let form = RegistrationForm {
            email: "not-an-email".to_string(),
            ..filled_registration()
        };
        let errors = form.validate().expect_err("email is malformed");
        assert_eq!(errors.get(Field::Email), Some("Invalid email"));
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Otp), None);
    }

    #[test]
    fn test_impossible_date_rejected() {
        let form = RegistrationForm {
            dob: "1990-02-30".to_string(),
            ..filled_registration()
        };
        let errors = form.validate().expect_err("February 30th does not exist");
        assert_eq!(
            errors.get(Field::Dob),
            Some("Date of birth must be a valid date")
        );
    }

    #[test]
    fn test_dob_emitted_in_canonical_form() {
        let form = RegistrationForm {
            dob: " 1990-12-01 ".to_string(),
            ..filled_registration()
        };
        let request = form.validate().expect("whitespace around the date is fine");
        assert_eq!(request.dob, "1990-12-01");
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let errors = SignInForm::default()
            .validate()
            .expect_err("empty form is invalid");
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Otp), Some("OTP is required"));

        let ok = SignInForm {
            email: "ada@example.com".to_string(),
            otp: "123456".to_string(),
        }
        .validate()
        .expect("filled form is valid");
        assert_eq!(ok.email, "ada@example.com");
    }
}
