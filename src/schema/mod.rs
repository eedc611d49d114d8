//! Form validation schemas.
//!
//! Every action input is a plain struct with a [`Schema`] implementation:
//! a pure, deterministic check producing ordered field errors. The first
//! message is the one surfaced to the UI. Validation runs before any
//! network traffic; the bridge refuses to send a payload that fails its
//! schema.

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum length for registration and reset passwords.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum length for first and last names.
pub const MIN_NAME_LENGTH: usize = 2;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered validation failures for one input record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaErrors {
    errors: Vec<FieldError>,
}

impl SchemaErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The single failure reason reported when only one message is needed.
    #[must_use]
    pub fn first_message(&self) -> &'static str {
        self.errors
            .first()
            .map_or("Invalid form data", |error| error.message)
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn into_result(self) -> Result<(), SchemaErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Pure validation over a typed input record.
pub trait Schema {
    /// Validate the record, returning every field failure in order.
    ///
    /// # Errors
    /// Returns the ordered field errors when any rule is violated.
    fn validate(&self) -> Result<(), SchemaErrors>;
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl Schema for LoginInput {
    fn validate(&self) -> Result<(), SchemaErrors> {
        let mut errors = SchemaErrors::default();
        if !valid_email(&self.email) {
            errors.push("email", "Please enter a valid email address");
        }
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Schema for RegisterInput {
    fn validate(&self) -> Result<(), SchemaErrors> {
        let mut errors = SchemaErrors::default();
        if !valid_email(&self.email) {
            errors.push("email", "Please enter a valid email address");
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push("password", "Password must be at least 8 characters");
        }
        if self.first_name.chars().count() < MIN_NAME_LENGTH {
            errors.push("first_name", "Name must be at least 2 characters");
        }
        if self.last_name.chars().count() < MIN_NAME_LENGTH {
            errors.push("last_name", "Name must be at least 2 characters");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordInput {
    pub email: String,
}

impl Schema for ForgotPasswordInput {
    fn validate(&self) -> Result<(), SchemaErrors> {
        let mut errors = SchemaErrors::default();
        if !valid_email(&self.email) {
            errors.push("email", "Please enter a valid email address");
        }
        errors.into_result()
    }
}

/// The full reset form, including the confirmation field the remote API
/// never sees.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordInput {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetPasswordInput {
    /// Strip the confirmation field for transmission.
    #[must_use]
    pub fn into_payload(self) -> ResetPasswordPayload {
        ResetPasswordPayload {
            token: self.token,
            new_password: self.new_password,
        }
    }
}

impl Schema for ResetPasswordInput {
    fn validate(&self) -> Result<(), SchemaErrors> {
        let mut errors = SchemaErrors::default();
        if self.token.is_empty() {
            errors.push("token", "Token is required");
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push("new_password", "Password must be at least 8 characters");
        }
        if self.confirm_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push("confirm_password", "Password must be at least 8 characters");
        }
        // The mismatch attaches to the confirmation field, not the password.
        if self.new_password != self.confirm_password {
            errors.push("confirm_password", "Passwords do not match");
        }
        errors.into_result()
    }
}

/// What actually goes over the wire for a reset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub new_password: String,
}

impl Schema for ResetPasswordPayload {
    fn validate(&self) -> Result<(), SchemaErrors> {
        let mut errors = SchemaErrors::default();
        if self.token.is_empty() {
            errors.push("token", "Token is required");
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push("new_password", "Password must be at least 8 characters");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileUpdateInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Schema for ProfileUpdateInput {
    fn validate(&self) -> Result<(), SchemaErrors> {
        let mut errors = SchemaErrors::default();
        if self.first_name.chars().count() < MIN_NAME_LENGTH {
            errors.push("first_name", "Name must be at least 2 characters");
        }
        if self.last_name.chars().count() < MIN_NAME_LENGTH {
            errors.push("last_name", "Name must be at least 2 characters");
        }
        if !valid_email(&self.email) {
            errors.push("email", "Please enter a valid email address");
        }
        errors.into_result()
    }
}
