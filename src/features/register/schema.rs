//! Client-side registration schema. Both fields are required; the email must
//! also look like an address. Only one message is shown at a time, and email
//! problems win over password problems.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub const EMAIL_REQUIRED: &str = "El correo electrónico es obligatorio";
pub const EMAIL_INVALID: &str = "Introduce un correo electrónico válido";
pub const PASSWORD_REQUIRED: &str = "La contraseña es obligatoria";

/// Raw values typed into the registration form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(
        length(min = 1, message = "El correo electrónico es obligatorio"),
        email(message = "Introduce un correo electrónico válido")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RegisterForm")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// First failing message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    /// The single message rendered under the form; email takes precedence.
    pub fn message(&self) -> Option<&str> {
        self.email.as_deref().or(self.password.as_deref())
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();
        Self {
            email: fields.get("email").and_then(|errs| first_message(errs)),
            password: fields.get("password").and_then(|errs| first_message(errs)),
        }
    }
}

/// Missing-value errors outrank format errors for the same field.
fn first_message(errors: &[ValidationError]) -> Option<String> {
    errors
        .iter()
        .find(|error| error.code == "length")
        .or_else(|| errors.first())
        .map(|error| {
            error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string)
        })
}

/// Checks the form against the registration schema.
pub fn validate_form(form: &RegisterForm) -> Result<(), FieldErrors> {
    form.validate().map_err(|errors| FieldErrors::from(&errors))
}
