//! Mandatory-field, age and email checks run before submission.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use super::registration::Registration;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"));

/// First failing check; `Display` is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all mandatory fields (Name, Age, Phone Number, WhatsApp Number, Email ID).")]
    MissingMandatory,
    #[error("Please enter a valid age.")]
    InvalidAge,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Run the checks in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_registration(reg: &Registration) -> Result<(), ValidationError> {
    let mandatory = [&reg.name, &reg.age, &reg.phone_number, &reg.whatsapp_number, &reg.email];
    if mandatory.iter().any(|v| v.is_empty()) {
        return Err(ValidationError::MissingMandatory);
    }
    if !is_valid_age(&reg.age) {
        return Err(ValidationError::InvalidAge);
    }
    if !is_valid_email(&reg.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// A finite number whose whole part is at least one.
#[must_use]
pub fn is_valid_age(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .is_some_and(|v| v.trunc() > 0.0)
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}
