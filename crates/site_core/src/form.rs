use std::sync::LazyLock;

use regex::Regex;
use shared::{
    domain::FormField,
    error::FormError,
    protocol::{ContactSubmission, FormFields},
};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Required fields first, then the email shape. Values are taken as typed;
/// whitespace-only input counts as filled.
pub fn validate(fields: &FormFields) -> Result<ContactSubmission, FormError> {
    let missing: Vec<FormField> = FormField::REQUIRED
        .into_iter()
        .filter(|field| fields.get(*field).is_none_or(str::is_empty))
        .collect();
    if !missing.is_empty() {
        return Err(FormError::MissingRequiredFields { missing });
    }

    let email = fields.get(FormField::Email).unwrap_or_default();
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name: fields.get(FormField::Name).unwrap_or_default().to_string(),
        email: email.to_string(),
        phone: fields
            .get(FormField::Phone)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string),
        subject: fields.get(FormField::Subject).unwrap_or_default().to_string(),
        message: fields.get(FormField::Message).unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
