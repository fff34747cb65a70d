use thiserror::Error;

use crate::domain::FormField;

/// Contact form rejections. `Display` is the exact text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields { missing: Vec<FormField> },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl FormError {
    pub fn missing_fields(&self) -> &[FormField] {
        match self {
            FormError::MissingRequiredFields { missing } => missing,
            FormError::InvalidEmail => &[],
        }
    }
}
