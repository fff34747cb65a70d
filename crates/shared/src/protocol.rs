use serde::{Deserialize, Serialize};

use crate::domain::FormField;

pub const STATUS_SENDING: &str = "Sending message...";
pub const STATUS_SENT: &str =
    "Thank you! Your message has been sent successfully. We will get back to you soon.";

/// Raw control values read from the contact form at submission time.
/// `None` means the control was absent from the form data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = Some(value.into());
    }
}

/// JSON body a contact endpoint would receive. Delivery is simulated, so this
/// is only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
