use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::Field;

/// The four-field record a visitor sends to request contact.
///
/// This is also the JSON body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub name: String,
    #[validate(custom(function = "not_blank"), email, length(max = 254))]
    pub email: String,
    #[validate(custom(function = "not_blank"), length(max = 32))]
    pub phone: String,
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}
