use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Input names of the contact form, in rendering order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Phone => "tel",
            Field::Message => "textarea",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }

    /// Character cap enforced by [`crate::ContactSubmission`] validation.
    pub fn max_length(&self) -> usize {
        match self {
            Field::Name => 120,
            Field::Email => 254,
            Field::Phone => 32,
            Field::Message => 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact field `{0}`")]
pub struct UnknownField(pub String);
