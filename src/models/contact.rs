// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact form fields and the message handed to the delivery service.

use serde::Serialize;

/// Substituted for a blank phone number.
pub const PHONE_PLACEHOLDER: &str = "Not provided";

/// Which required field is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Editable contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(Field::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(Field::Message);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Template parameters sent with every message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Human-readable send time
    pub time: String,
}

impl MessageParams {
    /// Build the outgoing parameters from the form, stamping them with `time`.
    pub fn from_fields(fields: &ContactFields, time: String) -> Self {
        let phone = fields.phone.trim();
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: if phone.is_empty() {
                PHONE_PLACEHOLDER.to_string()
            } else {
                phone.to_string()
            },
            message: fields.message.clone(),
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Aina".to_string(),
            email: "aina@example.com".to_string(),
            phone: String::new(),
            message: "Need a dashboard".to_string(),
        }
    }

    #[test]
    fn test_missing_required() {
        let mut fields = filled();
        assert!(fields.is_complete());

        fields.name = "   ".to_string();
        fields.message.clear();
        assert_eq!(fields.missing_required(), vec![Field::Name, Field::Message]);
    }

    #[test]
    fn test_phone_is_optional() {
        let params = MessageParams::from_fields(&filled(), "now".to_string());
        assert_eq!(params.phone, PHONE_PLACEHOLDER);

        let mut fields = filled();
        fields.phone = " +60123456789 ".to_string();
        let params = MessageParams::from_fields(&fields, "now".to_string());
        assert_eq!(params.phone, "+60123456789");
    }

    #[test]
    fn test_serializes_template_params() {
        let params = MessageParams::from_fields(&filled(), "October 19, 2026".to_string());
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["name"], "Aina");
        assert_eq!(value["time"], "October 19, 2026");
    }
}
