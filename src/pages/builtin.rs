//! Built-in demo form payloads

use super::PagePayload;
use crate::schema::{FieldOption, FieldType, FieldValue, FormConfig, FormData, FormField};

/// Demo form 1: a contact form exercising every field type
pub fn contact_form() -> PagePayload {
    let config = FormConfig::new(vec![
        FormField::new(FieldType::Input, "name", "Name").with_attr("placeholder", "Your name"),
        FormField::new(FieldType::Input, "email", "Email")
            .with_attr("placeholder", "you@example.com")
            .with_attr("inputType", "email"),
        FormField::new(FieldType::Select, "topic", "Topic")
            .with_value("general")
            .with_options(vec![
                FieldOption::new("general", "General question"),
                FieldOption::new("support", "Support request"),
                FieldOption::new("feedback", "Feedback"),
            ]),
        FormField::new(FieldType::Textarea, "message", "Message").with_attr("rows", 4.0),
        FormField::new(FieldType::Checkbox, "subscribe", "Subscribe to updates").with_value(false),
    ]);

    let mut data = FormData::new();
    data.insert("name".to_string(), FieldValue::text("Ada Lovelace"));
    data.insert("email".to_string(), FieldValue::text("ada@example.com"));
    data.insert("topic".to_string(), FieldValue::text("feedback"));
    data.insert(
        "message".to_string(),
        FieldValue::text(
            "The analytical engine weaves algebraic patterns\n\
             just as the Jacquard loom weaves flowers.",
        ),
    );

    PagePayload { config, data }
}

/// Demo form 2: user preferences with numeric select values
pub fn preferences_form() -> PagePayload {
    let config = FormConfig::new(vec![
        FormField::new(FieldType::Select, "theme", "Theme")
            .with_value("dark")
            .with_options(vec![
                FieldOption::new("light", "Light"),
                FieldOption::new("dark", "Dark"),
                FieldOption::new("system", "Follow system"),
            ]),
        FormField::new(FieldType::Select, "page_size", "Items per page")
            .with_value(25.0)
            .with_options(vec![
                FieldOption::new(10.0, "10"),
                FieldOption::new(25.0, "25"),
                FieldOption::new(50.0, "50"),
            ]),
        FormField::new(FieldType::Checkbox, "notifications", "Enable notifications")
            .with_value(true),
        FormField::new(FieldType::Checkbox, "compact", "Compact layout"),
        FormField::new(FieldType::Input, "display_name", "Display name")
            .with_attr("maxlength", 32.0),
        FormField::new(FieldType::Textarea, "signature", "Signature"),
    ]);

    let mut data = FormData::new();
    data.insert("page_size".to_string(), FieldValue::Number(50.0));
    data.insert("compact".to_string(), FieldValue::Bool(true));
    data.insert("display_name".to_string(), FieldValue::text("ada"));

    PagePayload { config, data }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_payloads_are_valid() {
        assert!(contact_form().config.validate().is_ok());
        assert!(preferences_form().config.validate().is_ok());
    }

    #[test]
    fn test_contact_form_covers_every_field_type() {
        let config = contact_form().config;
        for field_type in [
            FieldType::Input,
            FieldType::Select,
            FieldType::Checkbox,
            FieldType::Textarea,
        ] {
            assert!(config.fields.iter().any(|f| f.field_type == field_type));
        }
    }

    #[test]
    fn test_data_keys_name_schema_fields() {
        for payload in [contact_form(), preferences_form()] {
            for key in payload.data.keys() {
                assert!(payload.config.field(key).is_some(), "unknown key {key}");
            }
        }
    }
}
