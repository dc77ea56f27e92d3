//! Form schema types
//!
//! A [`FormConfig`] is the ordered field list of one form. Each [`FormField`]
//! names its control type, label and key, and may carry an initial value,
//! select options and free-form attributes for the rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Current form values, keyed by field name
pub type FormData = BTreeMap<String, FieldValue>;

/// Errors raised while reading or checking a form schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid form schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("select field '{name}' has no options")]
    MissingOptions { name: String },
}

/// Control type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Input,
    Select,
    Checkbox,
    Textarea,
}

impl FieldType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Textarea => "textarea",
        }
    }
}

/// A field value or attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Truthiness used by checkbox rendering
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// One selectable option of a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: FieldValue,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<FieldValue>, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.to_string(),
        }
    }
}

/// A single schema entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, FieldValue>>,
}

impl FormField {
    /// Create a field with no value, options or attrs
    pub fn new(field_type: FieldType, name: &str, label: &str) -> Self {
        Self {
            field_type,
            label: label.to_string(),
            name: name.to_string(),
            value: None,
            options: None,
            attrs: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.attrs
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn is_select_like(&self) -> bool {
        matches!(self.field_type, FieldType::Select)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.field_type, FieldType::Textarea)
    }

    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub fn attr(&self, key: &str) -> Option<&FieldValue> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(key))
    }

    /// Value from the form data, falling back to the field's own value
    pub fn current_value<'a>(&'a self, data: &'a FormData) -> Option<&'a FieldValue> {
        data.get(&self.name).or(self.value.as_ref())
    }

    /// Index of the option matching the current value
    pub fn selected_option(&self, data: &FormData) -> Option<usize> {
        let current = self.current_value(data)?;
        self.options().iter().position(|o| &o.value == current)
    }

    /// Get the display value for rendering
    pub fn display_value(&self, data: &FormData) -> String {
        if let Some(idx) = self.selected_option(data) {
            return self.options()[idx].label.clone();
        }
        self.current_value(data)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

/// Full schema of one form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub fields: Vec<FormField>,
}

impl FormConfig {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Parse a schema from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field names and select options.
    ///
    /// Duplicate names are allowed but logged.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if field.is_select_like() && field.options().is_empty() {
                return Err(SchemaError::MissingOptions {
                    name: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                tracing::warn!("Duplicate field name '{}' in form schema", field.name);
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color_field() -> FormField {
        FormField::new(FieldType::Select, "color", "Color").with_options(vec![
            FieldOption::new("red", "Red"),
            FieldOption::new("blue", "Blue"),
        ])
    }

    #[test]
    fn test_parse_full_field() {
        let json = r#"{
            "fields": [
                {
                    "type": "select",
                    "label": "Color",
                    "name": "color",
                    "value": "blue",
                    "options": [
                        {"value": "red", "label": "Red"},
                        {"value": "blue", "label": "Blue"}
                    ],
                    "attrs": {"placeholder": "Pick one", "size": 3}
                }
            ]
        }"#;
        let config = FormConfig::from_json(json).unwrap();
        assert_eq!(config.len(), 1);
        let field = &config.fields[0];
        assert_eq!(field.field_type, FieldType::Select);
        assert_eq!(field.value, Some(FieldValue::text("blue")));
        assert_eq!(field.options().len(), 2);
        assert_eq!(field.attr("size"), Some(&FieldValue::Number(3.0)));
        assert_eq!(field.attr("placeholder"), Some(&FieldValue::text("Pick one")));
    }

    #[test]
    fn test_parse_minimal_field() {
        let json = r#"{"fields": [{"type": "input", "label": "Name", "name": "name"}]}"#;
        let config = FormConfig::from_json(json).unwrap();
        let field = &config.fields[0];
        assert!(field.value.is_none());
        assert!(field.options.is_none());
        assert!(field.attrs.is_none());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{"fields": [{"type": "slider", "label": "Vol", "name": "vol"}]}"#;
        let err = FormConfig::from_json(json).unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_fields_must_be_a_sequence() {
        let json = r#"{"fields": {"type": "input", "label": "Name", "name": "name"}}"#;
        assert!(matches!(
            FormConfig::from_json(json),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let config = FormConfig::new(vec![
            FormField::new(FieldType::Input, "first", "First"),
            FormField::new(FieldType::Input, "  ", "Blank"),
        ]);
        assert!(matches!(
            config.validate(),
            Err(SchemaError::EmptyName { index: 1 })
        ));
    }

    #[test]
    fn test_select_without_options_is_rejected() {
        let config = FormConfig::new(vec![FormField::new(FieldType::Select, "size", "Size")]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "select field 'size' has no options");
    }

    #[test]
    fn test_options_on_non_select_are_allowed() {
        let config = FormConfig::new(vec![FormField::new(FieldType::Input, "name", "Name")
            .with_options(vec![FieldOption::new("x", "X")])]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let config = FormConfig::new(vec![
            FormField::new(FieldType::Input, "name", "Name"),
            FormField::new(FieldType::Textarea, "name", "Name again"),
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(config.field("name").unwrap().label, "Name");
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = FormConfig::default();
        assert!(config.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_field_value_untagged_variants() {
        let data: FormData = serde_json::from_str(
            r#"{"a": true, "b": 2.5, "c": "x", "d": [1, "y"], "e": {"k": false}}"#,
        )
        .unwrap();
        assert_eq!(data["a"], FieldValue::Bool(true));
        assert_eq!(data["b"], FieldValue::Number(2.5));
        assert_eq!(data["c"], FieldValue::text("x"));
        assert_eq!(
            data["d"],
            FieldValue::List(vec![FieldValue::Number(1.0), FieldValue::text("y")])
        );
        assert_eq!(data["e"].to_string(), "{k: false}");
    }

    #[test]
    fn test_current_value_prefers_form_data() {
        let field = FormField::new(FieldType::Input, "name", "Name").with_value("default");
        let mut data = FormData::new();
        assert_eq!(field.display_value(&data), "default");
        data.insert("name".to_string(), FieldValue::text("Ada"));
        assert_eq!(field.display_value(&data), "Ada");
    }

    #[test]
    fn test_select_display_uses_option_label() {
        let field = color_field();
        let mut data = FormData::new();
        assert_eq!(field.selected_option(&data), None);
        assert_eq!(field.display_value(&data), "");
        data.insert("color".to_string(), FieldValue::text("blue"));
        assert_eq!(field.selected_option(&data), Some(1));
        assert_eq!(field.display_value(&data), "Blue");
    }

    #[test]
    fn test_select_display_unknown_value_falls_back_to_raw() {
        let field = color_field();
        let mut data = FormData::new();
        data.insert("color".to_string(), FieldValue::text("green"));
        assert_eq!(field.display_value(&data), "green");
    }

    #[test]
    fn test_truthiness() {
        assert!(FieldValue::Bool(true).is_truthy());
        assert!(!FieldValue::Bool(false).is_truthy());
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::text("").is_truthy());
        assert!(FieldValue::List(vec![FieldValue::Bool(false)]).is_truthy());
    }

    #[test]
    fn test_serialization_uses_type_key_and_skips_absent() {
        let field = FormField::new(FieldType::Checkbox, "agree", "Agree");
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"type":"checkbox","label":"Agree","name":"agree"}"#);
    }
}
