//! Validation errors mapped onto form fields
//!
//! Backend write endpoints answer a rejected request with a JSON body such as
//! `{ "message": "...", "errors": { "price": "..." } }`. The admin surface
//! shows each field error next to the matching input and the message as a
//! form-level line. Local validation produces the same shape.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use validator::ValidationErrors;

/// Error body returned by the backend. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorPayload {
    pub message: Option<String>,
    pub error: Option<String>,
    pub errors: BTreeMap<String, Value>,
}

impl ErrorPayload {
    /// Reads an error body leniently; anything that is not a JSON object yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Some(Self {
            message: text("message"),
            error: text("error"),
            errors: object
                .get("errors")
                .and_then(Value::as_object)
                .map(|errors| errors.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                .unwrap_or_default(),
        })
    }

    /// `message`, else `error`.
    pub fn summary(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// Field-keyed messages plus an optional form-level message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: BTreeMap<String, String>,
    pub form: Option<String>,
}

impl FormErrors {
    pub fn from_payload(payload: &ErrorPayload) -> Self {
        Self {
            fields: payload
                .errors
                .iter()
                .map(|(field, message)| (field.clone(), field_message(message)))
                .collect(),
            form: payload.summary().map(str::to_string),
        }
    }

    /// Only a form-level message, for failures without a structured body.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            form: Some(message.into()),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect();

        Self { fields, form: None }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(form) = &self.form {
            lines.push(form.clone());
        }
        for (field, message) in &self.fields {
            lines.push(format!("{field}: {message}"));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Text of one field error. Strings are used as-is, objects contribute their
/// `message`, arrays are comma-joined.
fn field_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(object) => match object.get("message") {
            Some(message) => field_message(message),
            None => value.to_string(),
        },
        Value::Array(values) => values.iter().map(field_message).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewMenuItem;
    use serde_json::json;

    #[test]
    fn test_field_errors_and_form_message() {
        let payload = ErrorPayload::from_value(&json!({
            "message": "Valideringen misslyckades",
            "errors": {
                "title": "Titel krävs",
                "price": { "message": "Ogiltigt pris", "kind": "Number" }
            }
        }))
        .unwrap();

        let errors = FormErrors::from_payload(&payload);

        assert_eq!(errors.field("title"), Some("Titel krävs"));
        assert_eq!(errors.field("price"), Some("Ogiltigt pris"));
        assert_eq!(errors.form.as_deref(), Some("Valideringen misslyckades"));
    }

    #[test]
    fn test_error_key_used_when_message_missing() {
        let payload = ErrorPayload::from_value(&json!({ "error": "Fel användarnamn" })).unwrap();
        let errors = FormErrors::from_payload(&payload);

        assert!(errors.fields.is_empty());
        assert_eq!(errors.form.as_deref(), Some("Fel användarnamn"));
    }

    #[test]
    fn test_non_object_payload() {
        assert_eq!(ErrorPayload::from_value(&json!("oops")), None);
        assert_eq!(ErrorPayload::from_value(&json!(null)), None);
    }

    #[test]
    fn test_from_validation_errors() {
        let validation = NewMenuItem::new("", "", "1", "").unwrap_err();
        let errors = FormErrors::from(&validation);

        assert_eq!(errors.field("title"), Some("Titel måste anges"));
        assert_eq!(errors.form, None);
    }

    #[test]
    fn test_display() {
        let mut errors = FormErrors::from_message("Kunde inte spara");
        errors.fields.insert("price".into(), "Ogiltigt pris".into());

        assert_eq!(errors.to_string(), "Kunde inte spara\nprice: Ogiltigt pris");
    }
}
