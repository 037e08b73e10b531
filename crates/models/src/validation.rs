//! Field-level validation reporting.
//!
//! Violations are flattened into [`FieldError`]s shaped like
//! `{"loc": ["body", "<field>"], "msg": "...", "type": "..."}`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::ModelError;

/// One rejected field (or the body as a whole when `loc` has a single entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn field(name: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { loc: vec!["body".into(), name.into()], msg: msg.into(), kind: kind.into() }
    }

    pub fn body(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { loc: vec!["body".into()], msg: msg.into(), kind: kind.into() }
    }
}

/// Required strings deserialize as `""` when absent; both cases fail here.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("missing");
        err.message = Some(Cow::Borrowed("field required"));
        return Err(err);
    }
    Ok(())
}

/// `validator`'s address check plus a dotted domain, so `a@b` is refused.
pub fn email(value: &str) -> Result<(), ValidationError> {
    let dotted = value
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'))
        .unwrap_or(false);
    if !validator::validate_email(value) || !dotted {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

fn default_message(code: &str) -> &'static str {
    match code {
        "email" => "value is not a valid email address",
        "missing" => "field required",
        _ => "invalid value",
    }
}

/// Flatten `validator` output into a stable, field-sorted list.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&e.code).to_string());
                FieldError::field(field, msg, e.code.to_string())
            })
        })
        .collect();
    out.sort_by(|a, b| a.loc.cmp(&b.loc));
    out
}

/// Run `validator` and convert failures into [`ModelError::Validation`].
pub fn check<T: Validate>(value: &T) -> Result<(), ModelError> {
    value.validate().map_err(|e| ModelError::Validation(field_errors(&e)))
}

pub(crate) fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(email("amina@example.com").is_ok());
        assert!(email("amina@mail.example.dz").is_ok());
        for bad in ["a@b", "a@b.", "a@.b", "not-an-email", "@example.com"] {
            let err = email(bad).unwrap_err();
            assert_eq!(err.code, "email", "{bad}");
        }
    }

    #[test]
    fn summary_joins_locations() {
        let errs = vec![
            FieldError::field("name", "field required", "missing"),
            FieldError::body("expected value", "json_invalid"),
        ];
        assert_eq!(summarize(&errs), "body.name: field required; body: expected value");
    }

    #[test]
    fn field_error_serializes_type_key() {
        let v = serde_json::to_value(FieldError::field("email", "bad", "email")).unwrap();
        assert_eq!(v["type"], "email");
        assert_eq!(v["loc"], serde_json::json!(["body", "email"]));
    }
}
