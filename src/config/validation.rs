//! Header list validation.
//!
//! # Responsibilities
//! - Check that the supplied header list is actually a list
//! - Check every entry against the header name syntax
//! - Report all offending entries at once, in input order
//!
//! # Design Decisions
//! - Shape errors and content errors are distinct variants
//! - Allowed characters are printable ASCII 0x21..=0x7e; looser than the
//!   RFC 7230 token grammar (permits `:`, `"`, ...) and kept that way
//!   deliberately
//! - Validation is a pure function over the raw value and runs before any
//!   derived field is computed

use serde_json::Value;
use thiserror::Error;

/// Errors produced while loading a propagation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The supplied header list is not a sequence.
    #[error("Header list is not an array")]
    TypeMismatch,

    /// One or more entries are not valid header names. Carries every
    /// offender in input order, rendered in its natural text form.
    #[error("Header list contains invalid headers: {}", .0.join(","))]
    InvalidHeaderName(Vec<String>),
}

/// Returns true if `name` is an acceptable header name: non-empty, with
/// every character in the printable ASCII range 0x21..=0x7e.
pub fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| ('\x21'..='\x7e').contains(&c))
}

/// Validate a proposed header list.
///
/// The value must be an array whose entries are all strings passing
/// [`is_valid_header_name`]. Offenders are reported together so the caller
/// can fix the whole list in one pass.
pub fn validate_header_list(candidate: &Value) -> Result<(), ConfigError> {
    let entries = match candidate {
        Value::Array(entries) => entries,
        _ => return Err(ConfigError::TypeMismatch),
    };

    let invalid: Vec<String> = entries
        .iter()
        .filter(|entry| !matches!(entry, Value::String(name) if is_valid_header_name(name)))
        .map(render_entry)
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::InvalidHeaderName(invalid))
    }
}

/// Render an offending entry the way the caller wrote it: strings
/// verbatim, everything else in its JSON text form.
fn render_entry(entry: &Value) -> String {
    match entry {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_name_syntax() {
        assert!(is_valid_header_name("x-request-id"));
        assert!(is_valid_header_name("x:custom")); // looser than RFC token
        assert!(is_valid_header_name("x\"quoted\""));
        assert!(!is_valid_header_name(""));
        assert!(!is_valid_header_name("cannot have space"));
        assert!(!is_valid_header_name("caf\u{e9}"));
        assert!(!is_valid_header_name("tab\there"));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = validate_header_list(&json!("das-header")).unwrap_err();
        assert_eq!(err, ConfigError::TypeMismatch);
        assert_eq!(err.to_string(), "Header list is not an array");

        assert!(matches!(
            validate_header_list(&json!(42)),
            Err(ConfigError::TypeMismatch)
        ));
        assert!(matches!(
            validate_header_list(&json!({"x-header": true})),
            Err(ConfigError::TypeMismatch)
        ));
    }

    #[test]
    fn test_reports_all_offenders_in_order() {
        let err =
            validate_header_list(&json!(["une-entete", 1, "cannot have space"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Header list contains invalid headers: 1,cannot have space"
        );
        assert_eq!(
            err,
            ConfigError::InvalidHeaderName(vec!["1".into(), "cannot have space".into()])
        );
    }

    #[test]
    fn test_renders_non_strings_naturally() {
        let err = validate_header_list(&json!([true, null])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Header list contains invalid headers: true,null"
        );
    }

    #[test]
    fn test_accepts_valid_list() {
        assert!(validate_header_list(&json!([])).is_ok());
        assert!(validate_header_list(&json!(["x-a", "x-b", "x-a"])).is_ok());
    }
}
