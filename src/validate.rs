use serde_json::Value;

use crate::error::ApiError;

/// Pull a required string field out of a JSON request body.
///
/// A field is rejected when it is absent, not a JSON string, or empty after
/// trimming. Callers check fields in declared order, so the first invalid
/// field is the one reported. `description` is the human wording used in the
/// error message ("text", "language code", "language script", ...).
pub fn required_field(
    payload: &Value,
    name: &str,
    description: &'static str,
) -> Result<String, ApiError> {
    payload
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(ApiError::Validation(description))
}

/// Same rule applied to a path parameter, which axum already guarantees to
/// be a string but may still be blank after percent-decoding.
pub fn required_param<'a>(value: &'a str, description: &'static str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(description));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_present_string_and_trims_it() {
        let body = json!({ "text": "  hello  " });
        assert_eq!(required_field(&body, "text", "text").unwrap(), "hello");
    }

    #[test]
    fn rejects_missing_field() {
        let body = json!({ "to": "es" });
        let err = required_field(&body, "text", "text").unwrap_err();
        assert_eq!(err.to_string(), "Please enter valid text");
    }

    #[test]
    fn rejects_empty_and_whitespace_only_strings() {
        for value in ["", "   ", "\t\n"] {
            let body = json!({ "text": value });
            assert!(required_field(&body, "text", "text").is_err());
        }
    }

    #[test]
    fn rejects_non_string_values() {
        for body in [
            json!({ "text": 42 }),
            json!({ "text": null }),
            json!({ "text": ["hello"] }),
            json!({ "text": { "nested": "hello" } }),
        ] {
            assert!(required_field(&body, "text", "text").is_err());
        }
    }

    #[test]
    fn path_param_follows_the_same_rule() {
        assert_eq!(required_param("translation", "scope").unwrap(), "translation");
        assert!(required_param("   ", "scope").is_err());
    }
}
