//! Helpers for extracting typed operator parameters from a `serde_json::Value`.
//!
//! Each helper takes a JSON object, a key name, and a default. If the key is
//! missing or the value has the wrong type, the default is returned. These
//! never fail; operator construction always gets a usable value.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. JSON integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or
/// wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"lambda": 12.5});
        assert!((param_f64(&params, "lambda", 1.0) - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"lambda": 10});
        assert!((param_f64(&params, "lambda", 0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "lambda", 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"lambda": "wide"});
        assert!((param_f64(&params, "lambda", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "lambda", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_string_extracts_existing_string() {
        let params = json!({"decay": "exponential"});
        assert_eq!(param_string(&params, "decay", "rational"), "exponential");
    }

    #[test]
    fn param_string_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_string(&params, "decay", "rational"), "rational");
    }

    #[test]
    fn param_string_returns_default_for_wrong_type() {
        let params = json!({"decay": 42});
        assert_eq!(param_string(&params, "decay", "rational"), "rational");
    }
}
