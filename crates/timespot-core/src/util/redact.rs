//! Masks sensitive values before they reach the log.

/// Key fragments whose values never get logged.
const SENSITIVE_KEYS: &[&str] = &[
    "password",
    "token",
    "apikey",
    "api_key",
    "secret",
    "auth",
    "bearer",
    "key",
    "credential",
    "session",
];

const REDACTED: &str = "[REDACTED]";

/// ## Summary
/// Returns `true` if a field name looks like it carries a secret.
#[must_use]
pub fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    SENSITIVE_KEYS.iter().any(|needle| lower.contains(needle))
}

/// ## Summary
/// Recursively replaces the values of sensitive keys in a JSON value.
#[must_use]
pub fn redact_fields(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(key, inner)| {
                let masked = if is_sensitive_key(key) {
                    serde_json::Value::String(REDACTED.to_string())
                } else {
                    redact_fields(inner)
                };
                (key.clone(), masked)
            })
            .collect::<serde_json::Map<_, _>>()
            .into(),
        serde_json::Value::Array(items) => items.iter().map(redact_fields).collect(),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test_log::test]
    fn test_redacts_nested_keys() {
        let input = json!({
            "user": "user_abc",
            "session": { "id": 1 },
            "nested": [{ "apiKey": "x", "city": "Paris" }]
        });
        let out = redact_fields(&input);
        assert_eq!(out["user"], "user_abc");
        assert_eq!(out["session"], REDACTED);
        assert_eq!(out["nested"][0]["apiKey"], REDACTED);
        assert_eq!(out["nested"][0]["city"], "Paris");
    }

    #[test_log::test]
    fn test_leaves_scalars_untouched() {
        assert_eq!(redact_fields(&json!(42)), json!(42));
    }
}
