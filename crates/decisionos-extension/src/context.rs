//! Invocation context supplied by the host to extension hooks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context passed to every hook invocation.
///
/// The host constructs one per invocation; extensions only read it. The
/// `trace_id` is an opaque correlation string whose format and generation
/// are host concerns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionContext {
    /// Opaque identifier correlating this invocation with host telemetry.
    pub trace_id: String,
    /// Invocation-scoped configuration keyed by string.
    pub config: HashMap<String, Value>,
}

impl ExtensionContext {
    /// Creates a context with an empty configuration map.
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            config: HashMap::new(),
        }
    }

    /// Inserts a typed config value.
    pub fn with_config(mut self, key: &str, value: Value) -> Self {
        self.config.insert(key.to_string(), value);
        self
    }

    /// Inserts a string value.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_config(key, serde_json::json!(value))
    }

    /// Inserts an integer value.
    pub fn with_int(self, key: &str, value: i64) -> Self {
        self.with_config(key, serde_json::json!(value))
    }

    /// Inserts a boolean value.
    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.with_config(key, serde_json::json!(value))
    }

    /// Gets a config value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Gets a string config value.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 config value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.config.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool config value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.config.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let ctx = ExtensionContext::new("trace-1")
            .with_string("tenant", "demo")
            .with_int("attempt", 3)
            .with_bool("dry_run", true);

        assert_eq!(ctx.trace_id, "trace-1");
        assert_eq!(ctx.get_string("tenant"), Some("demo"));
        assert_eq!(ctx.get_i64("attempt"), Some(3));
        assert_eq!(ctx.get_bool("dry_run"), Some(true));
        assert!(ctx.get("missing").is_none());
    }

    #[test]
    fn test_accessors_reject_wrong_types() {
        let ctx = ExtensionContext::new("trace-2").with_int("attempt", 3);

        assert_eq!(ctx.get_string("attempt"), None);
        assert_eq!(ctx.get_bool("attempt"), None);
    }
}
