//! Accessors for the unsigned `extra` fields.
//!
//! The typed getters never fail. A missing key or a value of another type
//! yields the zero value (`""`, `0.0`, `false`), which keeps call sites
//! short when reading loosely specified relay metadata.

use tracing::warn;

use super::types::{Event, ExtraValue};

/// Names of the core fields. An extra with one of these names would collide
/// with the real field once flattened into the JSON object.
const RESERVED_FIELDS: [&str; 7] = ["id", "pubkey", "created_at", "kind", "tags", "content", "sig"];

impl Event {
    /// Store an extra field, replacing any previous value.
    ///
    /// Returns `false`, and stores nothing, when `key` is the name of a core
    /// field.
    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> bool {
        let key = key.into();
        if RESERVED_FIELDS.contains(&key.as_str()) {
            warn!(key = %key, "refusing to shadow a core event field with an extra");
            return false;
        }
        self.extra.insert(key, value.into());
        true
    }

    pub fn get_extra(&self, key: &str) -> Option<&ExtraValue> {
        self.extra.get(key)
    }

    pub fn remove_extra(&mut self, key: &str) -> Option<ExtraValue> {
        self.extra.remove(key)
    }

    /// String extra, or `""`.
    pub fn get_extra_string(&self, key: &str) -> &str {
        self.extra.get(key).and_then(ExtraValue::as_str).unwrap_or("")
    }

    /// Numeric extra as `f64`, or `0.0`. Integers are widened.
    pub fn get_extra_number(&self, key: &str) -> f64 {
        self.extra.get(key).and_then(ExtraValue::as_f64).unwrap_or(0.0)
    }

    /// Boolean extra, or `false`.
    pub fn get_extra_bool(&self, key: &str) -> bool {
        self.extra.get(key).and_then(ExtraValue::as_bool).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_getters() {
        let mut ev = Event::new("ab", 1, 1, "");
        assert!(ev.set_extra("relay", "wss://relay.example.com"));
        assert!(ev.set_extra("score", 3));
        assert!(ev.set_extra("seen", true));
        assert!(ev.set_extra("meta", json!({"a": [1, 2]})));

        assert_eq!(ev.get_extra_string("relay"), "wss://relay.example.com");
        assert_eq!(ev.get_extra_number("score"), 3.0);
        assert!(ev.get_extra_bool("seen"));
        assert_eq!(ev.get_extra("meta"), Some(&json!({"a": [1, 2]})));
    }

    #[test]
    fn mismatch_and_missing_give_zero_values() {
        let mut ev = Event::new("ab", 1, 1, "");
        ev.set_extra("n", 1.5);
        ev.set_extra("s", "text");

        assert_eq!(ev.get_extra_string("n"), "");
        assert_eq!(ev.get_extra_number("s"), 0.0);
        assert!(!ev.get_extra_bool("s"));
        assert_eq!(ev.get_extra_string("absent"), "");
        assert!(ev.get_extra("absent").is_none());
    }

    #[test]
    fn core_field_names_are_refused() {
        let mut ev = Event::new("ab", 1, 1, "");
        assert!(!ev.set_extra("sig", "forged"));
        assert!(!ev.set_extra("content", 1));
        assert!(ev.extra.is_empty());
    }

    #[test]
    fn extras_do_not_change_the_id() {
        let mut ev = Event::new("ab", 1, 1, "body");
        let before = ev.compute_id().unwrap();
        ev.set_extra("client", "test-suite");
        assert_eq!(ev.compute_id().unwrap(), before);
        assert_eq!(ev.remove_extra("client"), Some(json!("test-suite")));
    }
}
