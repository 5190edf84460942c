//! Dictionary wrapper use case.
//!
//! [`DictWrapper`] owns a mapping and answers lookups by name. A lookup that
//! finds nothing usable returns the blank value and records a [`FailedRead`]
//! carrying the caller's source location.
//!
//! The call site is captured with `#[track_caller]`, so it is the line that
//! called [`DictWrapper::get`] (or invoked [`field!`](crate::field)), not a
//! line inside this module.
//!
//! # Example
//!
//! ```
//! use dictwrap_application::{DictWrapper, MemoryFailureLog, field};
//! use std::collections::HashMap;
//!
//! let mapping = HashMap::from([("name".to_string(), "Ada".to_string())]);
//! let g = DictWrapper::new(mapping, MemoryFailureLog::default()).unwrap();
//!
//! assert_eq!(field!(g.name), "Ada");
//! assert_eq!(field!(g.missing), "");
//! assert_eq!(g.log().lines().len(), 1);
//! ```

use crate::ports::failure_log::{FailureLog, FailureLogError};
use dictwrap_domain::{CallSite, FailedRead, FieldValue, MissPolicy, ReadStamp};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Named-field access over a mapping, with failed reads written to a log.
#[derive(Debug)]
pub struct DictWrapper<V: FieldValue, L: FailureLog> {
    mapping: HashMap<String, V>,
    log: L,
    policy: MissPolicy,
}

impl<V: FieldValue, L: FailureLog> DictWrapper<V, L> {
    /// Wrap `mapping` and clear `log`.
    ///
    /// If the log cannot be cleared because of permissions, a message is
    /// printed and the wrapper is still returned. Any other failure is an error.
    pub fn new(mapping: HashMap<String, V>, log: L) -> Result<Self, FailureLogError> {
        match log.reset() {
            Ok(()) => {}
            Err(e) if e.is_permission_denied() => {
                warn!("Could not clear failed read log: {}", e);
                eprintln!("Permission denied: cannot write to '{}'.", e.path().display());
            }
            Err(e) => return Err(e),
        }

        Ok(Self {
            mapping,
            log,
            policy: MissPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: MissPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Look up `key`, returning the blank value on a failed read.
    ///
    /// Never fails: if the failed read cannot be logged, a warning is emitted
    /// through `tracing` and the blank value is still returned.
    #[track_caller]
    pub fn get(&self, key: &str) -> V {
        self.get_at(key, CallSite::caller())
    }

    /// Like [`get`](Self::get), but log write errors are returned.
    #[track_caller]
    pub fn try_get(&self, key: &str) -> Result<V, FailureLogError> {
        self.try_get_at(key, CallSite::caller())
    }

    /// Like [`get`](Self::get) with an explicit call site.
    pub fn get_at(&self, key: &str, call_site: CallSite) -> V {
        self.try_get_at(key, call_site).unwrap_or_else(|e| {
            warn!("Failed to record failed read of '{}': {}", key, e);
            V::blank()
        })
    }

    /// Like [`try_get`](Self::try_get) with an explicit call site.
    pub fn try_get_at(&self, key: &str, call_site: CallSite) -> Result<V, FailureLogError> {
        if let Some(value) = self.resolve(key) {
            return Ok(value);
        }

        let entry = FailedRead::new(key, call_site, ReadStamp::now());
        debug!("Failed read: {}", entry);
        self.log.append(&entry)?;
        Ok(V::blank())
    }

    /// The stored value for `key`, unless the policy calls it a miss.
    fn resolve(&self, key: &str) -> Option<V> {
        match self.mapping.get(key) {
            Some(value) if value.is_blank() && self.policy.treats_blank_as_missing() => None,
            Some(value) => Some(value.clone()),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mapping.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn policy(&self) -> MissPolicy {
        self.policy
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn log_path(&self) -> &Path {
        self.log.location()
    }

    /// Give back the wrapped mapping.
    pub fn into_inner(self) -> HashMap<String, V> {
        self.mapping
    }
}

/// Attribute-style read: `field!(g.name)` is `g.get("name")`.
///
/// The form `field!(expr, name)` accepts any expression for the wrapper.
#[macro_export]
macro_rules! field {
    ($wrapper:ident . $key:ident) => {
        $wrapper.get(stringify!($key))
    };
    ($wrapper:expr, $key:ident) => {
        ($wrapper).get(stringify!($key))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::failure_log::MemoryFailureLog;
    use serde_json::{Value, json};

    // ==================== Helpers ====================

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn wrapper(pairs: &[(&str, &str)]) -> DictWrapper<String, MemoryFailureLog> {
        DictWrapper::new(mapping(pairs), MemoryFailureLog::default()).unwrap()
    }

    fn logged(w: &DictWrapper<String, MemoryFailureLog>) -> Vec<FailedRead> {
        w.log()
            .lines()
            .iter()
            .map(|line| FailedRead::parse_line(line).unwrap())
            .collect()
    }

    /// Log that refuses every operation.
    struct BrokenLog {
        permission: bool,
    }

    impl BrokenLog {
        fn error(&self) -> FailureLogError {
            let kind = if self.permission {
                std::io::ErrorKind::PermissionDenied
            } else {
                std::io::ErrorKind::Other
            };
            FailureLogError::from_io("broken.log", std::io::Error::new(kind, "refused"))
        }
    }

    impl FailureLog for BrokenLog {
        fn location(&self) -> &Path {
            Path::new("broken.log")
        }

        fn reset(&self) -> Result<(), FailureLogError> {
            Err(self.error())
        }

        fn append(&self, _entry: &FailedRead) -> Result<(), FailureLogError> {
            Err(self.error())
        }

        fn read_lines(&self) -> Result<Option<Vec<String>>, FailureLogError> {
            Err(self.error())
        }
    }

    // ==================== Hits ====================

    #[test]
    fn test_present_value_returned_without_logging() {
        let w = wrapper(&[("name", "Ada")]);
        assert_eq!(w.get("name"), "Ada");
        assert_eq!(field!(w.name), "Ada");
        assert!(logged(&w).is_empty());
    }

    // ==================== Misses ====================

    #[test]
    fn test_missing_key_returns_blank_and_logs_once() {
        let w = wrapper(&[("name", "Ada")]);
        let expected_line = line!() + 1;
        assert_eq!(w.get("missing"), "");

        let entries = logged(&w);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "missing");
        assert_eq!(entries[0].call_site.file, "dict_wrapper.rs");
        assert_eq!(entries[0].call_site.line, expected_line);
    }

    #[test]
    fn test_field_macro_records_invocation_line() {
        let w = wrapper(&[]);
        let expected_line = line!() + 1;
        let value = field!(w.missing);
        assert_eq!(value, "");

        let entries = logged(&w);
        assert_eq!(entries[0].key, "missing");
        assert_eq!(entries[0].call_site.line, expected_line);
    }

    #[test]
    fn test_field_macro_expression_form() {
        let holder = (wrapper(&[("city", "London")]),);
        assert_eq!(field!(holder.0, city), "London");
        assert_eq!(field!(&holder.0, town), "");
        assert_eq!(holder.0.log().lines().len(), 1);
    }

    #[test]
    fn test_empty_value_is_a_miss_by_default() {
        let w = wrapper(&[("nickname", "")]);
        assert_eq!(w.get("nickname"), "");
        assert_eq!(logged(&w)[0].key, "nickname");
    }

    #[test]
    fn test_absent_only_policy_returns_stored_empty_silently() {
        let w = wrapper(&[("nickname", "")]).with_policy(MissPolicy::AbsentOnly);
        assert_eq!(w.get("nickname"), "");
        assert!(logged(&w).is_empty());

        assert_eq!(w.get("missing"), "");
        assert_eq!(logged(&w).len(), 1);
    }

    #[test]
    fn test_explicit_call_site() {
        let w = wrapper(&[]);
        w.get_at("k", CallSite::new("/src/somewhere/else.rs", 99));
        let entry = &logged(&w)[0];
        assert_eq!(entry.call_site, CallSite::new("else.rs", 99));
    }

    #[test]
    fn test_construction_resets_log() {
        let log = MemoryFailureLog::default();
        log.reset().unwrap();
        log.append(&FailedRead::new("old", CallSite::new("a.rs", 1), ReadStamp::now()))
            .unwrap();
        assert_eq!(log.lines().len(), 1);

        let w: DictWrapper<String, _> = DictWrapper::new(HashMap::new(), log).unwrap();
        assert_eq!(w.log().read_lines().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_json_values() {
        let mapping: HashMap<String, Value> = HashMap::from([
            ("age".to_string(), json!(36)),
            ("nothing".to_string(), json!(null)),
            ("blank".to_string(), json!("")),
        ]);
        let w = DictWrapper::new(mapping, MemoryFailureLog::default()).unwrap();
        assert_eq!(w.get("age"), json!(36));
        assert_eq!(w.get("nothing"), Value::Null);
        assert_eq!(w.get("blank"), json!(""));
        assert_eq!(w.get("absent"), json!(""));
        assert_eq!(w.log().lines().len(), 2);
    }

    // ==================== Log failures ====================

    #[test]
    fn test_permission_denied_at_construction_is_not_fatal() {
        let w: DictWrapper<String, _> =
            DictWrapper::new(mapping(&[("a", "1")]), BrokenLog { permission: true }).unwrap();
        assert_eq!(w.get("a"), "1");
    }

    #[test]
    fn test_other_error_at_construction_is_returned() {
        let result: Result<DictWrapper<String, _>, _> =
            DictWrapper::new(HashMap::new(), BrokenLog { permission: false });
        assert!(result.is_err());
    }

    #[test]
    fn test_get_swallows_append_errors_but_try_get_returns_them() {
        let w: DictWrapper<String, _> =
            DictWrapper::new(HashMap::new(), BrokenLog { permission: true }).unwrap();
        assert_eq!(w.get("missing"), "");
        let err = w.try_get("missing").unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_accessors() {
        let w = wrapper(&[("a", "1"), ("b", "2")]);
        assert_eq!(w.len(), 2);
        assert!(!w.is_empty());
        assert!(w.contains_key("a"));
        assert!(!w.contains_key("z"));
        let mut keys: Vec<&str> = w.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(w.policy(), MissPolicy::EmptyIsMissing);
        assert_eq!(w.log_path(), Path::new(":memory:"));
        assert_eq!(w.into_inner().len(), 2);
    }
}
