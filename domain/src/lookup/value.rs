//! Values a dictionary wrapper can hand back.

use serde_json::Value;

/// A value stored in a wrapped mapping.
///
/// A failed read returns [`FieldValue::blank`]; a stored value equal to the
/// blank value is itself treated as missing unless the wrapper is configured
/// otherwise.
pub trait FieldValue: Clone {
    /// The value returned in place of a missing one.
    fn blank() -> Self;

    /// Whether this value is the empty string.
    fn is_blank(&self) -> bool;
}

impl FieldValue for String {
    fn blank() -> Self {
        String::new()
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FieldValue for &'static str {
    fn blank() -> Self {
        ""
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Only `Value::String("")` is blank. `Null`, `0`, `false` and empty
/// containers are real values.
impl FieldValue for Value {
    fn blank() -> Self {
        Value::String(String::new())
    }

    fn is_blank(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }
}
