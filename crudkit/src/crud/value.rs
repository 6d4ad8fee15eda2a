//! Bindable scalar values
//!
//! [`Value`] is what ends up behind a `$n` placeholder, both for filter
//! predicates and for the column lists an [`Entity`](super::Entity) writes on
//! insert and update.

use serde::{Deserialize, Serialize};

/// A value that can be bound into a statement
///
/// Filter conditions only ever produce `Int`, `BigInt` and `Text`. The
/// remaining variants exist for record columns.
///
/// # Example
///
/// ```rust
/// use crudkit::crud::Value;
///
/// let text: Value = "draft".into();
/// let id: Value = 42_i64.into();
/// let missing: Value = Option::<String>::None.into();
///
/// assert_eq!(text, Value::Text("draft".to_string()));
/// assert_eq!(id, Value::BigInt(42));
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 32-bit integer (`INT4`)
    Int(i32),
    /// 64-bit integer (`INT8`)
    BigInt(i64),
    /// Text value (`TEXT` / `VARCHAR`)
    Text(String),
    /// Boolean value
    Bool(bool),
    /// 64-bit floating point value (`FLOAT8`)
    Double(f64),
    /// SQL `NULL`
    Null,
}

impl Value {
    /// Whether this value is SQL `NULL`
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
