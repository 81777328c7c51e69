use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::address::AddressId;
use crate::domain::customer::CustomerId;

/// A single JSON scalar written to a column without coercion. The store's
/// column affinity decides how it is kept: numbers sent to a `TEXT` column
/// are stored as text, numeric strings sent to an `INTEGER` column as
/// integers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl FieldValue {
    /// `""`, `0`, `0.0` and `false`. Request fields holding one of these
    /// count as not supplied where a value is required.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Integer(value) => *value == 0,
            Self::Real(value) => *value == 0.0 || value.is_nan(),
            Self::Text(value) => value.is_empty(),
            Self::Bool(value) => !value,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<CustomerId> for FieldValue {
    fn from(value: CustomerId) -> Self {
        Self::Integer(value.0)
    }
}

/// Record id exactly as it appeared in a request path. Lookups bind it as
/// text and rely on `INTEGER` column affinity, so `"5"` finds row 5 and a
/// non-numeric key finds nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CustomerId> for RecordKey {
    fn from(value: CustomerId) -> Self {
        Self(value.0.to_string())
    }
}

impl From<AddressId> for RecordKey {
    fn from(value: AddressId) -> Self {
        Self(value.0.to_string())
    }
}
