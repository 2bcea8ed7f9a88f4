//! Runtime wire values.

use rkyv::{Archive, Deserialize, Serialize};

/// A runtime value as it crosses the driver boundary.
///
/// This enum represents the stored (wire-level) form of every column value:
/// result rows hand these out positionally and bound parameters accept them
/// positionally. Application-level types (decimals, temporal types, uuids,
/// user enums) are encoded to and from these variants by their `SqlType`.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum SqlValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 16-bit signed integer (smallint).
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer (bigint).
    Long(i64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Fixed-precision decimal as unscaled integer plus scale.
    Decimal {
        /// Unscaled integer value.
        unscaled: i128,
        /// Number of digits after the decimal point.
        scale: u32,
    },
    /// UTF-8 text.
    Text(String),
    /// Binary data.
    Bytes(Vec<u8>),
    /// Timestamp as microseconds since Unix epoch.
    Timestamp(i64),
    /// Calendar date as a Julian day number.
    Date(i32),
    /// Time of day as microseconds since midnight.
    Time(i64),
    /// UUID as 16 bytes.
    Uuid([u8; 16]),
}

impl SqlValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// A short name for the variant, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Short(_) => "short",
            SqlValue::Int(_) => "int",
            SqlValue::Long(_) => "long",
            SqlValue::Float(_) => "float",
            SqlValue::Double(_) => "double",
            SqlValue::Decimal { .. } => "decimal",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Timestamp(_) => "timestamp",
            SqlValue::Date(_) => "date",
            SqlValue::Time(_) => "time",
            SqlValue::Uuid(_) => "uuid",
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i16.
    pub fn as_i16(&self) -> Option<i16> {
        match self {
            SqlValue::Short(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            SqlValue::Int(v) => Some(*v),
            SqlValue::Short(v) => Some(*v as i32),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Long(v) => Some(*v),
            SqlValue::Int(v) => Some(*v as i64),
            SqlValue::Short(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Try to get as f32.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            SqlValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Double(v) => Some(*v),
            SqlValue::Float(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes reference.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SqlValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as timestamp microseconds.
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            SqlValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get as a Julian day number.
    pub fn as_date(&self) -> Option<i32> {
        match self {
            SqlValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as microseconds since midnight.
    pub fn as_time(&self) -> Option<i64> {
        match self {
            SqlValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get as UUID bytes.
    pub fn as_uuid(&self) -> Option<&[u8; 16]> {
        match self {
            SqlValue::Uuid(u) => Some(u),
            _ => None,
        }
    }
}

// Conversion implementations
impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        SqlValue::Short(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Long(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        SqlValue::Float(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Double(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl From<[u8; 16]> for SqlValue {
    fn from(v: [u8; 16]) -> Self {
        SqlValue::Uuid(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => SqlValue::Null,
        }
    }
}
