//! Column type strategies.
//!
//! A [`SqlType`] pairs an application-level value type with the logic to read
//! it out of a positional result row and to write it into a positional bound
//! parameter. One instance may back any number of columns.

mod mapping;
mod primitives;
mod special;
mod temporal;
mod transform;

pub use mapping::{mapping_for, TypeMapping, TYPE_MAPPINGS};
pub use primitives::{
    BlobType, BooleanType, BytesType, DecimalType, DoubleType, FloatType, IntType, LongType,
    ShortType, TextType, VarcharType,
};
pub use special::{EnumType, EnumValue, JsonType, UuidType};
pub use temporal::{
    DateType, DatetimeType, MonthDay, MonthDayType, TimeType, TimestampType, Year, YearMonth,
    YearMonthType, YearType,
};
pub use transform::{SqlTypeExt, Transformed};

use crate::error::Error;
use ormkit_proto::{ParamBuffer, Row, SqlValue, TypeCode};

/// Strategy for moving one value type across the driver boundary.
///
/// Implementations must keep `get_result` and `set_parameter` inverses of
/// each other: binding a value and reading it back must reproduce the
/// original for every representable input. Arbitrary encodings are fine as
/// long as that holds (the JSON type, for example, stores structured values
/// as text).
///
/// `get_result` returns `Ok(None)` when the underlying field is null.
/// Implementations that decode from a text representation also treat a blank
/// string as absent.
pub trait SqlType: Send + Sync + 'static {
    /// The application-level value this type reads and writes.
    type Value: Clone + Send + Sync + 'static;

    /// The SQL type name used in column declarations, e.g. `"varchar"`.
    fn type_name(&self) -> &'static str;

    /// The wire-level type code bound to this type.
    fn type_code(&self) -> TypeCode;

    /// Extract a typed value from a positional field of a result row.
    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error>;

    /// Write a typed value into a positional bound parameter.
    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error>;
}

/// Build the error for a wire value of the wrong variant.
pub(crate) fn mismatch(expected: &'static str, actual: &SqlValue) -> Error {
    Error::Proto(ormkit_proto::Error::TypeMismatch {
        expected,
        actual: actual.kind(),
    })
}

/// Fetch a text field, mapping null and blank to absent.
///
/// This is the shared decode front end for every type that stores its values
/// as text (month-day, year-month, enums, JSON).
pub(crate) fn get_text_field<'a>(
    row: &'a Row,
    index: usize,
    expected: &'static str,
) -> Result<Option<&'a str>, Error> {
    match row.get(index)? {
        SqlValue::Null => Ok(None),
        SqlValue::Text(s) if s.trim().is_empty() => Ok(None),
        SqlValue::Text(s) => Ok(Some(s)),
        other => Err(mismatch(expected, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_text_field_null_and_blank() {
        let row = Row::new(vec![
            SqlValue::Null,
            SqlValue::Text(String::new()),
            SqlValue::Text("  \t".into()),
            SqlValue::Text("value".into()),
            SqlValue::Int(1),
        ]);

        assert_eq!(get_text_field(&row, 0, "text").unwrap(), None);
        assert_eq!(get_text_field(&row, 1, "text").unwrap(), None);
        assert_eq!(get_text_field(&row, 2, "text").unwrap(), None);
        assert_eq!(get_text_field(&row, 3, "text").unwrap(), Some("value"));
        assert!(get_text_field(&row, 4, "text").is_err());
    }
}
