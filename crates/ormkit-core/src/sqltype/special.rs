//! Enum, uuid, and JSON column types.

use super::{get_text_field, mismatch, SqlType};
use crate::error::Error;
use ormkit_proto::{ParamBuffer, Row, SqlValue, TypeCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use uuid::Uuid;

/// A user enum that can be stored by variant name.
///
/// Implementations must keep `from_variant_name` the inverse of
/// `variant_name` for every variant.
pub trait EnumValue: Clone + Send + Sync + 'static {
    /// The stored name of this variant.
    fn variant_name(&self) -> &'static str;

    /// Resolve a stored name back to a variant.
    fn from_variant_name(name: &str) -> Option<Self>;
}

/// `enum` column type, storing variants by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumType<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EnumType<E> {
    /// Create the enum column type.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E: EnumValue> SqlType for EnumType<E> {
    type Value = E;

    fn type_name(&self) -> &'static str {
        "enum"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Other
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match get_text_field(row, index, "enum")? {
            Some(name) => E::from_variant_name(name)
                .map(Some)
                .ok_or_else(|| Error::invalid_value("enum", format!("unknown variant `{name}`"))),
            None => Ok(None),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        params
            .set(index, SqlValue::Text(value.variant_name().to_string()))
            .map_err(Error::from)
    }
}

/// `uuid` column type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidType;

impl SqlType for UuidType {
    type Value = Uuid;

    fn type_name(&self) -> &'static str {
        "uuid"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Other
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match row.get(index)? {
            SqlValue::Null => Ok(None),
            SqlValue::Uuid(bytes) => Ok(Some(Uuid::from_bytes(*bytes))),
            other => Err(mismatch("uuid", other)),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        params
            .set(index, SqlValue::Uuid(*value.as_bytes()))
            .map_err(Error::from)
    }
}

/// Column type storing any serde-serializable value as JSON text.
///
/// The canonical example of the extension contract: a structured value is
/// encoded to text on write and decoded back on read, with null and blank
/// fields reading as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonType<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonType<T> {
    /// Create the JSON column type.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> SqlType for JsonType<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Value = T;

    fn type_name(&self) -> &'static str {
        "json"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Varchar
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match get_text_field(row, index, "json")? {
            Some(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(|e| Error::invalid_value("json", e.to_string())),
            None => Ok(None),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        let text = serde_json::to_string(value)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        params.set(index, SqlValue::Text(text)).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Status {
        Active,
        Suspended,
    }

    impl EnumValue for Status {
        fn variant_name(&self) -> &'static str {
            match self {
                Status::Active => "active",
                Status::Suspended => "suspended",
            }
        }

        fn from_variant_name(name: &str) -> Option<Self> {
            match name {
                "active" => Some(Status::Active),
                "suspended" => Some(Status::Suspended),
                _ => None,
            }
        }
    }

    fn roundtrip<S: SqlType>(sql_type: &S, value: S::Value) -> Option<S::Value> {
        let mut params = ParamBuffer::new(1);
        sql_type.set_parameter(&mut params, 0, &value).unwrap();
        sql_type.get_result(&params.into_row(), 0).unwrap()
    }

    #[test]
    fn test_enum_roundtrip() {
        let t = EnumType::<Status>::new();
        assert_eq!(roundtrip(&t, Status::Active), Some(Status::Active));
        assert_eq!(roundtrip(&t, Status::Suspended), Some(Status::Suspended));
    }

    #[test]
    fn test_enum_unknown_variant() {
        let t = EnumType::<Status>::new();
        let row = Row::new(vec![SqlValue::Text("deleted".into())]);
        assert!(matches!(
            t.get_result(&row, 0),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_enum_null_and_blank_absent() {
        let t = EnumType::<Status>::new();
        let row = Row::new(vec![SqlValue::Null, SqlValue::Text("".into())]);
        assert_eq!(t.get_result(&row, 0).unwrap(), None);
        assert_eq!(t.get_result(&row, 1).unwrap(), None);
    }

    #[test]
    fn test_uuid_roundtrip() {
        let id = Uuid::new_v4();
        assert_eq!(roundtrip(&UuidType, id), Some(id));
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Settings {
        theme: String,
        page_size: u32,
        beta: bool,
    }

    #[test]
    fn test_json_roundtrip() {
        let t = JsonType::<Settings>::new();
        let settings = Settings {
            theme: "dark".into(),
            page_size: 50,
            beta: true,
        };
        assert_eq!(roundtrip(&t, settings.clone()), Some(settings));
    }

    #[test]
    fn test_json_blank_absent_and_garbage_errors() {
        let t = JsonType::<Settings>::new();

        let row = Row::new(vec![SqlValue::Text("   ".into())]);
        assert_eq!(t.get_result(&row, 0).unwrap(), None);

        let row = Row::new(vec![SqlValue::Text("{not json".into())]);
        assert!(matches!(
            t.get_result(&row, 0),
            Err(Error::InvalidValue { .. })
        ));
    }
}
