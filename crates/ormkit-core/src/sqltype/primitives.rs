//! Built-in types for the primitive canonical-table entries.

use super::{mismatch, SqlType};
use crate::error::Error;
use ormkit_proto::{ParamBuffer, Row, SqlValue, TypeCode};
use rust_decimal::Decimal;

macro_rules! scalar_sql_type {
    (
        $(#[$doc:meta])*
        $name:ident, $value:ty, $type_name:literal, $code:ident,
        get: $get:expr, put: $put:expr
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl SqlType for $name {
            type Value = $value;

            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn type_code(&self) -> TypeCode {
                TypeCode::$code
            }

            fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
                let value = row.get(index)?;
                if value.is_null() {
                    return Ok(None);
                }
                let extract = $get;
                extract(value)
                    .map(Some)
                    .ok_or_else(|| mismatch($type_name, value))
            }

            fn set_parameter(
                &self,
                params: &mut ParamBuffer,
                index: usize,
                value: &Self::Value,
            ) -> Result<(), Error> {
                let encode = $put;
                params.set(index, encode(value)).map_err(Error::from)
            }
        }
    };
}

scalar_sql_type!(
    /// `boolean` column type.
    BooleanType, bool, "boolean", Boolean,
    get: |v: &SqlValue| v.as_bool(),
    put: |v: &bool| SqlValue::Bool(*v)
);

scalar_sql_type!(
    /// `smallint` column type.
    ShortType, i16, "smallint", Smallint,
    get: |v: &SqlValue| v.as_i16(),
    put: |v: &i16| SqlValue::Short(*v)
);

scalar_sql_type!(
    /// `int` column type.
    IntType, i32, "int", Integer,
    get: |v: &SqlValue| v.as_i32(),
    put: |v: &i32| SqlValue::Int(*v)
);

scalar_sql_type!(
    /// `bigint` column type.
    LongType, i64, "bigint", Bigint,
    get: |v: &SqlValue| v.as_i64(),
    put: |v: &i64| SqlValue::Long(*v)
);

scalar_sql_type!(
    /// `float` column type.
    FloatType, f32, "float", Float,
    get: |v: &SqlValue| v.as_f32(),
    put: |v: &f32| SqlValue::Float(*v)
);

scalar_sql_type!(
    /// `double` column type.
    DoubleType, f64, "double", Double,
    get: |v: &SqlValue| v.as_f64(),
    put: |v: &f64| SqlValue::Double(*v)
);

scalar_sql_type!(
    /// `varchar` column type.
    VarcharType, String, "varchar", Varchar,
    get: |v: &SqlValue| v.as_str().map(str::to_owned),
    put: |v: &String| SqlValue::Text(v.clone())
);

scalar_sql_type!(
    /// `text` column type for unbounded strings.
    TextType, String, "text", LongVarchar,
    get: |v: &SqlValue| v.as_str().map(str::to_owned),
    put: |v: &String| SqlValue::Text(v.clone())
);

scalar_sql_type!(
    /// `blob` column type.
    BlobType, Vec<u8>, "blob", Blob,
    get: |v: &SqlValue| v.as_bytes().map(<[u8]>::to_vec),
    put: |v: &Vec<u8>| SqlValue::Bytes(v.clone())
);

scalar_sql_type!(
    /// `bytes` column type for raw binary columns.
    BytesType, Vec<u8>, "bytes", Binary,
    get: |v: &SqlValue| v.as_bytes().map(<[u8]>::to_vec),
    put: |v: &Vec<u8>| SqlValue::Bytes(v.clone())
);

/// `decimal` column type.
///
/// Stored on the wire as an unscaled integer plus scale, rebuilt into a
/// [`rust_decimal::Decimal`] on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalType;

impl SqlType for DecimalType {
    type Value = Decimal;

    fn type_name(&self) -> &'static str {
        "decimal"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Decimal
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match row.get(index)? {
            SqlValue::Null => Ok(None),
            SqlValue::Decimal { unscaled, scale } => {
                Decimal::try_from_i128_with_scale(*unscaled, *scale)
                    .map(Some)
                    .map_err(|e| Error::invalid_value("decimal", e.to_string()))
            }
            other => Err(mismatch("decimal", other)),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        let wire = SqlValue::Decimal {
            unscaled: value.mantissa(),
            scale: value.scale(),
        };
        params.set(index, wire).map_err(Error::from)
    }
}
