//! The canonical type compatibility table.
//!
//! One row per column-declaration function: the application-level value
//! type, the underlying SQL type name, and the wire-level type code. Any
//! reimplementation that wants to stay compatible with the declaration DSL
//! must reproduce this table exactly, so it is data here and the built-in
//! column types are tested against it.

use ormkit_proto::TypeCode;

/// One row of the compatibility table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Column-declaration function name.
    pub function: &'static str,
    /// Application-level value type.
    pub value_type: &'static str,
    /// Underlying SQL type name.
    pub sql_type: &'static str,
    /// Wire-level type code.
    pub code: TypeCode,
}

/// The canonical compatibility table.
pub const TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        function: "boolean",
        value_type: "bool",
        sql_type: "boolean",
        code: TypeCode::Boolean,
    },
    TypeMapping {
        function: "int",
        value_type: "i32",
        sql_type: "int",
        code: TypeCode::Integer,
    },
    TypeMapping {
        function: "short",
        value_type: "i16",
        sql_type: "smallint",
        code: TypeCode::Smallint,
    },
    TypeMapping {
        function: "long",
        value_type: "i64",
        sql_type: "bigint",
        code: TypeCode::Bigint,
    },
    TypeMapping {
        function: "float",
        value_type: "f32",
        sql_type: "float",
        code: TypeCode::Float,
    },
    TypeMapping {
        function: "double",
        value_type: "f64",
        sql_type: "double",
        code: TypeCode::Double,
    },
    TypeMapping {
        function: "decimal",
        value_type: "rust_decimal::Decimal",
        sql_type: "decimal",
        code: TypeCode::Decimal,
    },
    TypeMapping {
        function: "varchar",
        value_type: "String",
        sql_type: "varchar",
        code: TypeCode::Varchar,
    },
    TypeMapping {
        function: "text",
        value_type: "String",
        sql_type: "text",
        code: TypeCode::LongVarchar,
    },
    TypeMapping {
        function: "blob",
        value_type: "Vec<u8>",
        sql_type: "blob",
        code: TypeCode::Blob,
    },
    TypeMapping {
        function: "bytes",
        value_type: "Vec<u8>",
        sql_type: "bytes",
        code: TypeCode::Binary,
    },
    TypeMapping {
        function: "timestamp",
        value_type: "time::OffsetDateTime",
        sql_type: "timestamp",
        code: TypeCode::Timestamp,
    },
    TypeMapping {
        function: "datetime",
        value_type: "time::PrimitiveDateTime",
        sql_type: "datetime",
        code: TypeCode::Timestamp,
    },
    TypeMapping {
        function: "date",
        value_type: "time::Date",
        sql_type: "date",
        code: TypeCode::Date,
    },
    TypeMapping {
        function: "time",
        value_type: "time::Time",
        sql_type: "time",
        code: TypeCode::Time,
    },
    TypeMapping {
        function: "month_day",
        value_type: "MonthDay",
        sql_type: "varchar",
        code: TypeCode::Varchar,
    },
    TypeMapping {
        function: "year_month",
        value_type: "YearMonth",
        sql_type: "varchar",
        code: TypeCode::Varchar,
    },
    TypeMapping {
        function: "year",
        value_type: "Year",
        sql_type: "int",
        code: TypeCode::Integer,
    },
    TypeMapping {
        function: "enum",
        value_type: "E: EnumValue",
        sql_type: "enum",
        code: TypeCode::Other,
    },
    TypeMapping {
        function: "uuid",
        value_type: "uuid::Uuid",
        sql_type: "uuid",
        code: TypeCode::Other,
    },
];

/// Look up the table row for a declaration function name.
pub fn mapping_for(function: &str) -> Option<&'static TypeMapping> {
    TYPE_MAPPINGS.iter().find(|m| m.function == function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqltype::{
        BlobType, BooleanType, BytesType, DateType, DatetimeType, DecimalType, DoubleType,
        EnumType, EnumValue, FloatType, IntType, LongType, MonthDayType, ShortType, SqlType,
        TextType, TimeType, TimestampType, UuidType, VarcharType, YearMonthType, YearType,
    };
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy)]
    enum Color {
        Red,
    }

    impl EnumValue for Color {
        fn variant_name(&self) -> &'static str {
            "red"
        }

        fn from_variant_name(name: &str) -> Option<Self> {
            (name == "red").then_some(Color::Red)
        }
    }

    fn assert_row<S: SqlType>(function: &str, sql_type: &S) {
        let row = mapping_for(function)
            .unwrap_or_else(|| panic!("no mapping row for `{function}`"));
        assert_eq!(sql_type.type_name(), row.sql_type, "function `{function}`");
        assert_eq!(sql_type.type_code(), row.code, "function `{function}`");
    }

    #[test]
    fn test_table_has_twenty_unique_functions() {
        assert_eq!(TYPE_MAPPINGS.len(), 20);
        let names: HashSet<_> = TYPE_MAPPINGS.iter().map(|m| m.function).collect();
        assert_eq!(names.len(), TYPE_MAPPINGS.len());
    }

    #[test]
    fn test_builtin_types_agree_with_table() {
        assert_row("boolean", &BooleanType);
        assert_row("int", &IntType);
        assert_row("short", &ShortType);
        assert_row("long", &LongType);
        assert_row("float", &FloatType);
        assert_row("double", &DoubleType);
        assert_row("decimal", &DecimalType);
        assert_row("varchar", &VarcharType);
        assert_row("text", &TextType);
        assert_row("blob", &BlobType);
        assert_row("bytes", &BytesType);
        assert_row("timestamp", &TimestampType);
        assert_row("datetime", &DatetimeType);
        assert_row("date", &DateType);
        assert_row("time", &TimeType);
        assert_row("month_day", &MonthDayType);
        assert_row("year_month", &YearMonthType);
        assert_row("year", &YearType);
        assert_row("enum", &EnumType::<Color>::new());
        assert_row("uuid", &UuidType);
    }

    #[test]
    fn test_lookup_misses() {
        assert!(mapping_for("geometry").is_none());
    }
}
