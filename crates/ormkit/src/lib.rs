//! ormkit - typed table declaration and column type strategies.
//!
//! Declare tables once, at startup, and get back typed column handles that
//! know how to move their values across the driver boundary:
//!
//! ```
//! use ormkit::prelude::*;
//!
//! let mut users: Table = Table::new("users");
//! let id = users.register(ColumnSpec::uuid("id").primary_key())?;
//! let name = users.varchar("name")?;
//! let balance = users.decimal("balance")?;
//!
//! assert_eq!(users.primary_keys().count(), 1);
//! # Ok::<(), ormkit::Error>(())
//! ```
//!
//! The heavy lifting lives in [`ormkit_core`] (descriptors and column types)
//! and [`ormkit_proto`] (wire values, rows, parameter buffers); this crate
//! re-exports the public surface.

pub use ormkit_core::error::Error;
pub use ormkit_core::schema::{Column, ColumnMeta, ColumnSpec, SchemaSnapshot, Table, TableMeta};
pub use ormkit_core::sqltype::{
    mapping_for, BlobType, BooleanType, BytesType, DateType, DatetimeType, DecimalType,
    DoubleType, EnumType, EnumValue, FloatType, IntType, JsonType, LongType, MonthDay,
    MonthDayType, ShortType, SqlType, SqlTypeExt, TextType, TimeType, TimestampType, Transformed,
    TypeMapping, UuidType, VarcharType, Year, YearMonth, YearMonthType, YearType, TYPE_MAPPINGS,
};
pub use ormkit_proto::{ParamBuffer, Row, SqlValue, TypeCode};

/// Everything needed to declare a schema.
pub mod prelude {
    pub use ormkit_core::schema::{Column, ColumnSpec, Table};
    pub use ormkit_core::sqltype::{EnumValue, SqlType, SqlTypeExt};
    pub use ormkit_proto::{ParamBuffer, Row, SqlValue, TypeCode};
}
