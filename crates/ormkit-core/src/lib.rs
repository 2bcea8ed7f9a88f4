//! ormkit core - table descriptors, column types, and the type mapping table.
//!
//! Application code declares tables as typed descriptors:
//!
//! ```
//! use ormkit_core::schema::Table;
//!
//! let mut users: Table = Table::new("users");
//! let id = users.uuid("id")?;
//! let name = users.varchar("name")?;
//! let signup_year = users.year("signup_year")?;
//! # Ok::<(), ormkit_core::Error>(())
//! ```
//!
//! Each column is backed by a [`sqltype::SqlType`], the strategy that reads
//! its value out of a positional result row and writes it into a positional
//! bound parameter. The built-in strategies cover the canonical
//! compatibility table ([`sqltype::TYPE_MAPPINGS`]); custom ones plug in via
//! [`schema::Table::register_column`], and existing ones can be wrapped with
//! a pure mapping pair via [`sqltype::SqlTypeExt::transform`].

pub mod error;
pub mod schema;
pub mod sqltype;

pub use error::Error;
pub use schema::{Column, ColumnMeta, ColumnSpec, SchemaSnapshot, Table, TableMeta};
pub use sqltype::{
    mapping_for, EnumValue, SqlType, SqlTypeExt, Transformed, TypeMapping, TYPE_MAPPINGS,
};

/// Re-export wire-level types.
pub use ormkit_proto as proto;
