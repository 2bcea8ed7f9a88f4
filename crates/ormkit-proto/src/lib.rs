//! ormkit wire-level types.
//!
//! This crate defines the stored-value vocabulary shared by schema
//! descriptors and column types, using rkyv for zero-copy serialization.
//!
//! # Modules
//!
//! - [`value`] - Runtime wire values handed across the driver boundary
//! - [`typecode`] - Wire-level type codes for column declarations
//! - [`row`] - Positional result rows
//! - [`params`] - Positional bound-parameter buffers
//! - [`error`] - Wire-level error types

pub mod error;
pub mod params;
pub mod row;
pub mod typecode;
pub mod value;

pub use error::Error;
pub use params::ParamBuffer;
pub use row::Row;
pub use typecode::TypeCode;
pub use value::SqlValue;
