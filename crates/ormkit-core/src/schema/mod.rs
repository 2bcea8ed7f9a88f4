//! Schema descriptors.
//!
//! Tables own an ordered collection of column definitions; each column pairs
//! a name with the sql type that moves its values across the driver
//! boundary. Descriptors are declared once and read-only thereafter.

mod column;
mod snapshot;
mod table;

pub use column::{Column, ColumnMeta, ColumnSpec};
pub use snapshot::{SchemaSnapshot, TableMeta};
pub use table::Table;
