//! Core error types.

use thiserror::Error;

/// Schema and column-type errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Wire-level error from the row/parameter boundary.
    #[error("wire error: {0}")]
    Proto(#[from] ormkit_proto::Error),

    /// A column with this name is already registered on the table.
    #[error("duplicate column `{column}` on table `{table}`")]
    DuplicateColumn {
        /// Table name.
        table: String,
        /// Offending column name.
        column: String,
    },

    /// A table with this name is already present in the snapshot.
    #[error("duplicate table `{0}`")]
    DuplicateTable(String),

    /// No column with this name exists on the table.
    #[error("no column `{column}` on table `{table}`")]
    ColumnNotFound {
        /// Table name.
        table: String,
        /// Requested column name.
        column: String,
    },

    /// A stored value could not be decoded into its application type.
    #[error("invalid value for {type_name}: {message}")]
    InvalidValue {
        /// SQL type name of the column being decoded.
        type_name: &'static str,
        /// What went wrong.
        message: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// Build an `InvalidValue` error for a decode failure.
    pub fn invalid_value(type_name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidValue {
            type_name,
            message: message.into(),
        }
    }
}
