//! Column descriptors and typed column handles.

use crate::error::Error;
use crate::sqltype::{
    BlobType, BooleanType, BytesType, DateType, DatetimeType, DecimalType, DoubleType, EnumType,
    EnumValue, FloatType, IntType, LongType, MonthDayType, ShortType, SqlType, TextType, TimeType,
    TimestampType, UuidType, VarcharType, YearMonthType, YearType,
};
use ormkit_proto::{ParamBuffer, Row, TypeCode};
use rkyv::{Archive, Deserialize, Serialize};
use std::sync::Arc;

/// A column waiting to be registered on a table.
///
/// Carries the column name, the sql type instance, and the role flags that
/// apply at declaration time. Built with one constructor per
/// declaration function plus [`ColumnSpec::new`] for custom types.
#[derive(Debug, Clone)]
pub struct ColumnSpec<S: SqlType> {
    pub(crate) name: String,
    pub(crate) sql_type: S,
    pub(crate) primary_key: bool,
}

impl<S: SqlType> ColumnSpec<S> {
    /// Describe a column with an explicit sql type instance.
    pub fn new(name: impl Into<String>, sql_type: S) -> Self {
        Self {
            name: name.into(),
            sql_type,
            primary_key: false,
        }
    }

    /// Mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

macro_rules! spec_constructor {
    ($(#[$doc:meta])* $fn_name:ident, $sql_type:ty) => {
        impl ColumnSpec<$sql_type> {
            $(#[$doc])*
            pub fn $fn_name(name: impl Into<String>) -> Self {
                ColumnSpec::new(name, <$sql_type>::default())
            }
        }
    };
}

spec_constructor!(
    /// Describe a `boolean` column.
    boolean, BooleanType
);
spec_constructor!(
    /// Describe an `int` column.
    int, IntType
);
spec_constructor!(
    /// Describe a `smallint` column.
    short, ShortType
);
spec_constructor!(
    /// Describe a `bigint` column.
    long, LongType
);
spec_constructor!(
    /// Describe a `float` column.
    float, FloatType
);
spec_constructor!(
    /// Describe a `double` column.
    double, DoubleType
);
spec_constructor!(
    /// Describe a `decimal` column.
    decimal, DecimalType
);
spec_constructor!(
    /// Describe a `varchar` column.
    varchar, VarcharType
);
spec_constructor!(
    /// Describe a `text` column.
    text, TextType
);
spec_constructor!(
    /// Describe a `blob` column.
    blob, BlobType
);
spec_constructor!(
    /// Describe a `bytes` column.
    bytes, BytesType
);
spec_constructor!(
    /// Describe a `timestamp` column.
    timestamp, TimestampType
);
spec_constructor!(
    /// Describe a `datetime` column.
    datetime, DatetimeType
);
spec_constructor!(
    /// Describe a `date` column.
    date, DateType
);
spec_constructor!(
    /// Describe a `time` column.
    time, TimeType
);
spec_constructor!(
    /// Describe a varchar-backed month-day column.
    month_day, MonthDayType
);
spec_constructor!(
    /// Describe a varchar-backed year-month column.
    year_month, YearMonthType
);
spec_constructor!(
    /// Describe an int-backed year column.
    year, YearType
);
spec_constructor!(
    /// Describe a `uuid` column.
    uuid, UuidType
);

impl<E: EnumValue> ColumnSpec<EnumType<E>> {
    /// Describe an `enum` column storing variants by name.
    pub fn enumeration(name: impl Into<String>) -> Self {
        ColumnSpec::new(name, EnumType::new())
    }
}

/// Erased column descriptor, as listed by its owning table.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column name, unique within the table.
    pub name: String,
    /// Underlying SQL type name.
    pub type_name: String,
    /// Wire-level type code.
    pub type_code: TypeCode,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
}

/// A typed handle to one registered column.
///
/// Cheap to clone; many handles may share the sql type instance behind them.
pub struct Column<T> {
    pub(crate) table: String,
    pub(crate) name: String,
    pub(crate) ordinal: usize,
    pub(crate) sql_type: Arc<dyn SqlType<Value = T>>,
}

impl<T: Clone + Send + Sync + 'static> Column<T> {
    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning table's name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The column's position in declaration order.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The `table.column` form used in diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// The underlying SQL type name.
    pub fn type_name(&self) -> &'static str {
        self.sql_type.type_name()
    }

    /// The wire-level type code.
    pub fn type_code(&self) -> TypeCode {
        self.sql_type.type_code()
    }

    /// Read this column's value from a table-shaped row.
    ///
    /// The row is assumed to carry the table's columns in declaration order;
    /// use [`Column::read_at`] for projected rows.
    pub fn read(&self, row: &Row) -> Result<Option<T>, Error> {
        self.sql_type.get_result(row, self.ordinal)
    }

    /// Read this column's value from an explicit position.
    pub fn read_at(&self, row: &Row, index: usize) -> Result<Option<T>, Error> {
        self.sql_type.get_result(row, index)
    }

    /// Bind a value for this column at a parameter position.
    pub fn bind(&self, params: &mut ParamBuffer, index: usize, value: &T) -> Result<(), Error> {
        self.sql_type.set_parameter(params, index, value)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            name: self.name.clone(),
            ordinal: self.ordinal,
            sql_type: Arc::clone(&self.sql_type),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("table", &self.table)
            .field("name", &self.name)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = ColumnSpec::int("id").primary_key();
        assert_eq!(spec.name(), "id");
        assert!(spec.primary_key);

        let spec = ColumnSpec::varchar("name");
        assert!(!spec.primary_key);
    }

    #[test]
    fn test_custom_type_spec() {
        let spec = ColumnSpec::new("payload", BytesType);
        assert_eq!(spec.name(), "payload");
        assert_eq!(spec.sql_type.type_name(), "bytes");
    }
}
