//! Table descriptors.

use super::column::{Column, ColumnMeta, ColumnSpec};
use super::snapshot::TableMeta;
use crate::error::Error;
use crate::sqltype::{
    BlobType, BooleanType, BytesType, DateType, DatetimeType, DecimalType, DoubleType, EnumType,
    EnumValue, FloatType, IntType, LongType, MonthDay, MonthDayType, ShortType, SqlType, TextType,
    TimeType, TimestampType, UuidType, VarcharType, Year, YearMonth, YearMonthType, YearType,
};
use rust_decimal::Decimal;
use std::marker::PhantomData;
use std::sync::Arc;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// A named relation and its ordered columns.
///
/// Declared once, typically at startup, and read-only afterwards. The type
/// parameter optionally binds the table to an entity marker type; it carries
/// no data and defaults to `()` for unbound tables.
///
/// # Example
///
/// ```
/// use ormkit_core::schema::Table;
///
/// let mut users: Table = Table::new("users");
/// let id = users.int("id")?;
/// let name = users.varchar("name")?;
/// assert_eq!(users.columns().len(), 2);
/// # Ok::<(), ormkit_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Table<E = ()> {
    name: String,
    columns: Vec<ColumnMeta>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Table<E> {
    /// Create an empty table descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The columns in declaration order.
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The primary key columns, in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// Register a described column, returning its typed handle.
    ///
    /// Column names are unique within a table; re-registering a name fails
    /// with [`Error::DuplicateColumn`].
    pub fn register<S: SqlType>(&mut self, spec: ColumnSpec<S>) -> Result<Column<S::Value>, Error> {
        if self.get_column(&spec.name).is_some() {
            return Err(Error::DuplicateColumn {
                table: self.name.clone(),
                column: spec.name,
            });
        }

        let ordinal = self.columns.len();
        self.columns.push(ColumnMeta {
            name: spec.name.clone(),
            type_name: spec.sql_type.type_name().to_string(),
            type_code: spec.sql_type.type_code(),
            primary_key: spec.primary_key,
        });

        tracing::debug!(
            table = %self.name,
            column = %spec.name,
            sql_type = spec.sql_type.type_name(),
            ordinal,
            "registered column"
        );

        Ok(Column {
            table: self.name.clone(),
            name: spec.name,
            ordinal,
            sql_type: Arc::new(spec.sql_type),
        })
    }

    /// Register a column with a custom sql type.
    ///
    /// This is the extension point for user-defined types; the canonical
    /// declaration functions below are all thin wrappers over it.
    pub fn register_column<S: SqlType>(
        &mut self,
        name: impl Into<String>,
        sql_type: S,
    ) -> Result<Column<S::Value>, Error> {
        self.register(ColumnSpec::new(name, sql_type))
    }

    /// Declare a `boolean` column.
    pub fn boolean(&mut self, name: impl Into<String>) -> Result<Column<bool>, Error> {
        self.register_column(name, BooleanType)
    }

    /// Declare an `int` column.
    pub fn int(&mut self, name: impl Into<String>) -> Result<Column<i32>, Error> {
        self.register_column(name, IntType)
    }

    /// Declare a `smallint` column.
    pub fn short(&mut self, name: impl Into<String>) -> Result<Column<i16>, Error> {
        self.register_column(name, ShortType)
    }

    /// Declare a `bigint` column.
    pub fn long(&mut self, name: impl Into<String>) -> Result<Column<i64>, Error> {
        self.register_column(name, LongType)
    }

    /// Declare a `float` column.
    pub fn float(&mut self, name: impl Into<String>) -> Result<Column<f32>, Error> {
        self.register_column(name, FloatType)
    }

    /// Declare a `double` column.
    pub fn double(&mut self, name: impl Into<String>) -> Result<Column<f64>, Error> {
        self.register_column(name, DoubleType)
    }

    /// Declare a `decimal` column.
    pub fn decimal(&mut self, name: impl Into<String>) -> Result<Column<Decimal>, Error> {
        self.register_column(name, DecimalType)
    }

    /// Declare a `varchar` column.
    pub fn varchar(&mut self, name: impl Into<String>) -> Result<Column<String>, Error> {
        self.register_column(name, VarcharType)
    }

    /// Declare a `text` column.
    pub fn text(&mut self, name: impl Into<String>) -> Result<Column<String>, Error> {
        self.register_column(name, TextType)
    }

    /// Declare a `blob` column.
    pub fn blob(&mut self, name: impl Into<String>) -> Result<Column<Vec<u8>>, Error> {
        self.register_column(name, BlobType)
    }

    /// Declare a `bytes` column.
    pub fn bytes(&mut self, name: impl Into<String>) -> Result<Column<Vec<u8>>, Error> {
        self.register_column(name, BytesType)
    }

    /// Declare a `timestamp` column.
    pub fn timestamp(&mut self, name: impl Into<String>) -> Result<Column<OffsetDateTime>, Error> {
        self.register_column(name, TimestampType)
    }

    /// Declare a `datetime` column.
    pub fn datetime(
        &mut self,
        name: impl Into<String>,
    ) -> Result<Column<PrimitiveDateTime>, Error> {
        self.register_column(name, DatetimeType)
    }

    /// Declare a `date` column.
    pub fn date(&mut self, name: impl Into<String>) -> Result<Column<Date>, Error> {
        self.register_column(name, DateType)
    }

    /// Declare a `time` column.
    pub fn time(&mut self, name: impl Into<String>) -> Result<Column<Time>, Error> {
        self.register_column(name, TimeType)
    }

    /// Declare a varchar-backed month-day column.
    pub fn month_day(&mut self, name: impl Into<String>) -> Result<Column<MonthDay>, Error> {
        self.register_column(name, MonthDayType)
    }

    /// Declare a varchar-backed year-month column.
    pub fn year_month(&mut self, name: impl Into<String>) -> Result<Column<YearMonth>, Error> {
        self.register_column(name, YearMonthType)
    }

    /// Declare an int-backed year column.
    pub fn year(&mut self, name: impl Into<String>) -> Result<Column<Year>, Error> {
        self.register_column(name, YearType)
    }

    /// Declare an `enum` column storing variants by name.
    pub fn enumeration<V: EnumValue>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<Column<V>, Error> {
        self.register_column(name, EnumType::<V>::new())
    }

    /// Declare a `uuid` column.
    pub fn uuid(&mut self, name: impl Into<String>) -> Result<Column<Uuid>, Error> {
        self.register_column(name, UuidType)
    }

    /// Snapshot this table's erased metadata.
    pub fn meta(&self) -> TableMeta {
        TableMeta {
            name: self.name.clone(),
            columns: self.columns.clone(),
        }
    }
}
