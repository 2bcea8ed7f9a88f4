//! Positional result rows.

use crate::error::Error;
use crate::value::SqlValue;
use rkyv::{Archive, Deserialize, Serialize};

/// One row of a query result, accessed positionally.
///
/// The row is immutable once constructed. Column types read their values out
/// of it by index; they never see column names.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    /// Create a row from its values.
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a position.
    pub fn get(&self, index: usize) -> Result<&SqlValue, Error> {
        self.values.get(index).ok_or(Error::IndexOutOfRange {
            index,
            width: self.values.len(),
        })
    }

    /// Check whether the field at a position is null.
    ///
    /// Out-of-range positions report as null, mirroring how drivers treat
    /// absent fields.
    pub fn is_null(&self, index: usize) -> bool {
        self.values.get(index).is_none_or(SqlValue::is_null)
    }

    /// Iterate over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &SqlValue> {
        self.values.iter()
    }
}

impl From<Vec<SqlValue>> for Row {
    fn from(values: Vec<SqlValue>) -> Self {
        Row::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_access() {
        let row = Row::new(vec![
            SqlValue::Int(1),
            SqlValue::Null,
            SqlValue::Text("x".into()),
        ]);

        assert_eq!(row.len(), 3);
        assert!(!row.is_empty());
        assert_eq!(row.get(0).unwrap(), &SqlValue::Int(1));
        assert_eq!(row.get(2).unwrap(), &SqlValue::Text("x".into()));
        assert!(matches!(
            row.get(3),
            Err(Error::IndexOutOfRange { index: 3, width: 3 })
        ));
    }

    #[test]
    fn test_is_null() {
        let row = Row::new(vec![SqlValue::Null, SqlValue::Bool(false)]);
        assert!(row.is_null(0));
        assert!(!row.is_null(1));
        assert!(row.is_null(7));
    }
}
