//! Positional bound-parameter buffers.

use crate::error::Error;
use crate::row::Row;
use crate::value::SqlValue;

/// A fixed-arity buffer of bound statement parameters.
///
/// Column types write values into it positionally, the way a driver's
/// prepared statement accepts them. Slots start out null; `set` overwrites a
/// slot and rejects positions past the declared arity.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBuffer {
    slots: Vec<SqlValue>,
}

impl ParamBuffer {
    /// Create a buffer with `arity` null slots.
    pub fn new(arity: usize) -> Self {
        Self {
            slots: vec![SqlValue::Null; arity],
        }
    }

    /// Number of parameter slots.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Bind a value at a position.
    pub fn set(&mut self, index: usize, value: SqlValue) -> Result<(), Error> {
        let width = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, width }),
        }
    }

    /// Read back the value bound at a position.
    pub fn get(&self, index: usize) -> Result<&SqlValue, Error> {
        self.slots.get(index).ok_or(Error::IndexOutOfRange {
            index,
            width: self.slots.len(),
        })
    }

    /// Turn the bound parameters into a result row.
    ///
    /// This is the seam that lets a write-then-read round trip be exercised
    /// without a live connection.
    pub fn into_row(self) -> Row {
        Row::new(self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_null() {
        let params = ParamBuffer::new(3);
        assert_eq!(params.arity(), 3);
        for i in 0..3 {
            assert!(params.get(i).unwrap().is_null());
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut params = ParamBuffer::new(2);
        params.set(0, SqlValue::Int(5)).unwrap();
        params.set(1, SqlValue::Text("hi".into())).unwrap();
        assert_eq!(params.get(0).unwrap(), &SqlValue::Int(5));
        assert_eq!(params.get(1).unwrap(), &SqlValue::Text("hi".into()));

        assert!(matches!(
            params.set(2, SqlValue::Null),
            Err(Error::IndexOutOfRange { index: 2, width: 2 })
        ));
    }

    #[test]
    fn test_into_row() {
        let mut params = ParamBuffer::new(2);
        params.set(1, SqlValue::Bool(true)).unwrap();
        let row = params.into_row();
        assert!(row.is_null(0));
        assert_eq!(row.get(1).unwrap(), &SqlValue::Bool(true));
    }
}
