//! Wire-level type codes.

use rkyv::{Archive, Deserialize, Serialize};

/// The wire-level type code carried by every column declaration.
///
/// Codes are fixed for wire compatibility and follow the JDBC
/// `java.sql.Types` numbering, so descriptors serialized by one build stay
/// readable by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
pub enum TypeCode {
    /// Boolean column.
    Boolean,
    /// 16-bit integer column.
    Smallint,
    /// 32-bit integer column.
    Integer,
    /// 64-bit integer column.
    Bigint,
    /// 32-bit floating point column.
    Float,
    /// 64-bit floating point column.
    Double,
    /// Fixed-precision decimal column.
    Decimal,
    /// Bounded character column.
    Varchar,
    /// Unbounded character column.
    LongVarchar,
    /// Large binary object column.
    Blob,
    /// Raw binary column.
    Binary,
    /// Timestamp column.
    Timestamp,
    /// Calendar date column.
    Date,
    /// Time-of-day column.
    Time,
    /// Database-specific column (native enums, uuid).
    Other,
}

impl TypeCode {
    /// The numeric wire code.
    pub fn code(&self) -> i32 {
        match self {
            TypeCode::Boolean => 16,
            TypeCode::Smallint => 5,
            TypeCode::Integer => 4,
            TypeCode::Bigint => -5,
            TypeCode::Float => 6,
            TypeCode::Double => 8,
            TypeCode::Decimal => 3,
            TypeCode::Varchar => 12,
            TypeCode::LongVarchar => -1,
            TypeCode::Blob => 2004,
            TypeCode::Binary => -2,
            TypeCode::Timestamp => 93,
            TypeCode::Date => 91,
            TypeCode::Time => 92,
            TypeCode::Other => 1111,
        }
    }

    /// Look up a type code by its numeric wire code.
    pub fn from_code(code: i32) -> Option<TypeCode> {
        match code {
            16 => Some(TypeCode::Boolean),
            5 => Some(TypeCode::Smallint),
            4 => Some(TypeCode::Integer),
            -5 => Some(TypeCode::Bigint),
            6 => Some(TypeCode::Float),
            8 => Some(TypeCode::Double),
            3 => Some(TypeCode::Decimal),
            12 => Some(TypeCode::Varchar),
            -1 => Some(TypeCode::LongVarchar),
            2004 => Some(TypeCode::Blob),
            -2 => Some(TypeCode::Binary),
            93 => Some(TypeCode::Timestamp),
            91 => Some(TypeCode::Date),
            92 => Some(TypeCode::Time),
            1111 => Some(TypeCode::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[TypeCode] = &[
        TypeCode::Boolean,
        TypeCode::Smallint,
        TypeCode::Integer,
        TypeCode::Bigint,
        TypeCode::Float,
        TypeCode::Double,
        TypeCode::Decimal,
        TypeCode::Varchar,
        TypeCode::LongVarchar,
        TypeCode::Blob,
        TypeCode::Binary,
        TypeCode::Timestamp,
        TypeCode::Date,
        TypeCode::Time,
        TypeCode::Other,
    ];

    #[test]
    fn test_codes_match_jdbc_numbering() {
        assert_eq!(TypeCode::Boolean.code(), 16);
        assert_eq!(TypeCode::Smallint.code(), 5);
        assert_eq!(TypeCode::Integer.code(), 4);
        assert_eq!(TypeCode::Bigint.code(), -5);
        assert_eq!(TypeCode::Float.code(), 6);
        assert_eq!(TypeCode::Double.code(), 8);
        assert_eq!(TypeCode::Decimal.code(), 3);
        assert_eq!(TypeCode::Varchar.code(), 12);
        assert_eq!(TypeCode::LongVarchar.code(), -1);
        assert_eq!(TypeCode::Blob.code(), 2004);
        assert_eq!(TypeCode::Binary.code(), -2);
        assert_eq!(TypeCode::Timestamp.code(), 93);
        assert_eq!(TypeCode::Date.code(), 91);
        assert_eq!(TypeCode::Time.code(), 92);
        assert_eq!(TypeCode::Other.code(), 1111);
    }

    #[test]
    fn test_code_roundtrip() {
        for tc in ALL {
            assert_eq!(TypeCode::from_code(tc.code()), Some(*tc));
        }
        assert_eq!(TypeCode::from_code(9999), None);
    }
}
