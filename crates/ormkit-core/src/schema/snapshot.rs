//! Versioned schema snapshots.

use super::column::ColumnMeta;
use crate::error::Error;
use rkyv::{Archive, Deserialize, Serialize};
use std::collections::HashMap;

/// Erased table metadata as carried by a snapshot.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct TableMeta {
    /// Table name, unique within the snapshot.
    pub name: String,
    /// Column descriptors in declaration order.
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    /// Look up a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The primary key columns, in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| c.primary_key)
    }
}

/// A versioned snapshot of every declared table.
///
/// Descriptors are immutable once declared; the snapshot exists so schema
/// metadata can be serialized, shipped, and diffed as one unit.
#[derive(Debug, Clone, PartialEq, Default, Archive, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Snapshot version (monotonically increasing).
    pub version: u64,
    /// Table metadata keyed by name.
    pub tables: HashMap<String, TableMeta>,
}

impl SchemaSnapshot {
    /// Create an empty snapshot.
    pub fn new(version: u64) -> Self {
        Self {
            version,
            tables: HashMap::new(),
        }
    }

    /// Add a table, rejecting duplicate names.
    pub fn insert_table(&mut self, table: TableMeta) -> Result<(), Error> {
        if self.tables.contains_key(&table.name) {
            return Err(Error::DuplicateTable(table.name));
        }
        tracing::debug!(table = %table.name, version = self.version, "added table to snapshot");
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// Builder form of [`SchemaSnapshot::insert_table`].
    pub fn with_table(mut self, table: TableMeta) -> Result<Self, Error> {
        self.insert_table(table)?;
        Ok(self)
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&TableMeta> {
        self.tables.get(name)
    }

    /// List all table names.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|s| s.as_str()).collect()
    }

    /// Serialize the snapshot to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Table;

    fn sample_snapshot() -> SchemaSnapshot {
        let mut users: Table = Table::new("users");
        users.uuid("id").unwrap();
        users.varchar("name").unwrap();
        users.boolean("active").unwrap();

        let mut posts: Table = Table::new("posts");
        posts.uuid("id").unwrap();
        posts.varchar("title").unwrap();
        posts.uuid("author_id").unwrap();

        SchemaSnapshot::new(1)
            .with_table(users.meta())
            .unwrap()
            .with_table(posts.meta())
            .unwrap()
    }

    #[test]
    fn test_snapshot_builder() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.tables.len(), 2);
        assert!(snapshot.get_table("users").is_some());
        assert!(snapshot.get_table("missing").is_none());
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let mut snapshot = sample_snapshot();
        let mut users: Table = Table::new("users");
        users.int("id").unwrap();

        assert!(matches!(
            snapshot.insert_table(users.meta()),
            Err(Error::DuplicateTable(ref name)) if name == "users"
        ));
        // The original descriptor survives.
        assert_eq!(
            snapshot.get_table("users").unwrap().columns[0].type_name,
            "uuid"
        );
    }

    #[test]
    fn test_table_meta_lookups() {
        let snapshot = sample_snapshot();
        let users = snapshot.get_table("users").unwrap();

        assert!(users.get_column("name").is_some());
        assert!(users.get_column("missing").is_none());
        assert_eq!(users.primary_keys().count(), 0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let snapshot = sample_snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let decoded = SchemaSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(snapshot, decoded);
    }
}
