use serde::{Deserialize, Serialize};
use tracing::info;

use super::connection::ScyllaConnection;
use crate::errors::CatalogError;

/// Replication strategy carried by a keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplicationStrategy {
    Simple { replication_factor: u32 },
    NetworkTopology { datacenters: Vec<(String, u32)> },
}

impl ReplicationStrategy {
    fn to_cql(&self) -> String {
        match self {
            ReplicationStrategy::Simple { replication_factor } => format!(
                "{{'class': 'SimpleStrategy', 'replication_factor': {}}}",
                replication_factor
            ),
            ReplicationStrategy::NetworkTopology { datacenters } => {
                let factors = datacenters
                    .iter()
                    .map(|(dc, rf)| format!("'{}': {}", dc, rf))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{'class': 'NetworkTopologyStrategy', {}}}", factors)
            }
        }
    }
}

/// Keyspace metadata. Created once at bootstrap and immutable within a
/// run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyspaceSpec {
    pub name: String,
    pub replication: ReplicationStrategy,
}

impl KeyspaceSpec {
    pub fn simple(name: impl Into<String>, replication_factor: u32) -> Self {
        Self {
            name: name.into(),
            replication: ReplicationStrategy::Simple { replication_factor },
        }
    }

    pub fn create_cql(&self) -> String {
        format!(
            "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {}",
            self.name,
            self.replication.to_cql()
        )
    }
}

/// A named, CQL-typed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cql_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, cql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cql_type: cql_type.into(),
        }
    }
}

/// Table metadata used to derive every statement touching the table.
///
/// Invariants, enforced on construction: the partition key is
/// non-empty and both key lists only name declared columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    keyspace: String,
    table: String,
    columns: Vec<Column>,
    partition_key: Vec<String>,
    clustering_key: Vec<String>,
}

impl TableSpec {
    pub fn new(
        keyspace: impl Into<String>,
        table: impl Into<String>,
        columns: Vec<Column>,
        partition_key: Vec<String>,
        clustering_key: Vec<String>,
    ) -> Result<Self, CatalogError> {
        if partition_key.is_empty() {
            return Err(CatalogError::Config(
                "partition key must name at least one column".to_string(),
            ));
        }
        for key in partition_key.iter().chain(clustering_key.iter()) {
            if !columns.iter().any(|column| column.name == *key) {
                return Err(CatalogError::Config(format!(
                    "key column {} is not part of the column list",
                    key
                )));
            }
        }

        Ok(Self {
            keyspace: keyspace.into(),
            table: table.into(),
            columns,
            partition_key,
            clustering_key,
        })
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.keyspace, self.table)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn partition_key(&self) -> &[String] {
        &self.partition_key
    }

    pub fn clustering_key(&self) -> &[String] {
        &self.clustering_key
    }

    pub fn create_cql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|column| format!("{} {}", column.name, column.cql_type))
            .collect::<Vec<_>>()
            .join(", ");

        let partition = if self.partition_key.len() == 1 {
            self.partition_key[0].clone()
        } else {
            format!("({})", self.partition_key.join(", "))
        };
        let primary_key = if self.clustering_key.is_empty() {
            partition
        } else {
            format!("{}, {}", partition, self.clustering_key.join(", "))
        };

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({}, PRIMARY KEY ({}))",
            self.qualified_name(),
            columns,
            primary_key
        )
    }

    pub fn insert_cql(&self) -> String {
        let names = self
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.qualified_name(),
            names,
            placeholders
        )
    }

    /// Select filtered on the partition key only; matching rows come
    /// back in clustering order.
    pub fn select_by_partition_cql(&self) -> String {
        let names = self
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let filter = self
            .partition_key
            .iter()
            .map(|key| format!("{} = ?", key))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!(
            "SELECT {} FROM {} WHERE {}",
            names,
            self.qualified_name(),
            filter
        )
    }
}

/// Metadata for the songs table: id is the partition key, (title,
/// album, artist) sort rows within a partition. The composite key
/// means two songs sharing an id are distinct rows when any clustering
/// column differs.
pub fn songs_table(keyspace: &str) -> Result<TableSpec, CatalogError> {
    TableSpec::new(
        keyspace,
        "songs",
        vec![
            Column::new("id", "uuid"),
            Column::new("title", "text"),
            Column::new("album", "text"),
            Column::new("artist", "text"),
        ],
        vec!["id".to_string()],
        vec![
            "title".to_string(),
            "album".to_string(),
            "artist".to_string(),
        ],
    )
}

/// Idempotent: the keyspace exists after return and repeated calls are
/// not an error.
pub async fn ensure_keyspace(
    conn: &ScyllaConnection,
    keyspace: &KeyspaceSpec,
) -> Result<(), CatalogError> {
    info!("ensuring keyspace {}", keyspace.name);
    conn.execute(&keyspace.create_cql(), ())
        .await
        .map_err(|e| {
            CatalogError::Schema(format!("create keyspace {} failed: {}", keyspace.name, e))
        })?;
    Ok(())
}

/// Idempotent: applies the table's DDL. The [`TableSpec`] is built
/// before and independently of this call, so callers keep the metadata
/// even when the statement is rejected and this error surfaces.
pub async fn ensure_table(conn: &ScyllaConnection, table: &TableSpec) -> Result<(), CatalogError> {
    info!("ensuring table {}", table.qualified_name());
    conn.execute(&table.create_cql(), ()).await.map_err(|e| {
        CatalogError::Schema(format!(
            "create table {} failed: {}",
            table.qualified_name(),
            e
        ))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_keyspace_cql() {
        let keyspace = KeyspaceSpec::simple("go_demo1", 1);
        assert_eq!(
            keyspace.create_cql(),
            "CREATE KEYSPACE IF NOT EXISTS go_demo1 WITH replication = \
             {'class': 'SimpleStrategy', 'replication_factor': 1}"
        );
    }

    #[test]
    fn test_network_topology_keyspace_cql() {
        let keyspace = KeyspaceSpec {
            name: "songs_ks".to_string(),
            replication: ReplicationStrategy::NetworkTopology {
                datacenters: vec![("dc1".to_string(), 3), ("dc2".to_string(), 2)],
            },
        };
        assert_eq!(
            keyspace.create_cql(),
            "CREATE KEYSPACE IF NOT EXISTS songs_ks WITH replication = \
             {'class': 'NetworkTopologyStrategy', 'dc1': 3, 'dc2': 2}"
        );
    }

    #[test]
    fn test_songs_table_key_structure() {
        let table = songs_table("go_demo1").unwrap();
        assert_eq!(table.qualified_name(), "go_demo1.songs");
        assert_eq!(table.partition_key(), ["id".to_string()]);
        assert_eq!(
            table.clustering_key(),
            [
                "title".to_string(),
                "album".to_string(),
                "artist".to_string()
            ]
        );
        assert_eq!(
            table
                .columns()
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            ["id", "title", "album", "artist"]
        );
    }

    #[test]
    fn test_songs_create_cql() {
        let table = songs_table("go_demo1").unwrap();
        assert_eq!(
            table.create_cql(),
            "CREATE TABLE IF NOT EXISTS go_demo1.songs \
             (id uuid, title text, album text, artist text, \
             PRIMARY KEY (id, title, album, artist))"
        );
    }

    #[test]
    fn test_songs_insert_cql() {
        let table = songs_table("go_demo1").unwrap();
        assert_eq!(
            table.insert_cql(),
            "INSERT INTO go_demo1.songs (id, title, album, artist) VALUES (?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_songs_select_cql_filters_on_partition_key_only() {
        let table = songs_table("go_demo1").unwrap();
        assert_eq!(
            table.select_by_partition_cql(),
            "SELECT id, title, album, artist FROM go_demo1.songs WHERE id = ?"
        );
    }

    #[test]
    fn test_compound_partition_key_is_parenthesized() {
        let table = TableSpec::new(
            "ks",
            "events",
            vec![
                Column::new("tenant", "text"),
                Column::new("day", "text"),
                Column::new("seq", "int"),
            ],
            vec!["tenant".to_string(), "day".to_string()],
            vec!["seq".to_string()],
        )
        .unwrap();
        assert_eq!(
            table.create_cql(),
            "CREATE TABLE IF NOT EXISTS ks.events \
             (tenant text, day text, seq int, PRIMARY KEY ((tenant, day), seq))"
        );
    }

    #[test]
    fn test_empty_partition_key_is_rejected() {
        let result = TableSpec::new(
            "ks",
            "t",
            vec![Column::new("id", "uuid")],
            vec![],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_column_is_rejected() {
        let result = TableSpec::new(
            "ks",
            "t",
            vec![Column::new("id", "uuid")],
            vec!["id".to_string()],
            vec!["missing".to_string()],
        );
        assert!(result.is_err());
    }
}
