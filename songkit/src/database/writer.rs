use std::sync::Arc;

use scylla::statement::prepared::PreparedStatement;
use tracing::debug;

use super::connection::ScyllaConnection;
use super::schema::TableSpec;
use crate::errors::CatalogError;
use crate::types::Song;

/// Writes songs through an insert prepared once per writer, bound in
/// table column order.
pub struct SongWriter {
    conn: Arc<ScyllaConnection>,
    insert: PreparedStatement,
    table: String,
}

impl SongWriter {
    pub async fn new(conn: Arc<ScyllaConnection>, table: &TableSpec) -> Result<Self, CatalogError> {
        let qualified = table.qualified_name();
        let insert = conn.prepare(&table.insert_cql()).await.map_err(|e| {
            CatalogError::Query(format!("prepare insert for {} failed: {}", qualified, e))
        })?;

        Ok(Self {
            conn,
            insert,
            table: qualified,
        })
    }

    /// Inserts one fully-populated song. CQL inserts are upserts:
    /// re-inserting an identical composite key overwrites the row
    /// instead of duplicating it.
    pub async fn insert(&self, song: &Song) -> Result<(), CatalogError> {
        debug!("inserting song {} into {}", song.id, self.table);
        self.conn
            .execute_prepared(&self.insert, song.bind_values())
            .await
            .map_err(|e| CatalogError::Query(format!("insert into {} failed: {}", self.table, e)))?;
        Ok(())
    }
}
