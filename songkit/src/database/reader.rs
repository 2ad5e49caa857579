use std::sync::Arc;

use scylla::statement::prepared::PreparedStatement;
use tracing::debug;
use uuid::Uuid;

use super::connection::ScyllaConnection;
use super::schema::TableSpec;
use crate::errors::CatalogError;
use crate::types::Song;

/// Reads all songs under a partition through a select prepared once
/// per reader.
pub struct SongReader {
    conn: Arc<ScyllaConnection>,
    select: PreparedStatement,
    table: String,
}

impl SongReader {
    pub async fn new(conn: Arc<ScyllaConnection>, table: &TableSpec) -> Result<Self, CatalogError> {
        let qualified = table.qualified_name();
        let select = conn
            .prepare(&table.select_by_partition_cql())
            .await
            .map_err(|e| {
                CatalogError::Query(format!("prepare select for {} failed: {}", qualified, e))
            })?;

        Ok(Self {
            conn,
            select,
            table: qualified,
        })
    }

    /// All songs sharing the given partition key, in clustering order
    /// (title, album, artist) as stored. An id with no rows yields an
    /// empty vec, not an error.
    pub async fn songs_by_id(&self, id: Uuid) -> Result<Vec<Song>, CatalogError> {
        debug!("selecting songs with id {} from {}", id, self.table);

        let result = self
            .conn
            .execute_prepared(&self.select, (id,))
            .await
            .map_err(|e| {
                CatalogError::Query(format!("select from {} failed: {}", self.table, e))
            })?;

        let rows_result = result.into_rows_result().map_err(|e| {
            CatalogError::Query(format!(
                "select from {} returned no row set: {}",
                self.table, e
            ))
        })?;

        let songs = rows_result
            .rows::<Song>()
            .map_err(|e| {
                CatalogError::Query(format!("decoding rows from {} failed: {}", self.table, e))
            })?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                CatalogError::Query(format!("decoding rows from {} failed: {}", self.table, e))
            })?;

        Ok(songs)
    }
}
