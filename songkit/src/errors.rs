use thiserror::Error;

use scylla::errors::NewSessionError;

/// Error taxonomy for the catalog core. Every variant is fatal for the
/// current run; the top-level caller decides exit behavior.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<NewSessionError> for CatalogError {
    fn from(err: NewSessionError) -> Self {
        CatalogError::Connection(err.to_string())
    }
}
