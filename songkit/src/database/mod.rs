pub mod cluster;
pub mod connection;
pub mod reader;
pub mod retry;
pub mod schema;
pub mod writer;

pub use cluster::{ClusterConfig, HostSelection, RetryConfig};
pub use connection::ScyllaConnection;
pub use reader::SongReader;
pub use retry::RetryPolicy;
pub use schema::{
    ensure_keyspace, ensure_table, songs_table, Column, KeyspaceSpec, ReplicationStrategy,
    TableSpec,
};
pub use writer::SongWriter;
