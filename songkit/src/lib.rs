//! Core library for the song-catalog demo: cluster connection
//! configuration, schema bootstrap and typed reads/writes against a
//! ScyllaDB (or Cassandra) cluster.
//!
//! Everything below the statement level (connection pooling, wire
//! protocol, token-aware routing, consistency enforcement) is handled
//! by the `scylla` driver; this crate only assembles configuration,
//! derives the CQL statements from table metadata and maps the `Song`
//! record to and from bound parameters.

pub mod config;
pub mod database;
pub mod errors;
pub mod types;
