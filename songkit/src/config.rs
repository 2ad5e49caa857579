use serde::{Deserialize, Serialize};

use crate::database::cluster::ClusterConfig;
use crate::types::ConsistencyLevel;

/// Externally-loaded database settings (config file or environment).
///
/// This is the thin, serializable surface; the full connection
/// descriptor with timeouts and policies is assembled from it by
/// [`ClusterConfig::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub hosts: Vec<String>,
    pub port: u16,
    pub keyspace: String,
    pub consistency: ConsistencyLevel,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            hosts: vec!["127.0.0.1".to_string()],
            port: 9042,
            keyspace: "go_demo1".to_string(),
            consistency: ConsistencyLevel::One,
        }
    }
}

impl DatabaseConfig {
    /// Connection descriptor for this database, with the fixed timeout
    /// and retry/host-selection policies filled in.
    pub fn cluster(&self) -> ClusterConfig {
        ClusterConfig::new(self.consistency, self.port, self.hosts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.hosts, vec!["127.0.0.1".to_string()]);
        assert_eq!(config.port, 9042);
        assert_eq!(config.keyspace, "go_demo1");
        assert_eq!(config.consistency, ConsistencyLevel::One);
    }

    #[test]
    fn test_cluster_descriptor_echoes_database_settings() {
        let config = DatabaseConfig {
            hosts: vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
            port: 19042,
            keyspace: "songs_ks".to_string(),
            consistency: ConsistencyLevel::Quorum,
        };

        let cluster = config.cluster();
        assert_eq!(cluster.hosts, config.hosts);
        assert_eq!(cluster.port, 19042);
        assert_eq!(cluster.consistency, ConsistencyLevel::Quorum);
    }
}
