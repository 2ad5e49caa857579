use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::types::ConsistencyLevel;

/// Per-statement timeout applied to every connection descriptor.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Exponential backoff bounds and attempt cap for statement retries.
pub const MIN_BACKOFF: Duration = Duration::from_secs(1);
pub const MAX_BACKOFF: Duration = Duration::from_secs(10);
pub const MAX_RETRIES: u32 = 5;

/// Backoff window for retried statements. Invariant: `min_backoff`
/// must not exceed `max_backoff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    pub min_backoff: Duration,
    pub max_backoff: Duration,
    pub max_retries: u32,
}

/// How the driver picks a coordinator for each statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostSelection {
    /// Prefer replicas owning the partition token, round-robin among
    /// equally eligible hosts.
    TokenAwareRoundRobin,
    RoundRobin,
}

/// Connection descriptor for a cluster. Pure configuration; no I/O
/// happens until a session is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub hosts: Vec<String>,
    pub port: u16,
    pub consistency: ConsistencyLevel,
    pub request_timeout: Duration,
    pub retry: RetryConfig,
    pub host_selection: HostSelection,
}

impl ClusterConfig {
    /// Assembles the descriptor used by the demo: fixed 5 second
    /// timeout, exponential backoff from 1 to 10 seconds with 5 retry
    /// attempts, token-aware host selection over round-robin.
    pub fn new(consistency: ConsistencyLevel, port: u16, hosts: Vec<String>) -> Self {
        Self {
            hosts,
            port,
            consistency,
            request_timeout: REQUEST_TIMEOUT,
            retry: RetryConfig {
                min_backoff: MIN_BACKOFF,
                max_backoff: MAX_BACKOFF,
                max_retries: MAX_RETRIES,
            },
            host_selection: HostSelection::TokenAwareRoundRobin,
        }
    }

    /// Checked before any session is built from this descriptor.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.hosts.is_empty() {
            return Err(CatalogError::Config(
                "at least one contact point is required".to_string(),
            ));
        }
        if self.retry.min_backoff > self.retry.max_backoff {
            return Err(CatalogError::Config(format!(
                "min backoff {:?} exceeds max backoff {:?}",
                self.retry.min_backoff, self.retry.max_backoff
            )));
        }
        Ok(())
    }

    /// `host:port` pairs handed to the driver as known nodes.
    pub fn contact_points(&self) -> Vec<String> {
        self.hosts
            .iter()
            .map(|host| format!("{}:{}", host, self.port))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_echoes_inputs_and_fixes_policies() {
        let config = ClusterConfig::new(
            ConsistencyLevel::Quorum,
            9042,
            vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
        );

        assert_eq!(config.hosts.len(), 2);
        assert_eq!(config.port, 9042);
        assert_eq!(config.consistency, ConsistencyLevel::Quorum);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.retry.min_backoff, Duration::from_secs(1));
        assert_eq!(config.retry.max_backoff, Duration::from_secs(10));
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(
            config.host_selection,
            HostSelection::TokenAwareRoundRobin
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_hosts() {
        let config = ClusterConfig::new(ConsistencyLevel::One, 9042, vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_backoff_bounds() {
        let mut config =
            ClusterConfig::new(ConsistencyLevel::One, 9042, vec!["localhost".to_string()]);
        config.retry.min_backoff = Duration::from_secs(30);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_contact_points_carry_the_port() {
        let config = ClusterConfig::new(
            ConsistencyLevel::One,
            19042,
            vec!["172.17.0.2".to_string()],
        );
        assert_eq!(config.contact_points(), vec!["172.17.0.2:19042".to_string()]);
    }
}
