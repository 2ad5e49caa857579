use std::sync::Arc;

use scylla::client::execution_profile::ExecutionProfile;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::errors::{ExecutionError, PrepareError};
use scylla::policies::load_balancing::{DefaultPolicy, LoadBalancingPolicy};
use scylla::policies::retry::DefaultRetryPolicy;
use scylla::response::query_result::QueryResult;
use scylla::serialize::row::SerializeRow;
use scylla::statement::prepared::PreparedStatement;
use tracing::info;

use super::cluster::{ClusterConfig, HostSelection};
use super::retry::RetryPolicy;
use crate::errors::CatalogError;

/// Session wrapper owning the driver session and the backoff policy
/// applied around every statement.
///
/// The session is acquired once and released when the wrapper drops,
/// regardless of how the run ends.
pub struct ScyllaConnection {
    session: Arc<Session>,
    retry: RetryPolicy,
}

impl ScyllaConnection {
    /// Builds a session from a connection descriptor. The descriptor's
    /// consistency, timeout and host-selection policy are installed as
    /// the session's default execution profile.
    pub async fn connect(config: &ClusterConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        info!("connecting to cluster: {:?}", config.hosts);

        let profile = ExecutionProfile::builder()
            .consistency(config.consistency.to_driver())
            .request_timeout(Some(config.request_timeout))
            .load_balancing_policy(host_selection_policy(config.host_selection))
            .retry_policy(Arc::new(DefaultRetryPolicy::new()))
            .build();

        let session = SessionBuilder::new()
            .known_nodes(config.contact_points())
            .connection_timeout(config.request_timeout)
            .default_execution_profile_handle(profile.into_handle())
            .build()
            .await?;

        info!("connected to cluster");

        Ok(Self {
            session: Arc::new(session),
            retry: RetryPolicy::new(&config.retry),
        })
    }

    /// Get the underlying driver session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Executes an unprepared statement, retrying with backoff until it
    /// succeeds or the retry attempts are exhausted.
    pub async fn execute<V: SerializeRow>(
        &self,
        cql: &str,
        values: V,
    ) -> Result<QueryResult, ExecutionError> {
        self.retry
            .execute(|| self.session.query_unpaged(cql, &values))
            .await
    }

    /// Executes a prepared statement with the same retry behavior.
    pub async fn execute_prepared<V: SerializeRow>(
        &self,
        prepared: &PreparedStatement,
        values: V,
    ) -> Result<QueryResult, ExecutionError> {
        self.retry
            .execute(|| self.session.execute_unpaged(prepared, &values))
            .await
    }

    /// Prepares a statement for repeated execution.
    pub async fn prepare(&self, cql: &str) -> Result<PreparedStatement, PrepareError> {
        self.session.prepare(cql).await
    }

    /// Round-trips a trivial statement to confirm the cluster answers.
    pub async fn health_check(&self) -> Result<(), CatalogError> {
        self.execute("SELECT now() FROM system.local", ())
            .await
            .map_err(|e| CatalogError::Connection(format!("health check failed: {}", e)))?;
        Ok(())
    }
}

fn host_selection_policy(selection: HostSelection) -> Arc<dyn LoadBalancingPolicy> {
    match selection {
        HostSelection::TokenAwareRoundRobin => DefaultPolicy::builder().token_aware(true).build(),
        HostSelection::RoundRobin => DefaultPolicy::builder().token_aware(false).build(),
    }
}
