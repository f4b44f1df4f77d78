use tracing::{debug, info};

use crate::error::ClusterAccessError;
use crate::source::ClusterSource;

/// Decide which namespaces to inspect
///
/// An explicit list is returned unchanged and is not checked against the
/// cluster. An empty list means every namespace the cluster reports.
pub async fn resolve_namespaces<S: ClusterSource>(
    source: &S,
    requested: &[String],
) -> Result<Vec<String>, ClusterAccessError> {
    if requested.is_empty() {
        debug!("No namespaces defined, fetching all namespaces from Kubernetes");
        return source.list_namespaces().await;
    }

    info!(namespaces = ?requested, "Get all containers from the namespaces");
    Ok(requested.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fake::FakeCluster;

    #[tokio::test]
    async fn test_explicit_namespaces_win() {
        let cluster = FakeCluster::default().with_namespace("default");
        let requested = vec!["team-a".to_string(), "does-not-exist".to_string()];

        let resolved = resolve_namespaces(&cluster, &requested).await.unwrap();
        assert_eq!(resolved, requested);
    }

    #[tokio::test]
    async fn test_empty_request_discovers_all() {
        let cluster = FakeCluster::default()
            .with_namespace("default")
            .with_namespace("kube-system");

        let resolved = resolve_namespaces(&cluster, &[]).await.unwrap();
        assert_eq!(resolved, vec!["default", "kube-system"]);
    }

    #[tokio::test]
    async fn test_discovery_failure_is_returned() {
        let cluster = FakeCluster {
            deny_namespace_list: true,
            ..Default::default()
        };

        let err = resolve_namespaces(&cluster, &[]).await.unwrap_err();
        assert_eq!(err.action(), "Failed to list namespaces");
    }

    #[tokio::test]
    async fn test_explicit_list_skips_discovery() {
        let cluster = FakeCluster {
            deny_namespace_list: true,
            ..Default::default()
        };

        let resolved = resolve_namespaces(&cluster, &["default".to_string()])
            .await
            .unwrap();
        assert_eq!(resolved, vec!["default"]);
    }
}
