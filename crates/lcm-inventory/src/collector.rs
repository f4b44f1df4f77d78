use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::ClusterAccessError;
use crate::source::ClusterSource;

/// Distinct images used by the containers and init containers of every pod in
/// `namespace`
pub async fn collect_images<S: ClusterSource>(
    source: &S,
    namespace: &str,
) -> Result<BTreeSet<String>, ClusterAccessError> {
    info!(namespace, "Fetching containers for namespace");
    let pods = source.list_pods(namespace).await?;

    let images: BTreeSet<String> = pods
        .iter()
        .flat_map(|pod| pod.images())
        .map(str::to_string)
        .collect();

    debug!(namespace, images = ?images, "Fetched containers in namespace");
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fake::FakeCluster;

    #[tokio::test]
    async fn test_duplicates_collapse() {
        let cluster = FakeCluster::default()
            .with_pod("web", &["nginx:1.19", "nginx:1.19"], &[])
            .with_pod("web", &["nginx:1.19", "envoy:1.30"], &[]);

        let images = collect_images(&cluster, "web").await.unwrap();
        assert_eq!(images.len(), 2);
        assert!(images.contains("nginx:1.19"));
        assert!(images.contains("envoy:1.30"));
    }

    #[tokio::test]
    async fn test_init_containers_included() {
        let cluster = FakeCluster::default().with_pod("jobs", &["worker:2"], &["busybox"]);

        let images = collect_images(&cluster, "jobs").await.unwrap();
        assert_eq!(
            images.into_iter().collect::<Vec<_>>(),
            vec!["busybox", "worker:2"]
        );
    }

    #[tokio::test]
    async fn test_empty_namespace() {
        let cluster = FakeCluster::default().with_namespace("empty");
        assert!(collect_images(&cluster, "empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pod_list_failure_is_returned() {
        let cluster = FakeCluster {
            deny_pods_in: Some("locked".to_string()),
            ..Default::default()
        };

        let err = collect_images(&cluster, "locked").await.unwrap_err();
        assert_eq!(err.action(), "Failed to list pods in locked");
    }
}
