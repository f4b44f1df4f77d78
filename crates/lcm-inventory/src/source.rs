use std::future::Future;

use lcm_types::PodImages;

use crate::error::ClusterAccessError;

/// Read access to the cluster the inventory is taken from
pub trait ClusterSource {
    /// Names of every namespace in the cluster
    fn list_namespaces(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, ClusterAccessError>> + Send;

    /// Images of every pod in `namespace`
    fn list_pods(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<PodImages>, ClusterAccessError>> + Send;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory cluster that records which namespaces were queried
    #[derive(Default)]
    pub struct FakeCluster {
        pub namespaces: BTreeMap<String, Vec<PodImages>>,
        pub deny_namespace_list: bool,
        pub deny_pods_in: Option<String>,
        pub pod_calls: Mutex<Vec<String>>,
    }

    impl FakeCluster {
        pub fn with_pod(mut self, namespace: &str, containers: &[&str], init: &[&str]) -> Self {
            let pods = self.namespaces.entry(namespace.to_string()).or_default();
            let mut pod = PodImages::new(format!("{}-{}", namespace, pods.len()));
            pod.containers = containers.iter().map(|s| s.to_string()).collect();
            pod.init_containers = init.iter().map(|s| s.to_string()).collect();
            pods.push(pod);
            self
        }

        pub fn with_namespace(mut self, namespace: &str) -> Self {
            self.namespaces.entry(namespace.to_string()).or_default();
            self
        }

        pub fn pod_calls(&self) -> Vec<String> {
            self.pod_calls.lock().unwrap().clone()
        }
    }

    impl ClusterSource for FakeCluster {
        async fn list_namespaces(&self) -> Result<Vec<String>, ClusterAccessError> {
            if self.deny_namespace_list {
                return Err(ClusterAccessError::new("Failed to list namespaces", "forbidden"));
            }
            Ok(self.namespaces.keys().cloned().collect())
        }

        async fn list_pods(&self, namespace: &str) -> Result<Vec<PodImages>, ClusterAccessError> {
            self.pod_calls.lock().unwrap().push(namespace.to_string());
            if self.deny_pods_in.as_deref() == Some(namespace) {
                return Err(ClusterAccessError::new(
                    format!("Failed to list pods in {}", namespace),
                    "forbidden",
                ));
            }
            Ok(self.namespaces.get(namespace).cloned().unwrap_or_default())
        }
    }
}
