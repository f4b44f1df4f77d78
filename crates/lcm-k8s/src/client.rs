use k8s_openapi::api::core::v1::{Container, Namespace, Pod};
use kube::Api;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

use lcm_inventory::{ClusterAccessError, ClusterSource};
use lcm_types::PodImages;

/// How to reach the cluster
#[derive(Clone, Debug, Default)]
pub struct ClusterConnection {
    /// Use the local kubeconfig instead of the in-cluster service account
    pub local: bool,

    /// Kubeconfig context to use (local only, defaults to the current one)
    pub context: Option<String>,
}

/// Kubernetes API backed cluster source
pub struct KubeClusterSource {
    client: kube::Client,
}

impl KubeClusterSource {
    /// Build a client from the kubeconfig or the in-cluster environment
    pub async fn connect(connection: &ClusterConnection) -> Result<Self, ClusterAccessError> {
        let config = if connection.local {
            Self::local_config(connection.context.as_deref()).await?
        } else {
            debug!("Accessing Kubernetes inside the cluster");
            kube::Config::incluster().map_err(|e| {
                ClusterAccessError::new("Could not find kubernetes config in the cluster", e)
            })?
        };

        let client = kube::Client::try_from(config)
            .map_err(|e| ClusterAccessError::new("Could not load kubernetes config", e))?;

        Ok(Self { client })
    }

    async fn local_config(context: Option<&str>) -> Result<kube::Config, ClusterAccessError> {
        debug!(context = ?context, "Accessing Kubernetes locally");
        let kubeconfig = Kubeconfig::read().map_err(|e| {
            ClusterAccessError::new("Failed to read kubeconfig. Is kubectl configured?", e)
        })?;

        kube::Config::from_custom_kubeconfig(
            kubeconfig,
            &KubeConfigOptions {
                context: context.map(str::to_string),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| {
            ClusterAccessError::new(
                format!(
                    "Failed to create config for context: {}",
                    context.unwrap_or("<current>")
                ),
                e,
            )
        })
    }
}

impl ClusterSource for KubeClusterSource {
    async fn list_namespaces(&self) -> Result<Vec<String>, ClusterAccessError> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let list = namespaces
            .list(&ListParams::default())
            .await
            .map_err(|e| ClusterAccessError::new("Failed to list namespaces", e))?;

        Ok(list
            .items
            .into_iter()
            .filter_map(|ns| ns.metadata.name)
            .collect())
    }

    async fn list_pods(&self, namespace: &str) -> Result<Vec<PodImages>, ClusterAccessError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = pods.list(&ListParams::default()).await.map_err(|e| {
            ClusterAccessError::new(format!("Failed to list pods in {}", namespace), e)
        })?;

        Ok(list.items.iter().map(pod_images).collect())
    }
}

/// Images referenced by a pod's containers and init containers
///
/// Containers without an image (possible when a controller fills it in later)
/// are skipped.
pub fn pod_images(pod: &Pod) -> PodImages {
    let mut info = PodImages::new(pod.metadata.name.clone().unwrap_or_default());

    if let Some(spec) = &pod.spec {
        info.containers = images_of(&spec.containers);
        if let Some(init) = &spec.init_containers {
            info.init_containers = images_of(init);
        }
    }

    info
}

fn images_of(containers: &[Container]) -> Vec<String> {
    containers.iter().filter_map(|c| c.image.clone()).collect()
}
