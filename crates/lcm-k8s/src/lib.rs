//! Kubernetes client for lcm
//!
//! This crate provides the [`ClusterSource`] used against a real cluster,
//! listing namespaces and the images of their pods.

mod client;

pub use client::{ClusterConnection, KubeClusterSource, pod_images};

// Re-export types that are used in our public API
pub use lcm_inventory::{ClusterAccessError, ClusterSource};
pub use lcm_types::PodImages;
