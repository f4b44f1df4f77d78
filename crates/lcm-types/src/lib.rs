//! Shared types for lcm
//!
//! This crate contains data structures used across multiple lcm crates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

// ============================================================================
// Inventory Types
// ============================================================================

/// Version used when an image reference carries no tag.
///
/// `latest` can't be compared against released versions, so untagged
/// images are recorded as `"0"`.
pub const UNTAGGED_VERSION: &str = "0";

/// A parsed container image reference
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ContainerRecord {
    /// Image string exactly as reported by the cluster
    pub full_path: String,

    /// Registry host, empty when the image comes from the default registry
    pub registry_url: String,

    /// Repository path without registry host or version
    pub name: String,

    /// Tag, or [`UNTAGGED_VERSION`]
    pub version: String,
}

impl ContainerRecord {
    pub fn new(full_path: String, registry_url: String, name: String, version: String) -> Self {
        Self {
            full_path,
            registry_url,
            name,
            version,
        }
    }

    /// Whether the reference named an explicit registry host
    pub fn has_registry(&self) -> bool {
        !self.registry_url.is_empty()
    }

    /// Whether the reference carried no tag
    pub fn is_untagged(&self) -> bool {
        self.version == UNTAGGED_VERSION
    }
}

impl fmt::Display for ContainerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_registry() {
            write!(f, "{}/{}:{}", self.registry_url, self.name, self.version)
        } else {
            write!(f, "{}:{}", self.name, self.version)
        }
    }
}

// ============================================================================
// Cluster Types
// ============================================================================

/// Images referenced by a single pod
#[derive(Clone, Debug, Default)]
pub struct PodImages {
    pub name: String,
    pub containers: Vec<String>,
    pub init_containers: Vec<String>,
}

impl PodImages {
    pub fn new(name: String) -> Self {
        Self {
            name,
            containers: Vec::new(),
            init_containers: Vec::new(),
        }
    }

    /// All image strings, regular containers first
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.containers
            .iter()
            .chain(self.init_containers.iter())
            .map(String::as_str)
    }
}

/// Result of one inventory run
#[derive(Clone, Debug, Serialize)]
pub struct InventoryReport {
    pub collected_at: DateTime<Utc>,

    /// Namespaces that were inspected
    pub namespaces: Vec<String>,

    pub containers: Vec<ContainerRecord>,
}

impl InventoryReport {
    pub fn new(namespaces: Vec<String>, containers: Vec<ContainerRecord>) -> Self {
        Self {
            collected_at: Utc::now(),
            namespaces,
            containers,
        }
    }
}
