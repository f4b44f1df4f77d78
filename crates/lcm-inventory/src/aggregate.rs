use std::collections::BTreeSet;

use lcm_types::{ContainerRecord, InventoryReport};
use tracing::{error, info};

use crate::collector::collect_images;
use crate::error::ClusterAccessError;
use crate::image::parse_image;
use crate::namespaces::resolve_namespaces;
use crate::source::ClusterSource;

/// Unique raw image strings gathered across namespaces
///
/// Identity is exact string equality, so `host:443/app` and `host/app` are
/// separate entries until they are parsed.
#[derive(Clone, Debug, Default)]
pub struct RawImageSet {
    images: BTreeSet<String>,
}

impl RawImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the images of one namespace
    pub fn merge(&mut self, images: impl IntoIterator<Item = String>) {
        self.images.extend(images);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Parse every image, logging and dropping the ones that can't be parsed
    pub fn into_records(self) -> Vec<ContainerRecord> {
        self.images
            .into_iter()
            .filter_map(|raw| match parse_image(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    error!(image = e.reference(), error = %e, "Skipping image");
                    None
                }
            })
            .collect()
    }
}

/// Builds the container inventory of a cluster
pub struct Inventory<S> {
    source: S,
}

impl<S: ClusterSource> Inventory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `requested` namespaces and aggregate their containers
    pub async fn collect(
        &self,
        requested: &[String],
    ) -> Result<InventoryReport, ClusterAccessError> {
        let namespaces = resolve_namespaces(&self.source, requested).await?;
        let containers = self.aggregate(&namespaces).await?;
        Ok(InventoryReport::new(namespaces, containers))
    }

    /// Parsed, deduplicated containers of `namespaces`
    ///
    /// Namespaces are fetched one after another. The first cluster error aborts
    /// the whole run; unparsable images are only logged.
    pub async fn aggregate(
        &self,
        namespaces: &[String],
    ) -> Result<Vec<ContainerRecord>, ClusterAccessError> {
        let mut raw = RawImageSet::new();
        for namespace in namespaces {
            raw.merge(collect_images(&self.source, namespace).await?);
        }

        let unique = raw.len();
        let containers = raw.into_records();
        info!(
            namespaces = namespaces.len(),
            unique,
            parsed = containers.len(),
            "Finished fetching all containers"
        );
        Ok(containers)
    }
}
