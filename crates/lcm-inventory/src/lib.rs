//! Container image inventory for lcm
//!
//! This crate resolves the namespaces to inspect, collects the images used by
//! their pods, and parses every unique image reference into a
//! [`ContainerRecord`].

mod aggregate;
mod collector;
mod error;
mod image;
mod namespaces;
mod source;

pub use aggregate::{Inventory, RawImageSet};
pub use collector::collect_images;
pub use error::{BoxError, ClusterAccessError, ImageParseError};
pub use image::parse_image;
pub use namespaces::resolve_namespaces;
pub use source::ClusterSource;

// Re-export types used in our public API
pub use lcm_types::{ContainerRecord, InventoryReport, PodImages, UNTAGGED_VERSION};
