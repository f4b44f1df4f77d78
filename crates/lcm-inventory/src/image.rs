use lcm_types::{ContainerRecord, UNTAGGED_VERSION};

use crate::error::ImageParseError;

/// Some registries spell out the default HTTPS port; it is not a tag separator
const DEFAULT_HTTPS_PORT: &str = ":443";

/// Parse a raw image reference into a [`ContainerRecord`]
///
/// The steps run in a fixed order:
///
/// 1. every `:443` is removed
/// 2. two or more remaining colons are rejected, since a registry port and a
///    tag can't be told apart
/// 3. a single colon splits the tag off; no colon means [`UNTAGGED_VERSION`]
/// 4. if what is left contains a dot, everything before the first `/` is the
///    registry host
pub fn parse_image(raw: &str) -> Result<ContainerRecord, ImageParseError> {
    let reference = raw.replace(DEFAULT_HTTPS_PORT, "");

    if reference.matches(':').count() >= 2 {
        return Err(ImageParseError::UnsupportedPortSyntax {
            reference: raw.to_string(),
        });
    }

    let (working, version) = match reference.split_once(':') {
        Some((name, tag)) if !tag.is_empty() => (name, tag),
        Some((name, _)) => (name, UNTAGGED_VERSION),
        None => (reference.as_str(), UNTAGGED_VERSION),
    };

    // Image names are assumed to never contain a dot, so a dot means the
    // reference starts with a registry host.
    let (registry_url, name) = match working.split_once('/') {
        Some((host, name)) if working.contains('.') => (host, name),
        _ => ("", working),
    };

    if name.is_empty() {
        return Err(ImageParseError::MissingName {
            reference: raw.to_string(),
        });
    }

    Ok(ContainerRecord::new(
        raw.to_string(),
        registry_url.to_string(),
        name.to_string(),
        version.to_string(),
    ))
}
