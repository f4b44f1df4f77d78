use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An image reference that could not be turned into a record.
///
/// Every variant keeps the original reference so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageParseError {
    /// Registry hosts with a port other than 443 can't be told apart from a tag
    #[error("unsupported port syntax in image reference `{reference}`")]
    UnsupportedPortSyntax { reference: String },

    #[error("image reference `{reference}` has no image name")]
    MissingName { reference: String },
}

impl ImageParseError {
    /// The raw reference that failed to parse
    pub fn reference(&self) -> &str {
        match self {
            Self::UnsupportedPortSyntax { reference } | Self::MissingName { reference } => {
                reference
            }
        }
    }
}

/// Failure to talk to the cluster. Always aborts the inventory run.
#[derive(Debug, Error)]
#[error("{action}")]
pub struct ClusterAccessError {
    action: String,
    #[source]
    source: BoxError,
}

impl ClusterAccessError {
    pub fn new(action: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            action: action.into(),
            source: source.into(),
        }
    }

    /// What was being attempted, e.g. "Failed to list namespaces"
    pub fn action(&self) -> &str {
        &self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_keeps_reference() {
        let err = ImageParseError::UnsupportedPortSyntax {
            reference: "registry.local:5000/app:1.0".to_string(),
        };
        assert_eq!(err.reference(), "registry.local:5000/app:1.0");
        assert!(err.to_string().contains("registry.local:5000/app:1.0"));
    }

    #[test]
    fn test_cluster_access_error_chain() {
        let err = ClusterAccessError::new("Failed to list pods in kube-system", "forbidden");
        assert_eq!(err.to_string(), "Failed to list pods in kube-system");
        assert_eq!(err.source().unwrap().to_string(), "forbidden");
    }
}
