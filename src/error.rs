//! Error types for model construction and normalization

use thiserror::Error;

use crate::version::SchemaVersion;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Model construction errors
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{entity} is not available in version {version} (introduced in {introduced})")]
    UnsupportedVersion {
        entity: &'static str,
        version: SchemaVersion,
        introduced: SchemaVersion,
    },

    #[error("{entity}: missing field `{field}`")]
    MissingField { entity: &'static str, field: String },

    #[error("{entity}: invalid field `{field}`: {reason}")]
    InvalidField {
        entity: &'static str,
        field: String,
        reason: String,
    },

    #[error("{entity}: expected {expected}")]
    UnexpectedShape {
        entity: &'static str,
        expected: &'static str,
    },

    #[error("{entity}: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown facet: {0}")]
    UnknownFacet(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Strict decoding requires a pinned version")]
    VersionRequired,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Whether this error means the payload could not be turned into a record.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            ModelError::MissingField { .. }
                | ModelError::InvalidField { .. }
                | ModelError::UnexpectedShape { .. }
                | ModelError::Decode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_grouping() {
        let missing = ModelError::MissingField {
            entity: "Address",
            field: "postal_code".to_string(),
        };
        assert!(missing.is_construction());
        assert_eq!(missing.to_string(), "Address: missing field `postal_code`");

        assert!(!ModelError::UnknownFacet("area".to_string()).is_construction());
        assert!(!ModelError::UnsupportedVersion {
            entity: "Bank",
            version: SchemaVersion::V2022_09_01,
            introduced: SchemaVersion::V2023_09_01,
        }
        .is_construction());
    }
}
