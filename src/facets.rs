//! Faceted-search aggregates for corporate-info searches
//!
//! Each dimension is independently optional. A dimension missing from the
//! payload was not computed, which is different from an empty aggregate, so
//! lookups of absent dimensions fail instead of returning an empty slice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// One `(label, count)` aggregate bucket
pub type FacetBucket = (String, u64);

const ENTITY: &str = "NTACorporateInfoFacetResults";

/// Named facet dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetDimension {
    Area,
    Kind,
    Process,
    CloseCause,
}

impl FacetDimension {
    pub const ALL: [FacetDimension; 4] = [
        FacetDimension::Area,
        FacetDimension::Kind,
        FacetDimension::Process,
        FacetDimension::CloseCause,
    ];

    /// Get the wire key for this dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetDimension::Area => "area",
            FacetDimension::Kind => "kind",
            FacetDimension::Process => "process",
            FacetDimension::CloseCause => "close_cause",
        }
    }
}

impl fmt::Display for FacetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetDimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ModelError::UnknownFacet(s.to_string()))
    }
}

/// Facet aggregates returned alongside corporate-info search results
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NTACorporateInfoFacetResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Vec<FacetBucket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Vec<FacetBucket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<FacetBucket>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_cause: Option<Vec<FacetBucket>>,
}

impl NTACorporateInfoFacetResults {
    /// Decode the `facets` member of a search payload.
    ///
    /// `null` decodes the same as an empty object: every dimension absent.
    pub fn from_payload(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => Self::deserialize(value).map_err(|source| ModelError::Decode {
                entity: ENTITY,
                source,
            }),
            _ => Err(ModelError::UnexpectedShape {
                entity: ENTITY,
                expected: "an object of facet arrays",
            }),
        }
    }

    /// Buckets for a dimension, `None` when it was not computed
    pub fn dimension(&self, dimension: FacetDimension) -> Option<&[FacetBucket]> {
        match dimension {
            FacetDimension::Area => self.area.as_deref(),
            FacetDimension::Kind => self.kind.as_deref(),
            FacetDimension::Process => self.process.as_deref(),
            FacetDimension::CloseCause => self.close_cause.as_deref(),
        }
    }

    /// Look up a dimension by its wire name.
    ///
    /// Fails with `UnknownFacet` for unknown names and for dimensions that
    /// were not computed; check [`contains`](Self::contains) first.
    pub fn get(&self, name: &str) -> Result<&[FacetBucket]> {
        let dimension: FacetDimension = name.parse()?;
        self.dimension(dimension)
            .ok_or_else(|| ModelError::UnknownFacet(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        name.parse::<FacetDimension>()
            .map(|d| self.dimension(d).is_some())
            .unwrap_or(false)
    }

    /// Computed dimensions in declaration order
    pub fn present(&self) -> impl Iterator<Item = (FacetDimension, &[FacetBucket])> {
        FacetDimension::ALL
            .into_iter()
            .filter_map(move |d| self.dimension(d).map(|buckets| (d, buckets)))
    }
}

/// Serde adapter for searcher responses: a `null` facets member means no
/// dimension was computed.
pub(crate) fn deserialize_facets<'de, D>(
    deserializer: D,
) -> std::result::Result<NTACorporateInfoFacetResults, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<NTACorporateInfoFacetResults>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_area_only() {
        let facets = NTACorporateInfoFacetResults::from_payload(&json!({
            "area": [["東京都", 3], ["大阪府", 1]]
        }))
        .unwrap();

        assert!(facets.contains("area"));
        assert_eq!(
            facets.get("area").unwrap(),
            &[("東京都".to_string(), 3), ("大阪府".to_string(), 1)]
        );

        assert!(!facets.contains("kind"));
        assert!(matches!(facets.get("kind"), Err(ModelError::UnknownFacet(name)) if name == "kind"));
    }

    #[test]
    fn test_empty_dimension_is_present() {
        let facets = NTACorporateInfoFacetResults::from_payload(&json!({"process": []})).unwrap();
        assert!(facets.contains("process"));
        assert!(facets.get("process").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let facets = NTACorporateInfoFacetResults::from_payload(&json!({
            "area": [],
            "prefecture": [["東京都", 1]]
        }))
        .unwrap();
        assert!(!facets.contains("prefecture"));
        assert!(matches!(facets.get("prefecture"), Err(ModelError::UnknownFacet(_))));
    }

    #[test]
    fn test_null_means_nothing_computed() {
        let facets = NTACorporateInfoFacetResults::from_payload(&Value::Null).unwrap();
        assert_eq!(facets.present().count(), 0);
    }

    #[test]
    fn test_present_order() {
        let facets = NTACorporateInfoFacetResults::from_payload(&json!({
            "close_cause": [["01", 2]],
            "kind": [["301", 5]]
        }))
        .unwrap();
        let names: Vec<_> = facets.present().map(|(d, _)| d.as_str()).collect();
        assert_eq!(names, vec!["kind", "close_cause"]);
    }

    #[test]
    fn test_non_object_payload() {
        let err = NTACorporateInfoFacetResults::from_payload(&json!([["area", 1]])).unwrap_err();
        assert!(err.is_construction());
    }
}
