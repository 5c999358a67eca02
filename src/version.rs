//! Schema version tokens
//!
//! The API identifies wire shapes by a release date formatted `YYYY-MM-DD`.
//! Because the format is fixed-width and zero-padded, lexicographic order
//! equals chronological order. All comparisons go through
//! [`SchemaVersion::ordering`] so that assumption lives in one place.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("version pattern compiles"));

/// A wire schema version such as `2022-11-01`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaVersion(Cow<'static, str>);

impl SchemaVersion {
    pub const V2020_11_30: SchemaVersion = SchemaVersion::known("2020-11-30");
    pub const V2022_09_01: SchemaVersion = SchemaVersion::known("2022-09-01");
    pub const V2022_11_01: SchemaVersion = SchemaVersion::known("2022-11-01");
    pub const V2023_09_01: SchemaVersion = SchemaVersion::known("2023-09-01");
    pub const V2024_01_01: SchemaVersion = SchemaVersion::known("2024-01-01");
    pub const V2025_01_01: SchemaVersion = SchemaVersion::known("2025-01-01");

    /// Every version this crate ships models for, oldest first
    pub const KNOWN: [SchemaVersion; 6] = [
        Self::V2020_11_30,
        Self::V2022_09_01,
        Self::V2022_11_01,
        Self::V2023_09_01,
        Self::V2024_01_01,
        Self::V2025_01_01,
    ];

    pub const OLDEST: SchemaVersion = Self::V2020_11_30;
    pub const LATEST: SchemaVersion = Self::V2025_01_01;

    /// Corporate-info address fields moved under a nested `address` object
    pub const NESTED_CORPORATE_ADDRESS: SchemaVersion = Self::V2024_01_01;
    /// Corporate-info `close_cause` became an integer
    pub const NUMERIC_CLOSE_CAUSE: SchemaVersion = Self::V2025_01_01;
    /// Branch collections map each code to an array of branches
    pub const BRANCH_SEQUENCES: SchemaVersion = Self::V2025_01_01;

    const fn known(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    /// Parse a version token, rejecting anything that is not a real `YYYY-MM-DD` date
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if !VERSION_PATTERN.is_match(token) {
            return Err(ModelError::InvalidVersion(token.to_string()));
        }
        NaiveDate::parse_from_str(token, "%Y-%m-%d")
            .map_err(|_| ModelError::InvalidVersion(token.to_string()))?;

        Ok(Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == token)
            .unwrap_or_else(|| Self(Cow::Owned(token.to_string()))))
    }

    /// Get the version token (e.g., "2022-11-01")
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The single ordering used for version gating
    pub fn ordering(&self, other: &SchemaVersion) -> Ordering {
        self.as_str().cmp(other.as_str())
    }

    /// Check if this version is `other` or newer
    pub fn is_at_least(&self, other: &SchemaVersion) -> bool {
        self.ordering(other) != Ordering::Less
    }

    /// Whether this crate ships models for exactly this token
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(self)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.0.into_owned()
    }
}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering(other)
    }
}
