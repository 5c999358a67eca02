//! Entity families served by the API

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::version::SchemaVersion;

/// Family of records sharing one canonical shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    /// Postal address (with optional corporation overlay)
    Address,
    /// Address search results; shares the address record shape
    AddressSearch,
    /// Administrative area
    City,
    /// National holiday
    Holiday,
    /// Corporate-registry record
    CorporateInfo,
    /// Bank directory record
    Bank,
    /// Bank branch directory record
    BankBranch,
    /// Qualified invoice issuer record
    InvoiceIssuer,
}

impl Entity {
    pub const ALL: [Entity; 8] = [
        Entity::Address,
        Entity::AddressSearch,
        Entity::City,
        Entity::Holiday,
        Entity::CorporateInfo,
        Entity::Bank,
        Entity::BankBranch,
        Entity::InvoiceIssuer,
    ];

    /// Record name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Address => "Address",
            Entity::AddressSearch => "AddressSearcherResponse",
            Entity::City => "City",
            Entity::Holiday => "Holiday",
            Entity::CorporateInfo => "NTACorporateInfo",
            Entity::Bank => "Bank",
            Entity::BankBranch => "BankBranch",
            Entity::InvoiceIssuer => "NTAQualifiedInvoiceIssuerInfo",
        }
    }

    /// First version whose wire format carries this family
    pub fn introduced_in(&self) -> SchemaVersion {
        match self {
            Entity::Address | Entity::Holiday => SchemaVersion::V2020_11_30,
            Entity::AddressSearch | Entity::City | Entity::CorporateInfo => {
                SchemaVersion::V2022_09_01
            }
            Entity::Bank | Entity::BankBranch => SchemaVersion::V2023_09_01,
            Entity::InvoiceIssuer => SchemaVersion::V2024_01_01,
        }
    }

    pub fn is_available_in(&self, version: &SchemaVersion) -> bool {
        version.is_at_least(&self.introduced_in())
    }

    /// Fail with `UnsupportedVersion` when `version` predates this family
    pub fn ensure_available(&self, version: &SchemaVersion) -> Result<()> {
        if self.is_available_in(version) {
            Ok(())
        } else {
            Err(ModelError::UnsupportedVersion {
                entity: self.name(),
                version: version.clone(),
                introduced: self.introduced_in(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_exists_in_latest() {
        for entity in Entity::ALL {
            assert!(entity.is_available_in(&SchemaVersion::LATEST), "{}", entity.name());
        }
    }

    #[test]
    fn test_bank_predates_introduction() {
        let err = Entity::Bank
            .ensure_available(&SchemaVersion::V2022_11_01)
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnsupportedVersion { entity: "Bank", ref introduced, .. }
                if *introduced == SchemaVersion::V2023_09_01
        ));
        assert!(Entity::Bank.ensure_available(&SchemaVersion::V2023_09_01).is_ok());
    }

    #[test]
    fn test_address_search_is_newer_than_address() {
        let err = Entity::AddressSearch
            .ensure_available(&SchemaVersion::V2020_11_30)
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnsupportedVersion { entity: "AddressSearcherResponse", ref introduced, .. }
                if *introduced == SchemaVersion::V2022_09_01
        ));
        assert!(Entity::Address.is_available_in(&SchemaVersion::V2020_11_30));
    }

    #[test]
    fn test_holiday_is_stable_across_versions() {
        for version in SchemaVersion::KNOWN {
            assert!(Entity::Holiday.is_available_in(&version));
        }
    }
}
