//! Responses decoded under a caller-pinned version
//!
//! Each enum has one variant per version that changed the response shape.
//! A pinned version selects the newest variant introduced at or before it,
//! so tokens newer than this crate still decode with the latest shape.

use serde::Serialize;
use serde_json::Value;

use super::{v2020_11_30, v2022_09_01, v2022_11_01, v2023_09_01, v2024_01_01, v2025_01_01};
use super::StrictModel;
use crate::entity::Entity;
use crate::error::{ModelError, Result};
use crate::version::SchemaVersion;

/// A strict response tagged with the wire shape it was decoded as
pub trait Pinned: Sized + Serialize {
    const ENTITY: Entity;

    /// Decode `payload` with the shape `version` prescribes
    fn from_payload(payload: &Value, version: &SchemaVersion) -> Result<Self>;

    /// Version that introduced the decoded shape
    fn shape_version(&self) -> SchemaVersion;

    fn to_payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

macro_rules! pinned {
    (
        $(#[$meta:meta])*
        $name:ident for $entity:expr;
        $first:ident => $first_ty:ty
        $(, $variant:ident => $ty:ty)* $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum $name {
            $first($first_ty),
            $($variant($ty),)*
        }

        impl Pinned for $name {
            const ENTITY: Entity = $entity;

            fn from_payload(payload: &Value, version: &SchemaVersion) -> Result<Self> {
                let unsupported = || ModelError::UnsupportedVersion {
                    entity: stringify!($name),
                    version: version.clone(),
                    introduced: SchemaVersion::$first,
                };
                let shapes = [SchemaVersion::$first, $(SchemaVersion::$variant,)*];
                let shape = shapes
                    .into_iter()
                    .rev()
                    .find(|shape| version.is_at_least(shape))
                    .ok_or_else(unsupported)?;

                if shape == SchemaVersion::$first {
                    return <$first_ty as StrictModel>::from_payload(payload).map($name::$first);
                }
                $(
                    if shape == SchemaVersion::$variant {
                        return <$ty as StrictModel>::from_payload(payload).map($name::$variant);
                    }
                )*
                Err(unsupported())
            }

            fn shape_version(&self) -> SchemaVersion {
                match self {
                    $name::$first(_) => SchemaVersion::$first,
                    $($name::$variant(_) => SchemaVersion::$variant,)*
                }
            }
        }
    };
}

pinned! {
    /// Postal-code lookup
    AddressResolverResponse for Entity::Address;
    V2020_11_30 => v2020_11_30::AddressResolverResponse,
    V2022_09_01 => v2022_09_01::AddressResolverResponse,
    V2022_11_01 => v2022_11_01::AddressResolverResponse,
}

pinned! {
    /// Address search
    AddressSearcherResponse for Entity::AddressSearch;
    V2022_09_01 => v2022_09_01::AddressSearcherResponse,
    V2022_11_01 => v2022_11_01::AddressSearcherResponse,
}

pinned! {
    /// City listing for a prefecture
    CityResolverResponse for Entity::City;
    V2022_09_01 => v2022_09_01::CityResolverResponse,
    V2022_11_01 => v2022_11_01::CityResolverResponse,
}

pinned! {
    /// Holiday search
    HolidaySearchResult for Entity::Holiday;
    V2020_11_30 => v2020_11_30::HolidaySearchResult,
}

pinned! {
    /// Corporate-number lookup
    NTACorporateInfoResolverResponse for Entity::CorporateInfo;
    V2022_09_01 => v2022_09_01::NTACorporateInfoResolverResponse,
    V2024_01_01 => v2024_01_01::NTACorporateInfoResolverResponse,
    V2025_01_01 => v2025_01_01::NTACorporateInfoResolverResponse,
}

pinned! {
    /// Corporate-info search
    NTACorporateInfoSearcherResponse for Entity::CorporateInfo;
    V2022_09_01 => v2022_09_01::NTACorporateInfoSearcherResponse,
    V2024_01_01 => v2024_01_01::NTACorporateInfoSearcherResponse,
    V2025_01_01 => v2025_01_01::NTACorporateInfoSearcherResponse,
}

pinned! {
    /// Bank lookup
    BankResolverResponse for Entity::Bank;
    V2023_09_01 => v2023_09_01::BankResolverResponse,
}

pinned! {
    /// Bank listing
    BanksResponse for Entity::Bank;
    V2023_09_01 => v2023_09_01::BanksResponse,
}

pinned! {
    /// All branches of a bank
    BankBranchesResponse for Entity::BankBranch;
    V2023_09_01 => v2023_09_01::BankBranchesResponse,
    V2025_01_01 => v2025_01_01::BankBranchesResponse,
}

pinned! {
    /// Branch lookup by code
    BankBranchResolverResponse for Entity::BankBranch;
    V2023_09_01 => v2023_09_01::BankBranchResolverResponse,
    V2025_01_01 => v2025_01_01::BankBranchResolverResponse,
}

pinned! {
    /// Qualified invoice issuer lookup
    NTAQualifiedInvoiceIssuerInfoResolverResponse for Entity::InvoiceIssuer;
    V2024_01_01 => v2024_01_01::NTAQualifiedInvoiceIssuerInfoResolverResponse,
}
