//! Canonical, version-tolerant records
//!
//! Every canonical record is a superset of all wire versions of its entity.
//! Fields a version does not carry are [`Presence::Unset`](crate::Presence),
//! integer-or-string fields are always strings, and unknown keys are
//! dropped. Construction is all-or-nothing.

use serde_json::Value;

use crate::entity::Entity;
use crate::error::Result;
use crate::resolve::{self, Probe};
use crate::version::SchemaVersion;

pub(crate) mod fields;

mod address;
mod bank;
mod corporate;
mod holiday;
mod invoice;

pub use address::{
    Address, AddressResolverResponse, AddressSearcherResponse, City, CityResolverResponse,
    Corporation,
};
pub use bank::{
    Bank, BankBranch, BankBranchResolverResponse, BankBranchesResponse, BankResolverResponse,
    BanksResponse,
};
pub use corporate::{
    NTACorporateInfo, NTACorporateInfoResolverResponse, NTACorporateInfoSearcherResponse,
};
pub use holiday::{Holiday, HolidaySearchResult};
pub use invoice::{
    NTAEntityAddress, NTAQualifiedInvoiceIssuerInfo, NTAQualifiedInvoiceIssuerInfoResolverResponse,
};

/// Conversion from a raw payload into a canonical record
pub trait Normalize: Sized {
    const ENTITY: Entity;

    /// How to infer the version when none is given
    const PROBE: Probe;

    /// Build the record under an already-resolved version. Nested records
    /// are built with the same version.
    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self>;

    /// Resolve the version (explicit, else inferred), check the family
    /// exists in it, then build.
    fn normalize(payload: &Value, version: Option<&SchemaVersion>) -> Result<Self> {
        let version = resolve::resolve(Self::ENTITY, Self::PROBE, payload, version);
        Self::ENTITY.ensure_available(&version)?;
        Self::normalize_as(payload, &version)
    }
}
