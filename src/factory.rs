//! Entry points from raw payloads to records
//!
//! A pinned version decodes the strict wire model for that version. Without
//! one, the version is inferred and the canonical record is built. Either
//! result converts to canonical form with [`Decoded::into_canonical`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::compat::{self, Normalize};
use crate::error::{ModelError, Result};
use crate::models::pinned::{self, Pinned};
use crate::version::SchemaVersion;

/// Result of a factory call
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<S, C> {
    /// Strict wire model, when the caller pinned a version
    Strict(S),
    /// Canonical record, when the version was inferred
    Canonical(C),
}

impl<S: Pinned, C: Normalize> Decoded<S, C> {
    pub fn strict(&self) -> Option<&S> {
        match self {
            Decoded::Strict(strict) => Some(strict),
            Decoded::Canonical(_) => None,
        }
    }

    pub fn canonical(&self) -> Option<&C> {
        match self {
            Decoded::Strict(_) => None,
            Decoded::Canonical(canonical) => Some(canonical),
        }
    }

    /// Convert into the canonical record. A strict model is re-normalized
    /// from its own wire shape under the version it was decoded as.
    pub fn into_canonical(self) -> Result<C> {
        match self {
            Decoded::Canonical(canonical) => Ok(canonical),
            Decoded::Strict(strict) => {
                let version = strict.shape_version();
                C::normalize(&strict.to_payload()?, Some(&version))
            }
        }
    }
}

/// Decode `payload` as `S` when `version` is given, else normalize as `C`
pub fn decode<S: Pinned, C: Normalize>(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<Decoded<S, C>> {
    match version {
        Some(version) => {
            debug!(entity = S::ENTITY.name(), %version, "decoding strict model");
            S::from_payload(payload, version).map(Decoded::Strict)
        }
        None => C::normalize(payload, None).map(Decoded::Canonical),
    }
}

pub type AddressResolverResponse =
    Decoded<pinned::AddressResolverResponse, compat::AddressResolverResponse>;
pub type AddressSearcherResponse =
    Decoded<pinned::AddressSearcherResponse, compat::AddressSearcherResponse>;
pub type CityResolverResponse = Decoded<pinned::CityResolverResponse, compat::CityResolverResponse>;
pub type HolidaySearchResult = Decoded<pinned::HolidaySearchResult, compat::HolidaySearchResult>;
pub type NTACorporateInfoResolverResponse =
    Decoded<pinned::NTACorporateInfoResolverResponse, compat::NTACorporateInfoResolverResponse>;
pub type NTACorporateInfoSearcherResponse =
    Decoded<pinned::NTACorporateInfoSearcherResponse, compat::NTACorporateInfoSearcherResponse>;
pub type BankResolverResponse = Decoded<pinned::BankResolverResponse, compat::BankResolverResponse>;
pub type BanksResponse = Decoded<pinned::BanksResponse, compat::BanksResponse>;
pub type BankBranchesResponse = Decoded<pinned::BankBranchesResponse, compat::BankBranchesResponse>;
pub type BankBranchResolverResponse =
    Decoded<pinned::BankBranchResolverResponse, compat::BankBranchResolverResponse>;
pub type NTAQualifiedInvoiceIssuerInfoResolverResponse = Decoded<
    pinned::NTAQualifiedInvoiceIssuerInfoResolverResponse,
    compat::NTAQualifiedInvoiceIssuerInfoResolverResponse,
>;

pub fn create_address_resolver_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<AddressResolverResponse> {
    decode(payload, version)
}

pub fn create_address_searcher_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<AddressSearcherResponse> {
    decode(payload, version)
}

pub fn create_city_resolver_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<CityResolverResponse> {
    decode(payload, version)
}

pub fn create_holiday_search_result(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<HolidaySearchResult> {
    decode(payload, version)
}

pub fn create_corporate_info_resolver_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<NTACorporateInfoResolverResponse> {
    decode(payload, version)
}

/// Items are all built under the response-level version
pub fn create_corporate_info_searcher_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<NTACorporateInfoSearcherResponse> {
    decode(payload, version)
}

pub fn create_bank_resolver_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<BankResolverResponse> {
    decode(payload, version)
}

pub fn create_banks_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<BanksResponse> {
    decode(payload, version)
}

pub fn create_bank_branches_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<BankBranchesResponse> {
    decode(payload, version)
}

pub fn create_bank_branch_resolver_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<BankBranchResolverResponse> {
    decode(payload, version)
}

pub fn create_invoice_issuer_resolver_response(
    payload: &Value,
    version: Option<&SchemaVersion>,
) -> Result<NTAQualifiedInvoiceIssuerInfoResolverResponse> {
    decode(payload, version)
}

/// Which form a caller wants back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    #[default]
    Canonical,
    Strict,
}

/// API response kinds accepted by [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Address,
    AddressSearch,
    City,
    Holidays,
    Corporate,
    CorporateSearch,
    Bank,
    Banks,
    BankBranches,
    BankBranch,
    InvoiceIssuer,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 11] = [
        ResponseKind::Address,
        ResponseKind::AddressSearch,
        ResponseKind::City,
        ResponseKind::Holidays,
        ResponseKind::Corporate,
        ResponseKind::CorporateSearch,
        ResponseKind::Bank,
        ResponseKind::Banks,
        ResponseKind::BankBranches,
        ResponseKind::BankBranch,
        ResponseKind::InvoiceIssuer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Address => "address",
            ResponseKind::AddressSearch => "address-search",
            ResponseKind::City => "city",
            ResponseKind::Holidays => "holidays",
            ResponseKind::Corporate => "corporate",
            ResponseKind::CorporateSearch => "corporate-search",
            ResponseKind::Bank => "bank",
            ResponseKind::Banks => "banks",
            ResponseKind::BankBranches => "bank-branches",
            ResponseKind::BankBranch => "bank-branch",
            ResponseKind::InvoiceIssuer => "invoice-issuer",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown response kind `{s}` (expected one of: {})", known.join(", "))
            })
    }
}

fn render_as<S, C>(payload: &Value, version: Option<&SchemaVersion>, mode: DecodeMode) -> Result<Value>
where
    S: Pinned,
    C: Normalize + Serialize,
{
    match mode {
        DecodeMode::Strict => {
            let version = version.ok_or(ModelError::VersionRequired)?;
            S::from_payload(payload, version)?.to_payload()
        }
        DecodeMode::Canonical => Ok(serde_json::to_value(C::normalize(payload, version)?)?),
    }
}

/// Decode `payload` as `kind` and re-encode the chosen form as JSON.
///
/// Canonical mode honours `version` when given instead of inferring it;
/// strict mode requires one.
pub fn render(
    kind: ResponseKind,
    payload: &Value,
    version: Option<&SchemaVersion>,
    mode: DecodeMode,
) -> Result<Value> {
    debug!(%kind, ?mode, "rendering payload");
    match kind {
        ResponseKind::Address => render_as::<
            pinned::AddressResolverResponse,
            compat::AddressResolverResponse,
        >(payload, version, mode),
        ResponseKind::AddressSearch => render_as::<
            pinned::AddressSearcherResponse,
            compat::AddressSearcherResponse,
        >(payload, version, mode),
        ResponseKind::City => {
            render_as::<pinned::CityResolverResponse, compat::CityResolverResponse>(
                payload, version, mode,
            )
        }
        ResponseKind::Holidays => {
            render_as::<pinned::HolidaySearchResult, compat::HolidaySearchResult>(
                payload, version, mode,
            )
        }
        ResponseKind::Corporate => render_as::<
            pinned::NTACorporateInfoResolverResponse,
            compat::NTACorporateInfoResolverResponse,
        >(payload, version, mode),
        ResponseKind::CorporateSearch => render_as::<
            pinned::NTACorporateInfoSearcherResponse,
            compat::NTACorporateInfoSearcherResponse,
        >(payload, version, mode),
        ResponseKind::Bank => {
            render_as::<pinned::BankResolverResponse, compat::BankResolverResponse>(
                payload, version, mode,
            )
        }
        ResponseKind::Banks => {
            render_as::<pinned::BanksResponse, compat::BanksResponse>(payload, version, mode)
        }
        ResponseKind::BankBranches => {
            render_as::<pinned::BankBranchesResponse, compat::BankBranchesResponse>(
                payload, version, mode,
            )
        }
        ResponseKind::BankBranch => render_as::<
            pinned::BankBranchResolverResponse,
            compat::BankBranchResolverResponse,
        >(payload, version, mode),
        ResponseKind::InvoiceIssuer => render_as::<
            pinned::NTAQualifiedInvoiceIssuerInfoResolverResponse,
            compat::NTAQualifiedInvoiceIssuerInfoResolverResponse,
        >(payload, version, mode),
    }
}
