//! Wire models for version 2024-01-01
//!
//! Corporate info nests its address under `address` and switches
//! `sequence_number`, `correct`, `kind` and `hihyoji` to integers. Qualified
//! invoice issuers are introduced.

use serde::{Deserialize, Serialize};

use super::required_nullable;

use crate::facets::deserialize_facets;
use crate::version::SchemaVersion;

pub use super::v2023_09_01::{
    Address, AddressResolverResponse, AddressSearcherResponse, Bank, BankBranch, BankBranchData,
    BankBranchResolverResponse, BankBranchesData, BankBranchesResponse, BankResolverResponse,
    BanksResponse, City, CityResolverResponse, Corporation, Holiday, HolidaySearchResult,
    NTACorporateInfoFacetResults,
};

/// Structured address shared by registry records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTAEntityAddress {
    pub jisx0402: String,
    pub postal_code: String,
    pub prefecture: String,
    pub prefecture_kana: String,
    pub prefecture_roman: String,
    pub city: String,
    pub city_kana: String,
    pub city_roman: String,
    pub town: String,
    pub town_kana: String,
    pub town_roman: String,
    pub kyoto_street: String,
    pub block_lot_num: String,
    pub building: String,
    pub floor_room: String,
    pub street_number: String,
}

/// Corporate-registry record with a nested address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTACorporateInfo {
    pub published_date: String,
    pub sequence_number: i64,
    pub corporate_number: String,
    pub process: String,
    pub correct: i64,
    pub update_date: String,
    pub change_date: String,
    pub name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub name_image_id: Option<String>,
    pub kind: i64,
    pub address: NTAEntityAddress,
    #[serde(deserialize_with = "required_nullable")]
    pub address_image_id: Option<String>,
    pub address_outside: String,
    #[serde(deserialize_with = "required_nullable")]
    pub address_outside_image_id: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub close_date: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub close_cause: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub successor_corporate_number: Option<String>,
    pub change_cause: String,
    pub assignment_date: String,
    pub en_name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub en_address_line: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub en_address_outside: Option<String>,
    pub furigana: String,
    pub hihyoji: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTACorporateInfoResolverResponse {
    pub version: SchemaVersion,
    pub data: NTACorporateInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTACorporateInfoSearcherResponse {
    pub version: SchemaVersion,
    pub data: Vec<NTACorporateInfo>,
    pub query: String,
    pub count: u64,
    pub offset: u64,
    pub limit: u64,
    #[serde(default, deserialize_with = "deserialize_facets")]
    pub facets: NTACorporateInfoFacetResults,
}

/// Qualified invoice issuer registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTAQualifiedInvoiceIssuerInfo {
    pub published_date: String,
    pub sequence_number: i64,
    pub qualified_invoice_issuer_number: String,
    pub process: String,
    pub correct: i64,
    pub kind: i64,
    pub country: i64,
    pub latest: bool,
    pub registration_date: String,
    pub update_date: String,
    #[serde(deserialize_with = "required_nullable")]
    pub disposal_date: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub expire_date: Option<String>,
    pub address: NTAEntityAddress,
    #[serde(deserialize_with = "required_nullable")]
    pub address_request: Option<NTAEntityAddress>,
    #[serde(deserialize_with = "required_nullable")]
    pub kana: Option<String>,
    pub name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub address_inside: Option<NTAEntityAddress>,
    #[serde(deserialize_with = "required_nullable")]
    pub trade_name: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub popular_name_previous_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTAQualifiedInvoiceIssuerInfoResolverResponse {
    pub version: SchemaVersion,
    pub data: NTAQualifiedInvoiceIssuerInfo,
}

strict_model!(
    NTAEntityAddress,
    NTACorporateInfo,
    NTACorporateInfoResolverResponse,
    NTACorporateInfoSearcherResponse,
    NTAQualifiedInvoiceIssuerInfo,
    NTAQualifiedInvoiceIssuerInfoResolverResponse,
);
