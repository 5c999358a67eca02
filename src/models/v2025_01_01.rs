//! Wire models for version 2025-01-01
//!
//! Corporate info `close_cause` becomes a nullable integer. Branch
//! collections map every code to an array, since one code can be reused by
//! several branches over time, and single-branch lookups return an array.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::required_nullable;

use crate::facets::deserialize_facets;
use crate::version::SchemaVersion;

pub use super::v2024_01_01::{
    Address, AddressResolverResponse, AddressSearcherResponse, Bank, BankBranch,
    BankResolverResponse, BanksResponse, City, CityResolverResponse, Corporation, Holiday,
    HolidaySearchResult, NTACorporateInfoFacetResults, NTAEntityAddress,
    NTAQualifiedInvoiceIssuerInfo, NTAQualifiedInvoiceIssuerInfoResolverResponse,
};

/// Corporate-registry record with an integer close cause
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
    /// Absent and `null` both read as `None`
    pub close_cause: Option<i64>,
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchesData {
    pub bank: Bank,
    pub branches: BTreeMap<String, Vec<BankBranch>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchesResponse {
    pub version: SchemaVersion,
    pub data: BankBranchesData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchData {
    pub bank: Bank,
    pub branch: Vec<BankBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchResolverResponse {
    pub version: SchemaVersion,
    pub data: BankBranchData,
}

strict_model!(
    NTACorporateInfo,
    NTACorporateInfoResolverResponse,
    NTACorporateInfoSearcherResponse,
    BankBranchesData,
    BankBranchesResponse,
    BankBranchData,
    BankBranchResolverResponse,
);
