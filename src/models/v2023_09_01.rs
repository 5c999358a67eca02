//! Wire models for version 2023-09-01
//!
//! Introduces the bank directory. Each branch code maps to a single branch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::version::SchemaVersion;

pub use super::v2022_11_01::{
    Address, AddressResolverResponse, AddressSearcherResponse, City, CityResolverResponse,
    Corporation, Holiday, HolidaySearchResult, NTACorporateInfo, NTACorporateInfoFacetResults,
    NTACorporateInfoResolverResponse, NTACorporateInfoSearcherResponse,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub code: String,
    pub name: String,
    pub katakana: String,
    pub hiragana: String,
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranch {
    pub code: String,
    pub name: String,
    pub katakana: String,
    pub hiragana: String,
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankResolverResponse {
    pub version: SchemaVersion,
    pub data: Bank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanksResponse {
    pub version: SchemaVersion,
    pub data: Vec<Bank>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchesData {
    pub bank: Bank,
    pub branches: BTreeMap<String, BankBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchesResponse {
    pub version: SchemaVersion,
    pub data: BankBranchesData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchData {
    pub bank: Bank,
    pub branch: BankBranch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankBranchResolverResponse {
    pub version: SchemaVersion,
    pub data: BankBranchData,
}

strict_model!(
    Bank,
    BankBranch,
    BankResolverResponse,
    BanksResponse,
    BankBranchesData,
    BankBranchesResponse,
    BankBranchData,
    BankBranchResolverResponse,
);
