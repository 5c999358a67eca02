//! Wire models for version 2022-11-01
//!
//! Addresses gain romanization, county and ward splitting, and update status.
//! Cities gain romanized names.

use serde::{Deserialize, Serialize};

use super::required_nullable;

use crate::facets::FacetBucket;
use crate::version::SchemaVersion;

pub use super::v2022_09_01::{
    Corporation, Holiday, HolidaySearchResult, NTACorporateInfo, NTACorporateInfoFacetResults,
    NTACorporateInfoResolverResponse, NTACorporateInfoSearcherResponse,
};

/// Postal address with romanization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub jisx0402: String,
    pub old_code: String,
    pub postal_code: String,
    pub prefecture_kana: String,
    pub city_kana: String,
    pub town_kana: String,
    pub town_kana_raw: String,
    pub prefecture: String,
    pub city: String,
    pub town: String,
    pub koaza: String,
    pub kyoto_street: String,
    pub building: String,
    pub floor: String,
    pub town_partial: bool,
    pub town_addressed_koaza: bool,
    pub town_chome: bool,
    pub town_multi: bool,
    pub town_raw: String,
    #[serde(deserialize_with = "required_nullable")]
    pub corporation: Option<Corporation>,
    pub prefecture_roman: String,
    pub city_roman: String,
    pub county: String,
    pub county_kana: String,
    pub county_roman: String,
    pub city_without_county_and_ward: String,
    pub city_without_county_and_ward_kana: String,
    pub city_without_county_and_ward_roman: String,
    pub city_ward: String,
    pub city_ward_kana: String,
    pub city_ward_roman: String,
    pub town_roman: String,
    pub town_jukyohyoji: bool,
    pub update_status: i64,
    pub update_reason: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResolverResponse {
    pub version: SchemaVersion,
    pub data: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSearcherResponse {
    pub version: SchemaVersion,
    pub data: Vec<Address>,
    pub query: String,
    pub count: u64,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub facets: Option<Vec<FacetBucket>>,
}

/// Administrative area with romanization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub jisx0402: String,
    pub prefecture: String,
    pub prefecture_code: String,
    pub prefecture_kana: String,
    pub city: String,
    pub city_code: String,
    pub city_kana: String,
    pub prefecture_roman: String,
    pub city_roman: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityResolverResponse {
    pub version: SchemaVersion,
    pub data: Vec<City>,
}

strict_model!(
    Address,
    AddressResolverResponse,
    AddressSearcherResponse,
    City,
    CityResolverResponse,
);
