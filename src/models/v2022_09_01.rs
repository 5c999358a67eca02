//! Wire models for version 2022-09-01
//!
//! Adds cities, corporate-registry records and searcher responses. Corporate
//! info is flat and every numeric-looking field is a string.

use serde::{Deserialize, Serialize};

use super::required_nullable;

use crate::facets::{deserialize_facets, FacetBucket};
use crate::version::SchemaVersion;

pub use crate::facets::NTACorporateInfoFacetResults;
pub use super::v2020_11_30::{Holiday, HolidaySearchResult};

/// Company overlay on a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corporation {
    pub name: String,
    pub name_kana: String,
    pub block_lot: String,
    #[serde(deserialize_with = "required_nullable")]
    pub block_lot_num: Option<String>,
    pub post_office: String,
    pub code_type: i64,
}

/// Postal address
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

/// Administrative area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub jisx0402: String,
    pub prefecture: String,
    pub prefecture_code: String,
    pub prefecture_kana: String,
    pub city: String,
    pub city_code: String,
    pub city_kana: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityResolverResponse {
    pub version: SchemaVersion,
    pub data: Vec<City>,
}

/// Corporate-registry record with flat address fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NTACorporateInfo {
    pub published_date: String,
    pub sequence_number: String,
    pub corporate_number: String,
    pub process: String,
    pub correct: String,
    pub update_date: String,
    pub change_date: String,
    pub name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub name_image_id: Option<String>,
    pub kind: String,
    pub prefecture_name: String,
    pub city_name: String,
    pub street_number: String,
    pub town: String,
    pub kyoto_street: String,
    pub block_lot_num: String,
    pub building: String,
    pub floor_room: String,
    #[serde(deserialize_with = "required_nullable")]
    pub address_image_id: Option<String>,
    pub jisx0402: String,
    pub post_code: String,
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
    pub en_prefecture_name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub en_address_line: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub en_address_outside: Option<String>,
    pub furigana: String,
    pub hihyoji: String,
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

strict_model!(
    Corporation,
    Address,
    AddressResolverResponse,
    AddressSearcherResponse,
    City,
    CityResolverResponse,
    NTACorporateInfo,
    NTACorporateInfoResolverResponse,
    NTACorporateInfoSearcherResponse,
    NTACorporateInfoFacetResults,
);
