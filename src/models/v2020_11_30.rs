//! Wire models for version 2020-11-30

use serde::{Deserialize, Serialize};

use super::required_nullable;

use crate::version::SchemaVersion;

/// Company overlay on a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corporation {
    pub name: String,
    pub name_kana: String,
    pub block_lot: String,
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

/// National holiday. Identical in every version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub title: String,
    pub date: String,
    pub day_of_week: i64,
    pub day_of_week_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySearchResult {
    pub data: Vec<Holiday>,
}

strict_model!(
    Corporation,
    Address,
    AddressResolverResponse,
    Holiday,
    HolidaySearchResult,
);
