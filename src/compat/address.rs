//! Canonical postal addresses and cities

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::fields::Fields;
use super::Normalize;
use crate::entity::Entity;
use crate::error::Result;
use crate::facets::FacetBucket;
use crate::presence::Presence;
use crate::resolve::Probe;
use crate::version::SchemaVersion;

/// Company overlay on a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corporation {
    pub name: String,
    pub name_kana: String,
    pub block_lot: String,
    /// Not carried before 2022-09-01
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub block_lot_num: Presence<Option<String>>,
    pub post_office: String,
    pub code_type: i64,
}

impl Corporation {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let f = Fields::of("Corporation", payload)?;
        Ok(Self {
            name: f.required("name")?,
            name_kana: f.required("name_kana")?,
            block_lot: f.required("block_lot")?,
            block_lot_num: f.widened("block_lot_num")?,
            post_office: f.required("post_office")?,
            code_type: f.required("code_type")?,
        })
    }
}

/// Postal address across all versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Five-digit municipality code
    pub jisx0402: String,
    /// Pre-1998 three or five digit postal code
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
    /// Town name before splitting off koaza and building
    pub town_raw: String,
    /// Set when the postal code belongs to a single company
    pub corporation: Option<Corporation>,

    // Carried from 2022-11-01
    /// Unset for older payloads, which never carry romanization
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub prefecture_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub county: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub county_kana: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub county_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_without_county_and_ward: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_without_county_and_ward_kana: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_without_county_and_ward_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_ward: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_ward_kana: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_ward_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub town_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub town_jukyohyoji: Presence<bool>,
    /// Integer status code; unset before 2022-11-01
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub update_status: Presence<i64>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub update_reason: Presence<i64>,
}

impl Normalize for Address {
    const ENTITY: Entity = Entity::Address;
    const PROBE: Probe = Probe::RecordAddress;

    fn normalize_as(payload: &Value, _version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of(Self::ENTITY.name(), payload)?;
        let address = Self {
            jisx0402: f.required("jisx0402")?,
            old_code: f.required("old_code")?,
            postal_code: f.required("postal_code")?,
            prefecture_kana: f.required("prefecture_kana")?,
            city_kana: f.required("city_kana")?,
            town_kana: f.required("town_kana")?,
            town_kana_raw: f.required("town_kana_raw")?,
            prefecture: f.required("prefecture")?,
            city: f.required("city")?,
            town: f.required("town")?,
            koaza: f.required("koaza")?,
            kyoto_street: f.required("kyoto_street")?,
            building: f.required("building")?,
            floor: f.required("floor")?,
            town_partial: f.required("town_partial")?,
            town_addressed_koaza: f.required("town_addressed_koaza")?,
            town_chome: f.required("town_chome")?,
            town_multi: f.required("town_multi")?,
            town_raw: f.required("town_raw")?,
            corporation: f.nullable_record("corporation", Corporation::from_payload)?,
            prefecture_roman: f.widened("prefecture_roman")?,
            city_roman: f.widened("city_roman")?,
            county: f.widened("county")?,
            county_kana: f.widened("county_kana")?,
            county_roman: f.widened("county_roman")?,
            city_without_county_and_ward: f.widened("city_without_county_and_ward")?,
            city_without_county_and_ward_kana: f.widened("city_without_county_and_ward_kana")?,
            city_without_county_and_ward_roman: f.widened("city_without_county_and_ward_roman")?,
            city_ward: f.widened("city_ward")?,
            city_ward_kana: f.widened("city_ward_kana")?,
            city_ward_roman: f.widened("city_ward_roman")?,
            town_roman: f.widened("town_roman")?,
            town_jukyohyoji: f.widened("town_jukyohyoji")?,
            update_status: f.widened("update_status")?,
            update_reason: f.widened("update_reason")?,
        };
        trace!(postal_code = %address.postal_code, "normalized address");
        Ok(address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressResolverResponse {
    pub version: SchemaVersion,
    pub data: Vec<Address>,
}

impl Normalize for AddressResolverResponse {
    const ENTITY: Entity = Entity::Address;
    const PROBE: Probe = Probe::ResponseAddress;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("AddressResolverResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: f.list("data", |item| Address::normalize_as(item, version))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressSearcherResponse {
    pub version: SchemaVersion,
    pub data: Vec<Address>,
    pub query: String,
    pub count: u64,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub facets: Option<Vec<FacetBucket>>,
}

impl Normalize for AddressSearcherResponse {
    const ENTITY: Entity = Entity::AddressSearch;
    const PROBE: Probe = Probe::ResponseAddress;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("AddressSearcherResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: f.list("data", |item| Address::normalize_as(item, version))?,
            query: f.required("query")?,
            count: f.required("count")?,
            offset: f.optional("offset")?,
            limit: f.optional("limit")?,
            facets: f.optional("facets")?,
        })
    }
}

/// Administrative area across all versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub jisx0402: String,
    pub prefecture: String,
    pub prefecture_code: String,
    pub prefecture_kana: String,
    pub city: String,
    pub city_code: String,
    pub city_kana: String,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub prefecture_roman: Presence<String>,
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub city_roman: Presence<String>,
}

impl Normalize for City {
    const ENTITY: Entity = Entity::City;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, _version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of(Self::ENTITY.name(), payload)?;
        Ok(Self {
            jisx0402: f.required("jisx0402")?,
            prefecture: f.required("prefecture")?,
            prefecture_code: f.required("prefecture_code")?,
            prefecture_kana: f.required("prefecture_kana")?,
            city: f.required("city")?,
            city_code: f.required("city_code")?,
            city_kana: f.required("city_kana")?,
            prefecture_roman: f.widened("prefecture_roman")?,
            city_roman: f.widened("city_roman")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityResolverResponse {
    pub version: SchemaVersion,
    pub data: Vec<City>,
}

impl Normalize for CityResolverResponse {
    const ENTITY: Entity = Entity::City;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("CityResolverResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: f.list("data", |item| City::normalize_as(item, version))?,
        })
    }
}
