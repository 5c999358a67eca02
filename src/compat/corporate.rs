//! Canonical corporate-registry records
//!
//! The canonical record keeps the flat address layout. Payloads from the
//! nested-address version on are flattened first, and the integer-or-string
//! fields are always rendered as strings.

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::fields::Fields;
use super::Normalize;
use crate::entity::Entity;
use crate::error::Result;
use crate::facets::NTACorporateInfoFacetResults;
use crate::resolve::Probe;
use crate::transform::flatten_corporate_address;
use crate::version::SchemaVersion;

/// Corporate-registry record across all versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NTACorporateInfo {
    pub published_date: String,
    /// Integer on the wire from 2024-01-01
    pub sequence_number: String,
    pub corporate_number: String,
    pub process: String,
    /// Correction flag; integer on the wire from 2024-01-01
    pub correct: String,
    pub update_date: String,
    pub change_date: String,
    pub name: String,
    pub name_image_id: Option<String>,
    /// Corporation kind code (`"301"` etc.); integer on the wire from 2024-01-01
    pub kind: String,
    /// `address.prefecture` in nested payloads
    pub prefecture_name: String,
    /// `address.city` in nested payloads
    pub city_name: String,
    pub street_number: String,
    pub town: String,
    pub kyoto_street: String,
    pub block_lot_num: String,
    pub building: String,
    pub floor_room: String,
    pub address_image_id: Option<String>,
    /// Municipality code, from `address.jisx0402` in nested payloads
    pub jisx0402: String,
    /// `address.postal_code` in nested payloads
    pub post_code: String,
    pub address_outside: String,
    pub address_outside_image_id: Option<String>,
    pub close_date: Option<String>,
    /// Closure reason code. Integer on the wire from 2025-01-01, where a
    /// missing key reads as `None`.
    pub close_cause: Option<String>,
    pub successor_corporate_number: Option<String>,
    pub change_cause: String,
    pub assignment_date: String,
    pub en_name: String,
    /// `address.prefecture_roman` in nested payloads
    pub en_prefecture_name: String,
    pub en_address_line: Option<String>,
    pub en_address_outside: Option<String>,
    pub furigana: String,
    /// Non-disclosure flag; integer on the wire from 2024-01-01
    pub hihyoji: String,
}

impl NTACorporateInfo {
    fn from_flat(payload: &Value) -> Result<Self> {
        let f = Fields::of(Entity::CorporateInfo.name(), payload)?;
        // Newer payloads may omit close_cause entirely
        let close_cause = match f.get("close_cause") {
            None => None,
            Some(_) => f.stringly_nullable("close_cause")?,
        };
        Ok(Self {
            published_date: f.required("published_date")?,
            sequence_number: f.stringly("sequence_number")?,
            corporate_number: f.required("corporate_number")?,
            process: f.required("process")?,
            correct: f.stringly("correct")?,
            update_date: f.required("update_date")?,
            change_date: f.required("change_date")?,
            name: f.required("name")?,
            name_image_id: f.required("name_image_id")?,
            kind: f.stringly("kind")?,
            prefecture_name: f.required("prefecture_name")?,
            city_name: f.required("city_name")?,
            street_number: f.required("street_number")?,
            town: f.required("town")?,
            kyoto_street: f.required("kyoto_street")?,
            block_lot_num: f.required("block_lot_num")?,
            building: f.required("building")?,
            floor_room: f.required("floor_room")?,
            address_image_id: f.required("address_image_id")?,
            jisx0402: f.required("jisx0402")?,
            post_code: f.required("post_code")?,
            address_outside: f.required("address_outside")?,
            address_outside_image_id: f.required("address_outside_image_id")?,
            close_date: f.required("close_date")?,
            close_cause,
            successor_corporate_number: f.required("successor_corporate_number")?,
            change_cause: f.required("change_cause")?,
            assignment_date: f.required("assignment_date")?,
            en_name: f.required("en_name")?,
            en_prefecture_name: f.required("en_prefecture_name")?,
            en_address_line: f.required("en_address_line")?,
            en_address_outside: f.required("en_address_outside")?,
            furigana: f.required("furigana")?,
            hihyoji: f.stringly("hihyoji")?,
        })
    }
}

impl Normalize for NTACorporateInfo {
    const ENTITY: Entity = Entity::CorporateInfo;
    const PROBE: Probe = Probe::RecordAddress;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let record = if version.is_at_least(&SchemaVersion::NESTED_CORPORATE_ADDRESS) {
            trace!(%version, "flattening corporate address");
            Self::from_flat(&Value::Object(flatten_corporate_address(payload)?))?
        } else {
            Self::from_flat(payload)?
        };
        trace!(corporate_number = %record.corporate_number, "normalized corporate info");
        Ok(record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NTACorporateInfoResolverResponse {
    pub version: SchemaVersion,
    pub data: NTACorporateInfo,
}

impl Normalize for NTACorporateInfoResolverResponse {
    const ENTITY: Entity = Entity::CorporateInfo;
    const PROBE: Probe = Probe::ResponseAddress;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("NTACorporateInfoResolverResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: NTACorporateInfo::normalize_as(f.raw("data")?, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NTACorporateInfoSearcherResponse {
    pub version: SchemaVersion,
    pub data: Vec<NTACorporateInfo>,
    pub query: String,
    pub count: u64,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub facets: NTACorporateInfoFacetResults,
}

impl Normalize for NTACorporateInfoSearcherResponse {
    const ENTITY: Entity = Entity::CorporateInfo;
    const PROBE: Probe = Probe::ResponseAddress;

    /// Every item is built under `version`; items are never re-inferred.
    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("NTACorporateInfoSearcherResponse", payload)?;
        let facets = match f.get("facets") {
            Some(value) => NTACorporateInfoFacetResults::from_payload(value)?,
            None => NTACorporateInfoFacetResults::default(),
        };
        Ok(Self {
            version: f.required("version")?,
            data: f.list("data", |item| NTACorporateInfo::normalize_as(item, version))?,
            query: f.required("query")?,
            count: f.required("count")?,
            offset: f.optional("offset")?,
            limit: f.optional("limit")?,
            facets,
        })
    }
}
