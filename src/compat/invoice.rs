use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::fields::Fields;
use super::Normalize;
use crate::entity::Entity;
use crate::error::Result;
use crate::resolve::Probe;
use crate::version::SchemaVersion;

/// Structured address attached to registry records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

impl NTAEntityAddress {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let f = Fields::of("NTAEntityAddress", payload)?;
        Ok(Self {
            jisx0402: f.required("jisx0402")?,
            postal_code: f.required("postal_code")?,
            prefecture: f.required("prefecture")?,
            prefecture_kana: f.required("prefecture_kana")?,
            prefecture_roman: f.required("prefecture_roman")?,
            city: f.required("city")?,
            city_kana: f.required("city_kana")?,
            city_roman: f.required("city_roman")?,
            town: f.required("town")?,
            town_kana: f.required("town_kana")?,
            town_roman: f.required("town_roman")?,
            kyoto_street: f.required("kyoto_street")?,
            block_lot_num: f.required("block_lot_num")?,
            building: f.required("building")?,
            floor_room: f.required("floor_room")?,
            street_number: f.required("street_number")?,
        })
    }
}

/// Qualified invoice issuer; integer wire fields are rendered as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NTAQualifiedInvoiceIssuerInfo {
    pub published_date: String,
    /// Integer on the wire
    pub sequence_number: String,
    /// `T` followed by thirteen digits
    pub qualified_invoice_issuer_number: String,
    pub process: String,
    /// Integer on the wire
    pub correct: String,
    /// Integer on the wire
    pub kind: String,
    /// Integer on the wire
    pub country: String,
    /// Whether this is the newest record for the issuer
    pub latest: bool,
    pub registration_date: String,
    pub update_date: String,
    /// Set once registration is revoked
    pub disposal_date: Option<String>,
    pub expire_date: Option<String>,
    pub address: NTAEntityAddress,
    /// Address the issuer asked to publish, if any
    pub address_request: Option<NTAEntityAddress>,
    pub kana: Option<String>,
    pub name: String,
    /// Domestic address of a foreign issuer
    pub address_inside: Option<NTAEntityAddress>,
    pub trade_name: Option<String>,
    pub popular_name_previous_name: Option<String>,
}

impl Normalize for NTAQualifiedInvoiceIssuerInfo {
    const ENTITY: Entity = Entity::InvoiceIssuer;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, _version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of(Self::ENTITY.name(), payload)?;
        let issuer = Self {
            published_date: f.required("published_date")?,
            sequence_number: f.stringly("sequence_number")?,
            qualified_invoice_issuer_number: f.required("qualified_invoice_issuer_number")?,
            process: f.stringly("process")?,
            correct: f.stringly("correct")?,
            kind: f.stringly("kind")?,
            country: f.stringly("country")?,
            latest: f.required("latest")?,
            registration_date: f.required("registration_date")?,
            update_date: f.required("update_date")?,
            disposal_date: f.optional("disposal_date")?,
            expire_date: f.optional("expire_date")?,
            address: NTAEntityAddress::from_payload(f.raw("address")?)?,
            address_request: f.optional_record("address_request", NTAEntityAddress::from_payload)?,
            kana: f.optional("kana")?,
            name: f.required("name")?,
            address_inside: f.optional_record("address_inside", NTAEntityAddress::from_payload)?,
            trade_name: f.optional("trade_name")?,
            popular_name_previous_name: f.optional("popular_name_previous_name")?,
        };
        trace!(number = %issuer.qualified_invoice_issuer_number, "normalized invoice issuer");
        Ok(issuer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NTAQualifiedInvoiceIssuerInfoResolverResponse {
    pub version: SchemaVersion,
    pub data: NTAQualifiedInvoiceIssuerInfo,
}

impl Normalize for NTAQualifiedInvoiceIssuerInfoResolverResponse {
    const ENTITY: Entity = Entity::InvoiceIssuer;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("NTAQualifiedInvoiceIssuerInfoResolverResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: NTAQualifiedInvoiceIssuerInfo::normalize_as(f.raw("data")?, version)?,
        })
    }
}
