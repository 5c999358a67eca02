//! Canonical normalization across schema versions

use std::fmt::Debug;

use kenall_models::compat::{
    Address, AddressResolverResponse, AddressSearcherResponse, BankBranchResolverResponse,
    BankBranchesResponse, BanksResponse, City, CityResolverResponse, HolidaySearchResult,
    NTACorporateInfo, NTACorporateInfoResolverResponse, NTACorporateInfoSearcherResponse,
    NTAQualifiedInvoiceIssuerInfo, NTAQualifiedInvoiceIssuerInfoResolverResponse,
};
use kenall_models::{ModelError, Normalize, Presence, SchemaVersion};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Serialize;
use serde_json::{json, Value};

fn load(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn assert_idempotent<T>(payload: &Value) -> T
where
    T: Normalize + Serialize + PartialEq + Debug,
{
    let first = T::normalize(payload, None).unwrap();
    let again = T::normalize(&serde_json::to_value(&first).unwrap(), None).unwrap();
    assert_eq!(first, again);
    first
}

// =============================================================================
// Idempotence
// =============================================================================

#[rstest]
#[case::v2020(include_str!("fixtures/postalcode_2020-11-30.json"))]
#[case::v2022_09(include_str!("fixtures/postalcode_2022-09-01.json"))]
#[case::v2022_11(include_str!("fixtures/postalcode_2022-11-01.json"))]
fn test_address_normalization_is_idempotent(#[case] fixture: &str) {
    assert_idempotent::<AddressResolverResponse>(&load(fixture));
}

#[rstest]
#[case::v2022_09(include_str!("fixtures/houjinbangou_2022-09-01.json"))]
#[case::v2024(include_str!("fixtures/houjinbangou_2024-01-01.json"))]
#[case::v2025(include_str!("fixtures/houjinbangou_2025-01-01.json"))]
fn test_corporate_normalization_is_idempotent(#[case] fixture: &str) {
    let payload = load(fixture);
    let record = assert_idempotent::<NTACorporateInfo>(&payload["data"]);
    assert_idempotent::<NTACorporateInfoResolverResponse>(&payload);
    assert_eq!(record.corporate_number, "1234567890123");
}

#[test]
fn test_other_records_are_idempotent() {
    let cities = load(include_str!("fixtures/city_2022-11-01.json"));
    assert_idempotent::<City>(&cities["data"][0]);
    assert_idempotent::<CityResolverResponse>(&cities);

    let search = load(include_str!("fixtures/address_search_2022-11-01.json"));
    assert_idempotent::<AddressSearcherResponse>(&search);

    let search = load(include_str!("fixtures/houjinbangou_search_2024-01-01.json"));
    assert_idempotent::<NTACorporateInfoSearcherResponse>(&search);

    assert_idempotent::<HolidaySearchResult>(&load(include_str!("fixtures/holidays.json")));
    assert_idempotent::<BanksResponse>(&load(include_str!("fixtures/banks_2023-09-01.json")));

    let issuer = load(include_str!("fixtures/invoice_issuer_2024-01-01.json"));
    assert_idempotent::<NTAQualifiedInvoiceIssuerInfo>(&issuer["data"]);
}

// =============================================================================
// Coercion and widening
// =============================================================================

#[test]
fn test_close_cause_is_always_a_string() {
    let v2025 = load(include_str!("fixtures/houjinbangou_2025-01-01.json"));
    let v2022 = load(include_str!("fixtures/houjinbangou_2022-09-01.json"));

    let coerced = NTACorporateInfoResolverResponse::normalize(&v2025, None).unwrap();
    let unchanged = NTACorporateInfoResolverResponse::normalize(&v2022, None).unwrap();

    assert_eq!(coerced.data.close_cause.as_deref(), Some("1"));
    assert_eq!(unchanged.data.close_cause.as_deref(), Some("01"));
}

#[test]
fn test_numeric_fields_render_as_strings() {
    let v2024 = load(include_str!("fixtures/houjinbangou_2024-01-01.json"));
    let record = NTACorporateInfo::normalize(&v2024["data"], None).unwrap();

    assert_eq!(record.sequence_number, "1");
    assert_eq!(record.correct, "0");
    assert_eq!(record.kind, "301");
    assert_eq!(record.hihyoji, "0");

    let issuer = load(include_str!("fixtures/invoice_issuer_2024-01-01.json"));
    let issuer = NTAQualifiedInvoiceIssuerInfoResolverResponse::normalize(&issuer, None).unwrap();
    assert_eq!(issuer.data.kind, "2");
    assert_eq!(issuer.data.country, "1");
    assert_eq!(issuer.data.trade_name.as_deref(), Some("Test Corporation"));
}

#[test]
fn test_flat_and_nested_corporate_info_agree() {
    let v2022 = load(include_str!("fixtures/houjinbangou_2022-09-01.json"));
    let v2024 = load(include_str!("fixtures/houjinbangou_2024-01-01.json"));

    let flat = NTACorporateInfo::normalize(&v2022["data"], None).unwrap();
    let mut nested = NTACorporateInfo::normalize(&v2024["data"], None).unwrap();
    nested.published_date = flat.published_date.clone();

    assert_eq!(flat, nested);
}

#[test]
fn test_pre_romanization_address_is_unset() {
    let payload = load(include_str!("fixtures/postalcode_2020-11-30.json"));
    let address = Address::normalize(&payload["data"][0], None).unwrap();

    assert_eq!(address.postal_code, "1008105");
    assert!(address.prefecture_roman.is_unset());
    assert!(address.city_roman.is_unset());
    assert!(address.town_roman.is_unset());
    assert!(address.county.is_unset());
    assert!(address.update_status.is_unset());
}

#[test]
fn test_romanized_address() {
    let payload = load(include_str!("fixtures/postalcode_2022-11-01.json"));
    let address = Address::normalize(&payload["data"][0], None).unwrap();

    assert_eq!(address.prefecture, "東京都");
    assert_eq!(address.prefecture_roman.as_deref(), Presence::Set("Tokyo"));
    assert_eq!(address.county.as_deref(), Presence::Set(""));
    assert_eq!(address.update_status, Presence::Set(0));
}

#[test]
fn test_corporation_block_lot_num_widening() {
    let v2020 = load(include_str!("fixtures/postalcode_2020-11-30.json"));
    let v2022 = load(include_str!("fixtures/postalcode_2022-09-01.json"));

    let old = AddressResolverResponse::normalize(&v2020, None).unwrap();
    let new = AddressResolverResponse::normalize(&v2022, None).unwrap();

    let old = old.data[0].corporation.as_ref().unwrap();
    let new = new.data[0].corporation.as_ref().unwrap();
    assert!(old.block_lot_num.is_unset());
    assert_eq!(new.block_lot_num, Presence::Set(Some("2-2-1".to_string())));
}

// =============================================================================
// Branch reshaping
// =============================================================================

#[rstest]
#[case::single_objects(include_str!("fixtures/bank_branches_2023-09-01.json"))]
#[case::arrays(include_str!("fixtures/bank_branches_2025-01-01.json"))]
fn test_branch_collections_are_sequences(#[case] fixture: &str) {
    let response = BankBranchesResponse::normalize(&load(fixture), None).unwrap();

    assert_eq!(response.data.len(), 3);
    assert_eq!(response.data["001"].len(), 1);
    assert_eq!(response.data["001"][0].code, "001");
    assert_eq!(response.data["001"][0].romaji, "tokyo");
    assert_eq!(response.bank.get().map(|b| b.code.as_str()), Some("0001"));
}

#[test]
fn test_single_branch_lookups_agree() {
    let v2023 = load(include_str!("fixtures/bank_branch_2023-09-01.json"));
    let v2025 = load(include_str!("fixtures/bank_branch_2025-01-01.json"));

    let from_object = BankBranchResolverResponse::normalize(&v2023, None).unwrap();
    let from_array = BankBranchResolverResponse::normalize(&v2025, None).unwrap();

    assert_eq!(from_object.data, from_array.data);
    assert_eq!(from_object.data[0].name, "東京営業部");
}

// =============================================================================
// Facets
// =============================================================================

#[test]
fn test_facets_track_computed_dimensions() {
    let mut payload = load(include_str!("fixtures/houjinbangou_search_2022-09-01.json"));
    payload["facets"] = json!({"area": [["/東京都", 3]]});

    let response = NTACorporateInfoSearcherResponse::normalize(&payload, None).unwrap();

    assert_eq!(response.facets.get("area").unwrap(), &[("/東京都".to_string(), 3)]);
    assert!(matches!(
        response.facets.get("kind"),
        Err(ModelError::UnknownFacet(ref name)) if name == "kind"
    ));
}

#[test]
fn test_null_facets_decode_to_nothing_computed() {
    let mut payload = load(include_str!("fixtures/houjinbangou_search_2022-09-01.json"));
    payload["facets"] = Value::Null;

    let response = NTACorporateInfoSearcherResponse::normalize(&payload, None).unwrap();

    assert!(response.facets.get("area").is_err());
    assert_eq!(response.count, 3);
}

// =============================================================================
// Version threading in searcher responses
// =============================================================================

#[test]
fn test_search_items_share_the_explicit_version() {
    let payload = load(include_str!("fixtures/houjinbangou_search_2025-01-01.json"));
    let latest = SchemaVersion::V2025_01_01;

    let response = NTACorporateInfoSearcherResponse::normalize(&payload, Some(&latest)).unwrap();

    let causes: Vec<_> = response.data.iter().map(|r| r.close_cause.as_deref()).collect();
    assert_eq!(causes, vec![None, None, Some("11")]);
    assert!(response.data.iter().all(|r| r.post_code == "1000004"));
}

#[test]
fn test_mixed_items_are_not_reinferred() {
    let flat = load(include_str!("fixtures/houjinbangou_search_2022-09-01.json"));
    let nested = load(include_str!("fixtures/houjinbangou_search_2025-01-01.json"));
    let mut mixed = nested.clone();
    mixed["data"] = json!([nested["data"][0].clone(), flat["data"][1].clone()]);

    // One version for every item: the flat item cannot satisfy nested rules.
    let latest = SchemaVersion::V2025_01_01;
    let err = NTACorporateInfoSearcherResponse::normalize(&mixed, Some(&latest)).unwrap_err();
    assert!(matches!(err, ModelError::MissingField { ref field, .. } if field == "address"));

    // Without a version the first item decides, and the nested item cannot
    // satisfy flat rules.
    mixed["data"] = json!([flat["data"][0].clone(), nested["data"][1].clone()]);
    let err = NTACorporateInfoSearcherResponse::normalize(&mixed, None).unwrap_err();
    assert!(err.is_construction());
}

#[rstest]
#[case::explicit(Some(SchemaVersion::V2022_11_01))]
#[case::inferred(None)]
fn test_address_search_mixed_versions(#[case] version: Option<SchemaVersion>) {
    let older = load(include_str!("fixtures/address_search_2022-09-01.json"));
    let newer = load(include_str!("fixtures/address_search_2022-11-01.json"));
    let mut mixed = newer.clone();
    mixed["data"] = json!([older["data"][0].clone(), newer["data"][1].clone()]);

    let response = AddressSearcherResponse::normalize(&mixed, version.as_ref()).unwrap();

    assert_eq!(response.version, SchemaVersion::V2022_11_01);
    assert_eq!(response.data.len(), 2);
    assert!(response.data[0].town_roman.is_unset());
    assert!(response.data[0].prefecture_roman.is_unset());
    assert_eq!(response.data[1].town_roman.as_deref(), Presence::Set("Iidabashi"));
    assert_eq!(response.data[1].town, "飯田橋");
}

// =============================================================================
// Unknown keys and errors
// =============================================================================

#[test]
fn test_unknown_keys_are_dropped() {
    let postal = load(include_str!("fixtures/postalcode_2022-11-01.json"));
    let response = AddressResolverResponse::normalize(&postal, None).unwrap();
    let encoded = serde_json::to_value(&response).unwrap();
    assert!(encoded["data"][0].get("extra_key").is_none());

    let corporate = load(include_str!("fixtures/houjinbangou_2025-01-01.json"));
    let response = NTACorporateInfoResolverResponse::normalize(&corporate, None).unwrap();
    let encoded = serde_json::to_value(&response).unwrap();
    assert!(encoded["data"].get("unknown_future_field").is_none());
    assert!(encoded["data"].get("address").is_none());
}

#[test]
fn test_missing_mapped_address_key() {
    let mut payload = load(include_str!("fixtures/houjinbangou_2024-01-01.json"));
    payload["data"]["address"]
        .as_object_mut()
        .unwrap()
        .remove("prefecture_roman");

    let err = NTACorporateInfoResolverResponse::normalize(&payload, None).unwrap_err();

    assert!(matches!(
        err,
        ModelError::MissingField { ref field, .. } if field == "address.prefecture_roman"
    ));
}

#[test]
fn test_canonical_before_introduction() {
    let issuer = load(include_str!("fixtures/invoice_issuer_2024-01-01.json"));
    let version = SchemaVersion::V2023_09_01;

    let err =
        NTAQualifiedInvoiceIssuerInfoResolverResponse::normalize(&issuer, Some(&version)).unwrap_err();

    match err {
        ModelError::UnsupportedVersion { introduced, .. } => {
            assert_eq!(introduced, SchemaVersion::V2024_01_01)
        }
        other => panic!("Expected UnsupportedVersion, got {:?}", other),
    }
}

#[test]
fn test_canonical_address_search_before_introduction() {
    let search = load(include_str!("fixtures/address_search_2022-09-01.json"));
    let version = SchemaVersion::V2020_11_30;

    let err = AddressSearcherResponse::normalize(&search, Some(&version)).unwrap_err();

    match err {
        ModelError::UnsupportedVersion { entity, introduced, .. } => {
            assert_eq!(entity, "AddressSearcherResponse");
            assert_eq!(introduced, SchemaVersion::V2022_09_01);
        }
        other => panic!("Expected UnsupportedVersion, got {:?}", other),
    }

    // Postal-code lookups predate search and still decode under 2020-11-30
    let postal = load(include_str!("fixtures/postalcode_2020-11-30.json"));
    assert!(AddressResolverResponse::normalize(&postal, Some(&version)).is_ok());
}
