//! Structural transforms applied before canonical construction
//!
//! - Corporate-info address flattening: from the nested-address version on,
//!   address fields live under `address.*` and are lifted onto the flat
//!   canonical names.
//! - Branch reshaping: a branch code maps to either one branch object or an
//!   array of them depending on version; canonically it is always a sequence.

use serde_json::{Map, Value};
use tracing::trace;

use crate::compat::fields::Fields;
use crate::entity::Entity;
use crate::error::{ModelError, Result};

/// `address.<source>` → canonical top-level field
pub const CORPORATE_ADDRESS_FIELDS: [(&str, &str); 11] = [
    ("prefecture", "prefecture_name"),
    ("city", "city_name"),
    ("street_number", "street_number"),
    ("town", "town"),
    ("kyoto_street", "kyoto_street"),
    ("block_lot_num", "block_lot_num"),
    ("building", "building"),
    ("floor_room", "floor_room"),
    ("jisx0402", "jisx0402"),
    ("postal_code", "post_code"),
    ("prefecture_roman", "en_prefecture_name"),
];

/// Lift a nested corporate-info address onto flat canonical field names.
///
/// Every mapped source key must exist; a missing one is a construction
/// error rather than an unset field. Other top-level keys are carried over
/// untouched and the `address` object itself is dropped.
pub fn flatten_corporate_address(record: &Value) -> Result<Map<String, Value>> {
    let fields = Fields::of(Entity::CorporateInfo.name(), record)?;
    let address = fields.nested("address")?;

    let mut flat = fields.map().clone();
    flat.remove("address");
    for (source, target) in CORPORATE_ADDRESS_FIELDS {
        flat.insert(target.to_string(), address.raw(source)?.clone());
    }
    Ok(flat)
}

/// View one branch-code entry as a sequence of branch payloads.
///
/// A single object becomes a one-element sequence; an array passes through.
pub fn branch_sequence<'a>(code: &str, entry: &'a Value) -> Result<Vec<&'a Value>> {
    match entry {
        Value::Array(items) => Ok(items.iter().collect()),
        Value::Object(_) => {
            trace!(code, "wrapping single branch in a sequence");
            Ok(vec![entry])
        }
        _ => Err(ModelError::InvalidField {
            entity: Entity::BankBranch.name(),
            field: code.to_string(),
            reason: "expected a branch object or an array of branches".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested_record() -> Value {
        json!({
            "corporate_number": "1234567890123",
            "address": {
                "prefecture": "東京都",
                "city": "千代田区",
                "street_number": "大手町１丁目１番１号",
                "town": "大手町",
                "kyoto_street": "",
                "block_lot_num": "１丁目１番１号",
                "building": "",
                "floor_room": "",
                "jisx0402": "13101",
                "postal_code": "1000004",
                "prefecture_roman": "Tokyo",
                "prefecture_kana": "トウキョウト"
            }
        })
    }

    #[test]
    fn test_flatten_renames_mapped_fields() {
        let flat = flatten_corporate_address(&nested_record()).unwrap();

        assert_eq!(flat["prefecture_name"], "東京都");
        assert_eq!(flat["city_name"], "千代田区");
        assert_eq!(flat["post_code"], "1000004");
        assert_eq!(flat["en_prefecture_name"], "Tokyo");
        assert_eq!(flat["corporate_number"], "1234567890123");
        assert!(!flat.contains_key("address"));
        assert!(!flat.contains_key("prefecture_kana"));
    }

    #[test]
    fn test_flatten_missing_source_is_an_error() {
        let mut record = nested_record();
        record["address"].as_object_mut().unwrap().remove("postal_code");

        let err = flatten_corporate_address(&record).unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField { ref field, .. } if field == "address.postal_code"
        ));
    }

    #[test]
    fn test_flatten_requires_address_object() {
        let err = flatten_corporate_address(&json!({"prefecture_name": "東京都"})).unwrap_err();
        assert!(matches!(err, ModelError::MissingField { ref field, .. } if field == "address"));
    }

    #[test]
    fn test_branch_sequence_wraps_objects() {
        let single = json!({"code": "001"});
        let many = json!([{"code": "001"}, {"code": "001", "name": "old"}]);

        assert_eq!(branch_sequence("001", &single).unwrap(), vec![&single]);
        assert_eq!(branch_sequence("001", &many).unwrap().len(), 2);
        assert!(branch_sequence("001", &json!("001")).is_err());
    }
}
