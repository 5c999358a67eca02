//! Canonical bank directory records
//!
//! Branch collections are always `code -> [branch, ..]`, whichever shape
//! the source version used.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::fields::Fields;
use super::Normalize;
use crate::entity::Entity;
use crate::error::{ModelError, Result};
use crate::presence::Presence;
use crate::resolve::Probe;
use crate::transform::branch_sequence;
use crate::version::SchemaVersion;

/// Bank directory record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bank {
    /// Four-digit bank code
    pub code: String,
    pub name: String,
    pub katakana: String,
    pub hiragana: String,
    /// Romanized name, lower case
    pub romaji: String,
}

impl Normalize for Bank {
    const ENTITY: Entity = Entity::Bank;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, _version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of(Self::ENTITY.name(), payload)?;
        Ok(Self {
            code: f.required("code")?,
            name: f.required("name")?,
            katakana: f.required("katakana")?,
            hiragana: f.required("hiragana")?,
            romaji: f.required("romaji")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankBranch {
    pub code: String,
    pub name: String,
    pub katakana: String,
    pub hiragana: String,
    pub romaji: String,
}

impl Normalize for BankBranch {
    const ENTITY: Entity = Entity::BankBranch;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, _version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of(Self::ENTITY.name(), payload)?;
        Ok(Self {
            code: f.required("code")?,
            name: f.required("name")?,
            katakana: f.required("katakana")?,
            hiragana: f.required("hiragana")?,
            romaji: f.required("romaji")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankResolverResponse {
    pub version: SchemaVersion,
    pub data: Bank,
}

impl Normalize for BankResolverResponse {
    const ENTITY: Entity = Entity::Bank;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("BankResolverResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: Bank::normalize_as(f.raw("data")?, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanksResponse {
    pub version: SchemaVersion,
    pub data: Vec<Bank>,
}

impl Normalize for BanksResponse {
    const ENTITY: Entity = Entity::Bank;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("BanksResponse", payload)?;
        Ok(Self {
            version: f.required("version")?,
            data: f.list("data", |item| Bank::normalize_as(item, version))?,
        })
    }
}

fn branches_of(code: &str, entry: &Value, version: &SchemaVersion) -> Result<Vec<BankBranch>> {
    branch_sequence(code, entry)?
        .into_iter()
        .map(|branch| BankBranch::normalize_as(branch, version))
        .collect()
}

/// Branches of one bank, keyed by branch code
///
/// The serialized form (`bank` beside `data: code -> [branch, ..]`) is not
/// a wire shape, so it does not normalize again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankBranchesResponse {
    pub version: SchemaVersion,
    /// Parent bank, unset when the payload does not carry it
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub bank: Presence<Bank>,
    /// Always a sequence per code, even for single-object wire entries
    pub data: BTreeMap<String, Vec<BankBranch>>,
}

impl Normalize for BankBranchesResponse {
    const ENTITY: Entity = Entity::BankBranch;
    const PROBE: Probe = Probe::BranchCollection;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("BankBranchesResponse", payload)?;
        let data = f.nested("data")?;
        let bank = match data.get("bank") {
            Some(bank) => Presence::Set(Bank::normalize_as(bank, version)?),
            None => Presence::Unset,
        };
        let branches = data
            .raw("branches")?
            .as_object()
            .ok_or(ModelError::UnexpectedShape {
                entity: "BankBranchesResponse",
                expected: "an object of branch codes under `data.branches`",
            })?
            .iter()
            .map(|(code, entry)| {
                branches_of(code, entry, version).map(|branches| (code.clone(), branches))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self {
            version: f.required("version")?,
            bank,
            data: branches,
        })
    }
}

/// One branch code of one bank
///
/// Serializes with `data` as a branch list, which is not a wire shape, so
/// the output does not normalize again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankBranchResolverResponse {
    pub version: SchemaVersion,
    /// Parent bank, unset when the payload does not carry it
    #[serde(skip_serializing_if = "Presence::is_unset")]
    pub bank: Presence<Bank>,
    /// Every branch sharing the requested code
    pub data: Vec<BankBranch>,
}

impl Normalize for BankBranchResolverResponse {
    const ENTITY: Entity = Entity::BankBranch;
    const PROBE: Probe = Probe::SingleBranch;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("BankBranchResolverResponse", payload)?;
        let data = f.nested("data")?;
        let bank = match data.get("bank") {
            Some(bank) => Presence::Set(Bank::normalize_as(bank, version)?),
            None => Presence::Unset,
        };
        Ok(Self {
            version: f.required("version")?,
            bank,
            data: branches_of("branch", data.raw("branch")?, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn branch(name: &str) -> Value {
        json!({
            "code": "001",
            "name": name,
            "katakana": "トウキヨウ",
            "hiragana": "とうきょう",
            "romaji": "tokyo"
        })
    }

    #[test]
    fn test_single_object_and_array_agree() {
        let object = json!({
            "version": "2023-09-01",
            "data": {"branches": {"001": branch("東京営業部")}}
        });
        let array = json!({
            "version": "2025-01-01",
            "data": {"branches": {"001": [branch("東京営業部")]}}
        });

        let from_object = BankBranchesResponse::normalize(&object, None).unwrap();
        let from_array = BankBranchesResponse::normalize(&array, None).unwrap();

        assert_eq!(from_object.data, from_array.data);
        assert_eq!(from_object.data["001"].len(), 1);
        assert_eq!(from_object.data["001"][0].code, "001");
        assert!(from_object.bank.is_unset());
    }

    #[test]
    fn test_shape_tolerant_under_pinned_version() {
        let payload = json!({
            "version": "2023-09-01",
            "data": {"branches": {"001": [branch("東京営業部"), branch("旧東京営業部")]}}
        });
        let pinned = SchemaVersion::V2023_09_01;
        let response = BankBranchesResponse::normalize(&payload, Some(&pinned)).unwrap();
        assert_eq!(response.data["001"].len(), 2);
        assert_eq!(response.data["001"][1].name, "旧東京営業部");
    }

    #[test]
    fn test_single_branch_resolver_wraps() {
        let payload = json!({
            "version": "2023-09-01",
            "data": {
                "bank": {
                    "code": "0001",
                    "name": "みずほ",
                    "katakana": "ミズホ",
                    "hiragana": "みずほ",
                    "romaji": "mizuho"
                },
                "branch": branch("東京営業部")
            }
        });
        let response = BankBranchResolverResponse::normalize(&payload, None).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.bank.get().map(|b| b.code.as_str()), Some("0001"));
    }

    #[test]
    fn test_bank_before_introduction_is_unsupported() {
        let payload = json!({"version": "2022-11-01", "data": []});
        let version = SchemaVersion::V2022_11_01;
        let err = BanksResponse::normalize(&payload, Some(&version)).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedVersion { .. }));
    }
}
