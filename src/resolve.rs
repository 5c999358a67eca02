//! Schema version inference
//!
//! When the caller does not pin a version, the version is inferred from the
//! shape of the payload alone. Every heuristic is total: it always yields a
//! version and never inspects field values beyond their JSON type.

use serde_json::Value;
use tracing::debug;

use crate::entity::Entity;
use crate::version::SchemaVersion;

/// Structural signal used to infer a payload's version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// No signal; the family's introduction version
    Introduction,
    /// `address` key on the record itself
    RecordAddress,
    /// `address` key on the record under `data` (first item when `data` is a list)
    ResponseAddress,
    /// Value type of the first entry under `data.branches`
    BranchCollection,
    /// Value type of `data.branch`
    SingleBranch,
}

/// Use `explicit` unconditionally, otherwise infer from `payload`
pub fn resolve(
    entity: Entity,
    probe: Probe,
    payload: &Value,
    explicit: Option<&SchemaVersion>,
) -> SchemaVersion {
    if let Some(version) = explicit {
        return version.clone();
    }
    let inferred = infer(entity, probe, payload);
    debug!(entity = entity.name(), ?probe, version = %inferred, "inferred schema version");
    inferred
}

/// Infer a version from payload structure
pub fn infer(entity: Entity, probe: Probe, payload: &Value) -> SchemaVersion {
    match probe {
        Probe::Introduction => entity.introduced_in(),
        Probe::RecordAddress => by_nested_address(entity, Some(payload)),
        Probe::ResponseAddress => by_nested_address(entity, first_record(payload)),
        Probe::BranchCollection => by_branch_shape(
            payload
                .pointer("/data/branches")
                .and_then(Value::as_object)
                .and_then(|branches| branches.values().next()),
        ),
        Probe::SingleBranch => by_branch_shape(payload.pointer("/data/branch")),
    }
}

fn first_record(payload: &Value) -> Option<&Value> {
    match payload.get("data")? {
        Value::Array(items) => items.first(),
        record => Some(record),
    }
}

// Two-way split only: nested address means the newest shape, anything else
// the oldest version carrying the family.
fn by_nested_address(entity: Entity, record: Option<&Value>) -> SchemaVersion {
    if record.is_some_and(|r| r.get("address").is_some()) {
        SchemaVersion::LATEST
    } else {
        entity.introduced_in()
    }
}

fn by_branch_shape(branch: Option<&Value>) -> SchemaVersion {
    match branch {
        Some(Value::Array(_)) => SchemaVersion::BRANCH_SEQUENCES,
        _ => Entity::BankBranch.introduced_in(),
    }
}
