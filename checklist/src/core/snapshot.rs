//! Codec for the persisted `{completed, openId}` record.

use jsonschema::validator_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const SNAPSHOT_SCHEMA: &str = include_str!("../../schemas/snapshot.schema.json");

/// The only stored format: completed step ids plus the open step id.
///
/// Both fields may be absent in stored text; absent fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(rename = "openId", default)]
    pub open_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("invalid snapshot schema: {0}")]
    Schema(String),
    #[error("snapshot has the wrong shape: {0}")]
    Shape(String),
}

/// Decode stored text, validating its shape before deserializing.
pub fn decode_snapshot(raw: &str) -> Result<PersistedSnapshot, SnapshotError> {
    let value: Value = serde_json::from_str(raw)?;
    validate_shape(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Encode as compact JSON with `completed` before `openId`.
pub fn encode_snapshot(snapshot: &PersistedSnapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(snapshot)?)
}

fn validate_shape(value: &Value) -> Result<(), SnapshotError> {
    let schema: Value = serde_json::from_str(SNAPSHOT_SCHEMA)?;
    let compiled = validator_for(&schema).map_err(|err| SnapshotError::Schema(err.to_string()))?;
    if compiled.is_valid(value) {
        return Ok(());
    }
    let messages = compiled
        .iter_errors(value)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    Err(SnapshotError::Shape(messages.join("; ")))
}
