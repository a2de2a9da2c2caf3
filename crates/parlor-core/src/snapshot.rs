//! Decoding session snapshots delivered by the game data source.

use std::path::Path;

use parlor_models::Session;
use serde_json::Value;

use crate::error::CoreError;

/// Decode every record of a snapshot, skipping the ones that do not parse.
///
/// A snapshot is either an array of records or an id-keyed object of records.
/// One bad record never hides the rest of the lobby.
pub fn decode_sessions(snapshot: Value) -> Vec<Session> {
    let records = match snapshot {
        Value::Array(records) => records,
        Value::Object(map) => map.into_iter().map(|(_, record)| record).collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(kind = json_kind(&other), "snapshot is not a collection, ignoring");
            return Vec::new();
        }
    };

    let total = records.len();
    let sessions: Vec<Session> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Session>(record) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed session record");
                None
            }
        })
        .collect();

    if sessions.len() < total {
        tracing::info!(
            decoded = sessions.len(),
            skipped = total - sessions.len(),
            "snapshot decoded with skipped records"
        );
    }
    sessions
}

/// Read and decode a snapshot file.
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<Session>, CoreError> {
    let raw = tokio::fs::read_to_string(path.as_ref()).await?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(decode_sessions(value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
