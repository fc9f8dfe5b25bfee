// ABOUTME: Defines the legacy mapping shape and lossless conversion between it
// ABOUTME: and ToolResult. `error` and `output` are always present, null if unset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LegacyShapeError;
use crate::tool::{Args, Outcome, ToolResult};

/// Keys of the legacy shape, in serialization order.
pub const LEGACY_KEYS: [&str; 6] = ["tool_name", "status", "error", "args", "output", "logs"];

/// Field-for-field image of the legacy mapping.
///
/// Unlike [`ToolResult`] it can hold inconsistent combinations; conversion
/// into a `ToolResult` validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyRecord {
    pub tool_name: String,
    pub status: String,
    pub error: Option<String>,
    pub args: Args,
    pub output: Value,
    pub logs: [String; 2],
}

impl From<ToolResult> for LegacyRecord {
    fn from(result: ToolResult) -> Self {
        let status = result.status().as_str().to_string();
        let (error, output) = match result.outcome {
            Outcome::Ok(output) => (None, output),
            Outcome::Error(message) => (Some(message), Value::Null),
        };
        Self {
            tool_name: result.tool_name,
            status,
            error,
            args: result.args,
            output,
            logs: result.logs,
        }
    }
}

impl TryFrom<LegacyRecord> for ToolResult {
    type Error = LegacyShapeError;

    fn try_from(record: LegacyRecord) -> Result<Self, Self::Error> {
        let outcome = match (record.status.as_str(), record.error) {
            ("ok", None) => Outcome::Ok(record.output),
            ("ok", Some(_)) => {
                return Err(LegacyShapeError::Inconsistent(
                    "status 'ok' with an error message".to_string(),
                ));
            }
            ("error", Some(message)) => {
                if !record.output.is_null() {
                    return Err(LegacyShapeError::Inconsistent(
                        "status 'error' with a non-null output".to_string(),
                    ));
                }
                Outcome::Error(message)
            }
            ("error", None) => {
                return Err(LegacyShapeError::Inconsistent(
                    "status 'error' without an error message".to_string(),
                ));
            }
            (other, _) => return Err(LegacyShapeError::InvalidStatus(other.to_string())),
        };

        Ok(Self {
            tool_name: record.tool_name,
            args: record.args,
            outcome,
            logs: record.logs,
        })
    }
}

/// Convert a record to the legacy mapping.
///
/// Success maps to `error: null`; failure maps to `output: null`.
pub fn to_legacy_shape(result: &ToolResult) -> Map<String, Value> {
    let (error, output) = match &result.outcome {
        Outcome::Ok(output) => (Value::Null, output.clone()),
        Outcome::Error(message) => (Value::String(message.clone()), Value::Null),
    };

    let mut map = Map::new();
    map.insert("tool_name".into(), Value::String(result.tool_name.clone()));
    map.insert(
        "status".into(),
        Value::String(result.status().as_str().to_string()),
    );
    map.insert("error".into(), error);
    map.insert("args".into(), Value::Object(result.args.clone()));
    map.insert("output".into(), output);
    map.insert(
        "logs".into(),
        Value::Array(result.logs.iter().cloned().map(Value::String).collect()),
    );
    map
}

/// Rebuild a record from the legacy mapping.
///
/// All six keys must be present and no others. The combination of `status`,
/// `error`, and `output` must describe a valid outcome.
pub fn from_legacy_shape(map: &Map<String, Value>) -> Result<ToolResult, LegacyShapeError> {
    for key in LEGACY_KEYS {
        if !map.contains_key(key) {
            return Err(LegacyShapeError::MissingField(key));
        }
    }
    let record: LegacyRecord = serde_json::from_value(Value::Object(map.clone()))?;
    ToolResult::try_from(record)
}

/// Like [`from_legacy_shape`], for any JSON value.
pub fn from_legacy_value(value: &Value) -> Result<ToolResult, LegacyShapeError> {
    match value {
        Value::Object(map) => from_legacy_shape(map),
        _ => Err(LegacyShapeError::NotAnObject),
    }
}
