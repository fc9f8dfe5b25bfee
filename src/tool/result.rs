// ABOUTME: Defines the ToolResult type - the structured record of one
// ABOUTME: invocation, with a tagged outcome and its two log lines.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Args;
use crate::legacy::LegacyRecord;

/// Coarse outcome of an invocation, as exposed in the legacy `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The tool returned a value.
    Ok,
    /// The tool failed.
    Error,
}

impl Status {
    /// The legacy wire text for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the tool produced: its return value, or the text of its failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ok(Value),
    Error(String),
}

/// Result of a single tool invocation.
///
/// Serializes to and from the legacy mapping shape
/// (`tool_name`, `status`, `error`, `args`, `output`, `logs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "LegacyRecord", try_from = "LegacyRecord")]
pub struct ToolResult {
    /// Display name of the invoked tool.
    pub tool_name: String,

    /// The arguments the tool was called with.
    pub args: Args,

    /// Return value or failure text.
    pub outcome: Outcome,

    /// Start line, then the terminal line.
    pub logs: [String; 2],
}

impl ToolResult {
    pub fn status(&self) -> Status {
        match self.outcome {
            Outcome::Ok(_) => Status::Ok,
            Outcome::Error(_) => Status::Error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status() == Status::Ok
    }

    pub fn is_error(&self) -> bool {
        self.status() == Status::Error
    }

    /// The tool's return value, if it succeeded.
    pub fn output(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Ok(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// The failure text, if the tool failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Ok(_) => None,
            Outcome::Error(message) => Some(message),
        }
    }

    /// The first log line, written before the tool ran.
    pub fn start_line(&self) -> &str {
        &self.logs[0]
    }

    /// The last log line, describing how the call ended.
    pub fn terminal_line(&self) -> &str {
        &self.logs[1]
    }
}
