// ABOUTME: Defines LogStyle - a stateless formatting policy for the start,
// ABOUTME: success, and failure log lines of an invocation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::repr_args;
use crate::error::HookError;
use crate::tool::Args;

/// Which set of log templates an invocation uses.
///
/// | Style | Start                       | Success | Failure           |
/// |-------|-----------------------------|---------|-------------------|
/// | A     | `calling {name} with {args}`| `done`  | `error: {error}`  |
/// | B     | `tool {name} start {args}`  | `ok`    | `failed: {error}` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogStyle {
    #[default]
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
}

impl LogStyle {
    /// Style used at a batch position: A on even indices, B on odd.
    pub fn for_position(index: usize) -> Self {
        if index % 2 == 0 {
            LogStyle::A
        } else {
            LogStyle::B
        }
    }

    /// The legacy tag, `"a"` or `"b"`.
    pub fn tag(self) -> &'static str {
        match self {
            LogStyle::A => "a",
            LogStyle::B => "b",
        }
    }

    /// Line recorded before the tool runs.
    pub fn start_line(self, name: &str, args: &Args) -> String {
        let args = repr_args(args);
        match self {
            LogStyle::A => format!("calling {} with {}", name, args),
            LogStyle::B => format!("tool {} start {}", name, args),
        }
    }

    /// Line recorded when the tool returns.
    pub fn success_line(self) -> &'static str {
        match self {
            LogStyle::A => "done",
            LogStyle::B => "ok",
        }
    }

    /// Line recorded when the tool fails with `error`.
    pub fn failure_line(self, error: &str) -> String {
        match self {
            LogStyle::A => format!("error: {}", error),
            LogStyle::B => format!("failed: {}", error),
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LogStyle {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(LogStyle::A),
            "b" => Ok(LogStyle::B),
            other => Err(HookError::UnknownLogStyle(other.to_string())),
        }
    }
}
