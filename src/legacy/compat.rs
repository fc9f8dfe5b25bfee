// ABOUTME: Drop-in replacements for the legacy entry points. Each returns the
// ABOUTME: loose mapping shape existing callers compare against.

use serde_json::{Map, Value};

use super::to_legacy_shape;
use crate::invoker::invoke;
use crate::orchestrator::Orchestrator;
use crate::style::LogStyle;
use crate::tool::{Args, Tool};

/// Call `tool` once with style A logs, returning the legacy mapping.
pub fn call_tool_a<T>(tool: &T, name: &str, args: &Args) -> Map<String, Value>
where
    T: Tool + ?Sized,
{
    to_legacy_shape(&invoke(tool, name, args, LogStyle::A))
}

/// Call `tool` once with style B logs, returning the legacy mapping.
pub fn call_tool_b<T>(tool: &T, name: &str, args: &Args) -> Map<String, Value>
where
    T: Tool + ?Sized,
{
    to_legacy_shape(&invoke(tool, name, args, LogStyle::B))
}

/// Legacy batch runner.
///
/// Pairs inputs positionally and stops at the shortest, as the old runner
/// did, instead of rejecting mismatched lengths like
/// [`run_batch`](crate::orchestrator::run_batch).
pub fn run_all<N>(tools: &[&dyn Tool], names: &[N], payloads: &[Args]) -> Vec<Map<String, Value>>
where
    N: AsRef<str>,
{
    Orchestrator::new()
        .run_zipped(tools, names, payloads)
        .iter()
        .map(to_legacy_shape)
        .collect()
}
