// ABOUTME: Implements the Orchestrator - sequential batch execution where
// ABOUTME: position picks the log style and results keep input order.

use super::{LengthPolicy, OrchestratorConfig};
use crate::error::HookError;
use crate::invoker::invoke;
use crate::style::LogStyle;
use crate::tool::{Args, Tool, ToolResult};

/// Runs batches of tool calls one after another.
///
/// Position `i` is logged with [`LogStyle::A`] when `i` is even and
/// [`LogStyle::B`] when odd. A failing call is recorded in its slot and the
/// rest of the batch still runs.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create an orchestrator that rejects mismatched batches.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Log style used for the call at `index`.
    pub fn style_for(&self, index: usize) -> LogStyle {
        LogStyle::for_position(index)
    }

    /// Invoke `tools[i]` as `names[i]` with `payloads[i]`, in order.
    ///
    /// Returns one record per call. The only error is a length mismatch under
    /// [`LengthPolicy::Reject`]; tool failures are carried in the records.
    pub fn run_batch<N>(
        &self,
        tools: &[&dyn Tool],
        names: &[N],
        payloads: &[Args],
    ) -> Result<Vec<ToolResult>, HookError>
    where
        N: AsRef<str>,
    {
        let (t, n, p) = (tools.len(), names.len(), payloads.len());
        if t != n || t != p {
            match self.config.on_length_mismatch {
                LengthPolicy::Reject => {
                    return Err(HookError::LengthMismatch {
                        tools: t,
                        names: n,
                        payloads: p,
                    });
                }
                LengthPolicy::Truncate => {
                    tracing::warn!(
                        tools = t,
                        names = n,
                        payloads = p,
                        "batch inputs differ in length, truncating to shortest"
                    );
                }
            }
        }

        Ok(self.run_zipped(tools, names, payloads))
    }

    pub(crate) fn run_zipped<N>(
        &self,
        tools: &[&dyn Tool],
        names: &[N],
        payloads: &[Args],
    ) -> Vec<ToolResult>
    where
        N: AsRef<str>,
    {
        tools
            .iter()
            .zip(names)
            .zip(payloads)
            .enumerate()
            .map(|(index, ((tool, name), args))| {
                invoke(*tool, name.as_ref(), args, self.style_for(index))
            })
            .collect()
    }
}

/// Run a batch with the default orchestrator.
pub fn run_batch<N>(
    tools: &[&dyn Tool],
    names: &[N],
    payloads: &[Args],
) -> Result<Vec<ToolResult>, HookError>
where
    N: AsRef<str>,
{
    Orchestrator::new().run_batch(tools, names, payloads)
}
