// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use tool_hook::prelude::*;` to get started quickly.

pub use crate::error::{HookError, LegacyShapeError};
pub use crate::invoker::{invoke, invoke_tool};
pub use crate::legacy::{
    LegacyRecord, call_tool_a, call_tool_b, from_legacy_shape, from_legacy_value, run_all,
    to_legacy_shape,
};
pub use crate::orchestrator::{LengthPolicy, Orchestrator, OrchestratorConfig, run_batch};
pub use crate::style::{LogStyle, repr, repr_args};
pub use crate::tool::{Args, Outcome, Status, Tool, ToolInvocation, ToolResult, args_from};
