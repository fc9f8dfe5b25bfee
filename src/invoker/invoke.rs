// ABOUTME: Implements invoke - one attempt at calling a tool, converting any
// ABOUTME: failure or panic into an error record instead of propagating it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;

use crate::style::LogStyle;
use crate::tool::{Args, Outcome, Tool, ToolInvocation, ToolResult};

/// Invoke `tool` once with `args`, logging with `style`.
///
/// Never fails: an `Err` or a panic from the tool becomes a record with
/// [`Status::Error`](crate::tool::Status::Error) whose message is the
/// failure's display text.
pub fn invoke<T>(tool: &T, name: &str, args: &Args, style: LogStyle) -> ToolResult
where
    T: Tool + ?Sized,
{
    let start = style.start_line(name, args);
    tracing::debug!(tool = name, style = %style, "invoking tool");

    let (outcome, terminal) = match call_guarded(tool, args) {
        Ok(output) => (Outcome::Ok(output), style.success_line().to_string()),
        Err(message) => {
            tracing::debug!(tool = name, error = %message, "tool invocation failed");
            let line = style.failure_line(&message);
            (Outcome::Error(message), line)
        }
    };

    ToolResult {
        tool_name: name.to_string(),
        args: args.clone(),
        outcome,
        logs: [start, terminal],
    }
}

/// Run a prepared request with its own log style.
pub fn invoke_tool(invocation: &ToolInvocation<'_>) -> ToolResult {
    invoke(
        invocation.tool,
        &invocation.name,
        &invocation.args,
        invocation.log_style,
    )
}

fn call_guarded<T>(tool: &T, args: &Args) -> Result<Value, String>
where
    T: Tool + ?Sized,
{
    match panic::catch_unwind(AssertUnwindSafe(|| tool.call(args))) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "tool panicked".to_string()
    }
}
