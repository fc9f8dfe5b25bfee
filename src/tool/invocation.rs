// ABOUTME: Defines ToolInvocation - a prepared request pairing a tool with
// ABOUTME: its display name, keyword arguments, and log style.

use std::fmt;

use super::{Args, Tool};
use crate::style::LogStyle;

/// A single tool invocation request.
pub struct ToolInvocation<'a> {
    /// The callable to invoke.
    pub tool: &'a dyn Tool,

    /// Name used in the record and log lines.
    pub name: String,

    /// Keyword arguments passed to the tool.
    pub args: Args,

    /// Log templates to use. Defaults to [`LogStyle::A`].
    pub log_style: LogStyle,
}

impl<'a> ToolInvocation<'a> {
    /// Create a request using the default log style.
    pub fn new(tool: &'a dyn Tool, name: impl Into<String>, args: Args) -> Self {
        Self {
            tool,
            name: name.into(),
            args,
            log_style: LogStyle::default(),
        }
    }

    /// Set the log style.
    pub fn log_style(mut self, style: LogStyle) -> Self {
        self.log_style = style;
        self
    }
}

impl fmt::Debug for ToolInvocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolInvocation")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("log_style", &self.log_style)
            .finish_non_exhaustive()
    }
}
