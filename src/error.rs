// ABOUTME: Defines all error types for the tool-hook library using thiserror.
// ABOUTME: Contract violations only; tool failures are carried as data.

/// Top-level error type for the tool-hook library.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error(
        "batch inputs differ in length: {tools} tools, {names} names, {payloads} payloads"
    )]
    LengthMismatch {
        tools: usize,
        names: usize,
        payloads: usize,
    },

    #[error("log_style must be 'a' or 'b', got '{0}'")]
    UnknownLogStyle(String),

    #[error("Legacy shape error: {0}")]
    Legacy(#[from] LegacyShapeError),
}

/// Errors from converting a legacy mapping into a [`ToolResult`](crate::tool::ToolResult).
#[derive(Debug, thiserror::Error)]
pub enum LegacyShapeError {
    #[error("expected a JSON object")]
    NotAnObject,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("unknown status: {0}")]
    InvalidStatus(String),

    #[error("inconsistent record: {0}")]
    Inconsistent(String),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}
