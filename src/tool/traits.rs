// ABOUTME: Defines the Tool trait - the opaque callable behind every invocation.
// ABOUTME: Plain functions and closures over keyword arguments implement it.

use serde_json::Value;

/// Keyword arguments passed to a tool, in insertion order.
pub type Args = serde_json::Map<String, Value>;

/// A callable that can be invoked with keyword arguments.
///
/// Failures are reported through `Err`; the invoker turns them into error
/// records and never lets them escape.
pub trait Tool {
    /// Call the tool with the given arguments.
    fn call(&self, args: &Args) -> Result<Value, anyhow::Error>;
}

impl<F> Tool for F
where
    F: Fn(&Args) -> Result<Value, anyhow::Error>,
{
    fn call(&self, args: &Args) -> Result<Value, anyhow::Error> {
        self(args)
    }
}

/// Build an [`Args`] map from a JSON value.
///
/// Anything other than a JSON object yields an empty map.
pub fn args_from(value: Value) -> Args {
    match value {
        Value::Object(map) => map,
        _ => Args::new(),
    }
}
