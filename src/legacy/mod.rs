// ABOUTME: Legacy module - conversion to and from the loose mapping shape,
// ABOUTME: and the drop-in call_tool_a / call_tool_b / run_all entry points.

mod compat;
mod shape;

pub use compat::*;
pub use shape::*;
