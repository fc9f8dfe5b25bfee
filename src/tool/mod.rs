// ABOUTME: Tool module - the callable abstraction, requests, and result records.
// ABOUTME: Core data model shared by the invoker and orchestrator.

mod invocation;
mod result;
mod traits;

pub use invocation::*;
pub use result::*;
pub use traits::*;
