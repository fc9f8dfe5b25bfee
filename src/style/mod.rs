// ABOUTME: Log style module - the two fixed log-line policies and the
// ABOUTME: canonical repr rendering of arguments they embed.

mod policy;
mod repr;

pub use policy::*;
pub use repr::*;
