// ABOUTME: Invoker module - runs one tool call inside a failure boundary and
// ABOUTME: builds its result record and log lines.

mod invoke;

pub use invoke::*;
