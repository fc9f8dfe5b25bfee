// ABOUTME: Orchestrator module - runs batches of tool calls in order with
// ABOUTME: alternating log styles, plus its configuration.

mod config;
mod orchestrator;

pub use config::*;
pub use orchestrator::*;

#[cfg(test)]
mod orchestrator_test;
