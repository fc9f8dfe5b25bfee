// ABOUTME: Root module for tool-hook - structured tool invocation with
// ABOUTME: legacy-compatible result mappings and log lines.

pub mod error;
pub mod invoker;
pub mod legacy;
pub mod orchestrator;
pub mod prelude;
pub mod style;
pub mod tool;

pub use error::{HookError, LegacyShapeError};
