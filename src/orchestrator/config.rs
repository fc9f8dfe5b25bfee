// ABOUTME: Orchestrator configuration - how batches with mismatched input
// ABOUTME: lengths are handled. Buildable in code or deserialized from JSON.

use serde::{Deserialize, Serialize};

/// What to do when a batch's tools, names, and payloads differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Fail with [`HookError::LengthMismatch`](crate::HookError::LengthMismatch)
    /// before invoking anything.
    #[default]
    Reject,
    /// Pair inputs positionally and stop at the shortest.
    Truncate,
}

/// Configuration for an [`Orchestrator`](super::Orchestrator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub on_length_mismatch: LengthPolicy,
}

impl OrchestratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatched-length policy.
    pub fn on_length_mismatch(mut self, policy: LengthPolicy) -> Self {
        self.on_length_mismatch = policy;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
