//! Configuration for the evaluator.

use serde::{Deserialize, Serialize};

/// What to do when a sum leaves the `i32` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowMode {
    /// Wrap around in two's complement.
    #[default]
    Wrapping,
    /// Fail with [`crate::Error::Overflow`].
    Checked,
}

/// Configuration for the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Maximum number of nested nodes from the root to any leaf. Deeper trees
    /// fail with [`crate::Error::DepthLimitExceeded`] before the native stack
    /// runs out.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Overflow behaviour of sums.
    #[serde(default)]
    pub overflow: OverflowMode,
}

fn default_max_depth() -> usize {
    2048
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            overflow: OverflowMode::default(),
        }
    }
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    #[must_use]
    pub fn with_overflow(self, overflow: OverflowMode) -> Self {
        Self { overflow, ..self }
    }
}
