//! Enumeration types for rendering options.

use serde::{Deserialize, Serialize};

/// Output format for rendered results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain terminal text.
    #[default]
    Text,
    /// Human-readable Markdown format.
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl OutputFormat {
    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}
