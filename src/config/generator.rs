//! Generator configuration.

use serde::Deserialize;

/// Identifier generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for the random source. Unset means seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Maximum identifiers per request.
    #[serde(default = "default_max_count")]
    pub max_count: u32,
}

const fn default_max_count() -> u32 {
    1000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_count: default_max_count(),
        }
    }
}
