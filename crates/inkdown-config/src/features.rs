//! Feature flags configuration.
//!
//! Switches for the optional block constructs.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Recognise pipe tables.
    /// Default: true
    #[serde(default = "default_true")]
    pub tables: bool,

    /// Treat lines indented by four spaces as code.
    /// Default: true
    #[serde(default = "default_true")]
    pub indented_code: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            tables: true,
            indented_code: true,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// TOML cannot tell a missing key from one set to its default, so
    /// every field is copied from `other`.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.tables = other.tables;
        self.indented_code = other.indented_code;
    }
}

fn default_true() -> bool {
    true
}
