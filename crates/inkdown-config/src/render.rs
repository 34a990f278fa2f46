//! Rendering configuration.

use inkdown_core::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Settings that shape the generated HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderConfig {
    /// Add `class="language-x"` to fenced code blocks with an info word.
    /// Default: true
    #[serde(default = "default_true")]
    pub language_class: bool,

    /// Deepest nesting of blockquotes, lists and inline spans.
    /// Default: 16
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language_class: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Merge another RenderConfig into this one.
    pub fn merge(&mut self, other: &RenderConfig) {
        self.language_class = other.language_class;
        self.max_depth = other.max_depth;
    }
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
