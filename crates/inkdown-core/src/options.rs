//! Conversion options.

/// Default bound on recursion through nested quotes, lists and spans.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Switches that change what the converter recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Recognise pipe tables.
    pub tables: bool,
    /// Recognise code blocks indented by four spaces.
    pub indented_code: bool,
    /// Add `class="language-x"` to fenced code with an info word.
    pub language_class: bool,
    /// Maximum nesting depth for blockquotes, lists and inline spans.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tables: true,
            indented_code: true,
            language_class: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
