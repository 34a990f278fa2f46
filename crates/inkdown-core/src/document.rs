//! Per-call conversion state.

use crate::options::Options;
use crate::stash::Stash;

/// The text being converted plus everything stashed out of it so far.
///
/// A `Document` is created for one conversion and consumed by
/// [`Document::finish`]; nothing about it outlives the call.
#[derive(Debug, Clone)]
pub struct Document {
    /// Current text, rewritten by each pass
    pub text: String,
    /// Fragments removed from the text
    pub stash: Stash,
    /// Options in effect for this conversion
    pub options: Options,
}

impl Document {
    /// Start a conversion of `source` with `options`.
    pub fn new(source: impl Into<String>, options: Options) -> Self {
        Self {
            text: source.into(),
            stash: Stash::new(),
            options,
        }
    }

    /// Replace the text with the output of `pass`.
    pub fn apply(&mut self, pass: impl FnOnce(&str) -> String) {
        self.text = pass(&self.text);
    }

    /// Restore all stashed fragments and return the trimmed result.
    pub fn finish(self) -> String {
        self.stash.restore(&self.text).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_finish() {
        let mut doc = Document::new("\n hello \n", Options::default());
        doc.apply(|text| text.replace("hello", "world"));
        assert_eq!(doc.finish(), "world");
    }

    #[test]
    fn test_finish_restores_stash() {
        let mut doc = Document::new("", Options::default());
        let token = doc.stash.push_inline("<b>x</b>");
        doc.text = format!("  [{token}]  ");
        assert_eq!(doc.finish(), "[<b>x</b>]");
    }
}
