//! Placeholder table for finished HTML fragments.
//!
//! Passes that produce final HTML early (code blocks, links, images,
//! escaped characters) park the fragment here and leave a token in the
//! text. Later passes see only the token, which contains no markdown
//! syntax, and [`Stash::restore`] swaps the fragments back in at the end.

use crate::enums::FragmentKind;
use regex::Regex;
use std::sync::LazyLock;

/// Private-use code point that brackets every token.
///
/// The escaping pass rewrites this character in the source, so a token
/// can only come from [`Stash::push`].
pub const SENTINEL: char = '\u{F8FF}';

/// Regex for a stash token: sentinel, negative index, sentinel
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{F8FF}-([0-9]+)\u{F8FF}").unwrap());

/// A stashed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Block or inline
    pub kind: FragmentKind,
    /// Rendered HTML
    pub html: String,
}

/// Table of fragments keyed by negative indices (-1, -2, ...).
#[derive(Debug, Clone, Default)]
pub struct Stash {
    fragments: Vec<Fragment>,
}

impl Stash {
    /// Create an empty stash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fragment and return the token that stands for it.
    pub fn push(&mut self, kind: FragmentKind, html: impl Into<String>) -> String {
        self.fragments.push(Fragment {
            kind,
            html: html.into(),
        });
        let index = -(self.fragments.len() as i64);
        format!("{SENTINEL}{index}{SENTINEL}")
    }

    /// Store a block-level fragment.
    pub fn push_block(&mut self, html: impl Into<String>) -> String {
        self.push(FragmentKind::Block, html)
    }

    /// Store an inline fragment.
    pub fn push_inline(&mut self, html: impl Into<String>) -> String {
        self.push(FragmentKind::Inline, html)
    }

    /// Number of stashed fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether nothing has been stashed.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Look up a fragment by its (negative) index.
    pub fn get(&self, index: i64) -> Option<&Fragment> {
        if index >= 0 {
            return None;
        }
        let position = usize::try_from(-(index + 1)).ok()?;
        self.fragments.get(position)
    }

    /// Parse a string that is exactly one token into its index.
    pub fn parse_token(s: &str) -> Option<i64> {
        let caps = TOKEN_RE.captures(s)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != s.len() {
            return None;
        }
        caps[1].parse::<i64>().ok().map(|n| -n)
    }

    /// Whether `s` (ignoring surrounding whitespace) is a block token.
    pub fn is_block_token(&self, s: &str) -> bool {
        Self::parse_token(s.trim())
            .and_then(|index| self.get(index))
            .is_some_and(|fragment| fragment.kind == FragmentKind::Block)
    }

    /// Replace every token in `text` with its fragment.
    ///
    /// Fragments never contain tokens, so a single pass is enough.
    pub fn restore(&self, text: &str) -> String {
        TOKEN_RE
            .replace_all(text, |caps: &regex::Captures| {
                caps[1]
                    .parse::<i64>()
                    .ok()
                    .and_then(|n| self.get(-n))
                    .map(|fragment| fragment.html.clone())
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
