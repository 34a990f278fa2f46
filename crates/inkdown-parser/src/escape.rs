//! Character escaping.
//!
//! [`escape_html`] is the first pass of every conversion. [`unescape`]
//! strips markdown backslash escapes from text that was captured whole
//! (link labels) and so never went through the escape stash.

use inkdown_core::SENTINEL;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that may follow a backslash to be taken literally.
pub const ESCAPABLE: &str = "\\`*_{}[]()#+-.!~|";

/// Regex for a markdown backslash escape
static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([\\`*_{}\[\]()#+\-.!~|])").unwrap());

/// Escape angle brackets and normalise tabs, carriage returns and the
/// stash sentinel to two spaces. CRLF line endings become `\n` first.
///
/// `&` is left alone, so text that is already escaped is not escaped
/// again.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\t' | '\r' => out.push_str("  "),
            c if c == SENTINEL => out.push_str("  "),
            c => out.push(c),
        }
    }
    out
}

/// Remove the backslash from every markdown escape.
pub fn unescape(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "$1").into_owned()
}

/// Make a value safe inside a double-quoted attribute.
pub fn attr(value: &str) -> String {
    value.replace('"', "&quot;")
}
