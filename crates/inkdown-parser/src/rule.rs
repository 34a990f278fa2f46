//! Horizontal rule pass.

use crate::scan;
use inkdown_core::Document;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a rule: three or more of the same `*`, `-`, `=` or `_`,
/// optionally separated by spaces
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?:(?:\* *){3,}|(?:- *){3,}|(?:= *){3,}|(?:_ *){3,})$").unwrap()
});

/// Check whether a line is a horizontal rule.
pub fn is_rule(line: &str) -> bool {
    RULE_RE.is_match(line)
}

/// Replace every free rule line with `<hr>`.
pub fn render(doc: &mut Document) {
    let scanned = scan::scan(&doc.text);
    doc.text = scanned
        .lines
        .iter()
        .map(|line| {
            if line.is_free() && is_rule(line.text) {
                "<hr>"
            } else {
                line.text
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
}
