//! Blockquote pass.
//!
//! A blockquote starts at a line beginning with `&gt;` (the source `>`
//! after escaping) and runs to the next blank line. One level of marker
//! is stripped from each line; deeper levels become nested quotes.

use crate::inline;
use crate::scan::{self, CODE_INDENT};
use inkdown_core::Document;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for one level of quote marker at the start of a line
static QUOTE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ *&gt; *").unwrap());

/// Render every blockquote in the document.
pub fn render(doc: &mut Document) {
    let max_depth = doc.options.max_depth;
    let indented_code = doc.options.indented_code;
    doc.text = quote(&doc.text, max_depth, indented_code);
}

fn starts_quote(line: &str, indented_code: bool) -> bool {
    let rest = line.trim_start_matches(' ');
    rest.starts_with("&gt;") && !(indented_code && scan::indent(line) >= CODE_INDENT)
}

fn quote(text: &str, depth: usize, indented_code: bool) -> String {
    if depth == 0 {
        return text.to_string();
    }

    let scanned = scan::scan(text);
    let lines = &scanned.lines;
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].is_free() || !starts_quote(lines[i].text, indented_code) {
            out.push(lines[i].text.to_string());
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && lines[i].is_free() && !lines[i].is_blank() {
            i += 1;
        }
        trace!("blockquote over lines {}..{}", start, i);

        let inner = lines[start..i]
            .iter()
            .map(|line| QUOTE_MARKER_RE.replace(line.text, ""))
            .collect::<Vec<_>>()
            .join("\n");
        let inner = inline::render_with_depth(&inner, depth);
        let inner = quote(&inner, depth - 1, indented_code);
        out.push(format!("<blockquote>{inner}</blockquote>"));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkdown_core::Options;

    fn run(text: &str) -> String {
        let mut doc = Document::new(text, Options::default());
        render(&mut doc);
        doc.text
    }

    #[test]
    fn test_single_line() {
        assert_eq!(run("\n&gt; hello\n"), "\n<blockquote>hello</blockquote>\n");
    }

    #[test]
    fn test_runs_to_blank_line() {
        assert_eq!(
            run("&gt; a\n&gt; b\nlazy\n\nafter"),
            "<blockquote>a\nb\nlazy</blockquote>\n\nafter"
        );
    }

    #[test]
    fn test_inline_content() {
        assert_eq!(run("&gt; *hi*"), "<blockquote><em>hi</em></blockquote>");
    }

    #[test]
    fn test_link_destination_keeps_markers() {
        assert_eq!(
            run("&gt; see [x](http://a.b/_c_)"),
            "<blockquote>see [x](http://a.b/_c_)</blockquote>"
        );
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            run("&gt; a\n&gt; &gt; b"),
            "<blockquote>a\n<blockquote>b</blockquote></blockquote>"
        );
    }

    #[test]
    fn test_fenced_lines_are_skipped() {
        let text = "```\n&gt; not a quote\n```";
        assert_eq!(run(text), text);
    }

    #[test]
    fn test_indented_marker_is_code() {
        assert_eq!(run("    &gt; code"), "    &gt; code");
    }

    #[test]
    fn test_depth_bound() {
        let text = "&gt; ".repeat(100) + "deep";
        let out = run(&text);
        assert_eq!(out.matches("<blockquote>").count(), 16);
        assert!(out.contains("deep"));
    }
}
