//! Heading pass.

use crate::escape;
use crate::inline;
use crate::scan;
use inkdown_core::Document;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for ATX headings, possibly wrapped in rendered blockquote tags.
/// A closing run of `#` is dropped when a space separates it from the text.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:<blockquote>)*) {0,3}(#{1,6}) +(.*?)(?: +#+)? *((?:</blockquote>)*)$")
        .unwrap()
});

/// Render every heading outside lists.
pub fn render(doc: &mut Document) {
    let max_depth = doc.options.max_depth;
    let scanned = scan::scan(&doc.text);

    let out: Vec<String> = scanned
        .lines
        .iter()
        .map(|line| {
            if line.list_depth > 0 || line.fenced {
                return line.text.to_string();
            }
            heading(line.text, max_depth).unwrap_or_else(|| line.text.to_string())
        })
        .collect();

    doc.text = out.join("\n");
}

/// Render one heading line, or `None` if `line` is not a heading.
///
/// ```
/// use inkdown_parser::heading::heading;
/// assert_eq!(heading("## Hi ##", 16).as_deref(), Some("<h2>Hi</h2>"));
/// assert_eq!(heading("#hashtag", 16), None);
/// ```
pub fn heading(line: &str, max_depth: usize) -> Option<String> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps[2].len();
    let content = escape::unescape(&inline::render_with_depth(&caps[3], max_depth));
    Some(format!(
        "{}<h{level}>{content}</h{level}>{}",
        &caps[1], &caps[4]
    ))
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
    fn test_levels() {
        for level in 1..=6 {
            let line = format!("{} Title", "#".repeat(level));
            assert_eq!(
                heading(&line, 16),
                Some(format!("<h{level}>Title</h{level}>"))
            );
        }
        assert_eq!(heading("####### Title", 16), None);
    }

    #[test]
    fn test_trailing_hashes() {
        assert_eq!(heading("# a #", 16).as_deref(), Some("<h1>a</h1>"));
        assert_eq!(heading("# a ###  ", 16).as_deref(), Some("<h1>a</h1>"));
        assert_eq!(heading("# C#", 16).as_deref(), Some("<h1>C#</h1>"));
    }

    #[test]
    fn test_needs_space() {
        assert_eq!(heading("#tag", 16), None);
        assert_eq!(heading("    # code", 16), None);
    }

    #[test]
    fn test_inline_content() {
        assert_eq!(
            heading("# *a* and `b`", 16).as_deref(),
            Some("<h1><em>a</em> and <code>b</code></h1>")
        );
    }

    #[test]
    fn test_inside_blockquote() {
        assert_eq!(
            run("<blockquote># a\n## b</blockquote>"),
            "<blockquote><h1>a</h1>\n<h2>b</h2></blockquote>"
        );
    }

    #[test]
    fn test_not_inside_lists() {
        let text = "<ul><li>a\n# b</li></ul>";
        assert_eq!(run(text), text);
    }

    #[test]
    fn test_document() {
        assert_eq!(run("\n# Title\ntext\n"), "\n<h1>Title</h1>\ntext\n");
    }
}
