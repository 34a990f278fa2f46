//! Link, image and escape pass.
//!
//! Links and images are rendered and stashed straight away, as are
//! backslash escapes: the backslash is dropped and the character itself
//! is stashed so later passes cannot treat it as markup.

use crate::escape;
use crate::inline;
use inkdown_core::Document;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for `[label](url "title")`, `![alt](url)` or a backslash escape.
/// A title is consumed but not emitted.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(!?)\[((?:\\.|[^\\\]\n])*)\]\(([^\s)]*)(?: +"[^"\n]*")? *\)|\\([\\`*_{}\[\]()#+\-.!~|])"#,
    )
    .unwrap()
});

/// Render and stash every link, image and escape in the document.
pub fn render(doc: &mut Document) {
    let max_depth = doc.options.max_depth;
    let stash = &mut doc.stash;
    let text = LINK_RE
        .replace_all(&doc.text, |caps: &Captures| {
            let html = match caps.get(4) {
                Some(escaped) => escaped.as_str().to_string(),
                None => link_html(caps, max_depth),
            };
            stash.push_inline(html)
        })
        .into_owned();
    doc.text = text;
}

fn link_html(caps: &Captures, max_depth: usize) -> String {
    let label = &caps[2];
    let url = escape::attr(&caps[3]);

    if caps[1].is_empty() {
        let label = escape::unescape(&inline::render_with_depth(label, max_depth));
        format!("<a href=\"{url}\">{label}</a>")
    } else {
        let alt = escape::attr(&escape::unescape(label));
        format!("<img src=\"{url}\" alt=\"{alt}\">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkdown_core::Options;

    fn run(text: &str) -> String {
        let mut doc = Document::new(text, Options::default());
        render(&mut doc);
        doc.finish()
    }

    #[test]
    fn test_link() {
        assert_eq!(
            run("[text](http://x.test)"),
            "<a href=\"http://x.test\">text</a>"
        );
    }

    #[test]
    fn test_link_with_title() {
        assert_eq!(
            run("[a](/b \"The B\")"),
            "<a href=\"/b\">a</a>"
        );
    }

    #[test]
    fn test_link_label_inline() {
        assert_eq!(
            run("[**bold** \\_x\\_](u)"),
            "<a href=\"u\"><strong>bold</strong> _x_</a>"
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            run("![a \"cat\"](cat.png)"),
            "<img src=\"cat.png\" alt=\"a &quot;cat&quot;\">"
        );
    }

    #[test]
    fn test_two_links_on_a_line() {
        assert_eq!(
            run("[a](x \"t\") and [b](y \"s\")"),
            "<a href=\"x\">a</a> and <a href=\"y\">b</a>"
        );
    }

    #[test]
    fn test_label_stops_at_first_bracket() {
        assert_eq!(
            run("[a] b [c](d)"),
            "[a] b <a href=\"d\">c</a>"
        );
        assert_eq!(run(r"[a\]b](u)"), "<a href=\"u\">a]b</a>");
    }

    #[test]
    fn test_escape_is_stashed() {
        let mut doc = Document::new(r"\*a\*", Options::default());
        render(&mut doc);
        assert!(!doc.text.contains('*'));
        assert_eq!(doc.stash.len(), 2);
        assert_eq!(doc.finish(), "*a*");
    }

    #[test]
    fn test_escaped_bracket_is_not_a_link() {
        assert_eq!(run(r"\[a](b)"), "[a](b)");
    }

    #[test]
    fn test_unknown_escape_is_kept() {
        assert_eq!(run(r"a\qb"), r"a\qb");
    }

    #[test]
    fn test_incomplete_link_is_text() {
        assert_eq!(run("[a](b"), "[a](b");
        assert_eq!(run("[a] (b)"), "[a] (b)");
    }
}
