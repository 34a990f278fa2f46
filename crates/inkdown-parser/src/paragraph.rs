//! Paragraph pass.
//!
//! Whatever is left as plain text after the block passes is grouped into
//! paragraphs. A paragraph ends at a blank line or at any block line:
//! one that starts with a tag, holds a block token, or sits inside a
//! rendered container.

use crate::escape;
use crate::inline;
use crate::scan::{self, Line};
use inkdown_core::{Document, Stash};
use log::trace;

/// Wrap every run of text lines in `<p>`.
pub fn render(doc: &mut Document) {
    let max_depth = doc.options.max_depth;
    let scanned = scan::scan(&doc.text);
    let lines = &scanned.lines;

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if !is_text(&lines[i], &doc.stash) {
            out.push(lines[i].text.to_string());
            i += 1;
            continue;
        }

        let begin = i;
        while i < lines.len() && is_text(&lines[i], &doc.stash) {
            i += 1;
        }
        trace!("paragraph over lines {}..{}", begin, i);

        let joined = lines[begin..i]
            .iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n");
        let content = escape::unescape(&inline::render_with_depth(joined.trim(), max_depth));
        out.push(format!("<p>{content}</p>"));
    }

    doc.text = out.join("\n");
}

fn is_text(line: &Line<'_>, stash: &Stash) -> bool {
    line.is_free()
        && !line.is_blank()
        && !line.text.trim_start().starts_with('<')
        && !stash.is_block_token(line.text)
}
