//! Code block pass.
//!
//! Fenced blocks and (optionally) indented blocks become
//! `<pre><code>` elements with their content untouched, and are moved to
//! the stash at once so no later pass can see inside them.

use crate::scan::{self, CODE_INDENT};
use inkdown_core::{Document, Stash};
use log::trace;

/// Render every code block in the document.
pub fn render(doc: &mut Document) {
    let language_class = doc.options.language_class;
    let indented_code = doc.options.indented_code;
    let scanned = scan::scan(&doc.text);
    let lines = &scanned.lines;
    let mut fences = scanned.fences.iter().peekable();

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if let Some(fence) = fences.next_if(|fence| fence.open == i) {
            trace!("fenced code over lines {}..={}", fence.open, fence.close);
            let body = lines[fence.open + 1..fence.close]
                .iter()
                .map(|line| strip_indent(line.text, fence.indent))
                .collect::<Vec<_>>()
                .join("\n");
            let language = if language_class {
                language(fence.info)
            } else {
                None
            };
            out.push(doc.stash.push_block(pre_code(&body, language)));
            i = fence.close + 1;
            continue;
        }

        if indented_code && starts_indented(&lines[i], out.last(), &doc.stash) {
            let begin = i;
            while i < lines.len()
                && lines[i].is_free()
                && !lines[i].is_blank()
                && scan::indent(lines[i].text) >= CODE_INDENT
            {
                i += 1;
            }
            trace!("indented code over lines {}..{}", begin, i);
            let body = lines[begin..i]
                .iter()
                .map(|line| &line.text[CODE_INDENT..])
                .collect::<Vec<_>>()
                .join("\n");
            out.push(doc.stash.push_block(pre_code(&body, None)));
            continue;
        }

        out.push(lines[i].text.to_string());
        i += 1;
    }

    doc.text = out.join("\n");
}

/// Indented code cannot interrupt a paragraph: it needs a blank line or
/// a finished block above it.
fn starts_indented(line: &scan::Line<'_>, previous: Option<&String>, stash: &Stash) -> bool {
    if !line.is_free() || line.is_blank() || scan::indent(line.text) < CODE_INDENT {
        return false;
    }
    match previous {
        None => true,
        Some(prev) => scan::is_blank(prev) || prev.starts_with('<') || stash.is_block_token(prev),
    }
}

/// Remove up to `n` leading spaces.
fn strip_indent(line: &str, n: usize) -> &str {
    &line[scan::indent(line).min(n)..]
}

/// Accept an info word as a language name.
fn language(info: &str) -> Option<&str> {
    let valid = !info.is_empty()
        && info
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '+' | '#' | '.' | '-'));
    valid.then_some(info)
}

/// Wrap code in `<pre><code>`.
pub fn pre_code(body: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) => format!("<pre><code class=\"language-{lang}\">{body}</code></pre>"),
        None => format!("<pre><code>{body}</code></pre>"),
    }
}
