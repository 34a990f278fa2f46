//! Inline span transformer.
//!
//! Converts emphasis, strike, sub/sup, small/big and code spans inside a
//! fragment of text into HTML elements. Span content is transformed again
//! (so spans nest) up to a depth bound; code span content is copied as is.
//!
//! The scanner is hand-written rather than one big regex so that it stays
//! linear on hostile input: when no closer exists for a marker before the
//! next barrier (line break or tag), later openers of the same marker in
//! front of that barrier are not searched again.
//!
//! A link destination (the run after `](` up to whitespace or `)`) is
//! copied as is: markers in a URL are never markup.

use inkdown_core::{Span, DEFAULT_MAX_DEPTH};

/// Marker characters; their position indexes the failure memo
const MARKERS: [u8; 7] = *b"*_~^-+`";

/// Transform all inline spans in `fragment`.
///
/// ```
/// use inkdown_parser::inline;
/// assert_eq!(inline::render("**a *b* c**"), "<strong>a <em>b</em> c</strong>");
/// assert_eq!(inline::render("`**x**`"), "<code>**x**</code>");
/// ```
pub fn render(fragment: &str) -> String {
    render_with_depth(fragment, DEFAULT_MAX_DEPTH)
}

/// Transform inline spans, nesting at most `max_depth` levels deep.
pub fn render_with_depth(fragment: &str, max_depth: usize) -> String {
    let mut out = String::with_capacity(fragment.len() + 16);
    transform(fragment, max_depth, &mut out);
    out
}

/// A matched span, as byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Matched {
    span: Span,
    content_start: usize,
    content_end: usize,
    /// End of the closing run
    end: usize,
}

/// For each marker and width, the barrier a failed closer search ran into.
#[derive(Debug, Default)]
struct DeadEnds([usize; MARKERS.len() * 2]);

impl DeadEnds {
    fn slot(marker: u8, width: usize) -> usize {
        let index = MARKERS.iter().position(|&m| m == marker).unwrap_or(0);
        index * 2 + width.saturating_sub(1).min(1)
    }

    fn blocks(&self, marker: u8, width: usize, at: usize) -> bool {
        at < self.0[Self::slot(marker, width)]
    }

    fn mark(&mut self, marker: u8, width: usize, barrier: usize) {
        self.0[Self::slot(marker, width)] = barrier;
    }
}

fn transform(text: &str, depth: usize, out: &mut String) {
    if depth == 0 {
        out.push_str(text);
        return;
    }

    let bytes = text.as_bytes();
    let mut dead = DeadEnds::default();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'<' {
            i = skip_tag(text, i);
            continue;
        }
        if b == b']' {
            i = skip_destination(bytes, i);
            continue;
        }
        if !MARKERS.contains(&b) {
            i += 1;
            continue;
        }

        let run = run_length(bytes, i);
        match match_span(text, i, run, &mut dead) {
            Some(m) => {
                out.push_str(&text[copied..i]);
                let tag = m.span.tag();
                let content = &text[m.content_start..m.content_end];
                out.push('<');
                out.push_str(tag);
                out.push('>');
                if m.span == Span::Code {
                    out.push_str(content);
                } else {
                    transform(content, depth - 1, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                i = m.end;
                copied = i;
            }
            None => i += run,
        }
    }

    out.push_str(&text[copied..]);
}

/// Step over a tag starting at `at`; a whole `<code>` element is skipped.
fn skip_tag(text: &str, at: usize) -> usize {
    let rest = &text[at..];
    if rest.starts_with("<code") {
        if let Some(end) = rest.find("</code>") {
            return at + end + "</code>".len();
        }
    }
    match rest.find('>') {
        Some(close) => at + close + 1,
        None => at + 1,
    }
}

/// Step over `](destination` starting at the `]` at `at`.
fn skip_destination(bytes: &[u8], at: usize) -> usize {
    if bytes.get(at + 1) != Some(&b'(') {
        return at + 1;
    }
    let url = bytes[at + 2..]
        .iter()
        .take_while(|&&b| b != b')' && !b.is_ascii_whitespace())
        .count();
    at + 2 + url
}

fn run_length(bytes: &[u8], at: usize) -> usize {
    bytes[at..].iter().take_while(|&&b| b == bytes[at]).count()
}

/// Try to open a span with the marker run of length `run` at `at`.
fn match_span(text: &str, at: usize, run: usize, dead: &mut DeadEnds) -> Option<Matched> {
    let bytes = text.as_bytes();
    let marker = bytes[at];
    let width = run.min(2);
    let span = Span::from_marker(marker as char, width)?;

    if let Some(prev) = text[..at].chars().next_back() {
        if prev.is_alphanumeric() || prev == '\\' {
            return None;
        }
    }

    let content_start = at + width;
    match text[content_start..].chars().next() {
        Some(c) if !c.is_whitespace() => {}
        _ => return None,
    }

    if dead.blocks(marker, width, at) {
        return None;
    }

    let mut k = content_start;
    while k < bytes.len() {
        let b = bytes[k];
        if b == b'\n' || b == b'<' {
            break;
        }
        if b == b']' {
            k = skip_destination(bytes, k);
            continue;
        }
        if b != marker {
            k += 1;
            continue;
        }
        let r = run_length(bytes, k);
        if k > content_start {
            if let Some(content_end) = closer(text, k, r, width) {
                return Some(Matched {
                    span,
                    content_start,
                    content_end,
                    end: content_end + width,
                });
            }
        }
        k += r;
    }

    dead.mark(marker, width, k);
    None
}

/// Check the run of `run` markers at `at` as a closer of `width`.
///
/// Returns where the span content ends. A run longer than a doubled
/// closer gives its leading characters to the content, so `***x***`
/// closes as strong around em.
fn closer(text: &str, at: usize, run: usize, width: usize) -> Option<usize> {
    let fits = if width == 1 { run == 1 } else { run >= 2 };
    if !fits {
        return None;
    }

    let before = text[..at].chars().next_back()?;
    if before.is_whitespace() || before == '\\' {
        return None;
    }
    if let Some(after) = text[at + run..].chars().next() {
        if after.is_alphanumeric() {
            return None;
        }
    }

    Some(at + run - width)
}
