//! List pass.
//!
//! A list starts at a marker line and runs to the next blank line. Items
//! split on markers at the list's own indent (or one space deeper) or
//! less; deeper markers inside an item start a nested list, rendered
//! before the item closes. Lists of the same kind separated only by
//! blank lines are merged.

use crate::inline;
use crate::scan::{self, CODE_INDENT};
use inkdown_core::{Document, ListKind};
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for list items: -, *, +, 1. 1) a. a) A. A)
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)([*+-]|[0-9]+[.)]|[A-Za-z][.)]) +(.*)$").unwrap());

/// A parsed list marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Spaces before the marker
    pub indent: usize,
    /// Kind of list the marker belongs to
    pub kind: ListKind,
    /// Number (or letter position) the marker stands for
    pub ordinal: u64,
    /// Text after the marker
    pub content: &'a str,
}

/// Parse a list marker line.
pub fn marker(line: &str) -> Option<Marker<'_>> {
    let caps = LIST_ITEM_RE.captures(line)?;
    let (kind, ordinal) = ListKind::classify(&caps[2])?;
    Some(Marker {
        indent: caps[1].len(),
        kind,
        ordinal,
        content: caps.get(3)?.as_str(),
    })
}

/// A rendered list waiting to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
struct List {
    kind: ListKind,
    start: u64,
    /// Rendered `<li>` contents
    items: Vec<String>,
}

impl List {
    fn to_html(&self) -> String {
        let tag = self.kind.tag();
        let mut attrs = String::new();
        if self.kind.is_ordered() && self.start != 1 {
            attrs.push_str(&format!(" start=\"{}\"", self.start));
        }
        match self.kind {
            ListKind::LowerAlpha => attrs.push_str(" type=\"a\""),
            ListKind::UpperAlpha => attrs.push_str(" type=\"A\""),
            _ => {}
        }

        let mut html = format!("<{tag}{attrs}>");
        for item in &self.items {
            html.push_str("<li>");
            html.push_str(item);
            html.push_str("</li>");
        }
        html.push_str(&format!("</{tag}>"));
        html
    }
}

/// Render every list in the document.
pub fn render(doc: &mut Document) {
    let max_depth = doc.options.max_depth;
    let indented_code = doc.options.indented_code;
    let scanned = scan::scan(&doc.text);
    let lines = &scanned.lines;

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    // Last list, held back so that a following list of the same kind can join it
    let mut pending: Option<List> = None;
    // Blank lines seen since the pending list ended
    let mut blanks = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if pending.is_some() && line.is_free() && line.is_blank() {
            blanks += 1;
            i += 1;
            continue;
        }

        let starts = line.is_free()
            && marker(line.text).is_some_and(|m| !(indented_code && m.indent >= CODE_INDENT));
        if !starts {
            flush(&mut out, &mut pending, &mut blanks);
            out.push(line.text.to_string());
            i += 1;
            continue;
        }

        let begin = i;
        i += 1;
        while i < lines.len()
            && lines[i].is_free()
            && !lines[i].is_blank()
            && !lines[i].text.starts_with('<')
        {
            i += 1;
        }
        let block: Vec<&str> = lines[begin..i].iter().map(|l| l.text).collect();
        let list = parse_list(&block, max_depth);
        trace!("{} list over lines {}..{}", list.kind, begin, i);
        match pending.as_mut() {
            Some(prev) if prev.kind == list.kind => {
                prev.items.extend(list.items);
                blanks = 0;
            }
            _ => {
                flush(&mut out, &mut pending, &mut blanks);
                pending = Some(list);
            }
        }
    }

    flush(&mut out, &mut pending, &mut blanks);
    doc.text = out.join("\n");
}

fn flush(out: &mut Vec<String>, pending: &mut Option<List>, blanks: &mut usize) {
    if let Some(list) = pending.take() {
        out.push(list.to_html());
    }
    out.extend(std::iter::repeat(String::new()).take(*blanks));
    *blanks = 0;
}

/// Split a block of lines (first line is a marker) into items.
fn parse_list(lines: &[&str], depth: usize) -> List {
    let (base, kind, start) = lines
        .first()
        .and_then(|line| marker(line))
        .map(|m| (m.indent, m.kind, m.ordinal))
        .unwrap_or((0, ListKind::Bullet, 1));

    let mut items = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for (n, &line) in lines.iter().enumerate() {
        match marker(line) {
            Some(m) if n == 0 || m.indent <= base + 1 => {
                if !current.is_empty() {
                    items.push(render_item(&current, depth));
                }
                current = vec![m.content];
            }
            _ => current.push(line),
        }
    }
    if !current.is_empty() {
        items.push(render_item(&current, depth));
    }

    List { kind, start, items }
}

/// Render one item: its own text, then any nested list.
///
/// `lines[0]` is the text after the marker; the rest are raw lines.
fn render_item(lines: &[&str], depth: usize) -> String {
    let nested_at = if depth > 1 {
        lines
            .iter()
            .skip(1)
            .position(|line| marker(line).is_some())
            .map(|p| p + 1)
    } else {
        None
    };
    let (own, nested) = match nested_at {
        Some(at) => lines.split_at(at),
        None => (lines, &[][..]),
    };

    let text = own.iter().map(|line| line.trim()).collect::<Vec<_>>().join("\n");
    let mut html = inline::render_with_depth(&text, depth);
    if !nested.is_empty() {
        html.push_str(&parse_list(nested, depth - 1).to_html());
    }
    html
}
