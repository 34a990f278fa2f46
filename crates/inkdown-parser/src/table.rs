//! Table pass.
//!
//! A run of lines that start and end with `|` is a table when its second
//! line is a separator row. The first row is the header; the separator
//! gives each column its alignment and is not rendered itself.

use crate::escape;
use crate::inline;
use crate::scan::{self, Line};
use inkdown_core::{Align, Document};
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for table rows
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ *\|.*\| *$").unwrap());

/// Regex for a separator row such as `| :--- | :---: | ---: |`
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *\|(?: *:?-+:? *\|)+ *$").unwrap());

/// Render every table in the document.
pub fn render(doc: &mut Document) {
    let max_depth = doc.options.max_depth;
    let scanned = scan::scan(&doc.text);
    let lines = &scanned.lines;

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if !is_row(&lines[i]) {
            out.push(lines[i].text.to_string());
            i += 1;
            continue;
        }

        let begin = i;
        while i < lines.len() && is_row(&lines[i]) {
            i += 1;
        }
        let rows: Vec<&str> = lines[begin..i].iter().map(|l| l.text).collect();
        match table_html(&rows, max_depth) {
            Some(html) => {
                trace!("table over lines {}..{}", begin, i);
                out.push(html);
            }
            None => out.extend(rows.iter().map(|row| row.to_string())),
        }
    }

    doc.text = out.join("\n");
}

fn is_row(line: &Line<'_>) -> bool {
    line.is_free() && ROW_RE.is_match(line.text)
}

/// Check whether a row is a header separator.
pub fn is_separator(row: &str) -> bool {
    SEPARATOR_RE.is_match(row)
}

/// Split a row into trimmed cells, dropping the outer pipes.
pub fn split_cells(row: &str) -> Vec<&str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).collect()
}

fn table_html(rows: &[&str], max_depth: usize) -> Option<String> {
    if rows.len() < 2 || !is_separator(rows[1]) {
        return None;
    }

    let header = split_cells(rows[0]);
    let aligns: Vec<Align> = split_cells(rows[1])
        .into_iter()
        .map(Align::from_separator)
        .collect();
    let columns = header.len();

    let mut html = String::from("<table>");
    push_row(&mut html, "th", &header, &aligns, columns, max_depth);
    for row in &rows[2..] {
        push_row(&mut html, "td", &split_cells(row), &aligns, columns, max_depth);
    }
    html.push_str("</table>");
    Some(html)
}

/// Append one `<tr>`, padding or truncating to `columns` cells.
fn push_row(
    html: &mut String,
    tag: &str,
    cells: &[&str],
    aligns: &[Align],
    columns: usize,
    max_depth: usize,
) {
    html.push_str("<tr>");
    for column in 0..columns {
        let cell = cells.get(column).copied().unwrap_or("");
        let content = escape::unescape(&inline::render_with_depth(cell, max_depth));
        match aligns.get(column).and_then(Align::attr) {
            Some(align) => html.push_str(&format!("<{tag} align=\"{align}\">{content}</{tag}>")),
            None => html.push_str(&format!("<{tag}>{content}</{tag}>")),
        }
    }
    html.push_str("</tr>");
}
