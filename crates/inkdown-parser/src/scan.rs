//! Line scanning shared by the line-oriented passes.
//!
//! Passes that run after the blockquote and list passes must leave the
//! inside of those rendered containers alone, and every pass before the
//! code pass must leave fenced code alone. [`scan`] splits the text into
//! lines and records both facts for each line.

use regex::Regex;
use std::sync::LazyLock;

/// Indentation at which a line becomes indented code.
pub const CODE_INDENT: usize = 4;

/// Regex for an opening or closing tag of a container emitted earlier
static CONTAINER_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(blockquote|ul|ol)[ >]").unwrap());

/// Regex for a fence opener: ``` or ~~~ with an optional info string
static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( {0,3})(`{3,}|~{3,})(.*)$").unwrap());

/// Regex for a fence closer: a bare run of ``` or ~~~
static FENCE_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,}|~{3,}) *$").unwrap());

/// One physical line and what surrounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line, without its newline
    pub text: &'a str,
    /// Open `<blockquote>` elements at the start of the line
    pub quote_depth: usize,
    /// Open `<ul>`/`<ol>` elements at the start of the line
    pub list_depth: usize,
    /// Part of a terminated fenced code block (fences included)
    pub fenced: bool,
}

impl Line<'_> {
    /// Inside a container rendered by an earlier pass.
    pub fn is_enclosed(&self) -> bool {
        self.quote_depth > 0 || self.list_depth > 0
    }

    /// Neither enclosed nor fenced: open to every line pass.
    pub fn is_free(&self) -> bool {
        !self.is_enclosed() && !self.fenced
    }

    pub fn is_blank(&self) -> bool {
        is_blank(self.text)
    }
}

/// A fence opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence<'a> {
    /// `` ` `` or `~`
    pub marker: u8,
    /// Length of the marker run
    pub len: usize,
    /// Spaces before the run
    pub indent: usize,
    /// First word of the info string (may be empty)
    pub info: &'a str,
}

/// A terminated fenced code block, as line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    pub open: usize,
    pub close: usize,
    pub indent: usize,
    pub info: &'a str,
}

/// Scanned lines of a text.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    pub lines: Vec<Line<'a>>,
    pub fences: Vec<FencedBlock<'a>>,
}

/// Split `text` on `\n` and classify each line.
///
/// Joining the `text` of every line with `\n` gives back the input.
pub fn scan(text: &str) -> Scan<'_> {
    let mut lines = Vec::new();
    let mut quote_depth = 0usize;
    let mut list_depth = 0usize;

    for text in text.split('\n') {
        lines.push(Line {
            text,
            quote_depth,
            list_depth,
            fenced: false,
        });
        for caps in CONTAINER_TAG_RE.captures_iter(text) {
            let depth = if &caps[1] == "blockquote" {
                &mut quote_depth
            } else {
                &mut list_depth
            };
            if caps[0].starts_with("</") {
                *depth = depth.saturating_sub(1);
            } else {
                *depth += 1;
            }
        }
    }

    let fences = find_fences(&lines);
    for fence in &fences {
        for line in &mut lines[fence.open..=fence.close] {
            line.fenced = true;
        }
    }

    Scan { lines, fences }
}

/// Pair fence openers with their closers.
///
/// An opener without a closer is not a fence. Once an opener of some
/// length finds no closer, longer openers of the same marker further
/// down cannot find one either, so they are not searched again.
fn find_fences<'a>(lines: &[Line<'a>]) -> Vec<FencedBlock<'a>> {
    let mut fences = Vec::new();
    // Shortest opener length with no closer below, per marker (` then ~)
    let mut unclosed: [Option<usize>; 2] = [None, None];
    let mut i = 0;

    while i < lines.len() {
        let open = if lines[i].is_enclosed() {
            None
        } else {
            fence_open(lines[i].text)
        };
        let Some(open) = open else {
            i += 1;
            continue;
        };

        let slot = usize::from(open.marker == b'~');
        if unclosed[slot].is_some_and(|len| open.len >= len) {
            i += 1;
            continue;
        }

        let close = (i + 1..lines.len())
            .find(|&j| !lines[j].is_enclosed() && closes(&open, lines[j].text));
        match close {
            Some(close) => {
                fences.push(FencedBlock {
                    open: i,
                    close,
                    indent: open.indent,
                    info: open.info,
                });
                i = close + 1;
            }
            None => {
                unclosed[slot] = Some(unclosed[slot].map_or(open.len, |len| len.min(open.len)));
                i += 1;
            }
        }
    }

    fences
}

/// Parse a fence opener.
pub fn fence_open(line: &str) -> Option<Fence<'_>> {
    let caps = FENCE_OPEN_RE.captures(line)?;
    let run = caps.get(2)?.as_str();
    let rest = caps.get(3)?.as_str();
    let marker = run.as_bytes()[0];

    // ```foo``` on one line is a code span, not a fence
    if marker == b'`' && rest.contains('`') {
        return None;
    }

    Some(Fence {
        marker,
        len: run.len(),
        indent: caps[1].len(),
        info: rest.split_whitespace().next().unwrap_or(""),
    })
}

/// Whether `line` closes the block opened by `open`.
pub fn closes(open: &Fence<'_>, line: &str) -> bool {
    FENCE_CLOSE_RE.captures(line).is_some_and(|caps| {
        let run = &caps[1];
        run.as_bytes()[0] == open.marker && run.len() >= open.len
    })
}

/// Whether a line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of leading spaces.
pub fn indent(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
