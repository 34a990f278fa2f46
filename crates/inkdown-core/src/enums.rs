//! Core enums for inkdown conversion.
//!
//! These enums classify the constructs the converter recognises: the
//! kind of a list, the alignment of a table column, the inline span a
//! marker run opens, and the kind of a stashed fragment.

use serde::{Deserialize, Serialize};

/// Represents the kind of list being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list with bullets (*, -, +)
    Bullet,
    /// Ordered list with numbers (1., 2), etc.)
    Numbered,
    /// Ordered list with lowercase letters (a., b), etc.)
    LowerAlpha,
    /// Ordered list with uppercase letters (A., B), etc.)
    UpperAlpha,
}

impl ListKind {
    /// Classify a list marker as written in the source.
    ///
    /// Returns the kind together with the ordinal the marker stands for
    /// (`1` for bullets, the number for numbered markers, the position in
    /// the alphabet for letters).
    ///
    /// ```
    /// use inkdown_core::ListKind;
    /// assert_eq!(ListKind::classify("-"), Some((ListKind::Bullet, 1)));
    /// assert_eq!(ListKind::classify("3."), Some((ListKind::Numbered, 3)));
    /// assert_eq!(ListKind::classify("c)"), Some((ListKind::LowerAlpha, 3)));
    /// ```
    pub fn classify(marker: &str) -> Option<(Self, u64)> {
        match marker {
            "*" | "-" | "+" => return Some((ListKind::Bullet, 1)),
            _ => {}
        }

        let body = marker.strip_suffix(['.', ')'])?;
        if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
            // Absurdly long numbers saturate rather than fail
            let n = body.parse::<u64>().unwrap_or(u64::MAX);
            return Some((ListKind::Numbered, n));
        }

        let mut chars = body.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => {
                Some((ListKind::LowerAlpha, u64::from(c as u8 - b'a') + 1))
            }
            (Some(c), None) if c.is_ascii_uppercase() => {
                Some((ListKind::UpperAlpha, u64::from(c as u8 - b'A') + 1))
            }
            _ => None,
        }
    }

    /// Check if this is an ordered kind.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, ListKind::Bullet)
    }

    /// The HTML element for this kind.
    pub fn tag(&self) -> &'static str {
        if self.is_ordered() {
            "ol"
        } else {
            "ul"
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Numbered => write!(f, "numbered"),
            ListKind::LowerAlpha => write!(f, "lower-alpha"),
            ListKind::UpperAlpha => write!(f, "upper-alpha"),
        }
    }
}

/// Column alignment taken from a table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Align {
    /// No colons: no alignment attribute
    #[default]
    None,
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

impl Align {
    /// Read the alignment of one separator cell such as `:--:`.
    pub fn from_separator(cell: &str) -> Self {
        let cell = cell.trim();
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Align::Center,
            (true, false) => Align::Left,
            (false, true) => Align::Right,
            (false, false) => Align::None,
        }
    }

    /// Value for the `align` attribute, if any.
    pub fn attr(&self) -> Option<&'static str> {
        match self {
            Align::None => None,
            Align::Left => Some("left"),
            Align::Center => Some("center"),
            Align::Right => Some("right"),
        }
    }
}

/// Inline span opened by a marker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Span {
    /// `*x*` or `_x_`
    Emphasis,
    /// `**x**` or `__x__`
    Strong,
    /// `~x~`
    Subscript,
    /// `~~x~~`
    Strikeout,
    /// `^x^`
    Superscript,
    /// `--x--`
    Small,
    /// `++x++`
    Big,
    /// `` `x` ``
    Code,
}

impl Span {
    /// Map a marker character and its width (1 or 2) to a span.
    ///
    /// Markers that only exist doubled (`--`, `++`) return `None` for a
    /// single character.
    pub fn from_marker(marker: char, width: usize) -> Option<Self> {
        match (marker, width) {
            ('*' | '_', 1) => Some(Span::Emphasis),
            ('*' | '_', _) => Some(Span::Strong),
            ('~', 1) => Some(Span::Subscript),
            ('~', _) => Some(Span::Strikeout),
            ('^', _) => Some(Span::Superscript),
            ('-', 2) => Some(Span::Small),
            ('+', 2) => Some(Span::Big),
            ('`', _) => Some(Span::Code),
            _ => None,
        }
    }

    /// The HTML element for this span.
    pub fn tag(&self) -> &'static str {
        match self {
            Span::Emphasis => "em",
            Span::Strong => "strong",
            Span::Subscript => "sub",
            Span::Strikeout => "s",
            Span::Superscript => "sup",
            Span::Small => "small",
            Span::Big => "big",
            Span::Code => "code",
        }
    }
}

/// Whether a stashed fragment stands for a whole block or an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentKind {
    /// Code blocks: occupy their own line and are never wrapped in `<p>`
    Block,
    /// Links, images and escaped characters
    Inline,
}
