//! Inkdown Parser
//!
//! Converts markdown text into an HTML fragment.
//!
//! # Overview
//!
//! Conversion is a fixed sequence of passes over a [`Document`]. Each pass
//! rewrites the whole text; finished fragments that must not be touched
//! again (code blocks, links, images, escaped characters) are moved into
//! the document's stash and only put back once every pass has run.
//!
//! 1. [`escape::escape_html`]
//! 2. [`blockquote`]
//! 3. [`rule`]
//! 4. [`list`]
//! 5. [`code`]
//! 6. [`link`]
//! 7. [`table`] (when enabled)
//! 8. [`heading`]
//! 9. [`paragraph`]
//!
//! # Example
//!
//! ```
//! use inkdown_parser::markdown_to_html;
//!
//! assert_eq!(markdown_to_html("# Hello *World*"), "<h1>Hello <em>World</em></h1>");
//! assert_eq!(markdown_to_html("* one\n* two"), "<ul><li>one</li><li>two</li></ul>");
//! ```

pub mod blockquote;
pub mod code;
pub mod escape;
pub mod heading;
pub mod inline;
pub mod link;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod scan;
pub mod table;

pub use escape::escape_html;

use inkdown_core::{Document, Options};
use log::{debug, trace};

/// Convert markdown to HTML with the default options.
pub fn markdown_to_html(source: &str) -> String {
    markdown_to_html_with(source, &Options::default())
}

/// Convert markdown to HTML.
///
/// Every call works on its own [`Document`], so calls may run
/// concurrently on different threads.
pub fn markdown_to_html_with(source: &str, options: &Options) -> String {
    debug!("converting {} bytes with {:?}", source.len(), options);
    let mut doc = Document::new(format!("\n{source}\n"), options.clone());

    doc.apply(escape::escape_html);
    blockquote::render(&mut doc);
    trace!("after blockquote: {:?}", doc.text);
    rule::render(&mut doc);
    list::render(&mut doc);
    trace!("after list: {:?}", doc.text);
    code::render(&mut doc);
    link::render(&mut doc);
    trace!("after link: {:?}", doc.text);
    if doc.options.tables {
        table::render(&mut doc);
    }
    heading::render(&mut doc);
    paragraph::render(&mut doc);
    trace!("before restore: {:?}", doc.text);

    if !doc.stash.is_empty() {
        debug!("restoring {} stashed fragments", doc.stash.len());
    }
    doc.finish()
}

/// Reusable converter holding a set of options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a converter with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert one markdown document.
    pub fn convert(&self, source: &str) -> String {
        markdown_to_html_with(source, &self.options)
    }
}
