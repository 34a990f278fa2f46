//! Inkdown Core
//!
//! This crate provides the shared types for the inkdown markdown to HTML
//! converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Document`] - Per-call conversion state threaded through every pass
//! - [`Stash`], [`Fragment`] - The placeholder table for finished HTML
//! - [`Options`] - Switches for optional constructs
//! - [`ListKind`], [`Align`], [`Span`], [`FragmentKind`] - Classification enums
//! - [`InkdownError`] - Error types

pub mod document;
pub mod enums;
pub mod error;
pub mod options;
pub mod stash;

pub use document::Document;
pub use enums::{Align, FragmentKind, ListKind, Span};
pub use error::{InkdownError, Result};
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use stash::{Fragment, Stash, SENTINEL};
