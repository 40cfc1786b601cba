//! # cssnorm - Canonical CSS Formatter
//!
//! Normalizes a CSS stylesheet into a stable, deterministic textual form:
//! one canonical rendering per semantic stylesheet content, useful for
//! diffing, deduplication, and comparing stylesheets that differ only in
//! whitespace, quoting, color notation, or selector order.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssnorm::format_css;
//!
//! let formatted = format_css("b, a { color: #223344; }").unwrap();
//! assert_eq!(formatted, "a, b {\n    color: #234;\n}\n");
//! ```
//!
//! ## What gets normalized
//!
//! - Selector lists are sorted and comma-joined; `+`/`>` combinators get
//!   one space on each side
//! - `#aabbcc` colors collapse to `#abc`; whole-word `black`/`white`
//!   become `#000`/`#fff`
//! - Comma and `rgba(...)` argument spacing, `.35` → `0.35`,
//!   `3.0px` → `3px`, `"foo"` → `'foo'`, space-run collapsing, and
//!   `\25AA`-style unicode escapes resolve to their characters
//! - `font` shorthand slashes are spaced (`12px/1.2` → `12px / 1.2`)
//!
//! Blocks render with 4-space indentation that compounds through nested
//! at-rules. Output options can suppress comments, `@charset`, and empty
//! rules; see [`Settings`].
//!
//! ## Supported at-rules
//!
//! `@charset`, `@import`, `@media`, `@supports`, `@keyframes`, and
//! `@document` (the latter two with vendor prefixes). Anything else fails
//! with [`FormatError::UnsupportedNode`] rather than passing through
//! unnormalized.
//!
//! ## Modules
//!
//! - [`parser`]: CSS source to raw generic node tree, behind the
//!   injectable [`CssParser`] trait
//! - [`model`]: typed, validated stylesheet nodes
//! - [`normalize`]: the ordered value/selector rewrite pipeline
//! - [`render`]: canonical text rendering
//! - [`format`]: the end-to-end pipeline
//! - [`error`]: error types

pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;

pub use error::FormatError;
pub use format::{Formatter, format_css, format_css_with, format_file};
pub use parser::{CssParser, GrammarParser};
pub use render::Settings;
