//! Error types for CSS parsing and formatting.

use thiserror::Error;

use crate::parser::node::Position;

/// Errors that can occur while formatting a stylesheet.
///
/// Formatting is all-or-nothing: any of these aborts the current call and
/// no partial output is returned.
///
/// # Examples
///
/// ```rust
/// use cssnorm::format_css;
///
/// // Unterminated block - the parser diagnostic is carried in the error.
/// let result = format_css("body {");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum FormatError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string contains the parser diagnostic, including where the
    /// offending input starts.
    #[error("CSS syntax error: {0}")]
    Syntax(String),

    /// The parse tree contains a node kind the model does not recognize
    /// (e.g. an at-rule outside the supported set). A coverage gap, not a
    /// recoverable condition.
    #[error("unsupported node kind `{kind}` at {position}")]
    UnsupportedNode { kind: String, position: Position },

    /// A raw node carried a field outside the set expected for its kind.
    /// This is a parser/model contract violation.
    #[error("unexpected field `{field}` on `{kind}` node")]
    UnexpectedField { kind: String, field: String },

    /// A raw node is missing a field its kind requires.
    #[error("missing field `{field}` on `{kind}` node")]
    MissingField { kind: String, field: String },

    /// A raw node carries a field whose shape does not match its kind
    /// (e.g. text where a node list is expected).
    #[error("malformed field `{field}` on `{kind}` node")]
    MalformedField { kind: String, field: String },

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
