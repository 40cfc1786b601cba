//! The formatting pipeline: parse, model, render, concatenate.

use std::fs;
use std::path::Path;

use crate::error::FormatError;
use crate::model::Node;
use crate::parser::{CssParser, GrammarParser};
use crate::render::Settings;

/// Formats CSS source with default settings.
///
/// # Examples
///
/// ```rust
/// use cssnorm::format_css;
///
/// let formatted = format_css("a{color: rgba(255,255,255,0.7);}").unwrap();
/// assert_eq!(formatted, "a {\n    color: rgba(255, 255, 255, 0.7);\n}\n");
/// ```
pub fn format_css(source: &str) -> Result<String, FormatError> {
    format_css_with(source, Settings::default())
}

/// Formats CSS source with explicit [`Settings`].
pub fn format_css_with(source: &str, settings: Settings) -> Result<String, FormatError> {
    Formatter::new().format(source, settings)
}

/// Reads and formats a stylesheet file with default settings.
pub fn format_file(path: &Path) -> Result<String, FormatError> {
    let contents = fs::read_to_string(path)?;
    format_css(&contents)
}

/// A formatter with an injectable parser.
///
/// The default formatter uses the in-process [`GrammarParser`]; tests (or
/// callers wrapping an external parser) can substitute any [`CssParser`].
pub struct Formatter {
    parser: Box<dyn CssParser>,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            parser: Box::new(GrammarParser),
        }
    }

    pub fn with_parser(parser: Box<dyn CssParser>) -> Self {
        Self { parser }
    }

    /// Runs the full pipeline. All-or-nothing: any parse or model error
    /// aborts the call with no partial output.
    pub fn format(&self, source: &str, settings: Settings) -> Result<String, FormatError> {
        let raw = self.parser.parse(source)?;
        log::debug!("formatting {} top-level nodes", raw.len());

        let mut output = String::new();
        for raw_node in &raw {
            let node = Node::from_raw(raw_node)?;
            output.push_str(&node.to_text(&settings));
        }
        Ok(output)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
