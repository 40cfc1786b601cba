//! The raw generic parse tree.
//!
//! The grammar parser produces [`RawNode`]s: a kind tag, a source
//! [`Position`], and a map of kind-specific fields. The typed node model
//! validates and converts this tree; see [`crate::model`].

use std::collections::BTreeMap;
use std::fmt;

use crate::error::FormatError;

/// A 1-based line/column source position.
///
/// Positions are informational: they surface in diagnostics and are
/// otherwise ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Locates the start of `rest` within `source`. `rest` must be a
    /// suffix slice of `source`, which holds throughout parsing.
    pub(crate) fn locate(source: &str, rest: &str) -> Self {
        let offset = source.len() - rest.len();
        let consumed = &source[..offset];
        let line = consumed.bytes().filter(|&b| b == b'\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(newline) => consumed[newline + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// A single field value on a [`RawNode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    /// Free text, e.g. a declaration value or a media query.
    Text(String),
    /// A list of text items, e.g. a rule's selectors.
    TextList(Vec<String>),
    /// Nested child nodes, e.g. the rules inside a media query.
    Nodes(Vec<RawNode>),
}

/// One node of the generic parse tree.
///
/// Fields are kind-specific; the model enforces that a node carries no
/// field outside the set expected for its kind.
#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    pub kind: String,
    pub position: Position,
    pub fields: BTreeMap<String, Field>,
}

impl RawNode {
    pub fn new(kind: &str, position: Position) -> Self {
        Self {
            kind: kind.to_string(),
            position,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), Field::Text(value.into()));
        self
    }

    pub fn with_text_list(mut self, name: &str, values: Vec<String>) -> Self {
        self.fields.insert(name.to_string(), Field::TextList(values));
        self
    }

    pub fn with_nodes(mut self, name: &str, nodes: Vec<RawNode>) -> Self {
        self.fields.insert(name.to_string(), Field::Nodes(nodes));
        self
    }

    /// Returns a required text field, or the contract-violation error.
    pub fn text(&self, name: &str) -> Result<&str, FormatError> {
        match self.fields.get(name) {
            Some(Field::Text(value)) => Ok(value),
            Some(_) => Err(self.malformed(name)),
            None => Err(self.missing(name)),
        }
    }

    /// Returns an optional text field, defaulting when absent. Used for
    /// vendor prefixes, which are omitted on unprefixed at-rules.
    pub fn text_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str, FormatError> {
        match self.fields.get(name) {
            Some(Field::Text(value)) => Ok(value),
            Some(_) => Err(self.malformed(name)),
            None => Ok(default),
        }
    }

    /// Returns a required text-list field.
    pub fn text_list(&self, name: &str) -> Result<&[String], FormatError> {
        match self.fields.get(name) {
            Some(Field::TextList(values)) => Ok(values),
            Some(_) => Err(self.malformed(name)),
            None => Err(self.missing(name)),
        }
    }

    /// Returns a required child-node field.
    pub fn nodes(&self, name: &str) -> Result<&[RawNode], FormatError> {
        match self.fields.get(name) {
            Some(Field::Nodes(nodes)) => Ok(nodes),
            Some(_) => Err(self.malformed(name)),
            None => Err(self.missing(name)),
        }
    }

    fn missing(&self, field: &str) -> FormatError {
        FormatError::MissingField {
            kind: self.kind.clone(),
            field: field.to_string(),
        }
    }

    fn malformed(&self, field: &str) -> FormatError {
        FormatError::MalformedField {
            kind: self.kind.clone(),
            field: field.to_string(),
        }
    }
}
