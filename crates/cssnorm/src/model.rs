//! The typed node model.
//!
//! [`Node::from_raw`] maps each raw generic node onto exactly one typed
//! node, validating its field set and recursively converting children.
//! Dispatch is a closed match on the kind tag; anything outside the
//! supported set fails with [`FormatError::UnsupportedNode`].
//!
//! Normalization happens here, at construction: declaration values run
//! through the full rewrite pipeline, selectors are re-spaced and sorted,
//! media queries get comma spacing. Nodes are immutable once built.

use crate::error::FormatError;
use crate::normalize;
use crate::parser::RawNode;

/// A typed stylesheet node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Charset(Charset),
    Comment(Comment),
    Document(Document),
    Import(Import),
    KeyFrames(KeyFrames),
    MediaQuery(MediaQuery),
    Rule(Rule),
    Supports(Supports),
}

impl Node {
    /// Converts one raw node, recursively converting any children.
    pub fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        match raw.kind.as_str() {
            "charset" => Charset::from_raw(raw).map(Node::Charset),
            "comment" => Comment::from_raw(raw).map(Node::Comment),
            "document" => Document::from_raw(raw).map(Node::Document),
            "import" => Import::from_raw(raw).map(Node::Import),
            "keyframes" => KeyFrames::from_raw(raw).map(Node::KeyFrames),
            "media" => MediaQuery::from_raw(raw).map(Node::MediaQuery),
            "rule" => Rule::from_raw(raw).map(Node::Rule),
            "supports" => Supports::from_raw(raw).map(Node::Supports),
            _ => Err(FormatError::UnsupportedNode {
                kind: raw.kind.clone(),
                position: raw.position,
            }),
        }
    }
}

/// A single `property: value` declaration, value already normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        if raw.kind != "declaration" {
            return Err(FormatError::UnsupportedNode {
                kind: raw.kind.clone(),
                position: raw.position,
            });
        }
        expect_fields(raw, &["property", "value"])?;
        let name = raw.text("property")?.to_string();
        let value = normalize::normalize_value(&name, raw.text("value")?);
        Ok(Self { name, value })
    }
}

/// `@charset <value>;` - the value keeps its original quoting.
#[derive(Clone, Debug, PartialEq)]
pub struct Charset {
    pub charset: String,
}

impl Charset {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["charset"])?;
        Ok(Self {
            charset: raw.text("charset")?.to_string(),
        })
    }
}

/// `/* text */`
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub comment: String,
}

impl Comment {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["comment"])?;
        Ok(Self {
            comment: raw.text("comment")?.to_string(),
        })
    }
}

/// `@import <value>;` - the value is kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub value: String,
}

impl Import {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["import"])?;
        Ok(Self {
            value: raw.text("import")?.to_string(),
        })
    }
}

/// A style rule. Selectors are normalized, sorted lexicographically, and
/// joined with `", "` - the one place the model reorders its input.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selectors: String,
    pub properties: Vec<Property>,
}

impl Rule {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["selectors", "declarations"])?;
        let mut selectors: Vec<String> = raw
            .text_list("selectors")?
            .iter()
            .map(|s| normalize::normalize_selector(s))
            .collect();
        selectors.sort();
        Ok(Self {
            selectors: selectors.join(", "),
            properties: properties_from(raw)?,
        })
    }
}

/// One keyframe block inside `@keyframes`.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyFrame {
    pub values: String,
    pub properties: Vec<Property>,
}

impl KeyFrame {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["values", "declarations"])?;
        Ok(Self {
            values: raw.text_list("values")?.join(", "),
            properties: properties_from(raw)?,
        })
    }
}

/// `@keyframes` (optionally vendor-prefixed).
#[derive(Clone, Debug, PartialEq)]
pub struct KeyFrames {
    pub vendor: String,
    pub name: String,
    pub keyframes: Vec<KeyFrame>,
}

impl KeyFrames {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["vendor", "name", "keyframes"])?;
        Ok(Self {
            vendor: raw.text_or("vendor", "")?.to_string(),
            name: raw.text("name")?.to_string(),
            keyframes: raw
                .nodes("keyframes")?
                .iter()
                .map(KeyFrame::from_raw)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// `@media <query> { ... }` - the query gets comma normalization, child
/// order is preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    pub media: String,
    pub rules: Vec<Node>,
}

impl MediaQuery {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["media", "rules"])?;
        Ok(Self {
            media: normalize::normalize_media(raw.text("media")?),
            rules: rules_from(raw)?,
        })
    }
}

/// `@document` (optionally vendor-prefixed).
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub vendor: String,
    pub name: String,
    pub rules: Vec<Node>,
}

impl Document {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["vendor", "document", "rules"])?;
        Ok(Self {
            vendor: raw.text_or("vendor", "")?.to_string(),
            name: raw.text("document")?.to_string(),
            rules: rules_from(raw)?,
        })
    }
}

/// `@supports <condition> { ... }` - the condition is kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Supports {
    pub supports: String,
    pub rules: Vec<Node>,
}

impl Supports {
    fn from_raw(raw: &RawNode) -> Result<Self, FormatError> {
        expect_fields(raw, &["supports", "rules"])?;
        Ok(Self {
            supports: raw.text("supports")?.to_string(),
            rules: rules_from(raw)?,
        })
    }
}

/// Enforces the field-subset invariant: a raw node may carry only the
/// fields its kind expects. Anything else is a parser/model mismatch and
/// fails immediately.
fn expect_fields(raw: &RawNode, allowed: &[&str]) -> Result<(), FormatError> {
    for field in raw.fields.keys() {
        if !allowed.contains(&field.as_str()) {
            return Err(FormatError::UnexpectedField {
                kind: raw.kind.clone(),
                field: field.clone(),
            });
        }
    }
    Ok(())
}

fn properties_from(raw: &RawNode) -> Result<Vec<Property>, FormatError> {
    raw.nodes("declarations")?
        .iter()
        .map(Property::from_raw)
        .collect()
}

fn rules_from(raw: &RawNode) -> Result<Vec<Node>, FormatError> {
    raw.nodes("rules")?.iter().map(Node::from_raw).collect()
}
