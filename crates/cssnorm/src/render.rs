//! Rendering the typed tree back to canonical text.
//!
//! Every node renders to newline-terminated text. Containers indent their
//! children by re-prefixing each line of the already-rendered block, so
//! nesting compounds through recursion rather than a tracked depth.

use crate::model::{
    Charset, Comment, Document, Import, KeyFrame, KeyFrames, MediaQuery, Node, Property, Rule,
    Supports,
};

/// Output suppression options. All default to off.
#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    /// Drop `@charset` nodes from the output.
    pub ignore_charset: bool,
    /// Drop comment nodes from the output.
    pub ignore_comments: bool,
    /// Drop rules that contain no declarations.
    pub ignore_empty_rules: bool,
}

impl Node {
    /// Renders this node and its children.
    pub fn to_text(&self, settings: &Settings) -> String {
        match self {
            Node::Charset(charset) => charset.to_text(settings),
            Node::Comment(comment) => comment.to_text(settings),
            Node::Document(document) => document.to_text(settings),
            Node::Import(import) => import.to_text(),
            Node::KeyFrames(keyframes) => keyframes.to_text(settings),
            Node::MediaQuery(media) => media.to_text(settings),
            Node::Rule(rule) => rule.to_text(settings),
            Node::Supports(supports) => supports.to_text(settings),
        }
    }
}

impl Property {
    /// Properties always sit one level inside their owning block.
    fn to_text(&self) -> String {
        format!("    {}: {};\n", self.name, self.value)
    }
}

impl Charset {
    fn to_text(&self, settings: &Settings) -> String {
        if settings.ignore_charset {
            String::new()
        } else {
            format!("@charset {};\n", self.charset)
        }
    }
}

impl Comment {
    fn to_text(&self, settings: &Settings) -> String {
        if settings.ignore_comments {
            String::new()
        } else {
            format!("/*{}*/\n", self.comment)
        }
    }
}

impl Import {
    fn to_text(&self) -> String {
        format!("@import {};\n", self.value)
    }
}

impl Rule {
    fn to_text(&self, settings: &Settings) -> String {
        if settings.ignore_empty_rules && self.properties.is_empty() {
            return String::new();
        }
        format!("{} {{\n{}}}\n", self.selectors, properties_text(&self.properties))
    }
}

impl KeyFrame {
    fn to_text(&self) -> String {
        format!("{} {{\n{}}}\n", self.values, properties_text(&self.properties))
    }
}

impl KeyFrames {
    fn to_text(&self, _settings: &Settings) -> String {
        let body: String = self.keyframes.iter().map(KeyFrame::to_text).collect();
        format!("@{}keyframes {} {{\n{}}}\n", self.vendor, self.name, indent(&body))
    }
}

impl MediaQuery {
    fn to_text(&self, settings: &Settings) -> String {
        format!("@media {} {{\n{}}}\n", self.media, indent(&rules_text(&self.rules, settings)))
    }
}

impl Document {
    fn to_text(&self, settings: &Settings) -> String {
        format!(
            "@{}document {} {{\n{}}}\n",
            self.vendor,
            self.name,
            indent(&rules_text(&self.rules, settings))
        )
    }
}

impl Supports {
    fn to_text(&self, settings: &Settings) -> String {
        format!(
            "@supports {} {{\n{}}}\n",
            self.supports,
            indent(&rules_text(&self.rules, settings))
        )
    }
}

fn properties_text(properties: &[Property]) -> String {
    properties.iter().map(Property::to_text).collect()
}

fn rules_text(rules: &[Node], settings: &Settings) -> String {
    rules.iter().map(|rule| rule.to_text(settings)).collect()
}

/// Prefixes every line of an already-rendered block with four spaces.
pub(crate) fn indent(text: &str) -> String {
    if text.is_empty() {
        return "\n".to_string();
    }
    let mut out = String::with_capacity(text.len() + 64);
    for line in text.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
