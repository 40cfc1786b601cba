//! Node model tests: kind dispatch, the field-subset contract, and the
//! injectable parser seam.

use cssnorm::model::Node;
use cssnorm::parser::{CssParser, Position, RawNode};
use cssnorm::{FormatError, Formatter, Settings};

fn declaration(property: &str, value: &str) -> RawNode {
    RawNode::new("declaration", Position::default())
        .with_text("property", property)
        .with_text("value", value)
}

// ============================================================================
// DISPATCH
// ============================================================================

#[test]
fn test_dispatch_builds_typed_nodes() {
    let raw = RawNode::new("rule", Position::default())
        .with_text_list("selectors", vec!["b".to_string(), "a".to_string()])
        .with_nodes("declarations", vec![declaration("color", "black")]);

    let node = Node::from_raw(&raw).unwrap();
    match node {
        Node::Rule(rule) => {
            assert_eq!(rule.selectors, "a, b");
            assert_eq!(rule.properties.len(), 1);
            assert_eq!(rule.properties[0].name, "color");
            // Normalization happens at construction.
            assert_eq!(rule.properties[0].value, "#000");
        }
        other => panic!("expected a rule, got {other:?}"),
    }
}

#[test]
fn test_unknown_kind_is_rejected() {
    let raw = RawNode::new("font-face", Position { line: 3, column: 1 });
    let err = Node::from_raw(&raw).unwrap_err();
    assert_eq!(err.to_string(), "unsupported node kind `font-face` at 3:1");
}

#[test]
fn test_rule_rejects_non_declaration_children() {
    let raw = RawNode::new("rule", Position::default())
        .with_text_list("selectors", vec!["a".to_string()])
        .with_nodes("declarations", vec![RawNode::new("comment", Position::default())]);
    let err = Node::from_raw(&raw).unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedNode { .. }));
}

#[test]
fn test_vendor_defaults_to_empty() {
    let raw = RawNode::new("keyframes", Position::default())
        .with_text("name", "spin")
        .with_nodes("keyframes", vec![]);
    match Node::from_raw(&raw).unwrap() {
        Node::KeyFrames(keyframes) => assert_eq!(keyframes.vendor, ""),
        other => panic!("expected keyframes, got {other:?}"),
    }
}

// ============================================================================
// FIELD-SUBSET CONTRACT
// ============================================================================

#[test]
fn test_unexpected_field_is_fatal() {
    let raw = RawNode::new("charset", Position::default())
        .with_text("charset", "\"utf-8\"")
        .with_text("bogus", "x");
    let err = Node::from_raw(&raw).unwrap_err();
    assert_eq!(err.to_string(), "unexpected field `bogus` on `charset` node");
}

#[test]
fn test_missing_field_is_fatal() {
    let raw = RawNode::new("rule", Position::default())
        .with_text_list("selectors", vec!["a".to_string()]);
    let err = Node::from_raw(&raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing field `declarations` on `rule` node"
    );
}

#[test]
fn test_malformed_field_is_fatal() {
    let raw = RawNode::new("media", Position::default())
        .with_text("media", "print")
        .with_text("rules", "not-a-node-list");
    let err = Node::from_raw(&raw).unwrap_err();
    assert_eq!(err.to_string(), "malformed field `rules` on `media` node");
}

// ============================================================================
// PARSER INJECTION
// ============================================================================

/// A parser stub returning a fixed tree, so the model/render half of the
/// pipeline is exercised with no grammar parsing at all.
struct StubParser;

impl CssParser for StubParser {
    fn parse(&self, _source: &str) -> Result<Vec<RawNode>, FormatError> {
        Ok(vec![
            RawNode::new("rule", Position::default())
                .with_text_list("selectors", vec!["b".to_string(), "a".to_string()])
                .with_nodes("declarations", vec![declaration("color", "black")]),
        ])
    }
}

#[test]
fn test_formatter_accepts_injected_parser() {
    let formatter = Formatter::with_parser(Box::new(StubParser));
    let out = formatter.format("ignored", Settings::default()).unwrap();
    assert_eq!(out, "a, b {\n    color: #000;\n}\n");
}

/// A parser stub that always fails, standing in for an external
/// collaborator surfacing its own diagnostics.
struct FailingParser;

impl CssParser for FailingParser {
    fn parse(&self, _source: &str) -> Result<Vec<RawNode>, FormatError> {
        Err(FormatError::Syntax("collaborator exploded".to_string()))
    }
}

#[test]
fn test_formatter_surfaces_parser_diagnostics() {
    let formatter = Formatter::with_parser(Box::new(FailingParser));
    let err = formatter.format("a {}", Settings::default()).unwrap_err();
    assert_eq!(err.to_string(), "CSS syntax error: collaborator exploded");
}
