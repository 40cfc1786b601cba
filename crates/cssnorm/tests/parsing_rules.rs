//! Parser-level tests: the raw generic tree produced by
//! `parse_stylesheet`, at-rule coverage, and syntax failure shapes.

use cssnorm::FormatError;
use cssnorm::parser::{Position, parse_stylesheet};

// ============================================================================
// RULES AND DECLARATIONS
// ============================================================================

#[test]
fn test_rule_tree_shape() {
    let nodes = parse_stylesheet("b, a { color: red; }").unwrap();
    assert_eq!(nodes.len(), 1);

    let rule = &nodes[0];
    assert_eq!(rule.kind, "rule");
    assert_eq!(rule.position, Position { line: 1, column: 1 });
    // Input order is preserved at parse time; sorting is the model's job.
    assert_eq!(rule.text_list("selectors").unwrap(), ["b", "a"]);

    let declarations = rule.nodes("declarations").unwrap();
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].kind, "declaration");
    assert_eq!(declarations[0].text("property").unwrap(), "color");
    assert_eq!(declarations[0].text("value").unwrap(), "red");
}

#[test]
fn test_declaration_positions() {
    let nodes = parse_stylesheet("a {\n    color: red;\n}\n").unwrap();
    let declarations = nodes[0].nodes("declarations").unwrap();
    assert_eq!(declarations[0].position, Position { line: 2, column: 5 });
}

#[test]
fn test_values_keep_space_runs_but_lose_newlines() {
    let nodes = parse_stylesheet("a { margin: 0\n   0; }").unwrap();
    let declarations = nodes[0].nodes("declarations").unwrap();
    assert_eq!(declarations[0].text("value").unwrap(), "0    0");
}

#[test]
fn test_selector_whitespace_is_collapsed() {
    let nodes = parse_stylesheet("a\n  b { color: red; }").unwrap();
    assert_eq!(nodes[0].text_list("selectors").unwrap(), ["a b"]);
}

#[test]
fn test_custom_properties_parse() {
    let nodes = parse_stylesheet(":root { --main-color: #fff; }").unwrap();
    let declarations = nodes[0].nodes("declarations").unwrap();
    assert_eq!(declarations[0].text("property").unwrap(), "--main-color");
}

// ============================================================================
// COMMENTS
// ============================================================================

#[test]
fn test_top_level_comments_are_nodes() {
    let nodes = parse_stylesheet("/*hi*/ a { color: red; }").unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].kind, "comment");
    assert_eq!(nodes[0].text("comment").unwrap(), "hi");
}

#[test]
fn test_block_comments_are_trivia() {
    let nodes = parse_stylesheet("a { color: red; /* trailing */ }").unwrap();
    assert_eq!(nodes[0].nodes("declarations").unwrap().len(), 1);
}

// ============================================================================
// AT-RULES
// ============================================================================

#[test]
fn test_charset_keeps_quotes() {
    let nodes = parse_stylesheet("@charset \"utf-8\";").unwrap();
    assert_eq!(nodes[0].kind, "charset");
    assert_eq!(nodes[0].text("charset").unwrap(), "\"utf-8\"");
}

#[test]
fn test_import_value_is_verbatim() {
    let nodes = parse_stylesheet("@import url(//foo);").unwrap();
    assert_eq!(nodes[0].kind, "import");
    assert_eq!(nodes[0].text("import").unwrap(), "url(//foo)");
}

#[test]
fn test_media_nests_nodes() {
    let nodes = parse_stylesheet("@media print { a { color: red; } /*x*/ }").unwrap();
    assert_eq!(nodes[0].kind, "media");
    assert_eq!(nodes[0].text("media").unwrap(), "print");

    let rules = nodes[0].nodes("rules").unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].kind, "rule");
    assert_eq!(rules[1].kind, "comment");
}

#[test]
fn test_supports_prelude_is_verbatim() {
    let nodes = parse_stylesheet("@supports (-moz-appearance:meterbar) { a { color: red; } }")
        .unwrap();
    assert_eq!(nodes[0].kind, "supports");
    assert_eq!(
        nodes[0].text("supports").unwrap(),
        "(-moz-appearance:meterbar)"
    );
}

#[test]
fn test_document_with_vendor() {
    let nodes = parse_stylesheet("@-moz-document url-prefix() { a { color: red; } }").unwrap();
    assert_eq!(nodes[0].kind, "document");
    assert_eq!(nodes[0].text("vendor").unwrap(), "-moz-");
    assert_eq!(nodes[0].text("document").unwrap(), "url-prefix()");
}

#[test]
fn test_keyframes_tree_shape() {
    let nodes =
        parse_stylesheet("@keyframes spin { 0%, 100% { opacity: 0; } 50% { opacity: 1; } }")
            .unwrap();
    assert_eq!(nodes[0].kind, "keyframes");
    assert_eq!(nodes[0].text("name").unwrap(), "spin");

    let frames = nodes[0].nodes("keyframes").unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].kind, "keyframe");
    assert_eq!(frames[0].text_list("values").unwrap(), ["0%", "100%"]);
    assert_eq!(frames[1].text_list("values").unwrap(), ["50%"]);
}

// ============================================================================
// SYNTAX ERRORS
// ============================================================================

#[test]
fn test_unterminated_block() {
    let err = parse_stylesheet("body {").unwrap_err();
    assert!(matches!(err, FormatError::Syntax(_)));
}

#[test]
fn test_unterminated_comment() {
    let err = parse_stylesheet("/* hi").unwrap_err();
    assert!(matches!(err, FormatError::Syntax(_)));
}

#[test]
fn test_stray_close_brace() {
    let err = parse_stylesheet("a { color: red; } }").unwrap_err();
    assert!(matches!(err, FormatError::Syntax(_)));
}

#[test]
fn test_error_reports_position() {
    let err = parse_stylesheet("a { color: red; }\n!!!").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2:1"), "no position in: {message}");
}

#[test]
fn test_whitespace_only_input_is_empty() {
    assert_eq!(parse_stylesheet("  \n\t ").unwrap().len(), 0);
    assert_eq!(parse_stylesheet("").unwrap().len(), 0);
}
