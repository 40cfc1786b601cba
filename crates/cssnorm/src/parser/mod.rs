//! CSS parsing into the raw generic node tree.
//!
//! This module provides:
//!
//! - [`parse_stylesheet`]: parse CSS source into a list of top-level
//!   [`RawNode`]s
//! - [`CssParser`]: the injectable parser interface consumed by
//!   [`crate::format::Formatter`]
//! - [`GrammarParser`]: the default in-process implementation
//!
//! The parser is deliberately generic: it captures selectors, preludes and
//! declaration values as text and leaves all canonicalization to
//! [`crate::normalize`]. Known at-rules get their own node kinds; anything
//! else is consumed as a generic node so the model can reject it with a
//! precise unsupported-kind error instead of a syntax error.
//!
//! ## Submodules
//!
//! - [`node`]: the raw tree ([`RawNode`], [`Field`], [`Position`])
//! - `at_rules`: at-rule grammar (`@media`, `@keyframes`, ...)

mod at_rules;
pub mod node;

pub use node::{Field, Position, RawNode};

use crate::error::FormatError;

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::opt,
    multi::many0,
    sequence::tuple,
};

/// The parser interface: CSS source text in, raw node tree out.
///
/// The formatting core only depends on this trait, so tests can inject a
/// stub that returns a hand-built tree, and the grammar implementation can
/// be swapped wholesale.
pub trait CssParser {
    fn parse(&self, source: &str) -> Result<Vec<RawNode>, FormatError>;
}

/// The default in-process CSS grammar parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrammarParser;

impl CssParser for GrammarParser {
    fn parse(&self, source: &str) -> Result<Vec<RawNode>, FormatError> {
        parse_stylesheet(source)
    }
}

/// Parses a full stylesheet into its top-level nodes.
pub fn parse_stylesheet(source: &str) -> Result<Vec<RawNode>, FormatError> {
    let (remaining, nodes) = many0(|i| parse_node(source, i))(source)
        .map_err(|e| FormatError::Syntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        let position = Position::locate(source, remaining.trim_start());
        return Err(FormatError::Syntax(format!(
            "unexpected tokens at {}: {}",
            position,
            remaining.trim()
        )));
    }

    log::trace!("parsed {} top-level nodes", nodes.len());
    Ok(nodes)
}

/// Parses one node: a comment, an at-rule, or a rule.
///
/// Dispatches on the first character so a malformed at-rule reports as an
/// at-rule error rather than being re-parsed as a selector.
pub(crate) fn parse_node<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, RawNode> {
    let (input, _) = multispace0(input)?;
    if input.starts_with("/*") {
        parse_comment(source, input)
    } else if input.starts_with('@') {
        at_rules::parse_at_rule(source, input)
    } else {
        parse_rule(source, input)
    }
}

/// Parses a comment node: `/* text */`.
fn parse_comment<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, RawNode> {
    let position = Position::locate(source, input);
    let body = match input.strip_prefix("/*") {
        Some(body) => body,
        None => return Err(syntax(input)),
    };
    match body.find("*/") {
        Some(end) => Ok((
            &body[end + 2..],
            RawNode::new("comment", position).with_text("comment", &body[..end]),
        )),
        None => Err(syntax(input)),
    }
}

/// Parses a rule: a selector list followed by a declaration block.
fn parse_rule<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, RawNode> {
    let position = Position::locate(source, input);
    let (input, prelude) = take_block_prelude(input)?;
    let selectors = split_list(&prelude);
    if selectors.is_empty() {
        return Err(syntax(input));
    }
    let (input, declarations) = parse_declaration_block(source, input)?;
    Ok((
        input,
        RawNode::new("rule", position)
            .with_text_list("selectors", selectors)
            .with_nodes("declarations", declarations),
    ))
}

/// Parses `{ declaration* }`. Comments between declarations are trivia.
pub(crate) fn parse_declaration_block<'a>(
    source: &'a str,
    input: &'a str,
) -> IResult<&'a str, Vec<RawNode>> {
    let (input, _) = char('{')(input)?;
    let (input, declarations) = many0(|i| parse_declaration(source, i))(input)?;
    let (input, _) = trivia(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, declarations))
}

/// Parses a single `property: value` declaration, with an optional
/// trailing semicolon (the final declaration of a block may omit it).
fn parse_declaration<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, RawNode> {
    let (input, _) = trivia(input)?;
    let position = Position::locate(source, input);
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = take_value(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((
        input,
        RawNode::new("declaration", position)
            .with_text("property", property)
            .with_text("value", value),
    ))
}

/// Parses a CSS identifier (alphanumerics, dashes, and underscores).
pub(crate) fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Consumes whitespace and comments that carry no meaning at the current
/// grammar position (inside declaration blocks).
pub(crate) fn trivia(input: &str) -> IResult<&str, ()> {
    let mut rest = input;
    loop {
        let (after_ws, _) = multispace0(rest)?;
        match after_ws.strip_prefix("/*") {
            Some(body) => match body.find("*/") {
                Some(end) => rest = &body[end + 2..],
                None => return Err(syntax(after_ws)),
            },
            None => return Ok((after_ws, ())),
        }
    }
}

/// Scans prelude text (selector list, media query, ...) up to the opening
/// `{`, which is not consumed. Quote-aware, so `[title="{"]` survives.
/// Fails on `;`, `}`, or end of input: preludes never contain those.
pub(crate) fn take_block_prelude(input: &str) -> IResult<&str, String> {
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    for (i, c) in input.char_indices() {
        match quote {
            Some(q) => {
                if c == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '{' => {
                    let text = collapse_whitespace(&input[..i]);
                    if text.is_empty() {
                        return Err(syntax(input));
                    }
                    return Ok((&input[i..], text));
                }
                ';' | '}' => return Err(syntax(input)),
                _ => {}
            },
        }
        prev = c;
    }
    Err(syntax(input))
}

/// Scans a declaration value up to an unnested `;` or `}`, which is not
/// consumed. Tracks quotes and paren/bracket depth so `url(a;b)` and
/// quoted strings survive. Interior newlines and tabs become single
/// spaces; space runs are preserved for the normalizer to collapse.
pub(crate) fn take_value(input: &str) -> IResult<&str, String> {
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in input.char_indices() {
        match quote {
            Some(q) => {
                if c == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                ';' | '}' if depth == 0 => {
                    let text = space_out(&input[..i]);
                    if text.is_empty() {
                        return Err(syntax(input));
                    }
                    return Ok((&input[i..], text));
                }
                _ => {}
            },
        }
        prev = c;
    }
    Err(syntax(input))
}

/// Splits a comma-separated list (selectors, keyframe selectors) on
/// unnested commas, trimming each item and dropping empties.
pub(crate) fn split_list(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in text.char_indices() {
        match quote {
            Some(q) => {
                if c == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    let part = text[start..i].trim();
                    if !part.is_empty() {
                        parts.push(part.to_string());
                    }
                    start = i + 1;
                }
                _ => {}
            },
        }
        prev = c;
    }
    let last = text[start..].trim();
    if !last.is_empty() {
        parts.push(last.to_string());
    }
    parts
}

/// Trims and collapses all interior whitespace runs to single spaces.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Trims and maps interior whitespace to plain spaces without collapsing
/// runs.
fn space_out(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

pub(crate) fn syntax(input: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag))
}
