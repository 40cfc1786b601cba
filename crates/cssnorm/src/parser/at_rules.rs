//! At-rule grammar: `@charset`, `@import`, `@media`, `@supports`,
//! `@keyframes`, `@document`, and generic consumption of anything else.

use nom::{
    IResult,
    character::complete::{char, multispace0},
    multi::many0,
};

use crate::parser::node::{Position, RawNode};
use crate::parser::{
    parse_declaration_block, parse_ident, parse_node, split_list, syntax, take_block_prelude,
    take_value, trivia,
};

/// Parses any at-rule. The `@` sign and name are consumed here; the rest
/// of the grammar dispatches on the name, with `-vendor-` prefixes peeled
/// off `keyframes` and `document`.
pub(crate) fn parse_at_rule<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, RawNode> {
    let position = Position::locate(source, input);
    let (input, _) = char('@')(input)?;
    let (input, name) = parse_ident(input)?;

    if let Some(vendor) = name.strip_suffix("keyframes") {
        return parse_keyframes(source, input, position, vendor);
    }
    if let Some(vendor) = name.strip_suffix("document") {
        return parse_document(source, input, position, vendor);
    }

    match name {
        "charset" => parse_charset(input, position),
        "import" => parse_import(input, position),
        "media" => parse_media(source, input, position),
        "supports" => parse_supports(source, input, position),
        _ => parse_unknown(input, position, name),
    }
}

/// `@charset "utf-8";` - the value keeps its quotes.
fn parse_charset(input: &str, position: Position) -> IResult<&str, RawNode> {
    let (input, _) = multispace0(input)?;
    let (input, value) = take_value(input)?;
    let (input, _) = char(';')(input)?;
    Ok((input, RawNode::new("charset", position).with_text("charset", value)))
}

/// `@import url(//foo);` - everything after the keyword, verbatim.
fn parse_import(input: &str, position: Position) -> IResult<&str, RawNode> {
    let (input, _) = multispace0(input)?;
    let (input, value) = take_value(input)?;
    let (input, _) = char(';')(input)?;
    Ok((input, RawNode::new("import", position).with_text("import", value)))
}

/// `@media <query> { <node>* }`
fn parse_media<'a>(source: &'a str, input: &'a str, position: Position) -> IResult<&'a str, RawNode> {
    let (input, prelude) = take_block_prelude(input)?;
    let (input, rules) = braced_nodes(source, input)?;
    Ok((
        input,
        RawNode::new("media", position)
            .with_text("media", prelude)
            .with_nodes("rules", rules),
    ))
}

/// `@supports <condition> { <node>* }`
fn parse_supports<'a>(
    source: &'a str,
    input: &'a str,
    position: Position,
) -> IResult<&'a str, RawNode> {
    let (input, prelude) = take_block_prelude(input)?;
    let (input, rules) = braced_nodes(source, input)?;
    Ok((
        input,
        RawNode::new("supports", position)
            .with_text("supports", prelude)
            .with_nodes("rules", rules),
    ))
}

/// `@[-vendor-]document <matchers> { <node>* }`
fn parse_document<'a>(
    source: &'a str,
    input: &'a str,
    position: Position,
    vendor: &str,
) -> IResult<&'a str, RawNode> {
    let (input, prelude) = take_block_prelude(input)?;
    let (input, rules) = braced_nodes(source, input)?;
    let mut node = RawNode::new("document", position)
        .with_text("document", prelude)
        .with_nodes("rules", rules);
    if !vendor.is_empty() {
        node = node.with_text("vendor", vendor);
    }
    Ok((input, node))
}

/// `@[-vendor-]keyframes <name> { <keyframe>* }`
fn parse_keyframes<'a>(
    source: &'a str,
    input: &'a str,
    position: Position,
    vendor: &str,
) -> IResult<&'a str, RawNode> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('{')(input)?;
    let (input, keyframes) = many0(|i| parse_keyframe(source, i))(input)?;
    let (input, _) = trivia(input)?;
    let (input, _) = char('}')(input)?;

    let mut node = RawNode::new("keyframes", position)
        .with_text("name", name)
        .with_nodes("keyframes", keyframes);
    if !vendor.is_empty() {
        node = node.with_text("vendor", vendor);
    }
    Ok((input, node))
}

/// One keyframe block: `0%, 100% { opacity: 1; }`
fn parse_keyframe<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, RawNode> {
    let (input, _) = trivia(input)?;
    let position = Position::locate(source, input);
    let (input, prelude) = take_block_prelude(input)?;
    let values = split_list(&prelude);
    if values.is_empty() {
        return Err(syntax(input));
    }
    let (input, declarations) = parse_declaration_block(source, input)?;
    Ok((
        input,
        RawNode::new("keyframe", position)
            .with_text_list("values", values)
            .with_nodes("declarations", declarations),
    ))
}

/// `{ <node>* }` for the recursive containers.
fn braced_nodes<'a>(source: &'a str, input: &'a str) -> IResult<&'a str, Vec<RawNode>> {
    let (input, _) = char('{')(input)?;
    let (input, nodes) = many0(|i| parse_node(source, i))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, nodes))
}

/// Consumes an unrecognized at-rule, either statement form (up to `;`) or
/// block form (balanced braces), and emits a bare node of that kind. The
/// model rejects it with an unsupported-kind error, which keeps coverage
/// gaps distinct from syntax errors.
fn parse_unknown<'a>(input: &'a str, position: Position, name: &str) -> IResult<&'a str, RawNode> {
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
                '{' => depth += 1,
                '}' => {
                    if depth == 0 {
                        return Err(syntax(input));
                    }
                    depth -= 1;
                    if depth == 0 {
                        return Ok((&input[i + 1..], RawNode::new(name, position)));
                    }
                }
                ';' if depth == 0 => {
                    return Ok((&input[i + 1..], RawNode::new(name, position)));
                }
                _ => {}
            },
        }
        prev = c;
    }
    Err(syntax(input))
}
