//! Canonical text rewrites for values, selectors, and media queries.
//!
//! Each rewrite is a pure `&str -> String` function backed by a pattern
//! compiled once on first use. [`normalize_value`] composes them in a
//! fixed order; the order is part of the contract (comma spacing must run
//! before space collapsing, quote conversion before escape resolution,
//! and so on).

use regex_lite::{Captures, Regex};
use std::sync::LazyLock;

/// Matches a 6-digit hex color candidate. regex-lite has no
/// backreferences, so the doubled-digit check happens in code.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9a-fA-F]{6})").unwrap());

/// Matches a comma and any following whitespace.
static COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

/// Matches a decimal fraction with no leading integer digit. The leading
/// group stands in for a lookbehind: a digit before the dot disqualifies.
static BARE_FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9])(\.[0-9]+)").unwrap());

/// Matches a pixel length with an all-zero fractional part.
static POINT_ZERO_PX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])\.0+px").unwrap());

/// Matches a double-quoted string containing no quote of either kind.
static DOUBLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^'"]*)""#).unwrap());

/// Matches `rgba(...)` with four numeric components. The component
/// pattern is deliberately permissive (an empty component matches).
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"rgba\(([0-9]*(?:\.[0-9]*)?),\s*([0-9]*(?:\.[0-9]*)?),\s*([0-9]*(?:\.[0-9]*)?),\s*([0-9]*(?:\.[0-9]*)?)\)",
    )
    .unwrap()
});

/// Matches the named color `black` as a whole word.
static BLACK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bblack\b").unwrap());

/// Matches the named color `white` as a whole word.
static WHITE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bwhite\b").unwrap());

/// Matches a slash and any surrounding whitespace.
static SLASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").unwrap());

/// Matches runs of two or more ASCII spaces.
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ]+").unwrap());

/// Matches a CSS unicode escape: backslash, 4 hex digits, and any
/// trailing whitespace that delimits it.
static UNICODE_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[0-9A-Fa-f]{4}\s*").unwrap());

/// Matches a child or adjacent-sibling combinator and its surrounding
/// whitespace.
static COMBINATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([+>])\s*").unwrap());

/// Collapses `#aabbcc` to `#abc`. Only exact doubled-digit triples
/// qualify; `#aabbcd` is untouched.
pub fn shorten_hex_colors(value: &str) -> String {
    HEX_COLOR_RE
        .replace_all(value, |caps: &Captures| {
            let digits: Vec<char> = caps[1].chars().collect();
            if digits[0] == digits[1] && digits[2] == digits[3] && digits[4] == digits[5] {
                format!("#{}{}{}", digits[0], digits[2], digits[4])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Rewrites every comma to `, ` regardless of original spacing.
pub fn space_commas(value: &str) -> String {
    COMMA_RE.replace_all(value, ", ").into_owned()
}

/// Rewrites `.35` to `0.35`; `1.35` is untouched.
pub fn pad_bare_fractions(value: &str) -> String {
    BARE_FRACTION_RE.replace_all(value, "${1}0${2}").into_owned()
}

/// Rewrites `3.0px` to `3px`. Only the `px` unit with an all-zero
/// fractional part qualifies.
pub fn trim_point_zero_px(value: &str) -> String {
    POINT_ZERO_PX_RE.replace_all(value, "${1}px").into_owned()
}

/// Rewrites `"foo"` to `'foo'`. Strings containing an embedded quote of
/// either kind are left alone rather than attempting escaping.
pub fn single_quote_strings(value: &str) -> String {
    DOUBLE_QUOTED_RE.replace_all(value, "'${1}'").into_owned()
}

/// Normalizes `rgba(...)` argument spacing to `rgba(r, g, b, a)`.
pub fn space_rgba_args(value: &str) -> String {
    RGBA_RE
        .replace_all(value, "rgba(${1}, ${2}, ${3}, ${4})")
        .into_owned()
}

/// Rewrites whole-word `black` to `#000` and `white` to `#fff`.
pub fn shorten_named_colors(value: &str) -> String {
    let value = BLACK_RE.replace_all(value, "#000");
    WHITE_RE.replace_all(&value, "#fff").into_owned()
}

/// Surrounds every slash with exactly one space on each side. Applied to
/// `font` shorthand values only.
pub fn space_slashes(value: &str) -> String {
    SLASH_RE.replace_all(value, " / ").into_owned()
}

/// Collapses runs of ASCII spaces to a single space.
pub fn collapse_spaces(value: &str) -> String {
    SPACES_RE.replace_all(value, " ").into_owned()
}

/// Replaces each `\25AA`-style escape with the literal character at that
/// code point, consuming the whitespace that delimited it. Escapes that
/// do not name a valid scalar value are left as-is. Idempotent: text
/// without escapes passes through unchanged.
pub fn resolve_unicode_escapes(value: &str) -> String {
    UNICODE_ESCAPE_RE
        .replace_all(value, |caps: &Captures| {
            let hex = caps[0][1..].trim_end();
            match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Canonicalizes a declaration value. The property name gates the slash
/// rewrite: only the `font` shorthand uses `/` as a size separator;
/// rewriting it elsewhere (e.g. `grid-template`) would change meaning.
pub fn normalize_value(property: &str, value: &str) -> String {
    let value = shorten_hex_colors(value);
    let value = space_commas(&value);
    let value = pad_bare_fractions(&value);
    let value = trim_point_zero_px(&value);
    let value = single_quote_strings(&value);
    let value = space_rgba_args(&value);
    let value = shorten_named_colors(&value);
    let value = if property == "font" {
        space_slashes(&value)
    } else {
        value
    };
    let value = collapse_spaces(&value);
    resolve_unicode_escapes(&value)
}

/// Canonicalizes one selector: `a>b` and `a  >  b` both become `a > b`.
pub fn normalize_selector(selector: &str) -> String {
    COMBINATOR_RE.replace_all(selector, " ${1} ").into_owned()
}

/// Canonicalizes media query text. Comma spacing only; media lists keep
/// their order.
pub fn normalize_media(media: &str) -> String {
    space_commas(media)
}
