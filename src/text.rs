//! Canonical text form: `Name(start, stop)` or `Name(start, stop, step)`.
//!
//! Parsing accepts the same call-like shape with Python-style literals
//! (`True`, `False`, `None`, floats, quoted strings) so that every argument
//! goes through the same strict conversion as [`IntegerRange::from_args`].
//!
//! [`IntegerRange::from_args`]: crate::IntegerRange::from_args

use core::fmt;
use core::str::FromStr;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigInt;
use num_traits::One;

use crate::{IntegerRange, RangeArg, RangeError, RangeName};

impl<N: RangeName> fmt::Display for IntegerRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step().is_one() {
            write!(f, "{}({}, {})", N::NAME, self.start(), self.stop())
        } else {
            write!(
                f,
                "{}({}, {}, {})",
                N::NAME,
                self.start(),
                self.stop(),
                self.step()
            )
        }
    }
}

impl<N: RangeName> FromStr for IntegerRange<N> {
    type Err = RangeError;

    /// Parses the canonical text form.
    ///
    /// # Examples
    /// ```
    /// use integer_range::{ErrorKind, IntegerRange};
    ///
    /// let r: IntegerRange = "IntegerRange(-5, 5, 3)".parse().unwrap();
    /// assert_eq!(r.to_string(), "IntegerRange(-5, 5, 3)");
    ///
    /// let err = "IntegerRange(stop=10)".parse::<IntegerRange>().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let body = text
            .trim()
            .strip_prefix(N::NAME)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| rejected!(syntax(format!("expected `{}(...)`", N::NAME))))?;

        let args = split_arguments(body)?
            .into_iter()
            .map(parse_literal)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_positional(args)
    }
}

fn syntax(message: String) -> RangeError {
    RangeError::Syntax(message)
}

/// Splits on top-level commas, ignoring commas inside quotes. A single
/// trailing comma is allowed.
fn split_arguments(body: &str) -> Result<Vec<&str>, RangeError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut pieces = Vec::new();
    let mut quote = None;
    let mut piece_start = 0;
    for (at, ch) in body.char_indices() {
        match (quote, ch) {
            (None, '\'' | '"') => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            (None, ',') => {
                pieces.push(body[piece_start..at].trim());
                piece_start = at + 1;
            }
            _ => {}
        }
    }
    if quote.is_some() {
        return Err(rejected!(syntax(String::from("unterminated string literal"))));
    }

    let tail = body[piece_start..].trim();
    if !tail.is_empty() || pieces.is_empty() {
        pieces.push(tail);
    }
    if pieces.iter().any(|piece| piece.is_empty()) {
        return Err(rejected!(syntax(String::from("empty argument"))));
    }
    Ok(pieces)
}

fn parse_literal(literal: &str) -> Result<RangeArg, RangeError> {
    if let Some(text) = unquote(literal) {
        return Ok(RangeArg::Str(String::from(text)));
    }
    if let Some((name, _)) = literal.split_once('=') {
        let name = name.trim();
        if is_identifier(name) {
            return Err(rejected!(RangeError::KeywordArgument(String::from(name))));
        }
    }
    match literal {
        "True" => return Ok(RangeArg::Bool(true)),
        "False" => return Ok(RangeArg::Bool(false)),
        "None" => return Ok(RangeArg::None),
        _ => {}
    }
    if let Ok(integer) = BigInt::from_str(literal) {
        return Ok(RangeArg::Big(integer));
    }
    // `inf` and `nan` are names, not float literals.
    if literal.contains(|ch: char| ch.is_ascii_digit()) {
        if let Ok(float) = f64::from_str(literal) {
            return Ok(RangeArg::Float(float));
        }
    }
    Err(rejected!(syntax(format!("unrecognised literal `{literal}`"))))
}

fn unquote(literal: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|quote| {
        literal
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
