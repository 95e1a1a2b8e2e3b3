//! Helpers for the common ways callers interpret the result sets of a whole
//! grammar.  The algebra never chooses among parses; these functions are one
//! choice a caller can make, layered on top.

use crate::{Error, Parsed, Parser, Result, ResultSet};


/// The parses of all of `tokens`, i.e. those from position 0 whose end is
/// `tokens.len()`.
pub fn complete<T, P>(parser: &P, tokens: &[T]) -> ResultSet<P::Output>
    where P: Parser<T> + ?Sized,
{
    parser.parse(tokens, 0)
          .into_iter()
          .filter(|parsed| parsed.end == tokens.len())
          .collect()
}

/// The parses from `position` that consumed the most tokens, i.e. those that
/// share the greatest end position.  Empty when the parser fails there.
pub fn longest<T, P>(parser: &P, tokens: &[T], position: usize) -> ResultSet<P::Output>
    where P: Parser<T> + ?Sized,
{
    let results = parser.parse(tokens, position);
    match results.iter().map(|parsed| parsed.end).max() {
        Some(furthest) => results.into_iter()
                                 .filter(|parsed| parsed.end == furthest)
                                 .collect(),
        None => results,
    }
}

/// The value of the one and only parse of all of `tokens`.
///
/// Returns [`Error::NoCompleteParse`] when no parse consumed everything, and
/// [`Error::Ambiguous`] when more than one distinct parse did.
pub fn parse_unique<T, P>(parser: &P, tokens: &[T]) -> Result<P::Output>
    where P: Parser<T> + ?Sized,
{
    let length = tokens.len();
    let mut results = complete(parser, tokens).into_iter();
    match (results.next(), results.len()) {
        (Some(Parsed { value, .. }), 0) => Ok(value),
        (Some(_), rest) => Err(Error::Ambiguous { count: 1 + rest, length }),
        (None, _) => Err(Error::NoCompleteParse { length }),
    }
}
