//! Conveniences defined purely in terms of the primitives and the structural
//! combinators.  They add no behavior of their own.

use crate::{apply, compose, consume, noop, Parser};


/// A zero-width parser that always succeeds once, at the position it was
/// given, outputting a clone of `value`.  Same as mapping a constant function
/// over [`noop`].
pub fn emit<T, V>(value: V) -> impl Parser<T, Output = V> + Clone
    where V: Clone + PartialEq,
{
    apply(move |()| value.clone(), noop())
}

/// Match one token by `predicate`, like [`consume`], and output `function`
/// applied to it.  A fused "match and convert".
pub fn transform<T, P, F, U>(predicate: P, function: F) -> impl Parser<T, Output = U>
    where P: Fn(&T) -> bool,
          F: Fn(T) -> U,
          T: Clone + PartialEq,
          U: PartialEq,
{
    apply(function, consume(predicate))
}

/// Sequence `first` and `second`, like [`compose`], and output `function`
/// applied to the two values, so callers need not take the pair apart.
pub fn combine<T, P1, P2, F, U>(first: P1, second: P2, function: F)
                                -> impl Parser<T, Output = U>
    where P1: Parser<T>,
          P1::Output: Clone,
          P2: Parser<T>,
          F: Fn(P1::Output, P2::Output) -> U,
          U: PartialEq,
{
    apply(move |(value1, value2)| function(value1, value2), compose(first, second))
}
