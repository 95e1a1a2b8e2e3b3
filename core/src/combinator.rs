//! The structural combinators, which build new parsers from existing ones
//! without inspecting tokens themselves.

use core::fmt;

use crate::{Parsed, Parser, ResultSet};


/// Sequential composition.  See [`compose`].
#[derive(Copy, Clone, Debug)]
pub struct Compose<P1, P2> {
    first: P1,
    second: P2,
}

/// Make the parser that runs `first`, then, for every one of its results
/// `(value1, position1)`, runs `second` starting at `position1`, and outputs
/// `((value1, value2), position2)` for every result `(value2, position2)` of
/// that.
///
/// The results are the union over all of `first`'s results, i.e. the full
/// nondeterministic expansion, not only the first match.  When `first` fails,
/// `second` is never invoked.  When every invocation of `second` fails, the
/// composition fails.
///
/// The first value is cloned once per result of `second` that it pairs with.
#[inline]
pub fn compose<P1, P2>(first: P1, second: P2) -> Compose<P1, P2> {
    Compose { first, second }
}

impl<T, P1, P2> Parser<T> for Compose<P1, P2>
    where P1: Parser<T>,
          P1::Output: Clone,
          P2: Parser<T>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output> {
        let mut results = ResultSet::new();
        for Parsed { value: value1, end: middle } in self.first.parse(tokens, position) {
            for Parsed { value: value2, end } in self.second.parse(tokens, middle) {
                results.insert(Parsed { value: (value1.clone(), value2), end });
            }
        }
        results
    }
}


/// Alternation.  See [`either`].
#[derive(Copy, Clone, Debug)]
pub struct Either<P1, P2> {
    left: P1,
    right: P2,
}

/// Make the parser that runs both `left` and `right` at the same position and
/// returns the union of their result sets.
///
/// Both branches are always run: there is no left bias and no cut.  Results
/// of the two branches that are equal collapse into one.  Because set union is
/// commutative, `either(a, b)` and `either(b, a)` always have equal results.
///
/// Both branches must have the same output type.  Branches that naturally
/// produce different kinds of values are first mapped, with
/// [`apply`], into one enum.
#[inline]
pub fn either<P1, P2>(left: P1, right: P2) -> Either<P1, P2> {
    Either { left, right }
}

impl<T, P1, P2> Parser<T> for Either<P1, P2>
    where P1: Parser<T>,
          P2: Parser<T, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output> {
        self.left.parse(tokens, position)
            .union(self.right.parse(tokens, position))
    }
}


/// Mapping of output values.  See [`apply`].
#[derive(Copy, Clone)]
pub struct Apply<F, P> {
    function: F,
    parser: P,
}

/// Make the parser that runs `parser` and maps `function` over the value of
/// every result, leaving each end position unchanged.
///
/// It fails exactly when `parser` fails.  The number of results is preserved,
/// except that results whose mapped values coincide at the same end position
/// collapse, which can only happen when `function` is not injective.
#[inline]
pub fn apply<F, P>(function: F, parser: P) -> Apply<F, P> {
    Apply { function, parser }
}

impl<T, F, P, U> Parser<T> for Apply<F, P>
    where P: Parser<T>,
          F: Fn(P::Output) -> U,
          U: PartialEq,
{
    type Output = U;

    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<U> {
        self.parser.parse(tokens, position).map_values(&self.function)
    }
}

impl<F, P: fmt::Debug> fmt::Debug for Apply<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Apply").field("parser", &self.parser).finish_non_exhaustive()
    }
}
