//! The trait that all parsers implement, and its forwarding implementations
//! for references and the standard smart pointers.

use alloc::{boxed::Box, rc::Rc, sync::Arc};

use crate::ResultSet;


/// A parser over token sequences of element type `T`.
///
/// Parsing is a pure function of `(tokens, position)`: the same pair always
/// yields the same [`ResultSet`], no state is kept between calls, and nothing is
/// mutated.  This is what makes it fine for composite parsers to re-invoke the
/// same sub-parser many times at the same position, and for a parser value to
/// be used from many threads at once when it is `Sync`.
///
/// Parsers are ordinary values.  Composite parsers own their sub-parsers, or
/// share them through one of the reference types that also implement this
/// trait (`&P`, `Box<P>`, `Rc<P>`, `Arc<P>`, including trait objects).
///
/// Implementors must uphold, for every result `r` of `parse(tokens, position)`,
/// that `position <= r.end <= tokens.len()`.  Callers must pass a `position`
/// that is at most `tokens.len()`; `position == tokens.len()` is the valid "at
/// end of input" state.  The primitives of this crate never consume past the
/// end, and the combinators only ever start sub-parsers at the given position
/// or at an end position reported by another parser, so the invariant is kept
/// by construction for every parser built from this crate.
pub trait Parser<T> {
    /// The type of the semantic values produced.  Its `PartialEq` is the
    /// equality that deduplicates result sets.
    ///
    /// That equality should be reflexive, as with `Eq`.  Values unequal to
    /// themselves, like `f64::NAN`, are never deduplicated, so `either(p, p)`
    /// keeps both copies of them and a result set holding one compares unequal
    /// to itself.
    type Output: PartialEq;

    /// Run at `position` and return every distinct parse.  An empty set means
    /// there is no parse at that position.
    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output>;
}


impl<T, P> Parser<T> for &P
    where P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output> {
        (**self).parse(tokens, position)
    }
}

impl<T, P> Parser<T> for Box<P>
    where P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output> {
        (**self).parse(tokens, position)
    }
}

impl<T, P> Parser<T> for Rc<P>
    where P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output> {
        (**self).parse(tokens, position)
    }
}

impl<T, P> Parser<T> for Arc<P>
    where P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<Self::Output> {
        (**self).parse(tokens, position)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{consume, either, noop, Noop};

    #[test]
    fn forwarding() {
        let tokens = ['a', 'b'];
        let direct = consume(|c: &char| *c == 'a');
        let expected = ResultSet::singleton('a', 1);

        assert_eq!((&direct).parse(&tokens, 0), expected);
        assert_eq!(Box::new(&direct).parse(&tokens, 0), expected);
        assert_eq!(Rc::new(&direct).parse(&tokens, 0), expected);
        assert_eq!(Arc::new(&direct).parse(&tokens, 0), expected);
    }

    #[test]
    fn trait_objects() {
        let tokens = [1_u8, 2, 3];
        let boxed: Box<dyn Parser<u8, Output = ()>> = Box::new(noop());
        assert_eq!(boxed.parse(&tokens, 2), ResultSet::singleton((), 2));

        let shared: Rc<dyn Parser<u8, Output = ()>> = Rc::new(Noop);
        let both = either(Rc::clone(&shared), shared);
        assert_eq!(both.parse(&tokens, 3), ResultSet::singleton((), 3));
    }
}
