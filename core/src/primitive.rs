//! The leaf parsers.  [`consume`] is the only parser in the whole algebra that
//! inspects tokens.

use core::fmt;
use core::marker::PhantomData;

use crate::{Parser, ResultSet};


/// The parser that never matches.  See [`fail`].
pub struct Fail<V>(PhantomData<fn() -> V>);

/// The parser that always returns the empty result set, regardless of input or
/// position.  It is the identity of [`either`](crate::either).
///
/// The output type `V` is chosen freely, since no value is ever produced.
#[inline]
pub fn fail<V>() -> Fail<V> {
    Fail(PhantomData)
}

impl<T, V: PartialEq> Parser<T> for Fail<V> {
    type Output = V;

    #[inline]
    fn parse(&self, _tokens: &[T], _position: usize) -> ResultSet<V> {
        ResultSet::new()
    }
}

// Must implement these manually because deriving would place unwanted bounds on
// `V`.

#[allow(clippy::expl_impl_clone_on_copy)]
impl<V> Clone for Fail<V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Fail<V> {}

impl<V> Default for Fail<V> {
    #[inline]
    fn default() -> Self {
        fail()
    }
}

impl<V> fmt::Debug for Fail<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fail")
    }
}


/// The parser that consumes nothing and outputs `()`.  See [`noop`].
#[derive(Copy, Clone, Default, Debug)]
pub struct Noop;

/// The parser that consumes zero tokens and always succeeds exactly once, at
/// the position it was given, with the "no information" value `()`.  It is the
/// neutral element of [`compose`](crate::compose), up to the pairing of
/// values.
#[inline]
pub fn noop() -> Noop {
    Noop
}

impl<T> Parser<T> for Noop {
    type Output = ();

    #[inline]
    fn parse(&self, _tokens: &[T], position: usize) -> ResultSet<()> {
        ResultSet::singleton((), position)
    }
}


/// The parser that matches one token by a predicate.  See [`consume`].
pub struct Consume<T, F> {
    predicate: F,
    _token: PhantomData<fn(&T) -> bool>,
}

/// Given a predicate over single tokens, make the parser that, at `position`:
///
/// * fails if there is no token there (`position >= tokens.len()`), or if
///   `predicate(&tokens[position])` is `false`;
///
/// * otherwise succeeds exactly once, outputting a clone of that token and
///   ending at `position + 1`.
#[inline]
pub fn consume<T, F>(predicate: F) -> Consume<T, F>
    where F: Fn(&T) -> bool,
{
    Consume { predicate, _token: PhantomData }
}

impl<T, F> Parser<T> for Consume<T, F>
    where F: Fn(&T) -> bool,
          T: Clone + PartialEq,
{
    type Output = T;

    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<T> {
        match tokens.get(position) {
            Some(token) if (self.predicate)(token)
                => ResultSet::singleton(token.clone(), position + 1),
            _
                => ResultSet::new()
        }
    }
}

impl<T, F: Clone> Clone for Consume<T, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self { predicate: self.predicate.clone(), _token: PhantomData }
    }
}

impl<T, F> fmt::Debug for Consume<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consume").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_never_matches() {
        let p = fail::<char>();
        let no_tokens: &[char] = &[];
        assert!(p.parse(no_tokens, 0).is_empty());
        assert!(p.parse(&['a', 'b'], 0).is_empty());
        assert!(p.parse(&['a', 'b'], 1).is_empty());
        assert!(p.parse(&['a', 'b'], 2).is_empty());
    }

    #[test]
    fn noop_stays_put() {
        let tokens = [10, 20, 30];
        for position in 0 ..= tokens.len() {
            assert_eq!(noop().parse(&tokens, position),
                       ResultSet::singleton((), position));
        }
        let no_tokens: &[i32] = &[];
        assert_eq!(Noop.parse(no_tokens, 0), ResultSet::singleton((), 0));
    }

    #[test]
    fn consume_boundaries() {
        let any = consume(|_: &char| true);
        assert!(any.parse(&[], 0).is_empty());

        let tokens = ['x', 'y'];
        assert_eq!(any.parse(&tokens, 0), ResultSet::singleton('x', 1));
        assert_eq!(any.parse(&tokens, 1), ResultSet::singleton('y', 2));
        assert!(any.parse(&tokens, 2).is_empty());
    }

    #[test]
    fn consume_predicate() {
        let y = consume(|c: &char| *c == 'y');
        let tokens = ['x', 'y'];
        assert!(y.parse(&tokens, 0).is_empty());
        assert_eq!(y.parse(&tokens, 1), ResultSet::singleton('y', 2));
    }

    #[test]
    fn consume_with_fn_item() {
        let digit = consume(char::is_ascii_digit);
        let tokens = ['7', 'a'];
        assert_eq!(digit.parse(&tokens, 0), ResultSet::singleton('7', 1));
        assert!(digit.parse(&tokens, 1).is_empty());
    }

    #[test]
    fn copies() {
        let f = fail::<u8>();
        let g = f;
        assert!(Parser::<u8>::parse(&f, &[1], 0).is_empty());
        assert!(Parser::<u8>::parse(&g, &[1], 0).is_empty());

        let c = consume(|b: &u8| *b > 0);
        let d = c.clone();
        assert_eq!(c.parse(&[1], 0), d.parse(&[1], 0));
    }
}
