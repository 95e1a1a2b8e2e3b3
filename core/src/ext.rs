//! Method syntax for the structural combinators, for building grammars in a
//! chained style.

use crate::{apply, compose, either, Apply, Compose, Either, Parser};


/// Chained-call spellings of [`compose`], [`either`] and [`apply`].  They are
/// exactly those combinators, so `a.then(b)` is `compose(a, b)`, `a.or(b)` is
/// `either(a, b)` and `a.map(f)` is `apply(f, a)`.
///
/// Implemented for every [`Parser`].
///
/// [`fail`](crate::fail), [`noop`](crate::noop) and [`emit`](crate::emit) are
/// parsers over every token type, so calling these methods on them needs the
/// token type named, as in `emit::<char, _>(0).or(..)` or
/// `ParserExt::<char>::map(noop(), ..)`.
pub trait ParserExt<T>: Parser<T> + Sized {
    /// `compose(self, next)`
    #[inline]
    fn then<P2: Parser<T>>(self, next: P2) -> Compose<Self, P2> {
        compose(self, next)
    }

    /// `either(self, other)`
    #[inline]
    fn or<P2: Parser<T, Output = Self::Output>>(self, other: P2) -> Either<Self, P2> {
        either(self, other)
    }

    /// `apply(function, self)`
    #[inline]
    fn map<F, U>(self, function: F) -> Apply<F, Self>
        where F: Fn(Self::Output) -> U,
              U: PartialEq,
    {
        apply(function, self)
    }

    /// Borrow, so that one parser value can be used in several places of a
    /// grammar without moving or cloning it.
    #[inline]
    fn by_ref(&self) -> &Self {
        self
    }
}

impl<T, P: Parser<T>> ParserExt<T> for P {}
