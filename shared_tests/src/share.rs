//! A trait for generically putting parsers behind the different kinds of
//! handles, for testing them; and implementations of the trait for the handle
//! kinds of our crates.

use nondet::parser::{arc, boxed, rc, ArcParser, BoxParser, RcParser};
use nondet_core::Parser;

use crate::Value;


/// A way of holding a parser, for running the suites against it.
pub trait Share {
    /// The handle type.
    type Handle: Parser<char, Output = Value>;

    /// Put `parser` behind a handle.
    fn share<P>(parser: P) -> Self::Handle
        where P: Parser<char, Output = Value> + Send + Sync + 'static;
}


/// Exclusively-owned trait objects.
#[derive(Copy, Clone, Debug)]
pub struct BoxShare;

impl Share for BoxShare {
    type Handle = BoxParser<'static, char, Value>;

    fn share<P>(parser: P) -> Self::Handle
        where P: Parser<char, Output = Value> + Send + Sync + 'static,
    {
        boxed(parser)
    }
}


/// Single-threaded shared trait objects.
#[derive(Copy, Clone, Debug)]
pub struct RcShare;

impl Share for RcShare {
    type Handle = RcParser<'static, char, Value>;

    fn share<P>(parser: P) -> Self::Handle
        where P: Parser<char, Output = Value> + Send + Sync + 'static,
    {
        rc(parser)
    }
}


/// Thread-safe shared trait objects.
#[derive(Copy, Clone, Debug)]
pub struct ArcShare;

impl Share for ArcShare {
    type Handle = ArcParser<'static, char, Value>;

    fn share<P>(parser: P) -> Self::Handle
        where P: Parser<char, Output = Value> + Send + Sync + 'static,
    {
        arc(parser)
    }
}


/// Trait objects behind plain references, leaked so they can be `'static`.
/// Only for the unit tests of this crate, where leaking is harmless.
#[cfg(test)]
#[derive(Copy, Clone, Debug)]
pub(crate) struct Direct;

#[cfg(test)]
impl Share for Direct {
    type Handle = &'static (dyn Parser<char, Output = Value> + Send + Sync);

    fn share<P>(parser: P) -> Self::Handle
        where P: Parser<char, Output = Value> + Send + Sync + 'static,
    {
        Box::leak(Box::new(parser))
    }
}
