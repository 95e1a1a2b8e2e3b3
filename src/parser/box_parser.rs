use crate::Parser;


/// A parser erased to a trait object in an exclusively-owned `Box`.  Useful for
/// storing parsers whose concrete types differ, or are unnameable, in one
/// place.
pub type BoxParser<'p, T, V> = Box<dyn Parser<T, Output = V> + 'p>;

/// Erase `parser` into a [`BoxParser`].
#[inline]
pub fn boxed<'p, T, P>(parser: P) -> BoxParser<'p, T, P::Output>
    where P: Parser<T> + 'p,
{
    Box::new(parser)
}


// Note: Also tested by the box_parser integration test.
