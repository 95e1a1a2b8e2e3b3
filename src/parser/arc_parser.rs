use std::{fmt, sync::{Arc, OnceLock}};

use crate::{Error, Parser, ResultSet};


/// A parser erased to a thread-safe trait object in a shared `Arc`.  Like
/// [`RcParser`](super::RcParser), but can be sent to and shared between
/// threads, which is safe because parsing never mutates anything.
pub type ArcParser<'p, T, V> = Arc<dyn Parser<T, Output = V> + Send + Sync + 'p>;

/// Erase `parser` into an [`ArcParser`].
#[inline]
pub fn arc<'p, T, P>(parser: P) -> ArcParser<'p, T, P::Output>
    where P: Parser<T> + Send + Sync + 'p,
{
    Arc::new(parser)
}


/// A forward declaration of a parser, for building recursive grammars that are
/// shared between threads.
///
/// The same as [`RcForward`](super::RcForward), including the reference cycle
/// a self-referential definition forms, except that it is `Send` and `Sync`
/// and [`define`] may race from several threads, in which case exactly one
/// definition wins.
///
/// [`define`]: ArcForward::define
pub struct ArcForward<'p, T, V> {
    slot: Arc<OnceLock<ArcParser<'p, T, V>>>,
}

impl<'p, T, V> ArcForward<'p, T, V> {
    /// Make a new undefined placeholder.
    #[inline]
    pub fn new() -> Self {
        Self { slot: Arc::new(OnceLock::new()) }
    }

    /// Fill in the placeholder with `parser`, for this and all clones.  Returns
    /// [`Error::AlreadyDefined`], and drops `parser`, if it was already
    /// defined; the first definition stays.
    pub fn define<P>(&self, parser: P) -> crate::Result<()>
        where P: Parser<T, Output = V> + Send + Sync + 'p,
    {
        self.slot.set(Arc::new(parser)).map_err(|_| Error::AlreadyDefined)
    }

    /// Whether [`define`](Self::define) has been done.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<'p, T, V: PartialEq> Parser<T> for ArcForward<'p, T, V> {
    type Output = V;

    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<V> {
        match self.slot.get() {
            Some(parser) => parser.parse(tokens, position),
            None => ResultSet::new(),
        }
    }
}

// Must implement these manually because deriving would place unwanted bounds on
// the type parameters.

impl<T, V> Clone for ArcForward<'_, T, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: Arc::clone(&self.slot) }
    }
}

impl<T, V> Default for ArcForward<'_, T, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Does not show the definition, which may contain this forward itself.
impl<T, V> fmt::Debug for ArcForward<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcForward").field("defined", &self.is_defined()).finish()
    }
}


// Note: Also tested by the arc_parser and threads integration tests.
