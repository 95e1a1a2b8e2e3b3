use std::{cell::OnceCell, fmt, rc::Rc};

use crate::{Error, Parser, ResultSet};


/// A parser erased to a trait object in a shared `Rc`.  Cloning is cheap and
/// shares the same parser, so one sub-grammar can be used by many composites.
pub type RcParser<'p, T, V> = Rc<dyn Parser<T, Output = V> + 'p>;

/// Erase `parser` into an [`RcParser`].
#[inline]
pub fn rc<'p, T, P>(parser: P) -> RcParser<'p, T, P::Output>
    where P: Parser<T> + 'p,
{
    Rc::new(parser)
}


/// A forward declaration of a parser, for building recursive grammars in a
/// single thread.
///
/// A new `RcForward` is a placeholder that can be cloned into a grammar before
/// the parser it stands for exists.  Once the grammar is built, [`define`] fills
/// in the placeholder, once, and every clone then parses as that parser.  Until
/// then it parses as [`fail`](crate::fail).
///
/// A grammar that contains a clone of the forward it defines is a reference
/// cycle, which is never freed.  Grammars are usually built once and kept for
/// the life of the program, so this is normally not a concern.  Termination of
/// recursive grammars is the caller's concern: a definition that reaches itself
/// at the same position without consuming a token (left recursion) recurses
/// without bound.
///
/// [`define`]: RcForward::define
pub struct RcForward<'p, T, V> {
    slot: Rc<OnceCell<RcParser<'p, T, V>>>,
}

impl<'p, T, V> RcForward<'p, T, V> {
    /// Make a new undefined placeholder.
    #[inline]
    pub fn new() -> Self {
        Self { slot: Rc::new(OnceCell::new()) }
    }

    /// Fill in the placeholder with `parser`, for this and all clones.  Returns
    /// [`Error::AlreadyDefined`], and drops `parser`, if it was already
    /// defined; the first definition stays.
    pub fn define<P>(&self, parser: P) -> crate::Result<()>
        where P: Parser<T, Output = V> + 'p,
    {
        self.slot.set(Rc::new(parser)).map_err(|_| Error::AlreadyDefined)
    }

    /// Whether [`define`](Self::define) has been done.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<'p, T, V: PartialEq> Parser<T> for RcForward<'p, T, V> {
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

impl<T, V> Clone for RcForward<'_, T, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T, V> Default for RcForward<'_, T, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Does not show the definition, which may contain this forward itself.
impl<T, V> fmt::Debug for RcForward<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RcForward").field("defined", &self.is_defined()).finish()
    }
}


// Note: Also tested by the rc_parser and forward integration tests.
