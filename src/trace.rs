//! Opt-in instrumentation of individual parsers with `tracing`.
//!
//! Parsers are never instrumented implicitly.  Wrapping one with [`traced`]
//! makes every invocation of it emit `trace`-level events, inside a span, which
//! is handy for seeing how often an ambiguous grammar re-parses a
//! sub-grammar.  The wrapper returns exactly the result set of the wrapped
//! parser.

use tracing::{trace, trace_span};

use crate::{Parser, ResultSet};


/// A parser that logs each invocation of the parser it wraps.  See
/// [`traced`].
#[derive(Copy, Clone, Debug)]
pub struct Traced<P> {
    name: &'static str,
    parser: P,
}

/// Wrap `parser` so that each invocation is logged under `name`.
#[inline]
pub fn traced<P>(name: &'static str, parser: P) -> Traced<P> {
    Traced { name, parser }
}

impl<T, P: Parser<T>> Parser<T> for Traced<P> {
    type Output = P::Output;

    fn parse(&self, tokens: &[T], position: usize) -> ResultSet<P::Output> {
        let _span = trace_span!("parse", parser = self.name, position).entered();
        let results = self.parser.parse(tokens, position);
        trace!(parser = self.name,
               position,
               results = results.len(),
               furthest = ?results.iter().map(|parsed| parsed.end).max(),
               "parsed");
        results
    }
}
