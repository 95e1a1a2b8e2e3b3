//! The core of a nondeterministic parser-combinator algebra: a small closed
//! set of composable primitives for building parsers over an arbitrary token
//! sequence, where a parse may legitimately produce more than one valid
//! result.  Instead of committing to a single "best" parse, every parser
//! returns the [set](ResultSet) of all its distinct parses, so ambiguous
//! grammars are expressed and observed directly.
//!
//! A [`Parser`] is a pure function from a token slice and a start position to
//! a [`ResultSet`] of [`Parsed`] values, each pairing an output value with the
//! position just after the input it consumed.  An empty result set is the one
//! and only representation of failure: there are no error values, no failure
//! positions, and no expected-token diagnostics.
//!
//! The algebra is closed.  New leaf parsers come only from [`consume`] and
//! [`transform`] (token predicates) or [`noop`] and [`emit`] (zero-width), and
//! new combinators only from [`compose`], [`either`] and [`apply`] or
//! compositions of them, like [`combine`].  [`fail`] is the identity of
//! alternation.
//!
//! ```
//! use nondet_core::{combine, consume, transform, Parser, ResultSet};
//!
//! let digit = || transform(char::is_ascii_digit, |c: char| c.to_digit(10).unwrap_or(0));
//! let plus = consume(|c: &char| *c == '+');
//! let sum = combine(digit(), combine(plus, digit(), |_, d| d), |a, b| a + b);
//!
//! let tokens = ['1', '+', '2'];
//! assert_eq!(sum.parse(&tokens, 0), ResultSet::singleton(3, 3));
//! ```
//!
//! There is no memoization and no left-recursion support: repeated sub-parses
//! at the same position are recomputed, and a grammar that refers to itself at
//! the same position without consuming never terminates.  Building
//! self-referential grammars needs a forward declaration, which the full
//! `nondet` crate provides; this crate only needs the `alloc` library.
//!
//! Equality of output values is the caller-supplied [`PartialEq`] of the
//! output type.  It decides which parses collapse into one member of a result
//! set.

#![no_std]

extern crate alloc;

pub mod combinator;
pub mod derived;
pub mod ext;
pub mod parser;
pub mod primitive;
pub mod result;

pub use combinator::{apply, compose, either, Apply, Compose, Either};
pub use derived::{combine, emit, transform};
pub use ext::ParserExt;
pub use parser::Parser;
pub use primitive::{consume, fail, noop, Consume, Fail, Noop};
pub use result::{Parsed, ResultSet};
