//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`nondet_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`nondet_core`], i.e. the whole combinator algebra.
//!
//! * Provides [shared parser handles](parser) over `Box`, `Rc` and `Arc` trait
//! objects, so grammars with differently-typed parts can be stored and reused.
//!
//! * Provides [forward declarations](parser::RcForward) for building recursive
//! grammars, which the algebra itself has no fixed-point combinator for.
//!
//! * Provides [helpers](common) for the common ways callers interpret result
//! sets, like requiring exactly one parse of the whole input.
//!
//! * With the `tracing` feature, provides an opt-in [instrumentation
//! wrapper](trace).
//!
//! ```
//! use nondet::{combine, consume, either, transform, common::parse_unique,
//!              parser::RcForward};
//!
//! // sum := digit | digit '+' sum
//! let sum = RcForward::<char, u32>::new();
//! let digit = || transform(char::is_ascii_digit, |c: char| c.to_digit(10).unwrap_or(0));
//! let plus = consume(|c: &char| *c == '+');
//! sum.define(either(digit(),
//!                   combine(digit(), combine(plus, sum.clone(), |_, s| s), |d, s| d + s)))
//!    .unwrap();
//!
//! let tokens: Vec<char> = "1+2+3".chars().collect();
//! assert_eq!(parse_unique(&sum, &tokens).unwrap(), 6);
//! ```
//!
//! [`nondet_core`]: ../nondet_core/index.html

#![forbid(unsafe_code)]


// Re-export everything from the core crate. (Except items shadowed by ours,
// which are re-exported elsewhere.)
#[doc(no_inline)]
pub use nondet_core::*;

pub mod common;

mod error;
pub use error::{Error, Result};

/// Shared parser handles and forward declarations that use the `std` library,
/// including heap allocation.  Also re-exports the core crate's module.
pub mod parser {
    #[doc(no_inline)]
    pub use nondet_core::parser::*;

    mod box_parser;
    pub use box_parser::{boxed, BoxParser};

    mod rc_parser;
    pub use rc_parser::{rc, RcForward, RcParser};

    mod arc_parser;
    pub use arc_parser::{arc, ArcForward, ArcParser};
}

#[cfg(feature = "tracing")]
pub mod trace;
