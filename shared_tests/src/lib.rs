//! Used by the integration tests of the [full](../nondet/index.html) crate.  It
//! provides test suites that check the laws of the combinator algebra of the
//! [core](../nondet_core/index.html) crate, and that can be run against any
//! kind of shared parser handle, by way of the [`Share`](share::Share) trait.
//!
//! The suites draw random token sequences and start positions with
//! `proptest`, over a small alphabet, and check every law against every one of
//! a fixed set of [sample](sample) parsers.

use proptest::{prelude::*, test_runner::{TestCaseError, TestRunner}};

use nondet_core::*;

use share::Share;


pub mod share;
pub mod suites;


/// The tokens that the generated inputs are made of.
pub const ALPHABET: [char; 5] = ['1', '2', '+', 'a', ' '];

/// Longest generated input.
pub const MAX_INPUT_LEN: usize = 8;

/// How many [sample](sample) parsers there are.
pub const SAMPLE_COUNT: usize = 10;


/// The single output type of all the sample parsers, so they can be put behind
/// uniform handles and combined with each other freely.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    /// No information
    Unit,
    /// A token as is
    Char(char),
    /// A converted number
    Int(i64),
    /// A converted string
    Text(String),
    /// Two values in sequence
    Pair(Box<Value>, Box<Value>),
}

impl Value {
    /// Convenience constructor.
    pub fn pair(first: Value, second: Value) -> Self {
        Value::Pair(Box::new(first), Box::new(second))
    }
}


fn is_digit(c: &char) -> bool {
    c.is_ascii_digit()
}

fn digit_value(c: char) -> i64 {
    c.to_digit(10).map_or(0, i64::from)
}

fn anything(_: &char) -> bool {
    true
}

/// Make the sample parser number `index`, shared with `S`.  Between them, the
/// samples cover: failure, zero-width success, single tokens, conversion,
/// ambiguity at one end position, ambiguity across end positions, and
/// sequencing.
///
/// # Panics
///
/// If `index` is not less than [`SAMPLE_COUNT`].
pub fn sample<S: Share>(index: usize) -> S::Handle {
    let digit = || transform(is_digit, digit_value);
    match index {
        0 => S::share(fail()),
        1 => S::share(apply(|()| Value::Unit, noop())),
        2 => S::share(apply(Value::Char, consume(is_digit))),
        3 => S::share(transform(is_digit, |c| Value::Int(digit_value(c)))),
        4 => S::share(either(transform(is_digit, |c| Value::Int(digit_value(c))),
                             transform(is_digit, |c: char| Value::Text(c.to_string())))),
        5 => S::share(combine(consume(anything), consume(anything),
                              |a, b| Value::pair(Value::Char(a), Value::Char(b)))),
        6 => S::share(combine(digit(),
                              combine(consume(|c: &char| *c == '+'), digit(), |_, d| d),
                              |a, b| Value::Int(a + b))),
        7 => S::share(emit(Value::Int(0))),
        8 => S::share(either(emit(Value::Unit),
                             apply(Value::Char, consume(char::is_ascii_alphabetic)))),
        9 => S::share(either(apply(Value::Int, digit()),
                             combine(digit(), digit(), |a, b| Value::Int(a * 10 + b)))),
        _ => panic!("no sample parser {index}"),
    }
}

/// Generate an input: a token sequence and a valid start position in it.
pub fn input() -> impl Strategy<Value = (Vec<char>, usize)> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0 ..= MAX_INPUT_LEN)
        .prop_flat_map(|tokens| {
            let len = tokens.len();
            (Just(tokens), 0 ..= len)
        })
}

/// Check `property` against generated [inputs](input).
///
/// # Panics
///
/// If `property` fails for some input, with the minimal failing input.
pub fn check<F>(property: F)
    where F: Fn(&[char], usize) -> Result<(), TestCaseError>,
{
    let mut runner = TestRunner::default();
    if let Err(failure) = runner.run(&input(), |(tokens, position)| property(&tokens, position)) {
        panic!("{failure}");
    }
}


// This only tests the internal units of this module
#[cfg(test)]
mod tests {
    use super::*;
    use share::Direct;

    #[test]
    fn samples_exist() {
        for index in 0 .. SAMPLE_COUNT {
            let _ = sample::<Direct>(index).parse(&[], 0);
        }
    }

    #[test]
    #[should_panic(expected = "no sample parser")]
    fn no_extra_samples() {
        let _ = sample::<Direct>(SAMPLE_COUNT);
    }

    #[test]
    fn inputs_are_valid() {
        check(|tokens, position| {
            prop_assert!(tokens.len() <= MAX_INPUT_LEN);
            prop_assert!(position <= tokens.len());
            prop_assert!(tokens.iter().all(|t| ALPHABET.contains(t)));
            Ok(())
        });
    }
}
