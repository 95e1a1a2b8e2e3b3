//! Errors of the conveniences of this crate.  The combinator algebra itself has
//! none: its only failure is the empty result set.

/// The possible errors returned by the [result helpers](crate::common) and by
/// [defining forward declarations](crate::parser::RcForward::define).
#[derive(Copy, Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    /// A forward declaration was defined a second time.
    #[error("forward parser is already defined")]
    AlreadyDefined,
    /// No parse consumed the whole input.
    #[error("no parse consumed all {length} tokens")]
    NoCompleteParse {
        /// Number of tokens in the input.
        length: usize,
    },
    /// More than one distinct parse consumed the whole input.
    #[error("{count} distinct parses consumed all {length} tokens")]
    Ambiguous {
        /// Number of distinct complete parses.
        count: usize,
        /// Number of tokens in the input.
        length: usize,
    },
}

/// Result type of the conveniences of this crate.
pub type Result<T> = core::result::Result<T, Error>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::AlreadyDefined.to_string(), "forward parser is already defined");
        assert_eq!(Error::NoCompleteParse { length: 3 }.to_string(),
                   "no parse consumed all 3 tokens");
        assert_eq!(Error::Ambiguous { count: 4, length: 3 }.to_string(),
                   "4 distinct parses consumed all 3 tokens");
    }
}
