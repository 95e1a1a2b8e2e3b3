//! Parse results and the sets of them that parsers return.

use alloc::vec::{self, Vec};
use core::slice;


/// One successful parse: the output `value` and the `end` position immediately
/// after the consumed input.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Parsed<V> {
    /// The semantic output.
    pub value: V,
    /// Position immediately after the last consumed token.
    pub end: usize,
}

impl<V> Parsed<V> {
    /// Convenience constructor.
    #[inline]
    pub fn new(value: V, end: usize) -> Self {
        Self { value, end }
    }
}

impl<V> From<(V, usize)> for Parsed<V> {
    #[inline]
    fn from((value, end): (V, usize)) -> Self {
        Self { value, end }
    }
}


/// The set of all distinct parses a parser found at one start position.  Empty
/// means the parse failed there.
///
/// Members are deduplicated by the `PartialEq` of `Parsed<V>`, i.e. two parses
/// collapse into one iff their values are `==` and their end positions are
/// equal, which needs `==` to be reflexive (see
/// [`Parser::Output`](crate::Parser::Output)).  No hashing or ordering is
/// required of `V`, so the set is a `Vec` that is searched on insertion.
/// Iteration yields members in the order they were first inserted, which is
/// deterministic for a given parser and input, but equality of two sets does
/// not depend on that order.
#[derive(Clone, Debug)]
pub struct ResultSet<V> {
    members: Vec<Parsed<V>>,
}

/// Must implement this manually because deriving would place an unwanted bound
/// on `V`.
impl<V> Default for ResultSet<V> {
    #[inline]
    fn default() -> Self {
        Self { members: Vec::new() }
    }
}

impl<V> ResultSet<V> {
    /// The empty set, i.e. failure.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set with exactly one parse.
    #[inline]
    pub fn singleton(value: V, end: usize) -> Self {
        Self { members: alloc::vec![Parsed { value, end }] }
    }

    /// Number of distinct parses.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether this is a failure.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the parses, in first-insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Parsed<V>> {
        self.members.iter()
    }
}

impl<V: PartialEq> ResultSet<V> {
    /// Whether the parse `(value, end)` is a member.
    pub fn contains(&self, value: &V, end: usize) -> bool {
        self.members.iter().any(|p| p.end == end && p.value == *value)
    }

    /// Set union.  Members of `other` that are already in `self` are dropped,
    /// and the rest follow the members of `self` in iteration order.
    pub fn union(mut self, other: Self) -> Self {
        for parsed in other {
            self.insert(parsed);
        }
        self
    }

    pub(crate) fn insert(&mut self, parsed: Parsed<V>) {
        if !self.members.contains(&parsed) {
            self.members.push(parsed);
        }
    }

    /// Map over the values, keeping each end position.  Values that coincide
    /// afterwards at the same end collapse.
    pub(crate) fn map_values<U, F>(self, mut f: F) -> ResultSet<U>
        where F: FnMut(V) -> U,
              U: PartialEq,
    {
        self.members.into_iter()
                    .map(|Parsed { value, end }| Parsed { value: f(value), end })
                    .collect()
    }
}

/// Set equality: the same members regardless of insertion order.
impl<V: PartialEq> PartialEq for ResultSet<V> {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are duplicate-free, so equal length plus inclusion one way
        // is enough.
        self.len() == other.len()
            && self.members.iter().all(|p| other.members.contains(p))
    }
}

impl<V: Eq> Eq for ResultSet<V> {}

impl<V: PartialEq> FromIterator<Parsed<V>> for ResultSet<V> {
    fn from_iter<I: IntoIterator<Item = Parsed<V>>>(iter: I) -> Self {
        let mut set = Self::new();
        for parsed in iter {
            set.insert(parsed);
        }
        set
    }
}

impl<V: PartialEq> FromIterator<(V, usize)> for ResultSet<V> {
    fn from_iter<I: IntoIterator<Item = (V, usize)>>(iter: I) -> Self {
        iter.into_iter().map(Parsed::from).collect()
    }
}

impl<V> IntoIterator for ResultSet<V> {
    type Item = Parsed<V>;
    type IntoIter = vec::IntoIter<Parsed<V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'s, V> IntoIterator for &'s ResultSet<V> {
    type Item = &'s Parsed<V>;
    type IntoIter = slice::Iter<'s, Parsed<V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
