//! Adapters that let generic sorting and ordering code work with versions.
//!
//! Neither adapter carries a sorting algorithm; both hand the precedence
//! comparator to the standard library.

use std::cmp::Ordering;

use crate::version::Version;

/// A mutable slice of versions viewed as a sortable sequence.
pub struct ByVersion<'a>(pub &'a mut [Version]);

impl<'a> ByVersion<'a> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the element at `i` should sort before the element at `j`.
    pub fn should_precede(&self, i: usize, j: usize) -> bool {
        self.0[i].less(&self.0[j])
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Stable ascending sort by precedence.
    pub fn sort(&mut self) {
        self.0.sort_by(Version::compare);
    }

    /// Stable descending sort by precedence.
    pub fn sort_descending(&mut self) {
        self.0.sort_by(|a, b| b.compare(a));
    }

    /// True if no adjacent pair is out of precedence order.
    pub fn is_sorted(&self) -> bool {
        (1..self.len()).all(|i| !self.should_precede(i, i - 1))
    }
}

/// Owned version ordered by precedence instead of content.
///
/// `Eq` here is precedence equality: wrappers around versions that differ
/// only in build metadata compare equal.
#[derive(Debug, Clone)]
pub struct ByPrecedence(pub Version);

impl ByPrecedence {
    pub fn into_inner(self) -> Version {
        self.0
    }
}

impl From<Version> for ByPrecedence {
    fn from(version: Version) -> Self {
        ByPrecedence(version)
    }
}

impl PartialEq for ByPrecedence {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare(&other.0) == Ordering::Equal
    }
}

impl Eq for ByPrecedence {}

impl PartialOrd for ByPrecedence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByPrecedence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0)
    }
}

/// Highest-precedence version; the first one wins among equals.
pub fn latest(versions: &[Version]) -> Option<&Version> {
    versions.iter().reduce(|best, candidate| {
        if best.less(candidate) {
            candidate
        } else {
            best
        }
    })
}
