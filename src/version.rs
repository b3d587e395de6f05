//! Semantic version value type
//!
//! A [`Version`] is a plain value: five public fields, passed by value or
//! shared reference, never mutated in place. Every "modification" helper
//! returns a new value.
//!
//! Two relations live side by side on this type:
//! - content equality (`==`, [`Version::content_equal`]) compares all five fields;
//! - precedence ([`Version::compare`], [`Version::less`]) ignores build metadata.
//!
//! Because the two disagree whenever only `build` differs, `Version` does not
//! implement `Ord`. Use [`crate::ordering::ByPrecedence`] where an `Ord` type
//! is required.

use std::cmp::Ordering;
use std::fmt;

use crate::precedence;

/// A semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Empty `pre_release` means a normal release; empty `build` means no build
/// metadata. Neither string is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub build: String,
}

impl Version {
    /// A normal release with no pre-release and no build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    pub fn with_pre_release(self, pre_release: impl Into<String>) -> Self {
        Version {
            pre_release: pre_release.into(),
            ..self
        }
    }

    pub fn with_build(self, build: impl Into<String>) -> Self {
        Version {
            build: build.into(),
            ..self
        }
    }

    /// Copy of this version with the build metadata stripped.
    pub fn without_build(&self) -> Self {
        Version {
            build: String::new(),
            ..self.clone()
        }
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// True only for the zero version `0.0.0` with empty pre-release and build.
    pub fn is_zero(&self) -> bool {
        self.major == 0
            && self.minor == 0
            && self.patch == 0
            && self.pre_release.is_empty()
            && self.build.is_empty()
    }

    /// Literal equality of all five fields, build metadata included.
    ///
    /// Same answer as `==`. Not derived from [`Version::compare`]: versions
    /// that differ only in build metadata have equal precedence but are
    /// not content-equal.
    pub fn content_equal(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
            && self.build == other.build
    }

    /// Precedence comparison per Semantic Versioning 2.0.0 §11.
    ///
    /// `Ordering::Equal` means equal precedence, not equal content.
    pub fn compare(&self, other: &Version) -> Ordering {
        precedence::compare(self, other)
    }

    /// [`Version::compare`] as `-1`, `0` or `1`.
    pub fn compare_i32(&self, other: &Version) -> i32 {
        match self.compare(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// True if `self` has strictly lower precedence than `other`.
    pub fn less(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, same as `Display`.
    pub fn full(&self) -> String {
        self.to_string()
    }

    /// `MAJOR.MINOR.PATCH[-PRERELEASE]`; build metadata is always omitted.
    pub fn short(&self) -> String {
        if self.pre_release.is_empty() {
            self.core()
        } else {
            format!("{}-{}", self.core(), self.pre_release)
        }
    }

    /// `MAJOR.MINOR.PATCH` only.
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
