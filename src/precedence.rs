//! Semantic Versioning 2.0.0 precedence
//!
//! Rules, applied in order and stopping at the first field that decides:
//!
//! 1. `major`, `minor`, `patch` compare numerically.
//! 2. A normal release outranks any pre-release of the same core triple.
//! 3. Two pre-releases compare identifier by identifier (dot separated):
//!    - numeric identifiers compare numerically (`2 < 11`);
//!    - a numeric identifier always ranks below a non-numeric one;
//!    - non-numeric identifiers compare lexically in ASCII order;
//!    - when all shared identifiers tie, the shorter list ranks lower
//!      (`alpha < alpha.1`).
//! 4. Build metadata is never consulted.
//!
//! `1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta <
//! 1.0.0-beta.2 < 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0`
//!
//! Every function here is total: any `Version` value compares, including
//! ones a strict parser would reject.

use std::cmp::Ordering;

use crate::version::Version;

/// Three-way precedence comparison of `a` against `b`.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| {
            match (a.pre_release.is_empty(), b.pre_release.is_empty()) {
                (true, true) => Ordering::Equal,
                // normal release > pre-release
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => compare_pre_release(&a.pre_release, &b.pre_release),
            }
        })
}

/// Compare two non-empty pre-release strings.
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match compare_identifier(x, y) {
                Ordering::Equal => continue,
                decided => return decided,
            },
            // fewer identifiers ranks lower
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (try_parse_integer(a), try_parse_integer(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Numeric value of a pre-release identifier, if it is one.
///
/// `Some` only for a non-empty run of ASCII digits that fits in a `u64`.
/// Anything else (signs, empty, overflow) is treated as alphanumeric.
pub fn try_parse_integer(identifier: &str) -> Option<u64> {
    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    identifier.parse().ok()
}
