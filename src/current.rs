//! This package's own version.

use crate::vcs;
use crate::version::Version;

pub const MAJOR: u64 = 0;
pub const MINOR: u64 = 3;
pub const PATCH: u64 = 0;

/// The version of semverkit itself, with VCS provenance as build metadata.
pub fn current() -> Version {
    Version::new(MAJOR, MINOR, PATCH).with_build(vcs::commit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_package_version() {
        assert_eq!(current().short(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_current_build_comes_from_vcs() {
        assert_eq!(current().build, vcs::commit());
        assert!(!current().is_pre_release());
    }
}
