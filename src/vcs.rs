//! Build provenance for the `build` field.
//!
//! `build.rs` asks git for the current revision and working tree state and
//! exports them as `SEMVERKIT_VCS_REVISION` / `SEMVERKIT_VCS_MODIFIED`.
//! Either may be missing (no git, not a checkout, packaged source).

use tracing::debug;

const SHORT_REVISION_LEN: usize = 7;

/// Provenance string for this build, or `""` when none is known.
pub fn commit() -> String {
    let revision = option_env!("SEMVERKIT_VCS_REVISION");
    let modified = option_env!("SEMVERKIT_VCS_MODIFIED") == Some("true");
    let described = describe(revision, modified);
    debug!(revision = ?revision, modified, described = %described, "resolved vcs provenance");
    described
}

/// Summarise a revision and working tree state.
///
/// | revision | modified | result          |
/// |----------|----------|-----------------|
/// | `abc1234def` | no   | `abc1234`       |
/// | `abc1234def` | yes  | `abc1234-dirty` |
/// | none     | yes      | `*-dirty`       |
/// | none     | no       | `""`            |
pub fn describe(revision: Option<&str>, modified: bool) -> String {
    let short = revision
        .map(|r| r.chars().take(SHORT_REVISION_LEN).collect::<String>())
        .filter(|r| !r.is_empty());

    match (short, modified) {
        (Some(rev), true) => format!("{rev}-dirty"),
        (Some(rev), false) => rev,
        (None, true) => "*-dirty".to_string(),
        (None, false) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_truncates_revision() {
        assert_eq!(
            describe(Some("5114f85e0a1b2c3d4e5f60718293a4b5c6d7e8f9"), false),
            "5114f85"
        );
        assert_eq!(describe(Some("abc"), false), "abc");
    }

    #[test]
    fn test_describe_dirty_states() {
        assert_eq!(describe(Some("5114f85e0a1b"), true), "5114f85-dirty");
        assert_eq!(describe(None, true), "*-dirty");
        assert_eq!(describe(Some(""), true), "*-dirty");
    }

    #[test]
    fn test_describe_unknown() {
        assert_eq!(describe(None, false), "");
    }

    #[test]
    fn test_commit_is_valid_build_metadata() {
        let commit = commit();
        let trimmed = commit.trim_start_matches("*-");
        assert!(trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-'));
    }
}
