//! Strict text to [`Version`] parser.
//!
//! Accepts exactly `MAJOR "." MINOR "." PATCH ["-" PRERELEASE] ["+" BUILD]`.
//! No surrounding whitespace, no `v` prefix, no partial versions. The first
//! problem found is returned; there is no recovery.

use std::str::FromStr;

use crate::errors::{SemverError, SemverResult};
use crate::version::Version;

const PRE_RELEASE: &str = "pre-release";
const BUILD: &str = "build metadata";

/// Parse a version string.
pub fn parse(input: &str) -> SemverResult<Version> {
    if input.is_empty() {
        return Err(SemverError::Empty);
    }

    // Build metadata starts at the first '+'; pre-release at the first '-'
    // before it. Hyphens inside the build are part of the build.
    let (rest, build) = match input.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (input, None),
    };
    let (core, pre_release) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let fields: Vec<&str> = core.split('.').collect();
    if fields.len() != 3 {
        return Err(SemverError::core_field_count(input, fields.len()));
    }
    let major = parse_core_field("major", fields[0])?;
    let minor = parse_core_field("minor", fields[1])?;
    let patch = parse_core_field("patch", fields[2])?;

    let pre_release = match pre_release {
        Some(pre) => {
            validate_identifiers(PRE_RELEASE, pre)?;
            pre.to_string()
        }
        None => String::new(),
    };
    let build = match build {
        Some(build) => {
            validate_identifiers(BUILD, build)?;
            build.to_string()
        }
        None => String::new(),
    };

    Ok(Version {
        major,
        minor,
        patch,
        pre_release,
        build,
    })
}

fn parse_core_field(field: &str, value: &str) -> SemverResult<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SemverError::malformed_integer(field, value));
    }
    if value.len() > 1 && value.starts_with('0') {
        return Err(SemverError::leading_zero(field, value));
    }
    value
        .parse()
        .map_err(|_| SemverError::malformed_integer(field, value))
}

fn validate_identifiers(part: &str, identifiers: &str) -> SemverResult<()> {
    for identifier in identifiers.split('.') {
        if identifier.is_empty() {
            return Err(SemverError::empty_identifier(part));
        }
        if !identifier
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(SemverError::invalid_character(part, identifier));
        }
        // Leading zeros only matter for numeric pre-release identifiers.
        if part == PRE_RELEASE
            && identifier.len() > 1
            && identifier.starts_with('0')
            && identifier.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(SemverError::leading_zero(part, identifier));
        }
    }
    Ok(())
}

impl Version {
    /// Parse a version string. See [`parse`].
    pub fn parse(input: &str) -> SemverResult<Version> {
        parse(input)
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
