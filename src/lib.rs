//! Library root for the `semverkit` crate
//!
//! Semantic Versioning 2.0.0 version values and their precedence ordering.
//!
//! ```
//! use semverkit::{ByVersion, Version};
//!
//! let mut versions: Vec<Version> = ["1.0.0-beta", "1.0.0", "1.0.0-alpha", "0.9.0"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! ByVersion(&mut versions).sort();
//!
//! let sorted: Vec<String> = versions.iter().map(|v| v.full()).collect();
//! assert_eq!(sorted, ["0.9.0", "1.0.0-alpha", "1.0.0-beta", "1.0.0"]);
//! ```

// Core error handling
pub mod errors;

// Version model and precedence
pub mod ordering;
pub mod precedence;
pub mod version;

// Text and serde adapters
pub mod parser;
mod serde_impl;

// Build provenance & self-identification
pub mod current;
pub mod vcs;

// Configuration & CLI
pub mod cli;
pub mod config_loader;

#[cfg(test)]
mod tests {
    pub mod precedence_chain;
    pub mod test_utils;
}

pub use current::current;
pub use errors::{SemverError, SemverResult};
pub use ordering::{latest, ByPrecedence, ByVersion};
pub use version::Version;
