// Captures VCS provenance at build time for `semverkit::vcs::commit`.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    if let Some(revision) = git(&["rev-parse", "HEAD"]).filter(|r| !r.is_empty()) {
        println!("cargo:rustc-env=SEMVERKIT_VCS_REVISION={revision}");
    }

    // Only report a modified tree when git actually answered.
    if let Some(status) = git(&["status", "--porcelain"]) {
        let modified = !status.is_empty();
        println!("cargo:rustc-env=SEMVERKIT_VCS_MODIFIED={modified}");
    }
}
