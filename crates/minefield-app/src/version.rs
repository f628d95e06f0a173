//! Version string shown in logs and the status line.

/// Returns `pkg_version (git_hash)`, or `pkg_version (unknown)` outside a
/// git checkout.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let dirty = match option_env!("VERGEN_GIT_DIRTY") {
        Some("true") => "-dirty",
        _ => "",
    };

    format!("{pkg_version} ({git_hash}{dirty})")
}
