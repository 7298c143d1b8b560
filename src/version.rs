//! Engine version stamped on every [`Analysis`](crate::Analysis).
//!
//! Scores depend on the built-in lexicon and default weights, which change
//! between builds, so stored output carries the exact build it came from.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");
const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

/// Engine version: `{version}+g{sha}`, with `.dirty` appended for builds
/// from a modified tree.
///
/// Falls back to the bare package version when the build had no git
/// metadata. Shown by `stancemeter --version` and recorded in
/// [`Analysis::version`](crate::Analysis::version).
pub fn version_string() -> String {
    match GIT_SHA.and_then(short_sha) {
        Some(sha) => {
            let dirty = if GIT_DIRTY == Some("true") { ".dirty" } else { "" };
            format!("{PKG_VERSION}+g{sha}{dirty}")
        }
        None => PKG_VERSION.to_string(),
    }
}

/// First seven hex digits of a commit id; placeholders are rejected.
fn short_sha(sha: &str) -> Option<&str> {
    let short = sha.get(..7)?;
    short.chars().all(|c| c.is_ascii_hexdigit()).then_some(short)
}
