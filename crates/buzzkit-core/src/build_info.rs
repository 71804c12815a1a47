//! What was built, from where, and how.
//!
//! The build script captures these at compile time; `buzzkit version`
//! prints them as a single line or, with `--json`, as a [`BuildInfo`].

use std::fmt;

use serde::Serialize;

/// Short git commit hash, or `"unknown"` outside a checkout.
pub const GIT_HASH: &str = env!("BUZZKIT_GIT_HASH");

/// Whether the checkout had uncommitted changes to tracked files.
pub const GIT_DIRTY: bool = option_env!("BUZZKIT_GIT_DIRTY").is_some();

/// Seconds since the Unix epoch when the build script ran.
pub const BUILD_TIMESTAMP: &str = env!("BUZZKIT_BUILD_TIMESTAMP");

/// Cargo profile family: `debug` or `release`.
pub const BUILD_PROFILE: &str = env!("BUZZKIT_BUILD_PROFILE");

/// `rustc --version` of the compiler that built this crate.
pub const RUSTC_VERSION: &str = env!("BUZZKIT_RUSTC_VERSION");

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build metadata for this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_dirty: bool,
    pub profile: &'static str,
    pub built_at: u64,
    pub rustc: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_hash: GIT_HASH,
            git_dirty: GIT_DIRTY,
            profile: BUILD_PROFILE,
            built_at: BUILD_TIMESTAMP.parse().unwrap_or_default(),
            rustc: RUSTC_VERSION,
        }
    }
}

/// `0.1.0 (abc1234def, release)`, with `-dirty` after the hash when the
/// tree had local changes.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dirty = if self.git_dirty { "-dirty" } else { "" };
        write!(f, "{} ({}{dirty}, {})", self.version, self.git_hash, self.profile)
    }
}

/// Version line printed by `buzzkit version`.
pub fn version_string() -> String {
    BuildInfo::current().to_string()
}
