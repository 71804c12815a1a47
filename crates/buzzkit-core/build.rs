use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trimmed stdout of `program args`, or `None` if it could not run or failed.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=BUZZKIT_{key}={value}");
}

fn main() {
    let hash = capture("git", &["rev-parse", "--short=10", "HEAD"])
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "unknown".into());
    emit("GIT_HASH", &hash);

    // Only set for a checkout with uncommitted changes.
    if capture("git", &["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty())
    {
        emit("GIT_DIRTY", "1");
    }

    let built_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    emit("BUILD_TIMESTAMP", &built_at.to_string());

    emit("BUILD_PROFILE", &env::var("PROFILE").unwrap_or_else(|_| "unknown".into()));

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let rustc_version = capture(&rustc, &["--version"]).unwrap_or_else(|| "unknown".into());
    emit("RUSTC_VERSION", &rustc_version);

    for path in ["../../.git/HEAD", "../../.git/refs", "../../.git/index"] {
        println!("cargo:rerun-if-changed={path}");
    }
}
