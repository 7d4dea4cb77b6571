//! Embeds `git describe` output so `--version` can name the exact build.

use std::path::Path;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Rebuild when HEAD moves or refs change.
fn watch_git_dir(git_dir: &Path) {
    for entry in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
        let path = git_dir.join(entry);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        watch_git_dir(Path::new(&git_dir));
    }

    // Outside a checkout (e.g. a crates.io tarball) fall back to the package version
    let info = git(&["describe", "--always", "--tags", "--long", "--dirty"])
        .unwrap_or_else(|| format!("v{}", env!("CARGO_PKG_VERSION")));
    println!("cargo:rustc-env=LOVAI_GIT_INFO={info}");
}
