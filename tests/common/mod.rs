use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// PNG signature plus the start of an IHDR chunk; not valid UTF-8.
#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x10\0\0\0\x10\x08\x06";

/// Create a new temporary git repository with user config set.
pub fn create_git_repo() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");

    git(temp.path(), &["init"]);
    git(temp.path(), &["config", "user.email", "test@example.com"]);
    git(temp.path(), &["config", "user.name", "Test User"]);

    temp
}

/// Run git in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Write `content` to `path` inside the repository and stage it.
pub fn add_file(repo: &Path, path: &str, content: &[u8]) {
    let full = repo.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(&full, content).expect("failed to write file");
    git(repo, &["add", "--", path]);
}

/// Convenience helper for spawning the lfs-guard binary via assert_cmd.
pub fn lfs_guard_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("lfs-guard");
    cmd.env_remove("LFS_GUARD_LOG");
    cmd
}
