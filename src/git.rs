//! # Git Integration
//!
//! Repository discovery goes through libgit2. Listing tracked paths and
//! resolving attributes goes through the `git` executable, so the answers
//! match what `git` itself reports, including system and global attribute
//! files and any installed LFS configuration.
//!
//! The rest of the crate only sees the [`Vcs`] trait. Tests swap in an
//! in-memory implementation.

use crate::error::{LfsGuardError, Result};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Attribute value `git check-attr` prints when nothing assigns the attribute.
const UNSPECIFIED: &str = "unspecified";

/// The two questions the check asks of version control.
pub trait Vcs {
    /// Every tracked path, relative to the repository root, in index order.
    fn tracked_paths(&self) -> Result<Vec<String>>;

    /// The resolved value of attribute `name` for `path`, or `None` when the
    /// attribute is unspecified.
    fn attribute(&self, path: &str, name: &str) -> Result<Option<String>>;
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path).map_err(discover_error)?;
        Ok(Self { repo })
    }

    /// Get repository root path
    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(LfsGuardError::NoWorkdir)
    }

    /// A `git` command runner rooted at the working tree
    pub fn cli(&self) -> Result<GitCli> {
        Ok(GitCli::new(self.workdir()?))
    }
}

/// Only "no repository found" becomes [`LfsGuardError::NotInGitRepo`].
/// Ownership, permission and corruption errors keep libgit2's message.
fn discover_error(err: git2::Error) -> LfsGuardError {
    if err.code() == ErrorCode::NotFound {
        LfsGuardError::NotInGitRepo
    } else {
        LfsGuardError::Git(err)
    }
}

/// [`Vcs`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, "running");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|source| LfsGuardError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LfsGuardError::Command {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl Vcs for GitCli {
    fn tracked_paths(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["ls-files", "-z"])?;
        Ok(parse_ls_files(&stdout))
    }

    fn attribute(&self, path: &str, name: &str) -> Result<Option<String>> {
        let stdout = self.run(&["check-attr", "-z", name, "--", path])?;
        parse_check_attr(&stdout, name)
    }
}

/// Split `git ls-files -z` output into paths.
fn parse_ls_files(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match std::str::from_utf8(entry) {
            Ok(path) => path.to_string(),
            Err(_) => {
                let lossy = String::from_utf8_lossy(entry).into_owned();
                warn!(path = %lossy, "tracked path is not valid UTF-8");
                lossy
            }
        })
        .collect()
}

/// Pull the value of `name` out of `git check-attr -z` output, which is a
/// sequence of NUL-terminated `<path> <attribute> <value>` triples.
fn parse_check_attr(stdout: &[u8], name: &str) -> Result<Option<String>> {
    let mut fields: Vec<&[u8]> = stdout.split(|b| *b == 0).collect();
    if fields.last().is_some_and(|last| last.is_empty()) {
        fields.pop();
    }

    if fields.len() % 3 != 0 {
        return Err(LfsGuardError::Other(format!(
            "Unexpected `git check-attr` output: {:?}",
            String::from_utf8_lossy(stdout)
        )));
    }

    let value = fields
        .chunks_exact(3)
        .find(|triple| triple[1] == name.as_bytes())
        .map(|triple| String::from_utf8_lossy(triple[2]).into_owned());

    Ok(value.filter(|v| v != UNSPECIFIED))
}
