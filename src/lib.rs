//! # lfs-guard
//!
//! A pre-commit check that every file tracked by git is either plain text or
//! stored with Git LFS.
//!
//! ## Usage
//!
//! ```bash
//! # From anywhere inside the working tree
//! lfs-guard
//! ```
//!
//! Exit status is `0` when the repository is clean, `1` when untracked binary
//! files were found, and `2` when the check itself could not run (for example
//! outside a repository, or when `git` is not installed).
//!
//! As a [pre-commit](https://pre-commit.com) local hook:
//!
//! ```yaml
//! - repo: local
//!   hooks:
//!     - id: lfs-guard
//!       name: binary files must use Git LFS
//!       entry: lfs-guard
//!       language: system
//!       pass_filenames: false
//! ```
//!
//! ## How It Works
//!
//! 1. `git ls-files -z` lists every tracked path.
//! 2. `.gitattributes`, `.gitignore`, `.pre-commit-config.yaml` and anything
//!    under `.github/` are skipped.
//! 3. `git check-attr -z filter -- <path>` is asked for the filter driver. A
//!    value of exactly `lfs` passes.
//! 4. Otherwise the first 1024 bytes are read, a UTF-8 BOM is dropped, and the
//!    rest must decode as UTF-8.
//! 5. Anything left is reported, with the commands needed to move it to LFS.
//!
//! Step 4 is a heuristic. Binary formats whose leading bytes happen to be valid
//! UTF-8 pass as text.
//!
//! ## Logging
//!
//! Set `LFS_GUARD_LOG` to a `tracing` filter (`debug`, `lfs_guard=trace`, ...)
//! to see per-file decisions on stderr.
//!
//! ## Module Overview
//!
//! - [`git`] - Repository discovery and the [`Vcs`] capability
//! - [`classify`] - Text/binary heuristic
//! - [`check`] - The scan pipeline
//! - [`report`] - Output formatting and exit codes
//! - [`config`] - Exemptions and check constants
//! - [`error`] - Error types

pub mod check;
pub mod classify;
pub mod config;
pub mod error;
pub mod git;
pub mod report;

use std::path::Path;

pub use check::Checker;
pub use classify::Classification;
pub use config::{CheckConfig, ExemptionSet};
pub use error::{LfsGuardError, Result};
pub use git::{GitCli, GitRepo, Vcs};
pub use report::Report;

/// Check the repository containing `path` with the default configuration.
pub fn check_repository(path: impl AsRef<Path>) -> Result<Report> {
    let repo = GitRepo::open(path)?;
    let vcs = repo.cli()?;
    let config = CheckConfig::default();

    Checker::new(&vcs, vcs.root(), &config).run()
}
