//! # Scan Pipeline
//!
//! Walks every tracked path in index order. Exempt paths are skipped, the rest
//! are classified, and untracked binaries are collected into a [`Report`].
//!
//! ```text
//! tracked paths → exempt? → filter=lfs? → text prefix? → violation
//! ```

use crate::classify::{classify, Classification};
use crate::config::CheckConfig;
use crate::error::Result;
use crate::git::Vcs;
use crate::report::Report;
use std::path::Path;
use tracing::{debug, info};

/// Runs a scan against a [`Vcs`] whose paths are relative to `root`.
pub struct Checker<'a> {
    vcs: &'a dyn Vcs,
    root: &'a Path,
    config: &'a CheckConfig,
}

impl<'a> Checker<'a> {
    pub fn new(vcs: &'a dyn Vcs, root: &'a Path, config: &'a CheckConfig) -> Self {
        Self { vcs, root, config }
    }

    /// Scan all tracked paths. Stops at the first version-control failure.
    pub fn run(&self) -> Result<Report> {
        let paths = self.vcs.tracked_paths()?;
        let mut violations = Vec::new();
        let mut exempt = 0usize;

        for path in &paths {
            if self.config.exemptions.is_exempt(path) {
                debug!(%path, "exempt");
                exempt += 1;
                continue;
            }

            let class = classify(self.vcs, self.root, path, self.config)?;
            debug!(%path, ?class, "classified");

            if class == Classification::BinaryUntracked {
                violations.push(path.clone());
            }
        }

        info!(
            tracked = paths.len(),
            exempt,
            violations = violations.len(),
            "scan complete"
        );

        Ok(Report::new(violations))
    }
}
