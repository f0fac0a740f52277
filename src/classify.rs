//! # Content Classification
//!
//! Sorts each tracked path into one of the [`Classification`] states.
//!
//! The text test is a heuristic: sample the first [`PREFIX_LEN`] bytes, drop
//! a UTF-8 byte order mark, and try a strict UTF-8 decode. Content that
//! decodes is text, whatever its real format. Files that cannot be opened or
//! read are treated as binary so they get reported rather than skipped.
//!
//! [`PREFIX_LEN`]: crate::config::PREFIX_LEN

use crate::config::CheckConfig;
use crate::error::Result;
use crate::git::Vcs;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    LfsTracked,
    Text,
    BinaryUntracked,
}

/// Classify one tracked path. `root` is the directory `path` is relative to.
///
/// Only a failure to query version control is an error. Read and decode
/// failures both yield [`Classification::BinaryUntracked`].
pub fn classify(
    vcs: &dyn Vcs,
    root: &Path,
    path: &str,
    config: &CheckConfig,
) -> Result<Classification> {
    let value = vcs.attribute(path, config.attribute)?;
    if value.as_deref() == Some(config.driver) {
        return Ok(Classification::LfsTracked);
    }

    if is_probably_text(&root.join(path), config.prefix_len) {
        return Ok(Classification::Text);
    }

    Ok(Classification::BinaryUntracked)
}

/// True if the first `limit` bytes of the file at `path` look like text.
pub fn is_probably_text(path: &Path, limit: usize) -> bool {
    match read_prefix(path, limit) {
        Ok(prefix) => looks_like_text(&prefix),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable, treating as binary");
            false
        }
    }
}

/// True if `bytes`, minus a leading BOM, is valid UTF-8.
pub fn looks_like_text(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes).is_ok()
}

/// Read at most `limit` bytes from the start of the file.
pub fn read_prefix(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}
