use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{ResizeError, Result};

pub const CANDIDATE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "bmp"];

pub fn is_candidate(path: &Path) -> bool {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        CANDIDATE_EXTENSIONS.contains(&extension.to_lowercase().as_str())
    } else {
        false
    }
}

/// Direct entries of `dir` with a recognized image extension, in listing order.
///
/// Matching is by name only, so a subdirectory called `x.png` is a candidate
/// too. Failing to list `dir` itself is an error; unreadable entries are skipped.
pub fn collect_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(ResizeError::fs(dir, "list input directory", e.into()));
            }
            Err(e) => {
                debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if is_candidate(entry.path()) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
