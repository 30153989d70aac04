use crate::error::{DatasetError, Result};
use std::path::Path;

/// What `resolve_output_dir` found (or did) for the output file's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The path has no directory component; the file goes in the working dir.
    CurrentDir,
    Existing,
    Created,
}

/// Make sure the directory holding `output_path` exists, creating any
/// missing ancestors. Nothing is written on failure.
pub fn resolve_output_dir(output_path: &Path) -> Result<DirStatus> {
    let dir = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(DirStatus::CurrentDir),
    };

    if dir.is_dir() {
        return Ok(DirStatus::Existing);
    }

    tracing::info!(dir = %dir.display(), "output directory does not exist, creating it");
    std::fs::create_dir_all(dir).map_err(|source| DatasetError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(DirStatus::Created)
}
