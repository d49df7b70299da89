use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ResizeError, Result};

/// Creates `dir` if it does not exist yet. An existing directory is reused.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ResizeError::fs(dir, "create output directory", e))
}

/// Same file name as `input`, placed under `output_dir`.
pub fn output_path_for(output_dir: &Path, input: &Path) -> PathBuf {
    match input.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_is_idempotent() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("resized");

        prepare_output_dir(&output_dir)?;
        prepare_output_dir(&output_dir)?;

        assert!(output_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_prepare_fails_on_file_collision() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("resized");
        fs::write(&output_dir, b"not a directory").unwrap();

        let result = prepare_output_dir(&output_dir);
        assert!(matches!(result, Err(ResizeError::FileSystem { .. })));
    }

    #[test]
    fn test_output_path_keeps_file_name() {
        let output = output_path_for(Path::new("photos/resized"), Path::new("photos/b.PNG"));
        assert_eq!(output, Path::new("photos/resized/b.PNG"));
    }
}
