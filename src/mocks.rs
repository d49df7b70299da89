use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::errors::{ResizeError, Result};
use crate::geometry::Geometry;
use crate::traits::ConversionTool;

/// A recorded `convert` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionCall {
    pub input: PathBuf,
    pub output: PathBuf,
    pub geometry: Geometry,
}

/// Test double that records calls instead of converting.
///
/// Files whose name was registered with [`MockConversionTool::fail_on`] fail
/// with `ToolUnavailable`; every other call writes the input's file name into
/// the output so overwrites can be observed.
#[derive(Debug, Default)]
pub struct MockConversionTool {
    calls: Mutex<Vec<ConversionCall>>,
    failing: Mutex<HashSet<OsString>>,
}

impl MockConversionTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(self, file_name: &str) -> Self {
        self.failing.lock().insert(OsString::from(file_name));
        self
    }

    pub fn calls(&self) -> Vec<ConversionCall> {
        self.calls.lock().clone()
    }
}

impl ConversionTool for MockConversionTool {
    fn convert(&self, input: &Path, output: &Path, geometry: &Geometry) -> Result<()> {
        self.calls.lock().push(ConversionCall {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            geometry: *geometry,
        });

        let file_name = input.file_name().unwrap_or_default();
        if self.failing.lock().contains(file_name) {
            return Err(ResizeError::ToolUnavailable {
                program: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock failure"),
            });
        }

        fs::write(output, file_name.as_encoded_bytes())
            .map_err(|e| ResizeError::fs(output, "write mock output", e))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mock_records_and_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mock = MockConversionTool::new().fail_on("bad.jpg");
        let geometry = Geometry::default();

        let good = temp_dir.path().join("good.jpg");
        let out = temp_dir.path().join("out.jpg");
        assert!(mock.convert(&good, &out, &geometry).is_ok());
        assert!(mock
            .convert(&temp_dir.path().join("bad.jpg"), &out, &geometry)
            .is_err());

        assert_eq!(mock.calls().len(), 2);
        assert_eq!(fs::read(&out).unwrap(), b"good.jpg");
    }
}
