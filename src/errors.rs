use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Structured error types for the batch resizer.
///
/// Each variant carries the path or program it concerns so that the driver can
/// log a per-file failure and move on without parsing error strings.
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid geometry `{input}`: {reason}")]
    Geometry { input: String, reason: String },

    #[error("Conversion tool `{program}` could not be started")]
    ToolUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion tool `{program}` exited with {status} for {input:?}: {stderr}")]
    ToolFailed {
        program: String,
        input: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Image processing error: {operation} failed (file: {path:?})")]
    ImageProcessing {
        path: PathBuf,
        operation: String,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ResizeError>;

impl ResizeError {
    pub(crate) fn fs(path: impl Into<PathBuf>, operation: &str, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            operation: operation.to_string(),
            source,
        }
    }

    pub(crate) fn image(
        path: impl Into<PathBuf>,
        operation: &str,
        source: image::ImageError,
    ) -> Self {
        Self::ImageProcessing {
            path: path.into(),
            operation: operation.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_message() {
        let err = ResizeError::fs(
            "resized",
            "create output directory",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Filesystem error: create output directory failed for \"resized\""
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_geometry_error_message() {
        let err = ResizeError::Geometry {
            input: "abc".to_string(),
            reason: "expected WxH".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid geometry `abc`: expected WxH");
    }
}
