pub mod config;
pub mod converter;
pub mod errors;
pub mod geometry;
pub mod output;
pub mod scanner;
pub mod traits;

pub mod mocks;

use std::path::PathBuf;

use tracing::{debug, info, warn};

pub use config::{Backend, Config};
pub use converter::{tool_for, MagickTool, NativeTool};
pub use errors::{ResizeError, Result};
pub use geometry::Geometry;
pub use traits::*;

/// Outcome of one pass over the input directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates: usize,
    pub converted: usize,
    pub failed: Vec<PathBuf>,
}

pub struct Resizer<T: ConversionTool> {
    tool: T,
    config: Config,
}

impl<T: ConversionTool> Resizer<T> {
    pub const fn new(tool: T, config: Config) -> Self {
        Self { tool, config }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Resizes every candidate in the input directory, one at a time.
    ///
    /// Only preparing the output directory and listing the input directory can
    /// fail the run. A file the tool fails on is logged and recorded in the
    /// summary, and the next file is processed anyway.
    pub fn run(&self) -> Result<RunSummary> {
        let output_dir = self.config.output_dir();
        output::prepare_output_dir(&output_dir)?;

        let candidates = scanner::collect_candidates(&self.config.input_dir)?;
        info!(
            "{} candidate image(s), writing to {} with {}",
            candidates.len(),
            output_dir.display(),
            self.tool.name()
        );

        let mut summary = RunSummary {
            candidates: candidates.len(),
            ..RunSummary::default()
        };

        for input in candidates {
            let output = output::output_path_for(&output_dir, &input);
            debug!("{} -> {}", input.display(), output.display());

            match self.tool.convert(&input, &output, &self.config.geometry) {
                Ok(()) => summary.converted += 1,
                Err(e) => {
                    warn!("Skipping {}: {}", input.display(), e);
                    summary.failed.push(input);
                }
            }
        }

        info!(
            "Converted {}/{} image(s)",
            summary.converted, summary.candidates
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockConversionTool;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn populate(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"x").unwrap();
        }
    }

    #[test]
    fn test_run_converts_only_candidates() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), &["a.jpg", "b.PNG", "c.txt", "notes.md"]);

        let resizer = Resizer::new(
            MockConversionTool::new(),
            Config::with_input_dir(temp_dir.path()),
        );
        let summary = resizer.run()?;

        assert_eq!(summary.candidates, 2);
        assert_eq!(summary.converted, 2);
        assert!(summary.failed.is_empty());

        let output_dir = temp_dir.path().join("resized");
        let mut outputs: Vec<_> = resizer
            .tool
            .calls()
            .into_iter()
            .map(|call| {
                assert_eq!(call.geometry, Geometry::default());
                assert_eq!(call.output.parent(), Some(output_dir.as_path()));
                call.output
            })
            .collect();
        outputs.sort();
        assert_eq!(
            outputs,
            vec![output_dir.join("a.jpg"), output_dir.join("b.PNG")]
        );
        Ok(())
    }

    #[test]
    fn test_run_twice_reuses_output_dir() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), &["a.jpg"]);
        let resizer = Resizer::new(
            MockConversionTool::new(),
            Config::with_input_dir(temp_dir.path()),
        );

        resizer.run()?;
        let summary = resizer.run()?;

        assert_eq!(summary.converted, 1);
        assert_eq!(resizer.tool.calls().len(), 2);
        Ok(())
    }

    #[test]
    fn test_failure_does_not_stop_run() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), &["a.jpg", "b.png", "c.webp"]);

        let resizer = Resizer::new(
            MockConversionTool::new().fail_on("b.png"),
            Config::with_input_dir(temp_dir.path()),
        );
        let summary = resizer.run()?;

        assert_eq!(resizer.tool.calls().len(), 3);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, vec![temp_dir.path().join("b.png")]);
        Ok(())
    }

    #[test]
    fn test_existing_output_is_overwritten() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), &["a.jpg"]);
        let output_dir = temp_dir.path().join("resized");
        fs::create_dir_all(&output_dir).unwrap();
        fs::write(output_dir.join("a.jpg"), b"stale").unwrap();

        let resizer = Resizer::new(
            MockConversionTool::new(),
            Config::with_input_dir(temp_dir.path()),
        );
        resizer.run()?;

        assert_eq!(fs::read(output_dir.join("a.jpg")).unwrap(), b"a.jpg");
        Ok(())
    }

    #[test]
    fn test_output_dir_collision_fails_run() {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), &["a.jpg", "resized"]);

        let resizer = Resizer::new(
            MockConversionTool::new(),
            Config::with_input_dir(temp_dir.path()),
        );

        assert!(matches!(
            resizer.run(),
            Err(ResizeError::FileSystem { .. })
        ));
        assert!(resizer.tool.calls().is_empty());
    }
}
