use std::path::Path;
use std::process::{Command, Stdio};

use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat, ImageReader};
use tracing::debug;

use crate::config::{Backend, Config};
use crate::errors::{ResizeError, Result};
use crate::geometry::Geometry;
use crate::traits::ConversionTool;

/// Runs `<program> <input> -resize <geometry> <output>`, one process per call.
#[derive(Debug, Clone)]
pub struct MagickTool {
    program: String,
}

impl MagickTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn command(&self, input: &Path, output: &Path, geometry: &Geometry) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(input)
            .arg("-resize")
            .arg(geometry.to_string())
            .arg(output)
            .stdin(Stdio::null());
        command
    }
}

impl Default for MagickTool {
    fn default() -> Self {
        Self::new("magick")
    }
}

impl ConversionTool for MagickTool {
    fn convert(&self, input: &Path, output: &Path, geometry: &Geometry) -> Result<()> {
        let result = self
            .command(input, output, geometry)
            .output()
            .map_err(|e| ResizeError::ToolUnavailable {
                program: self.program.clone(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(ResizeError::ToolFailed {
                program: self.program.clone(),
                input: input.to_path_buf(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        if !stderr.trim().is_empty() {
            debug!("{} on {}: {}", self.program, input.display(), stderr.trim());
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Resizes in-process with the `image` crate, writing the format implied by
/// the output extension.
#[derive(Debug, Clone, Copy)]
pub struct NativeTool {
    filter: FilterType,
}

impl NativeTool {
    pub const fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    fn resize(&self, img: DynamicImage, geometry: &Geometry) -> DynamicImage {
        let (width, height) = img.dimensions();
        let (target_width, target_height) = geometry.fit(width, height);
        if (target_width, target_height) == (width, height) {
            return img;
        }
        debug!("{}x{} -> {}x{}", width, height, target_width, target_height);
        img.resize_exact(target_width, target_height, self.filter)
    }
}

impl Default for NativeTool {
    fn default() -> Self {
        Self::new(FilterType::Lanczos3)
    }
}

impl ConversionTool for NativeTool {
    fn convert(&self, input: &Path, output: &Path, geometry: &Geometry) -> Result<()> {
        // Content decides the decoder; a PNG named `.jpg` still opens.
        let img = ImageReader::open(input)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ResizeError::fs(input, "open input image", e))?
            .decode()
            .map_err(|e| ResizeError::image(input, "decode", e))?;
        let format = ImageFormat::from_path(output)
            .map_err(|e| ResizeError::image(output, "detect format", e))?;

        let resized = self.resize(img, geometry);
        // The JPEG encoder has no alpha channel.
        let resized = if format == ImageFormat::Jpeg && resized.color().has_alpha() {
            DynamicImage::ImageRgb8(resized.to_rgb8())
        } else {
            resized
        };

        resized
            .save_with_format(output, format)
            .map_err(|e| ResizeError::image(output, "encode", e))
    }

    fn name(&self) -> &str {
        "native"
    }
}

/// The tool selected by `config.backend`.
pub fn tool_for(config: &Config) -> Box<dyn ConversionTool> {
    match config.backend {
        Backend::Magick => Box::new(MagickTool::new(config.program.clone())),
        Backend::Native => Box::new(NativeTool::default()),
    }
}
