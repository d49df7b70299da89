use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::geometry::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Shell out to ImageMagick once per file
    Magick,
    /// Resize in-process with the `image` crate
    Native,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory whose direct entries are resized
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// Name of the output subdirectory created inside the input directory
    #[arg(short, long, default_value = "resized")]
    pub output_dir_name: String,

    /// Bounding box, `>` suffix to never enlarge
    #[arg(short, long, default_value = "512x512>", value_parser = check_geometry)]
    pub geometry: Geometry,

    #[arg(short, long, value_enum, default_value_t = Backend::Magick)]
    pub backend: Backend,

    /// External program used by the magick backend
    #[arg(long, default_value = "magick")]
    pub program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir_name: "resized".to_string(),
            geometry: Geometry::default(),
            backend: Backend::Magick,
            program: "magick".to_string(),
        }
    }
}

impl Config {
    pub fn with_input_dir(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.input_dir.join(&self.output_dir_name)
    }
}

fn check_geometry(s: &str) -> Result<Geometry, String> {
    s.parse::<Geometry>().map_err(|e| e.to_string())
}
