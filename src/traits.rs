use std::path::Path;

use crate::errors::Result;
use crate::geometry::Geometry;

/// One way of turning an input image into a resized copy at `output`.
///
/// Implementations block until the output is written or the attempt failed.
pub trait ConversionTool: Send + Sync {
    fn convert(&self, input: &Path, output: &Path, geometry: &Geometry) -> Result<()>;

    /// Short name used in log lines
    fn name(&self) -> &str;
}

impl<T: ConversionTool + ?Sized> ConversionTool for Box<T> {
    fn convert(&self, input: &Path, output: &Path, geometry: &Geometry) -> Result<()> {
        (**self).convert(input, output, geometry)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
