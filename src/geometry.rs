use std::fmt;
use std::str::FromStr;

use crate::errors::{ResizeError, Result};

/// A bounding box in ImageMagick's `WxH` notation, optionally suffixed with `>`
/// to only ever shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub shrink_only: bool,
}

impl Geometry {
    pub const fn new(width: u32, height: u32, shrink_only: bool) -> Self {
        Self {
            width,
            height,
            shrink_only,
        }
    }

    pub const fn fits(&self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }

    /// Target dimensions for an image of `width`x`height` scaled proportionally
    /// into the box.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 || (self.shrink_only && self.fits(width, height)) {
            return (width, height);
        }

        let ratio = f64::min(
            f64::from(self.width) / f64::from(width),
            f64::from(self.height) / f64::from(height),
        );
        let scale = |side: u32, bound: u32| {
            ((f64::from(side) * ratio).round() as u32).clamp(1, bound)
        };
        (scale(width, self.width), scale(height, self.height))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(512, 512, true)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if self.shrink_only {
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for Geometry {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ResizeError::Geometry {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (dims, shrink_only) = match trimmed.strip_suffix('>') {
            Some(dims) => (dims, true),
            None => (trimmed, false),
        };
        let (width, height) = dims
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("expected WxH"))?;
        let width: u32 = width.parse().map_err(|_| invalid("width is not a number"))?;
        let height: u32 = height
            .parse()
            .map_err(|_| invalid("height is not a number"))?;
        if width == 0 || height == 0 {
            return Err(invalid("width and height must be positive"));
        }

        Ok(Self::new(width, height, shrink_only))
    }
}
