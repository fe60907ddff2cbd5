use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use super::ImageDecoder;

/// Image decoding subsystem backed by the `image` crate.
///
/// Construction fails if PNG decoding was not compiled in, since level art is
/// shipped as PNG.
#[derive(Debug, Clone)]
pub struct ImageCodecs {
    formats: Vec<ImageFormat>,
}

impl ImageCodecs {
    pub fn new() -> Result<Self> {
        anyhow::ensure!(
            ImageFormat::Png.reading_enabled(),
            "PNG decoding support is not available"
        );

        let formats: Vec<ImageFormat> = ImageFormat::all()
            .filter(|f| f.reading_enabled())
            .collect();

        log::debug!("image codecs ready: {formats:?}");
        Ok(Self { formats })
    }

    /// Formats this build can decode.
    pub fn formats(&self) -> &[ImageFormat] {
        &self.formats
    }
}

impl ImageDecoder for ImageCodecs {
    fn decode(&self, path: &Path) -> Result<RgbaImage> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;
        Ok(img.to_rgba8())
    }
}
