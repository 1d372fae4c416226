use crate::error::EditError;
use crate::processor::ImageProcessor;

/// Side length of the square thumbnail when none is given.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 250;

/// Largest accepted thumbnail side.
pub const MAX_THUMBNAIL_SIZE: u32 = 4096;

/// Contrast boost applied after the grayscale transform, on the libgd
/// `IMG_FILTER_CONTRAST` scale.
pub const GRAYSCALE_CONTRAST_LEVEL: i32 = 202;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropConfig {
    /// Side of the output square in pixels
    pub size: u32,
    /// JPEG: quality 0-100 (worst to best). PNG: compression level 0-9.
    /// `None` uses the format default (75 for JPEG, 0 for PNG).
    pub quality: Option<u8>,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_THUMBNAIL_SIZE,
            quality: None,
        }
    }
}

impl CropConfig {
    pub fn new(size: u32, quality: u8) -> Self {
        Self {
            size,
            quality: Some(quality),
        }
    }

    /// Check the parameters against `processor` and return the effective quality.
    pub fn resolve(&self, processor: &dyn ImageProcessor) -> Result<u8, EditError> {
        if self.size == 0 {
            return Err(EditError::InvalidParameter(
                "thumbnail size must be at least 1 pixel".into(),
            ));
        }
        if self.size > MAX_THUMBNAIL_SIZE {
            return Err(EditError::InvalidParameter(format!(
                "thumbnail size {} exceeds {} pixels",
                self.size, MAX_THUMBNAIL_SIZE
            )));
        }

        let quality = self.quality.unwrap_or_else(|| processor.default_quality());
        if quality > processor.max_quality() {
            return Err(EditError::InvalidParameter(format!(
                "{} quality {} out of range 0-{}",
                processor.format().as_str(),
                quality,
                processor.max_quality()
            )));
        }

        Ok(quality)
    }
}
