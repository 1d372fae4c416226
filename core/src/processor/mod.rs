pub mod jpg;
pub mod png;

use image::DynamicImage;

use crate::error::EditError;
use crate::format::ImageFormat;

use self::jpg::JpgProcessor;
use self::png::PngProcessor;

/// Codec path for one on-disk format.
pub trait ImageProcessor: Send + Sync {
    fn format(&self) -> ImageFormat;

    /// Quality used for thumbnails when the caller gives none.
    fn default_quality(&self) -> u8;

    /// Quality used when re-encoding a full image (grayscale).
    fn codec_default_quality(&self) -> u8;

    fn max_quality(&self) -> u8;

    fn encode(&self, img: &DynamicImage, quality: u8) -> Result<Vec<u8>, EditError>;

    fn decode(&self, input: &[u8]) -> Result<DynamicImage, EditError> {
        let codec = self
            .format()
            .codec()
            .ok_or_else(|| EditError::UnsupportedFormat(self.format().as_str().to_string()))?;
        image::load_from_memory_with_format(input, codec)
            .map_err(|e| EditError::Decode(e.to_string()))
    }
}

/// Pick the codec path for a classified format.
pub fn processor_for(format: ImageFormat) -> Result<&'static dyn ImageProcessor, EditError> {
    match format {
        ImageFormat::Jpeg => Ok(&JpgProcessor),
        ImageFormat::Png => Ok(&PngProcessor),
        ImageFormat::Unsupported => Err(EditError::UnsupportedFormat(format.as_str().to_string())),
    }
}
