use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ExtendedColorType, ImageEncoder};

use crate::error::EditError;
use crate::format::ImageFormat;
use crate::processor::ImageProcessor;

pub struct PngProcessor;

impl ImageProcessor for PngProcessor {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn default_quality(&self) -> u8 {
        0
    }

    fn codec_default_quality(&self) -> u8 {
        6
    }

    fn max_quality(&self) -> u8 {
        9
    }

    /// `level` is the zlib compression level, 0 (stored) to 9 (smallest).
    /// Keeps the gray/colour split and the alpha channel, 8 bits per sample.
    fn encode(&self, img: &DynamicImage, level: u8) -> Result<Vec<u8>, EditError> {
        let mut output = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut output,
            CompressionType::Level(level),
            FilterType::Adaptive,
        );

        let color = img.color();
        let gray = matches!(
            color,
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16
        );

        let result = match (gray, color.has_alpha()) {
            (true, false) => {
                let buf = img.to_luma8();
                let (width, height) = buf.dimensions();
                encoder.write_image(buf.as_raw(), width, height, ExtendedColorType::L8)
            }
            (true, true) => {
                let buf = img.to_luma_alpha8();
                let (width, height) = buf.dimensions();
                encoder.write_image(buf.as_raw(), width, height, ExtendedColorType::La8)
            }
            (false, false) => {
                let buf = img.to_rgb8();
                let (width, height) = buf.dimensions();
                encoder.write_image(buf.as_raw(), width, height, ExtendedColorType::Rgb8)
            }
            (false, true) => {
                let buf = img.to_rgba8();
                let (width, height) = buf.dimensions();
                encoder.write_image(buf.as_raw(), width, height, ExtendedColorType::Rgba8)
            }
        };
        result.map_err(|e| EditError::Encode(format!("Failed to encode PNG: {}", e)))?;

        log::debug!(
            "Encoded PNG {}x{} ({:?}) at level {} ({} bytes)",
            img.width(),
            img.height(),
            color,
            level,
            output.len()
        );

        Ok(output)
    }
}
