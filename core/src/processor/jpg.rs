use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ExtendedColorType};

use crate::error::EditError;
use crate::format::ImageFormat;
use crate::processor::ImageProcessor;

pub struct JpgProcessor;

impl ImageProcessor for JpgProcessor {
    fn format(&self) -> ImageFormat {
        ImageFormat::Jpeg
    }

    fn default_quality(&self) -> u8 {
        75
    }

    fn codec_default_quality(&self) -> u8 {
        75
    }

    fn max_quality(&self) -> u8 {
        100
    }

    /// Gray images are written as single-channel JPEG, everything else as RGB.
    /// Alpha is dropped.
    fn encode(&self, img: &DynamicImage, quality: u8) -> Result<Vec<u8>, EditError> {
        // The encoder's lowest setting is 1.
        let quality = quality.clamp(1, 100);

        let mut output = Vec::new();
        let mut cursor = Cursor::new(&mut output);
        let mut encoder = JpegEncoder::new_with_quality(&mut cursor, quality);

        let result = match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => {
                let luma = img.to_luma8();
                encoder.encode(luma.as_raw(), luma.width(), luma.height(), ExtendedColorType::L8)
            }
            _ => {
                let rgb = img.to_rgb8();
                encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
            }
        };
        result.map_err(|e| EditError::Encode(format!("Failed to encode JPEG: {}", e)))?;

        log::debug!(
            "Encoded JPEG {}x{} at quality {} ({} bytes)",
            img.width(),
            img.height(),
            quality,
            output.len()
        );

        Ok(output)
    }
}
