use std::path::{Path, PathBuf};

use crate::config::{CropConfig, GRAYSCALE_CONTRAST_LEVEL};
use crate::error::EditError;
use crate::format::{self, ImageFormat, SUPPORTED_EXTENSIONS};
use crate::io::{read_file, write_file};
use crate::processor::{processor_for, ImageProcessor};
use crate::transform::{crop_square, grayscale_contrast};

/// Edits a single JPEG or PNG source file, writing each result to a new path.
///
/// The source is never modified. Output is always in the source's format.
#[derive(Debug, Clone)]
pub struct ImageEditor {
    source: PathBuf,
}

impl ImageEditor {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn supported_formats(&self) -> &'static [&'static str] {
        SUPPORTED_EXTENSIONS
    }

    /// Text after the last `.` of the source path, `None` if it has none.
    pub fn file_extension(&self) -> Option<&str> {
        format::file_extension(&self.source)
    }

    pub fn format(&self) -> ImageFormat {
        ImageFormat::from_path(&self.source)
    }

    /// Crop to a top-left square and resample it to `size` x `size`.
    ///
    /// `quality` is 0-100 for JPEG and a compression level 0-9 for PNG;
    /// `None` picks the format default.
    pub fn crop(
        &self,
        dest: impl AsRef<Path>,
        size: u32,
        quality: Option<u8>,
    ) -> Result<(), EditError> {
        self.crop_with(dest, &CropConfig { size, quality })
    }

    pub fn crop_with(&self, dest: impl AsRef<Path>, config: &CropConfig) -> Result<(), EditError> {
        let dest = dest.as_ref();
        let processor = self.processor()?;
        let quality = config.resolve(processor)?;

        let img = self.load(processor)?;
        let cropped = crop_square(&img, config.size);
        drop(img);

        let encoded = processor.encode(&cropped, quality)?;
        write_file(dest, &encoded)?;

        log::debug!(
            "Cropped {} -> {} ({}px, {} quality {})",
            self.source.display(),
            dest.display(),
            config.size,
            processor.format().as_str(),
            quality
        );
        Ok(())
    }

    /// Write a grayscale, contrast-boosted copy of the source to `dest`.
    pub fn to_grayscale(&self, dest: impl AsRef<Path>) -> Result<(), EditError> {
        let dest = dest.as_ref();
        let processor = self.processor()?;

        let img = self.load(processor)?;
        let gray = grayscale_contrast(&img, GRAYSCALE_CONTRAST_LEVEL);
        drop(img);

        let encoded = processor.encode(&gray, processor.codec_default_quality())?;
        write_file(dest, &encoded)?;

        log::debug!("Grayscale {} -> {}", self.source.display(), dest.display());
        Ok(())
    }

    fn processor(&self) -> Result<&'static dyn ImageProcessor, EditError> {
        let format = self.format();
        if !format.is_supported() {
            log::warn!("Unsupported image type: {}", self.source.display());
            return Err(EditError::UnsupportedFormat(
                self.file_extension().unwrap_or("none").to_string(),
            ));
        }
        processor_for(format)
    }

    fn load(&self, processor: &dyn ImageProcessor) -> Result<image::DynamicImage, EditError> {
        if !self.source.is_file() {
            return Err(EditError::SourceNotFound(self.source.clone()));
        }
        let data = read_file(&self.source)?;
        processor.decode(&data)
    }
}
