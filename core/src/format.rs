use std::path::Path;

/// Extensions accepted by the editor, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Unsupported,
}

/// Last `.`-separated segment of the path string, `None` if there is no `.` at all.
///
/// The whole path is split, not just the file name, so `"archive.d/photo"`
/// yields `"d/photo"` (which then classifies as unsupported).
pub fn file_extension(path: &Path) -> Option<&str> {
    let s = path.to_str()?;
    s.rsplit_once('.').map(|(_, ext)| ext)
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "png" => ImageFormat::Png,
            _ => ImageFormat::Unsupported,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        file_extension(path)
            .map(Self::from_extension)
            .unwrap_or(ImageFormat::Unsupported)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ImageFormat::Unsupported)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Unsupported => "unsupported",
        }
    }

    /// Codec used to decode and encode files of this format.
    pub fn codec(&self) -> Option<image::ImageFormat> {
        match self {
            ImageFormat::Jpeg => Some(image::ImageFormat::Jpeg),
            ImageFormat::Png => Some(image::ImageFormat::Png),
            ImageFormat::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("thisIsAnImage.jpg")), Some("jpg"));
        assert_eq!(file_extension(Path::new("archive.tar.png")), Some("png"));
        assert_eq!(file_extension(Path::new("noext")), None);
        assert_eq!(file_extension(Path::new("trailing.")), Some(""));
    }

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("JPG"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("jpeg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("Png"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("gif"), ImageFormat::Unsupported);
        assert_eq!(ImageFormat::from_extension(""), ImageFormat::Unsupported);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("/tmp/a.jpeg")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("noext")), ImageFormat::Unsupported);
        assert_eq!(ImageFormat::from_path(Path::new("dir.v2/photo")), ImageFormat::Unsupported);
    }

    #[test]
    fn test_supported_extensions_classify() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(ImageFormat::from_extension(ext).is_supported(), "{ext}");
        }
        assert!(!ImageFormat::Unsupported.is_supported());
        assert!(ImageFormat::Unsupported.codec().is_none());
    }
}
