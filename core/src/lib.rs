//! Square thumbnail cropping and grayscale conversion for JPEG and PNG files.

pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod io;
pub mod processor;
pub mod transform;

pub use config::CropConfig;
pub use editor::ImageEditor;
pub use error::{EditError, ErrorKind, Succeeded};
pub use format::ImageFormat;
