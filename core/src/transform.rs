use image::imageops::FilterType;
use image::{DynamicImage, GrayAlphaImage, GrayImage, Luma, LumaA, Rgb, Rgba};

/// Side of the square region taken from a `width` x `height` source.
pub fn square_side(width: u32, height: u32) -> u32 {
    width.min(height)
}

/// Take the square anchored at the top-left corner (0, 0) whose side is the
/// shorter source dimension and resample it to `size` x `size`.
///
/// This is deliberately not a centered crop. The pixel layout, including any
/// alpha channel, is kept as is.
pub fn crop_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let side = square_side(img.width(), img.height());
    log::debug!(
        "Cropping {}x{} to top-left {}px square, resampling to {}px",
        img.width(),
        img.height(),
        side,
        size
    );
    img.crop_imm(0, 0, side, side)
        .resize_exact(size, size, FilterType::Triangle)
}

/// Convert a contrast level on the libgd scale to the percentage used by
/// `DynamicImage::adjust_contrast`.
///
/// libgd scales each channel around mid-gray by `((100 - level) / 100)^2`,
/// the `image` crate by `((100 + percent) / 100)^2`.
pub fn contrast_level_to_percent(level: i32) -> f32 {
    (100 - level).abs() as f32 - 100.0
}

/// BT.601 luminance (`.299 R + .587 G + .114 B`), truncated like libgd's
/// grayscale filter. Equal channels map to themselves.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    (weighted / 1000) as u8
}

/// Luminance-only copy of `img`: `L8`, or `La8` when the source has alpha.
pub fn grayscale(img: &DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let gray = GrayAlphaImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
            LumaA([luma(r, g, b), a])
        });
        DynamicImage::ImageLumaA8(gray)
    } else {
        let rgb = img.to_rgb8();
        let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
            let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
            Luma([luma(r, g, b)])
        });
        DynamicImage::ImageLuma8(gray)
    }
}

/// Drop hue and saturation, then boost contrast by `contrast_level`.
///
/// Returns a luminance image (`L8`, or `La8` when the source has alpha).
pub fn grayscale_contrast(img: &DynamicImage, contrast_level: i32) -> DynamicImage {
    let percent = contrast_level_to_percent(contrast_level);
    log::debug!(
        "Grayscale {}x{}, contrast level {} ({:+.1}%)",
        img.width(),
        img.height(),
        contrast_level,
        percent
    );
    grayscale(img).adjust_contrast(percent)
}
