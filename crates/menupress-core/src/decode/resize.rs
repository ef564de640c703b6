//! Raster resizing used before JPEG re-encoding.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for a zero target dimension, and
/// `DecodeError::CorruptedFile` if the pixel buffer disagrees with the
/// image's declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let view = image
        .as_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());
    Ok(DecodedImage::from_rgb_image(resized))
}

/// Shrink an image so that its width does not exceed `max_width`.
///
/// Height follows the original aspect ratio. Images already within the limit
/// are returned unchanged; this never upscales.
pub fn resize_to_width(
    image: &DecodedImage,
    max_width: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_width == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let (width, height) = width_capped_dimensions(image.width, image.height, max_width);
    resize(image, width, height, filter)
}

/// Dimensions after capping `width` at `max_width`, keeping aspect ratio.
///
/// `new_height = round(height * max_width / width)`, never below 1.
pub fn width_capped_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }

    let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
    (max_width, scaled.max(1))
}
