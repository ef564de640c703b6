//! The raster capability the compressor runs on.
//!
//! In the browser this is an `<img>` element plus a 2D canvas. Here it is a
//! trait so the platform (or a test) can supply its own decode, resample and
//! encode steps.

use super::{CompressError, Quality};
use crate::decode::{self, DecodedImage, FilterType};
use crate::encode;

/// Decode, resample and JPEG-encode raster images.
pub trait RasterBackend {
    /// Turn file bytes into an upright raster.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CompressError>;

    /// Draw `image` onto a `width` x `height` surface.
    fn resize(
        &self,
        image: &DecodedImage,
        width: u32,
        height: u32,
    ) -> Result<DecodedImage, CompressError>;

    /// Encode the raster as JPEG at `quality`.
    fn encode_jpeg(&self, image: &DecodedImage, quality: Quality)
        -> Result<Vec<u8>, CompressError>;
}

/// [`RasterBackend`] built on the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageBackend {
    filter: FilterType,
}

impl ImageBackend {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl RasterBackend for ImageBackend {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CompressError> {
        Ok(decode::decode_image(bytes)?)
    }

    fn resize(
        &self,
        image: &DecodedImage,
        width: u32,
        height: u32,
    ) -> Result<DecodedImage, CompressError> {
        // A buffer that disagrees with its own dimensions cannot back a surface.
        if !image.is_consistent() || width == 0 || height == 0 {
            return Err(CompressError::ContextUnavailable(format!(
                "cannot draw {}x{} raster ({} bytes) onto a {}x{} surface",
                image.width,
                image.height,
                image.pixels.len(),
                width,
                height
            )));
        }

        decode::resize(image, width, height, self.filter)
            .map_err(|e| CompressError::ContextUnavailable(e.to_string()))
    }

    fn encode_jpeg(
        &self,
        image: &DecodedImage,
        quality: Quality,
    ) -> Result<Vec<u8>, CompressError> {
        Ok(encode::encode_jpeg_image(image, quality.jpeg_quality())?)
    }
}
