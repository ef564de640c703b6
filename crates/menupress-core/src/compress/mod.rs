//! Image compression for menu item pictures.
//!
//! Turns an arbitrary user-supplied picture into a JPEG data URI small enough
//! to live inside a single document-store record:
//!
//! 1. Decode the file into a raster.
//! 2. If it is wider than `max_width`, shrink it (aspect ratio kept, never upscaled).
//! 3. Encode as JPEG at quality 0.9.
//! 4. While the data URI is longer than `max_size_bytes` and quality is above
//!    0.1, drop quality by 0.1 and re-encode.
//! 5. Return the last encoding, even if it is still over budget.
//!
//! The budget is best effort. A result that reached the quality floor can
//! still be too long; callers that need a hard limit check
//! [`CompressedImage::fits`] themselves.
//!
//! Feeding an output back in is stable but not strictly shrinking: a JPEG
//! re-encoded at its own quality can come out a few bytes longer. Outputs that
//! met the budget meet it again.
//!
//! # Examples
//!
//! ```ignore
//! use menupress_core::compress::{compress_image, CompressOptions};
//!
//! let bytes = std::fs::read("lasagna.png").unwrap();
//! let result = compress_image(&bytes, &CompressOptions::default()).unwrap();
//! item.image = result.data_uri;
//! ```

mod backend;
mod options;
mod progress;
mod quality;

pub use backend::{ImageBackend, RasterBackend};
pub use options::{CompressOptions, DEFAULT_MAX_SIZE_BYTES, DEFAULT_MAX_WIDTH};
pub use progress::{UploadProgress, UploadStage};
pub use quality::Quality;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::decode::{width_capped_dimensions, DecodeError, SourceImage};
use crate::encode::{to_data_uri, EncodeError};

/// Errors surfaced by the compressor. None of them are retried.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The source bytes are not a decodable image.
    #[error("could not decode image: {0}")]
    Decode(#[from] DecodeError),

    /// No raster surface could be set up for drawing.
    #[error("could not get a raster drawing context: {0}")]
    ContextUnavailable(String),

    #[error("could not encode image: {0}")]
    Encode(#[from] EncodeError),

    #[error("invalid compression options: {0}")]
    InvalidOptions(String),
}

/// A compressed picture ready to be stored on a menu record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedImage {
    /// `data:image/jpeg;base64,...`
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
    /// Quality of the encoding that was kept.
    pub quality: Quality,
    /// Number of JPEG encodes performed (1-9).
    pub attempts: u8,
}

impl CompressedImage {
    /// Length of the data URI, the figure compared against the budget.
    pub fn encoded_len(&self) -> usize {
        self.data_uri.len()
    }

    pub fn fits(&self, max_size_bytes: usize) -> bool {
        self.encoded_len() <= max_size_bytes
    }

    pub fn was_resized(&self) -> bool {
        self.width != self.original_width || self.height != self.original_height
    }
}

/// Compress image bytes with the `image`-crate backend.
///
/// # Errors
///
/// `CompressError::Decode` for bytes that are not an image,
/// `CompressError::ContextUnavailable` when the resize surface cannot be built,
/// `CompressError::InvalidOptions` for a zero width or budget.
pub fn compress_image(
    bytes: &[u8],
    options: &CompressOptions,
) -> Result<CompressedImage, CompressError> {
    compress_image_with(&ImageBackend::new(options.filter), bytes, options, |_| {})
}

/// Compress a picked file, logging its declared media type.
pub fn compress_source(
    source: &SourceImage,
    options: &CompressOptions,
) -> Result<CompressedImage, CompressError> {
    debug!(
        media_type = %source.media_type,
        bytes = source.bytes.len(),
        "compressing picked image"
    );
    compress_image(&source.bytes, options)
}

/// Compress image bytes on `backend`, reporting advisory progress.
///
/// The resize happens at most once, before any encode. Each encode is a full
/// re-encode of the same raster at a lower quality.
pub fn compress_image_with<B, F>(
    backend: &B,
    bytes: &[u8],
    options: &CompressOptions,
    mut on_progress: F,
) -> Result<CompressedImage, CompressError>
where
    B: RasterBackend + ?Sized,
    F: FnMut(UploadProgress),
{
    options.validate()?;
    on_progress(UploadProgress::new(
        UploadStage::Encoding,
        0,
        "Compressing image...",
    ));

    let decoded = backend.decode(bytes)?;
    let (original_width, original_height) = (decoded.width, decoded.height);
    let (width, height) =
        width_capped_dimensions(original_width, original_height, options.max_width);

    let raster = if (width, height) == (original_width, original_height) {
        decoded
    } else {
        debug!(
            from_width = original_width,
            from_height = original_height,
            width,
            height,
            "shrinking image"
        );
        backend.resize(&decoded, width, height)?
    };

    on_progress(UploadProgress::new(
        UploadStage::Encoding,
        50,
        "Encoding image: 50%",
    ));

    let mut quality = Quality::START;
    let mut data_uri = to_data_uri("image/jpeg", &backend.encode_jpeg(&raster, quality)?);
    let mut attempts = 1u8;
    debug!(quality = quality.as_fraction(), len = data_uri.len(), "encoded");

    while data_uri.len() > options.max_size_bytes {
        let Some(next) = quality.step_down() else {
            break;
        };
        quality = next;
        data_uri = to_data_uri("image/jpeg", &backend.encode_jpeg(&raster, quality)?);
        attempts += 1;
        debug!(quality = quality.as_fraction(), len = data_uri.len(), "re-encoded");
    }

    if data_uri.len() > options.max_size_bytes {
        warn!(
            len = data_uri.len(),
            budget = options.max_size_bytes,
            "image still over budget at quality floor"
        );
    }

    on_progress(UploadProgress::new(
        UploadStage::Encoding,
        100,
        "Encoding image: 100%",
    ));

    Ok(CompressedImage {
        data_uri,
        width: raster.width,
        height: raster.height,
        original_width,
        original_height,
        quality,
        attempts,
    })
}
