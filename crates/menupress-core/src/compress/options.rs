//! Compression settings.

use serde::{Deserialize, Serialize};

use super::CompressError;
use crate::decode::FilterType;

/// Default width ceiling in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Default budget for the encoded data URI, sized to stay under the document
/// store's per-document limit.
pub const DEFAULT_MAX_SIZE_BYTES: usize = 700 * 1024;

/// Knobs for [`compress_image`](super::compress_image).
///
/// Deserializes from a partial object; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressOptions {
    /// Images wider than this are shrunk to this width.
    pub max_width: u32,
    /// Maximum length of the resulting data URI string.
    pub max_size_bytes: usize,
    /// Resampling filter for the shrink step.
    pub filter: FilterType,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            filter: FilterType::default(),
        }
    }
}

impl CompressOptions {
    pub fn new(max_width: u32, max_size_bytes: usize) -> Self {
        Self {
            max_width,
            max_size_bytes,
            ..Self::default()
        }
    }

    /// Reject settings the loop cannot work with.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.max_width == 0 {
            return Err(CompressError::InvalidOptions(
                "max_width must be positive".to_string(),
            ));
        }
        if self.max_size_bytes == 0 {
            return Err(CompressError::InvalidOptions(
                "max_size_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
