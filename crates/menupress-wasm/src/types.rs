//! WASM-compatible wrapper types.
//!
//! These wrap core menupress types and expose them through getters, handling
//! the conversion between Rust and JavaScript data representations.

use menupress_core::CompressedImage;
use wasm_bindgen::prelude::*;

/// A compressed picture, ready to be stored as a menu item's `image` field.
///
/// `dataUri` copies the string into JavaScript memory on every call; read it
/// once and keep the JS string.
#[wasm_bindgen]
pub struct JsCompressedImage {
    inner: CompressedImage,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// The `data:image/jpeg;base64,...` string.
    #[wasm_bindgen(getter, js_name = dataUri)]
    pub fn data_uri(&self) -> String {
        self.inner.data_uri.clone()
    }

    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[wasm_bindgen(getter, js_name = originalWidth)]
    pub fn original_width(&self) -> u32 {
        self.inner.original_width
    }

    #[wasm_bindgen(getter, js_name = originalHeight)]
    pub fn original_height(&self) -> u32 {
        self.inner.original_height
    }

    /// Quality of the kept encoding, 0.1 to 0.9.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.inner.quality.as_fraction()
    }

    /// Number of JPEG encodes performed
    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u8 {
        self.inner.attempts
    }

    /// Length of the data URI string.
    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.inner.encoded_len()
    }

    /// Whether the data URI is within `max_size_bytes`.
    ///
    /// The compressor may return an over-budget result at quality 0.1, so
    /// callers with a hard limit check this before saving.
    pub fn fits(&self, max_size_bytes: usize) -> bool {
        self.inner.fits(max_size_bytes)
    }
}

impl JsCompressedImage {
    pub(crate) fn from_compressed(inner: CompressedImage) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menupress_core::Quality;

    fn sample() -> CompressedImage {
        CompressedImage {
            data_uri: "data:image/jpeg;base64,AAAA".to_string(),
            width: 800,
            height: 600,
            original_width: 4000,
            original_height: 3000,
            quality: Quality::from_tenths(7),
            attempts: 3,
        }
    }

    #[test]
    fn test_getters() {
        let img = JsCompressedImage::from_compressed(sample());
        assert_eq!(img.data_uri(), "data:image/jpeg;base64,AAAA");
        assert_eq!((img.width(), img.height()), (800, 600));
        assert_eq!((img.original_width(), img.original_height()), (4000, 3000));
        assert!((img.quality() - 0.7).abs() < 1e-6);
        assert_eq!(img.attempts(), 3);
        assert_eq!(img.byte_length(), 27);
    }

    #[test]
    fn test_fits() {
        let img = JsCompressedImage::from_compressed(sample());
        assert!(img.fits(27));
        assert!(!img.fits(26));
    }
}
