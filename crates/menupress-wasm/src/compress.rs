//! Image compression WASM bindings.
//!
//! Called from the dish form's file-input handler. The result's `dataUri` goes
//! straight into the menu item's `image` field.
//!
//! # Example
//!
//! ```typescript
//! import { compress_image } from '@menupress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress_image(bytes);            // 800px, 700 KiB defaults
//! await addItem({ ...form, image: result.dataUri });
//! ```

use crate::types::JsCompressedImage;
use menupress_core::compress::{self, CompressOptions, ImageBackend, UploadProgress, UploadStage};
use wasm_bindgen::prelude::*;

/// Compress a picked image into a JPEG data URI.
///
/// # Arguments
///
/// * `bytes` - The file bytes as a `Uint8Array`
/// * `max_width` - Width ceiling in pixels (default 800)
/// * `max_size_bytes` - Budget for the data URI length (default 716800)
///
/// # Errors
///
/// Rejects bytes that are not an image, a raster surface that cannot be set
/// up, and zero limits. An over-budget result at the quality floor is NOT an
/// error; check `fits()` if the limit is hard.
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    max_width: Option<u32>,
    max_size_bytes: Option<usize>,
) -> Result<JsCompressedImage, JsValue> {
    let defaults = CompressOptions::default();
    let options = CompressOptions {
        max_width: max_width.unwrap_or(defaults.max_width),
        max_size_bytes: max_size_bytes.unwrap_or(defaults.max_size_bytes),
        ..defaults
    };

    compress::compress_image(bytes, &options)
        .map(JsCompressedImage::from_compressed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress with an options object and a progress callback.
///
/// `options` is `{ maxWidth?, maxSizeBytes?, filter? }` or `undefined`.
/// `on_progress` receives `{ stage, progress, message }` objects. If it throws,
/// compression still finishes and the first exception is returned as the error.
///
/// ```typescript
/// const result = compress_image_with_progress(bytes, { maxWidth: 600 }, (p) => {
///   bar.value = overall_progress(p.stage, p.progress);
/// });
/// ```
#[wasm_bindgen]
pub fn compress_image_with_progress(
    bytes: &[u8],
    options: JsValue,
    on_progress: &js_sys::Function,
) -> Result<JsCompressedImage, JsValue> {
    let options: CompressOptions = if options.is_undefined() || options.is_null() {
        CompressOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let backend = ImageBackend::new(options.filter);
    let mut callback_error: Option<JsValue> = None;
    let result = compress::compress_image_with(&backend, bytes, &options, |progress| {
        if callback_error.is_some() {
            return;
        }
        if let Err(e) = report_progress(on_progress, &progress) {
            callback_error = Some(e);
        }
    });

    let compressed = result.map_err(|e| JsValue::from_str(&e.to_string()))?;
    match callback_error {
        Some(e) => Err(e),
        None => Ok(JsCompressedImage::from_compressed(compressed)),
    }
}

fn report_progress(
    on_progress: &js_sys::Function,
    progress: &UploadProgress,
) -> Result<(), JsValue> {
    let value =
        serde_wasm_bindgen::to_value(progress).map_err(|e| JsValue::from_str(&e.to_string()))?;
    on_progress.call1(&JsValue::NULL, &value)?;
    Ok(())
}

/// Position on the combined upload bar for a stage-local progress value.
///
/// `stage` is `"encoding"` or `"firestore"` (also accepted as `"saving"`);
/// each covers half the bar.
#[wasm_bindgen]
pub fn overall_progress(stage: &str, progress: u8) -> Result<f32, JsValue> {
    let stage = parse_stage(stage).ok_or_else(|| JsValue::from_str("unknown upload stage"))?;
    Ok(UploadProgress::new(stage, progress, "").overall_percent())
}

fn parse_stage(stage: &str) -> Option<UploadStage> {
    match stage {
        "encoding" => Some(UploadStage::Encoding),
        "firestore" | "saving" => Some(UploadStage::Saving),
        _ => None,
    }
}
