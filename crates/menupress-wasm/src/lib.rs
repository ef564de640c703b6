//! menupress WASM - WebAssembly bindings for the menu admin panel
//!
//! This crate exposes the menupress-core functionality to the browser front end.
//!
//! # Module Structure
//!
//! - `compress` - Image compression into JPEG data URIs, with progress reporting
//! - `menu` - Admin list ordering and refresh throttling
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_image } from '@menupress/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = compress_image(bytes);
//! console.log(`${image.width}x${image.height} at q=${image.quality}`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod menu;
mod types;

pub use compress::{compress_image, compress_image_with_progress, overall_progress};
pub use menu::{reorder_items, sort_items, JsClock, JsRefreshThrottle};
pub use types::JsCompressedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
