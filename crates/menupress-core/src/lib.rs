//! menupress core - image compression and menu data for a restaurant admin panel.
//!
//! This crate provides:
//! - Decoding of user-picked pictures and shrink-only resizing (`decode`)
//! - JPEG encoding and base64 data URIs (`encode`)
//! - The best-effort compressor that fits a picture into a byte budget (`compress`)
//! - Menu records and drag-and-drop reordering (`menu`)
//! - Time-boxed read caches and refresh throttling (`cache`)
//! - The document store seam and the cached menu service (`store`)
//! - The shared-password admin gate and route guard (`session`)

pub mod cache;
pub mod compress;
pub mod decode;
pub mod encode;
pub mod menu;
pub mod session;
pub mod store;

pub use compress::{
    compress_image, compress_image_with, compress_source, CompressError, CompressOptions,
    CompressedImage, ImageBackend, Quality, RasterBackend, UploadProgress, UploadStage,
};
pub use menu::{Category, MenuData, MenuItem, MenuItemPatch, NewMenuItem};
pub use store::{MemoryStore, MenuService, MenuStore, StoreError, UploadError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_upload_limits() {
        let opts = CompressOptions::default();
        assert_eq!(opts.max_width, compress::DEFAULT_MAX_WIDTH);
        assert_eq!(opts.max_size_bytes, 700 * 1024);
    }

    #[test]
    fn test_compressed_image_feeds_menu_item() {
        let pixels = vec![210u8; 24 * 16 * 3];
        let jpeg = encode::encode_jpeg(&pixels, 24, 16, 95).unwrap();
        let compressed = compress_image(&jpeg, &CompressOptions::default()).unwrap();

        let mut store = MemoryStore::new();
        let item = store
            .add_item(NewMenuItem {
                name: "Panna cotta".to_string(),
                description: Some("vanilla, berries".to_string()),
                price: 6.5,
                rating: 4.8,
                image: compressed.data_uri.clone(),
                category_id: "desserts".to_string(),
                order: None,
            })
            .unwrap();

        assert!(item.image.starts_with(encode::JPEG_DATA_URI_PREFIX));
        assert_eq!(store.list_items().unwrap()[0].image, compressed.data_uri);
    }
}
