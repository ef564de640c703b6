//! Image decoding for menupress.
//!
//! This module turns user-supplied image files into raster buffers:
//! - Decoding JPEG, PNG, GIF and WebP into upright RGB8 pixels
//! - Honoring EXIF orientation the way a browser does
//! - Shrink-only resizing to a maximum width
//!
//! # Examples
//!
//! ```ignore
//! use menupress_core::decode::{decode_image, resize_to_width, FilterType};
//!
//! let bytes = std::fs::read("tiramisu.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! let small = resize_to_width(&image, 800, FilterType::Bilinear).unwrap();
//! println!("{}x{} -> {}x{}", image.width, image.height, small.width, small.height);
//! ```

mod resize;
mod source;
mod types;

pub use resize::{resize, resize_to_width, width_capped_dimensions};
pub use source::decode_image;
pub use types::{sniff_media_type, DecodeError, DecodedImage, FilterType, Orientation, SourceImage};
