//! Image encoding for menupress.
//!
//! This module provides functionality for:
//! - Encoding raster buffers to JPEG with configurable quality
//! - Wrapping encoded bytes as base64 data URIs for storage on menu records
//!
//! # Examples
//!
//! ```ignore
//! use menupress_core::encode::{encode_jpeg, to_data_uri};
//!
//! let pixels = vec![128u8; 100 * 100 * 3];
//! let jpeg = encode_jpeg(&pixels, 100, 100, 90).unwrap();
//! let uri = to_data_uri("image/jpeg", &jpeg);
//! ```

mod data_uri;
mod jpeg;

pub use data_uri::{jpeg_data_uri_len, parse_data_uri, to_data_uri, JPEG_DATA_URI_PREFIX};
pub use jpeg::{encode_jpeg, encode_jpeg_image, EncodeError};
