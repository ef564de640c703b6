//! Base64 data URIs, the form images are stored in on menu records.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Prefix of every JPEG data URI produced by the compressor.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Wrap encoded bytes as `data:<media_type>;base64,<payload>`.
pub fn to_data_uri(media_type: &str, bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(media_type.len() + 13 + encoded_len(bytes.len()));
    uri.push_str("data:");
    uri.push_str(media_type);
    uri.push_str(";base64,");
    STANDARD.encode_string(bytes, &mut uri);
    uri
}

/// Length of the data URI [`to_data_uri`] would produce for a JPEG of `byte_len` bytes.
pub fn jpeg_data_uri_len(byte_len: usize) -> usize {
    JPEG_DATA_URI_PREFIX.len() + encoded_len(byte_len)
}

/// Split a base64 data URI into its media type and decoded payload.
///
/// Returns `None` for anything that is not a well-formed base64 data URI.
pub fn parse_data_uri(uri: &str) -> Option<(&str, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (media_type, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((media_type, bytes))
}

fn encoded_len(byte_len: usize) -> usize {
    byte_len.div_ceil(3) * 4
}
