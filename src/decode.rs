//! Data-URI image decoding

use crate::error::{MoodError, Result};
use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;
use tracing::debug;

/// Decode a `<tag>,<base64 body>` payload into a raster image.
///
/// The tag is everything before the first `,` (e.g. `data:image/png;base64`)
/// and is not interpreted beyond locating the delimiter. Decoding is pure and
/// deterministic; any failure is final for the invocation.
pub fn decode_data_uri(payload: &str) -> Result<DynamicImage> {
    let (_tag, body) = payload.split_once(',').ok_or(MoodError::MissingDelimiter)?;

    let bytes = general_purpose::STANDARD.decode(body)?;

    // Sniff magic bytes before handing the buffer to the codec, so non-image
    // payloads fail with the detected type in the diagnostic.
    match infer::get(&bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => {
            debug!("payload sniffed as {}", kind.mime_type());
        }
        Some(kind) => return Err(MoodError::NotAnImage(kind.mime_type().to_string())),
        None => return Err(MoodError::NotAnImage("unknown".to_string())),
    }

    let img = image::load_from_memory(&bytes)?;
    debug!("decoded {}x{} image", img.width(), img.height());
    Ok(img)
}
