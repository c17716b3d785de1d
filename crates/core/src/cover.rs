//! Cover image upload validation.

use image::ImageFormat;

use crate::error::CoreError;

/// Validate uploaded cover bytes and return the canonical file
/// extension to store them under.
///
/// The format is sniffed from the bytes; the client-supplied filename
/// and content type are never trusted.
pub fn cover_extension(bytes: &[u8]) -> Result<&'static str, CoreError> {
    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("cover is not a recognized image".into()))?;
    match format {
        ImageFormat::Png => Ok("png"),
        ImageFormat::Jpeg => Ok("jpg"),
        ImageFormat::WebP => Ok("webp"),
        other => Err(CoreError::Validation(format!(
            "unsupported cover format {other:?}; use PNG, JPEG or WebP"
        ))),
    }
}
