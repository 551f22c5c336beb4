//! Image loading
//!
//! Reads a user-selected file, checks its declared media type and decodes it
//! into a natural-size bitmap while keeping the original encoded bytes for
//! embedding.

use crate::types::*;
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// A decoded image ready for layout and export
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Original file name
    pub name: String,
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
    /// Encoded format detected from the file contents
    pub format: ImageFormat,
    /// Color layout of the encoded data before any conversion
    pub color: ExtendedColorType,
    /// Encoded file bytes as uploaded
    pub bytes: Arc<Vec<u8>>,
    /// Decoded pixels at natural size
    pub bitmap: Arc<RgbaImage>,
}

impl LoadedImage {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Media type of the encoded bytes, e.g. "image/png"
    pub fn media_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

/// Whether a declared media type names an image
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Media type implied by a file extension, if it is a known image format
pub fn media_type_for_path(path: impl AsRef<Path>) -> Option<&'static str> {
    ImageFormat::from_path(path).ok().map(|format| format.to_mime_type())
}

/// Decode an in-memory file.
///
/// Fails with [`GridError::UnsupportedMediaType`] before touching the bytes
/// when `media_type` is not an image type.
pub fn decode_image(
    name: impl Into<String>,
    media_type: &str,
    bytes: Vec<u8>,
) -> Result<LoadedImage> {
    let name = name.into();
    if !is_image_media_type(media_type) {
        return Err(GridError::UnsupportedMediaType(format!(
            "{} ({})",
            name, media_type
        )));
    }

    let reader = ImageReader::new(Cursor::new(bytes.as_slice())).with_guessed_format()?;
    let format = reader.format().ok_or_else(|| {
        GridError::UnsupportedMediaType(format!("{}: unrecognized image data", name))
    })?;

    let decoder = reader.into_decoder()?;
    let color = decoder.original_color_type();
    let decoded = DynamicImage::from_decoder(decoder)?;

    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(GridError::InvalidGeometry(format!("{} has no pixels", name)));
    }

    log::debug!(
        "Decoded {} as {:?} {}x{} ({:?})",
        name,
        format,
        width,
        height,
        color
    );

    Ok(LoadedImage {
        name,
        width,
        height,
        format,
        color,
        bitmap: Arc::new(decoded.to_rgba8()),
        bytes: Arc::new(bytes),
    })
}

/// Load an image file, inferring its media type from the extension
pub async fn load_image(path: impl AsRef<Path>) -> Result<LoadedImage> {
    let path = path.as_ref();
    let media_type = media_type_for_path(path)
        .ok_or_else(|| GridError::UnsupportedMediaType(path.display().to_string()))?;
    load_image_as(path, media_type).await
}

/// Load an image file whose media type was declared by the caller
pub async fn load_image_as(path: impl AsRef<Path>, media_type: &str) -> Result<LoadedImage> {
    let path = path.as_ref().to_owned();
    let media_type = media_type.to_string();

    if !is_image_media_type(&media_type) {
        return Err(GridError::UnsupportedMediaType(format!(
            "{} ({})",
            path.display(),
            media_type
        )));
    }

    let bytes = tokio::fs::read(&path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    // Decoding is CPU-bound
    tokio::task::spawn_blocking(move || decode_image(name, &media_type, bytes)).await?
}
