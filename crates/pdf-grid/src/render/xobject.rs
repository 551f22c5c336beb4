//! Image XObject creation
//!
//! The loaded image is embedded once and drawn in every cell. JPEG data in
//! gray or RGB is embedded as-is; everything else is decoded pixels
//! compressed with Flate.

use crate::loader::LoadedImage;
use crate::types::{GridError, Result};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ExtendedColorType, ImageFormat};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// Image data prepared for embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    pub width: u32,
    pub height: u32,
    /// "DeviceRGB" or "DeviceGray"
    pub color_space: &'static str,
    /// "DCTDecode" or "FlateDecode"
    pub filter: &'static str,
    /// Compressed image data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Prepare an image for embedding using its own encoding where possible
    pub fn from_image(image: &LoadedImage) -> Result<Self> {
        match (image.format, image.color) {
            (ImageFormat::Jpeg, ExtendedColorType::L8) => Ok(Self::dct(image, "DeviceGray")),
            (ImageFormat::Jpeg, ExtendedColorType::Rgb8) => Ok(Self::dct(image, "DeviceRGB")),
            _ => Self::flate(image),
        }
    }

    fn dct(image: &LoadedImage, color_space: &'static str) -> Self {
        Self {
            width: image.width,
            height: image.height,
            color_space,
            filter: "DCTDecode",
            data: image.bytes.as_ref().clone(),
        }
    }

    fn flate(image: &LoadedImage) -> Result<Self> {
        let grayscale = matches!(
            image.color,
            ExtendedColorType::L1
                | ExtendedColorType::L2
                | ExtendedColorType::L4
                | ExtendedColorType::L8
                | ExtendedColorType::L16
                | ExtendedColorType::La1
                | ExtendedColorType::La2
                | ExtendedColorType::La4
                | ExtendedColorType::La8
                | ExtendedColorType::La16
        );

        let channels = if grayscale { 1 } else { 3 };
        let mut raw = Vec::with_capacity(image.bitmap.len() / 4 * channels);

        // Transparent pixels are composited over white paper
        for pixel in image.bitmap.pixels() {
            let [r, g, b, a] = pixel.0;
            let (r, g, b) = (over_white(r, a), over_white(g, a), over_white(b, a));
            if grayscale {
                raw.push(r);
            } else {
                raw.extend_from_slice(&[r, g, b]);
            }
        }

        let encoding_error =
            |e: std::io::Error| GridError::Encoding(format!("Failed to compress {}: {}", image.name, e));
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw).map_err(encoding_error)?;
        let data = encoder.finish().map_err(encoding_error)?;

        Ok(Self {
            width: image.width,
            height: image.height,
            color_space: if grayscale { "DeviceGray" } else { "DeviceRGB" },
            filter: "FlateDecode",
            data,
        })
    }

    /// Convert to a lopdf image stream
    pub fn to_stream(&self) -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", Object::Integer(self.width as i64));
        dict.set("Height", Object::Integer(self.height as i64));
        dict.set(
            "ColorSpace",
            Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", Object::Integer(8));
        dict.set("Filter", Object::Name(self.filter.as_bytes().to_vec()));

        // Already compressed; keep lopdf from compressing again
        Stream::new(dict, self.data.clone()).with_compression(false)
    }
}

/// Embed the image in the document and return its object ID
pub fn add_image_xobject(doc: &mut Document, image: &LoadedImage) -> Result<ObjectId> {
    let xobject = ImageXObject::from_image(image)?;
    log::debug!(
        "Embedding {} as {} {} ({} bytes)",
        image.name,
        xobject.color_space,
        xobject.filter,
        xobject.data.len()
    );
    Ok(doc.add_object(xobject.to_stream()))
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (channel as u32, alpha as u32);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
