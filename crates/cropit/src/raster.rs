// Author: Dustin Pilgrim
// License: MIT
//
// Final-output rasterization: crop the full-resolution source to the
// selection and encode the result in memory. Selection coordinates stay
// fractional right up to this point; rounding happens here, once.

use std::io::Cursor;

use image::ImageFormat;
use image::codecs::jpeg::JpegEncoder;

use cropit_core::CropRect;

use crate::error::{EditorError, Result};
use crate::source::SourceImage;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encoding for the final output blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg { quality: u8 },
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// An encoded crop, ready to hand back to the embedding application.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

impl EncodedImage {
    /// Suggested download name for the blob.
    pub fn file_name(&self) -> &'static str {
        match self.format {
            OutputFormat::Jpeg { .. } => "cropped-image.jpg",
            OutputFormat::Png => "cropped-image.png",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self.format {
            OutputFormat::Jpeg { .. } => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }
}

pub fn rasterize(
    source: &SourceImage,
    crop: &CropRect,
    format: OutputFormat,
) -> Result<EncodedImage> {
    let px = crop.to_pixel_rect(source.size());
    let cropped = source.inner().crop_imm(px.x, px.y, px.w, px.h);

    let mut bytes = Vec::new();
    match format {
        OutputFormat::Jpeg { quality } => {
            // JPEG carries no alpha channel; encode from RGB.
            let rgb = cropped.to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
            rgb.write_with_encoder(encoder).map_err(EditorError::Encode)?;
        }
        OutputFormat::Png => {
            cropped
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .map_err(EditorError::Encode)?;
        }
    }

    Ok(EncodedImage {
        bytes,
        width: px.w,
        height: px.h,
        format,
    })
}
