// Author: Dustin Pilgrim
// License: MIT

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

use cropit_core::{DisplayGeometry, SourceSize};

use crate::error::{EditorError, Result};

/// The decoded source bitmap. Immutable once loaded, dropped together with
/// the session that owns it.
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    size: SourceSize,
}

impl SourceImage {
    /// Decode an in-memory blob (any container the image stack recognizes).
    pub fn decode(blob: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(blob).map_err(EditorError::Decode)?;
        let (w, h) = image.dimensions();

        Ok(Self {
            image,
            size: SourceSize::new(w, h),
        })
    }

    pub fn size(&self) -> SourceSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.w
    }

    pub fn height(&self) -> u32 {
        self.size.h
    }

    pub(crate) fn inner(&self) -> &DynamicImage {
        &self.image
    }

    /// The bitmap resampled to display size, the base layer for preview
    /// composition.
    pub fn display_base(&self, geometry: &DisplayGeometry) -> RgbaImage {
        let dw = (geometry.display_width().round() as u32).max(1);
        let dh = (geometry.display_height().round() as u32).max(1);

        imageops::resize(&self.image.to_rgba8(), dw, dh, FilterType::Triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropit_core::geometry::MAX_DISPLAY_SIZE;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(w, h, Rgba([120u8, 80, 40, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_reads_dimensions() {
        let src = SourceImage::decode(&png_bytes(320, 240)).unwrap();
        assert_eq!(src.size(), SourceSize::new(320, 240));
        assert_eq!((src.width(), src.height()), (320, 240));
    }

    #[test]
    fn garbage_blob_is_a_decode_error() {
        let err = SourceImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EditorError::Decode(_)));
    }

    #[test]
    fn display_base_matches_the_fitted_viewport() {
        let src = SourceImage::decode(&png_bytes(1200, 800)).unwrap();
        let geometry = DisplayGeometry::fit(src.size(), MAX_DISPLAY_SIZE).unwrap();

        let base = src.display_base(&geometry);
        assert_eq!(base.dimensions(), (600, 400));
    }
}
