// Author: Dustin Pilgrim
// License: MIT
//
// Display fitting and display<->source coordinate conversion.
// Source space is the bitmap's native pixel grid; display space is the
// scaled-down view of it. scale = display_width / source_width.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Longest display side when no explicit bound is configured.
pub const MAX_DISPLAY_SIZE: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSize {
    pub w: u32,
    pub h: u32,
}

impl SourceSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Derived once per loaded source image, read-only afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplayGeometry {
    display_w: f32,
    display_h: f32,
    scale: f32,
}

impl DisplayGeometry {
    /// Fit `source` into a viewport bounded by `max_display` on the longest
    /// side, preserving aspect ratio. Sources smaller than the bound keep
    /// their native size (never upscales).
    pub fn fit(source: SourceSize, max_display: f32) -> Result<Self, GeometryError> {
        if source.w == 0 || source.h == 0 {
            return Err(GeometryError::EmptySource {
                width: source.w,
                height: source.h,
            });
        }

        let sw = source.w as f32;
        let sh = source.h as f32;

        let (display_w, display_h) = if sw > sh {
            let dw = sw.min(max_display);
            (dw, sh * dw / sw)
        } else {
            let dh = sh.min(max_display);
            (sw * dh / sh, dh)
        };

        Ok(Self {
            display_w,
            display_h,
            scale: display_w / sw,
        })
    }

    pub fn display_width(&self) -> f32 {
        self.display_w
    }

    pub fn display_height(&self) -> f32 {
        self.display_h
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_source_point(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.scale, y / self.scale)
    }

    pub fn to_display_point(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale, y * self.scale)
    }
}
