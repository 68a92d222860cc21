// Author: Dustin Pilgrim
// License: MIT
//
// Crop rectangle model, in source-pixel units. Fractional coordinates are
// kept throughout editing and rounded to whole pixels only when the rect
// is handed to the rasterizer.

use serde::{Deserialize, Serialize};

use crate::geometry::SourceSize;
use crate::handle::Handle;

pub const MIN_CROP_SIZE: f32 = 50.0;
pub const DEFAULT_CROP_SIZE: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Whole-pixel rect for rasterization, guaranteed non-empty and inside
/// the source bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl CropRect {
    /// Initial selection: a square of `default_size` (shrunk to fit small
    /// sources), centered in the image.
    pub fn centered_in(source: SourceSize, default_size: f32, min_size: f32) -> Self {
        let sw = source.w as f32;
        let sh = source.h as f32;

        let size = default_size.min(sw).min(sh).max(min_size);
        Self {
            x: ((sw - size) / 2.0).max(0.0),
            y: ((sh - size) / 2.0).max(0.0),
            w: size,
            h: size,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    /// Pull the rect back inside the source bounds: origin first, then the
    /// dimensions are cut down to the remaining room, never below `min_size`.
    pub fn clamp_to(&mut self, source: SourceSize, min_size: f32) {
        let sw = source.w as f32;
        let sh = source.h as f32;

        self.x = self.x.clamp(0.0, (sw - self.w).max(0.0));
        self.y = self.y.clamp(0.0, (sh - self.h).max(0.0));
        self.w = self.w.min(sw - self.x).max(min_size);
        self.h = self.h.min(sh - self.y).max(min_size);
    }

    /// Translate without touching the dimensions. Only the origin needs
    /// clamping here.
    pub fn move_to(&mut self, x: f32, y: f32, source: SourceSize) {
        let sw = source.w as f32;
        let sh = source.h as f32;

        self.x = x.clamp(0.0, (sw - self.w).max(0.0));
        self.y = y.clamp(0.0, (sh - self.h).max(0.0));
    }

    /// Resize by dragging `handle` by `(dx, dy)` source pixels. The opposite
    /// edge stays anchored: each moving dimension is floored at `min_size`
    /// first and the moving coordinate re-derived from it, so the rect can
    /// never invert.
    pub fn resize_from(&mut self, handle: Handle, dx: f32, dy: f32, min_size: f32, source: SourceSize) {
        let right = self.right();
        let bottom = self.bottom();

        match handle {
            Handle::TopLeft => {
                self.w = (self.w - dx).max(min_size);
                self.h = (self.h - dy).max(min_size);
                self.x = right - self.w;
                self.y = bottom - self.h;
            }
            Handle::TopRight => {
                self.w = (self.w + dx).max(min_size);
                self.h = (self.h - dy).max(min_size);
                self.y = bottom - self.h;
            }
            Handle::BottomLeft => {
                self.w = (self.w - dx).max(min_size);
                self.h = (self.h + dy).max(min_size);
                self.x = right - self.w;
            }
            Handle::BottomRight => {
                self.w = (self.w + dx).max(min_size);
                self.h = (self.h + dy).max(min_size);
            }
            Handle::Top => {
                self.h = (self.h - dy).max(min_size);
                self.y = bottom - self.h;
            }
            Handle::Bottom => {
                self.h = (self.h + dy).max(min_size);
            }
            Handle::Left => {
                self.w = (self.w - dx).max(min_size);
                self.x = right - self.w;
            }
            Handle::Right => {
                self.w = (self.w + dx).max(min_size);
            }
        }

        self.clamp_to(source, min_size);
    }

    /// Round to whole source pixels for the rasterizer. The result is
    /// clipped to the bounds and never empty.
    pub fn to_pixel_rect(&self, source: SourceSize) -> PixelRect {
        let x = (self.x.round().max(0.0) as u32).min(source.w.saturating_sub(1));
        let y = (self.y.round().max(0.0) as u32).min(source.h.saturating_sub(1));
        let w = (self.w.round().max(1.0) as u32).min(source.w - x);
        let h = (self.h.round().max(1.0) as u32).min(source.h - y);

        PixelRect { x, y, w, h }
    }
}
