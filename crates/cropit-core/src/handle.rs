// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::CropRect;

/// The eight resize grips: four corners plus four edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

/// Pointer shape the embedding UI should show, named after the usual CSS
/// resize cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Default,
    Move,
    NwResize,
    NeResize,
    SwResize,
    SeResize,
    NResize,
    SResize,
    WResize,
    EResize,
}

impl Handle {
    /// Hit-test order: corners win over edges when hotspots overlap.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
    ];

    /// Grip position on the rect, in source-pixel units.
    pub fn anchor(&self, r: &CropRect) -> (f32, f32) {
        match self {
            Handle::TopLeft => (r.x, r.y),
            Handle::TopRight => (r.right(), r.y),
            Handle::BottomLeft => (r.x, r.bottom()),
            Handle::BottomRight => (r.right(), r.bottom()),
            Handle::Top => (r.x + r.w / 2.0, r.y),
            Handle::Bottom => (r.x + r.w / 2.0, r.bottom()),
            Handle::Left => (r.x, r.y + r.h / 2.0),
            Handle::Right => (r.right(), r.y + r.h / 2.0),
        }
    }

    /// First handle whose square hotspot (half side `half_extent`) contains
    /// the point, in `ALL` order.
    pub fn at_point(r: &CropRect, px: f32, py: f32, half_extent: f32) -> Option<Handle> {
        Handle::ALL.iter().copied().find(|handle| {
            let (hx, hy) = handle.anchor(r);
            (px - hx).abs() <= half_extent && (py - hy).abs() <= half_extent
        })
    }

    pub fn cursor(&self) -> CursorHint {
        match self {
            Handle::TopLeft => CursorHint::NwResize,
            Handle::TopRight => CursorHint::NeResize,
            Handle::BottomLeft => CursorHint::SwResize,
            Handle::BottomRight => CursorHint::SeResize,
            Handle::Top => CursorHint::NResize,
            Handle::Bottom => CursorHint::SResize,
            Handle::Left => CursorHint::WResize,
            Handle::Right => CursorHint::EResize,
        }
    }
}
