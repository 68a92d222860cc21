// Author: Dustin Pilgrim
// License: MIT
//
// Software compositor for preview frames. Executes a Scene over a copy of
// the display-size base image, back to front: shade, thirds guides,
// selection border, grips.

use image::RgbaImage;

use super::pixels::{blend_rect, draw_grip, fill_rect};
use super::scene::{Quad, Scene};

const DIM_A: u8 = 0x66;
const SHADE_ARGB: u32 = (DIM_A as u32) << 24;
const GUIDE_ARGB: u32 = 0x80FF_FFFF;
const HANDLE_INNER_ARGB: u32 = 0xFFFF_FFFF;

/// Compose one preview frame. The base is cloned, never mutated, so the
/// caller can keep reusing it across frames.
pub fn paint(base: &RgbaImage, scene: &Scene) -> RgbaImage {
    let mut frame = base.clone();

    for quad in &scene.shade {
        let (x, y, w, h) = snap(quad);
        blend_rect(&mut frame, x, y, w, h, SHADE_ARGB);
    }

    for quad in &scene.guides {
        let (x, y, w, h) = snap(quad);
        blend_rect(&mut frame, x, y, w, h, GUIDE_ARGB);
    }

    for quad in &scene.border {
        let (x, y, w, h) = snap(quad);
        fill_rect(&mut frame, x, y, w, h, scene.accent_argb);
    }

    let size = scene.grip_size.round() as i32;
    for grip in &scene.grips {
        draw_grip(
            &mut frame,
            grip.x.round() as i32,
            grip.y.round() as i32,
            size,
            scene.accent_argb,
            HANDLE_INNER_ARGB,
        );
    }

    frame
}

/// Round a quad to whole pixels. The far edge is rounded on its own so
/// quads that share a fractional boundary still tile without seams.
fn snap(q: &Quad) -> (i32, i32, i32, i32) {
    let x0 = q.x.round() as i32;
    let y0 = q.y.round() as i32;
    let x1 = (q.x + q.w).round() as i32;
    let y1 = (q.y + q.h).round() as i32;
    (x0, y0, x1 - x0, y1 - y0)
}
