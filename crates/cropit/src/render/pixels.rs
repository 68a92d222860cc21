// Author: Dustin Pilgrim
// License: MIT
//
// Software painting primitives over an RGBA buffer. Colours are ARGB u32
// (0xAARRGGBB); every entry point clips against the buffer bounds.

use image::{Rgba, RgbaImage};

#[inline]
fn argb_split(argb: u32) -> (u8, u8, u8, u8) {
    (
        ((argb >> 24) & 0xFF) as u8,
        ((argb >> 16) & 0xFF) as u8,
        ((argb >> 8) & 0xFF) as u8,
        (argb & 0xFF) as u8,
    )
}

fn clip(img: &RgbaImage, x: i32, y: i32, rw: i32, rh: i32) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = (img.width() as i32, img.height() as i32);

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + rw).min(w);
    let y1 = (y + rh).min(h);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Opaque fill; the colour's alpha byte is ignored.
pub(crate) fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, rw: i32, rh: i32, argb: u32) {
    let Some((x0, y0, x1, y1)) = clip(img, x, y, rw, rh) else {
        return;
    };

    let (_, r, g, b) = argb_split(argb);
    let px = Rgba([r, g, b, 255]);

    for yy in y0..y1 {
        for xx in x0..x1 {
            img.put_pixel(xx, yy, px);
        }
    }
}

/// Source-over blend of `argb` onto the rect.
pub(crate) fn blend_rect(img: &mut RgbaImage, x: i32, y: i32, rw: i32, rh: i32, argb: u32) {
    let Some((x0, y0, x1, y1)) = clip(img, x, y, rw, rh) else {
        return;
    };

    for yy in y0..y1 {
        for xx in x0..x1 {
            blend_over(img.get_pixel_mut(xx, yy), argb);
        }
    }
}

pub(crate) fn blend_over(dst: &mut Rgba<u8>, argb: u32) {
    let (sa, sr, sg, sb) = argb_split(argb);
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = Rgba([sr, sg, sb, 255]);
        return;
    }

    let sa = sa as u32;
    let inv = 255 - sa;

    let da = dst[3] as u32;
    let oa = (sa + (da * inv + 127) / 255).min(255);

    dst[0] = ((sr as u32 * sa + dst[0] as u32 * inv + 127) / 255) as u8;
    dst[1] = ((sg as u32 * sa + dst[1] as u32 * inv + 127) / 255) as u8;
    dst[2] = ((sb as u32 * sa + dst[2] as u32 * inv + 127) / 255) as u8;
    dst[3] = oa as u8;
}

/// A grip marker centered on (cx, cy): accent square with a white core.
pub(crate) fn draw_grip(img: &mut RgbaImage, cx: i32, cy: i32, size: i32, outer: u32, inner: u32) {
    let half = size / 2;
    let x = cx - half;
    let y = cy - half;

    fill_rect(img, x, y, size, size, outer);

    let rim = 2;
    let core = (size - 2 * rim).max(2);
    let ix = x + (size - core) / 2;
    let iy = y + (size - core) / 2;
    fill_rect(img, ix, iy, core, core, inner);
}
