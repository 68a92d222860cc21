// Author: Dustin Pilgrim
// License: MIT
//
// Display-space description of one editor frame: where the selection sits,
// which regions get dimmed, where the border strips, thirds guides and
// grips go. Pure geometry so a frame can be asserted in tests without
// touching pixels.

use cropit_core::{CropRect, DisplayGeometry, Handle};

use crate::config::EditorConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GripMark {
    pub handle: Handle,
    pub x: f32,
    pub y: f32,
}

/// Chrome settings the embedding app can override through config.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    pub accent_argb: u32,
    pub border_thickness: i32,
    pub handle_size: i32,
}

impl From<&EditorConfig> for RenderStyle {
    fn from(cfg: &EditorConfig) -> Self {
        Self {
            accent_argb: cfg.accent_colour,
            border_thickness: cfg.border_thickness,
            handle_size: cfg.handle_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport_w: u32,
    pub viewport_h: u32,
    /// Selection rect in display space.
    pub crop: Quad,
    /// Dimmed regions outside the selection, at most four.
    pub shade: Vec<Quad>,
    /// Border strips drawn inward from the selection edges: top, bottom,
    /// left, right.
    pub border: [Quad; 4],
    /// Rule-of-thirds guides inside the selection: two vertical strips,
    /// then two horizontal, each one display pixel thick.
    pub guides: [Quad; 4],
    /// Grip markers in hit-test order.
    pub grips: [GripMark; 8],
    /// Painted grip side, display pixels.
    pub grip_size: f32,
    pub accent_argb: u32,
}

impl Scene {
    pub fn build(geometry: &DisplayGeometry, crop: &CropRect, style: &RenderStyle) -> Self {
        let vw = geometry.display_width();
        let vh = geometry.display_height();

        let (cx, cy) = geometry.to_display_point(crop.x, crop.y);
        let cw = crop.w * geometry.scale();
        let ch = crop.h * geometry.scale();

        let crop_quad = Quad {
            x: cx,
            y: cy,
            w: cw,
            h: ch,
        };

        // Top and bottom strips run the full viewport width; left and right
        // fill the remaining bands beside the selection.
        let mut shade = Vec::with_capacity(4);
        if cy > 0.0 {
            shade.push(Quad {
                x: 0.0,
                y: 0.0,
                w: vw,
                h: cy,
            });
        }
        if cy + ch < vh {
            shade.push(Quad {
                x: 0.0,
                y: cy + ch,
                w: vw,
                h: vh - (cy + ch),
            });
        }
        if cx > 0.0 {
            shade.push(Quad {
                x: 0.0,
                y: cy,
                w: cx,
                h: ch,
            });
        }
        if cx + cw < vw {
            shade.push(Quad {
                x: cx + cw,
                y: cy,
                w: vw - (cx + cw),
                h: ch,
            });
        }

        let t = style.border_thickness as f32;
        let border = [
            Quad {
                x: cx,
                y: cy,
                w: cw,
                h: t,
            },
            Quad {
                x: cx,
                y: cy + ch - t,
                w: cw,
                h: t,
            },
            Quad {
                x: cx,
                y: cy,
                w: t,
                h: ch,
            },
            Quad {
                x: cx + cw - t,
                y: cy,
                w: t,
                h: ch,
            },
        ];

        let guides = [
            Quad {
                x: cx + cw / 3.0,
                y: cy,
                w: 1.0,
                h: ch,
            },
            Quad {
                x: cx + cw * 2.0 / 3.0,
                y: cy,
                w: 1.0,
                h: ch,
            },
            Quad {
                x: cx,
                y: cy + ch / 3.0,
                w: cw,
                h: 1.0,
            },
            Quad {
                x: cx,
                y: cy + ch * 2.0 / 3.0,
                w: cw,
                h: 1.0,
            },
        ];

        let grips = Handle::ALL.map(|handle| {
            let (sx, sy) = handle.anchor(crop);
            let (x, y) = geometry.to_display_point(sx, sy);
            GripMark { handle, x, y }
        });

        Self {
            viewport_w: vw.round() as u32,
            viewport_h: vh.round() as u32,
            crop: crop_quad,
            shade,
            border,
            guides,
            grips,
            grip_size: style.handle_size as f32,
            accent_argb: style.accent_argb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropit_core::SourceSize;
    use cropit_core::geometry::MAX_DISPLAY_SIZE;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn style() -> RenderStyle {
        RenderStyle {
            accent_argb: 0xFF0A_84FF,
            border_thickness: 2,
            handle_size: 8,
        }
    }

    fn scene_for(crop: CropRect) -> Scene {
        let geometry =
            DisplayGeometry::fit(SourceSize::new(1200, 800), MAX_DISPLAY_SIZE).unwrap();
        Scene::build(&geometry, &crop, &style())
    }

    #[test]
    fn shade_tiles_everything_outside_the_selection() {
        let scene = scene_for(CropRect {
            x: 200.0,
            y: 100.0,
            w: 400.0,
            h: 300.0,
        });

        assert_eq!((scene.viewport_w, scene.viewport_h), (600, 400));
        assert_eq!(
            scene.crop,
            Quad {
                x: 100.0,
                y: 50.0,
                w: 200.0,
                h: 150.0
            }
        );
        assert_eq!(scene.shade.len(), 4);

        let shade_area: f32 = scene.shade.iter().map(|q| q.w * q.h).sum();
        let crop_area = scene.crop.w * scene.crop.h;
        assert!(close(shade_area + crop_area, 600.0 * 400.0));
    }

    #[test]
    fn full_frame_selection_has_no_shade() {
        let scene = scene_for(CropRect {
            x: 0.0,
            y: 0.0,
            w: 1200.0,
            h: 800.0,
        });
        assert!(scene.shade.is_empty());
    }

    #[test]
    fn border_strips_hug_the_selection_edges() {
        let scene = scene_for(CropRect {
            x: 200.0,
            y: 100.0,
            w: 400.0,
            h: 300.0,
        });

        let [top, bottom, left, right] = scene.border;
        assert_eq!(top, Quad { x: 100.0, y: 50.0, w: 200.0, h: 2.0 });
        assert_eq!(bottom, Quad { x: 100.0, y: 198.0, w: 200.0, h: 2.0 });
        assert_eq!(left, Quad { x: 100.0, y: 50.0, w: 2.0, h: 150.0 });
        assert_eq!(right, Quad { x: 298.0, y: 50.0, w: 2.0, h: 150.0 });
    }

    #[test]
    fn guides_sit_at_the_thirds() {
        let scene = scene_for(CropRect {
            x: 200.0,
            y: 100.0,
            w: 400.0,
            h: 300.0,
        });
        let [v1, v2, h1, h2] = scene.guides;

        assert!(close(v1.x, 100.0 + 200.0 / 3.0));
        assert!(close(v2.x, 100.0 + 400.0 / 3.0));
        assert!(close(v1.h, 150.0) && close(v2.h, 150.0));

        assert!(close(h1.y, 50.0 + 50.0));
        assert!(close(h2.y, 50.0 + 100.0));
        assert!(close(h1.w, 200.0) && close(h2.w, 200.0));
    }

    #[test]
    fn grips_cover_corners_and_midpoints_in_order() {
        let scene = scene_for(CropRect {
            x: 200.0,
            y: 100.0,
            w: 400.0,
            h: 300.0,
        });

        assert_eq!(scene.grips.len(), 8);
        assert_eq!(scene.grip_size, 8.0);

        assert_eq!(scene.grips[0].handle, Handle::TopLeft);
        assert_eq!((scene.grips[0].x, scene.grips[0].y), (100.0, 50.0));

        assert_eq!(scene.grips[3].handle, Handle::BottomRight);
        assert_eq!((scene.grips[3].x, scene.grips[3].y), (300.0, 200.0));

        assert_eq!(scene.grips[7].handle, Handle::Right);
        assert_eq!((scene.grips[7].x, scene.grips[7].y), (300.0, 125.0));
    }
}
