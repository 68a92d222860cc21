// Author: Dustin Pilgrim
// License: MIT
//
// Pointer interaction state machine. All pointer events funnel through one
// reducer so the rect invariants are enforced in a single place instead of
// being scattered across event handlers.
//
// Gesture model:
// - press on a grip: resize, incremental deltas (anchor follows the pointer)
// - press inside the rect: move, keeping the grab offset
// - press outside: nothing
// - release or leave: back to idle, whatever was in progress

use serde::{Deserialize, Serialize};

use crate::geometry::{DisplayGeometry, SourceSize};
use crate::handle::{CursorHint, Handle};
use crate::rect::CropRect;

/// Pointer events in display-space coordinates, as delivered by whatever
/// surface hosts the editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Released,
    Left,
}

/// Offsets and anchors are in source-pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Interaction {
    Idle,
    Dragging { offset: (f32, f32) },
    Resizing { handle: Handle, anchor: (f32, f32) },
}

#[derive(Debug, Clone)]
pub struct EditorState {
    crop: CropRect,
    interaction: Interaction,
    source: SourceSize,
    min_size: f32,
    handle_hit: f32,
}

/// Minimum selection size for a session. Sources smaller than the nominal
/// minimum shrink it so the selection always fits the image.
pub fn effective_min_size(source: SourceSize, nominal: f32) -> f32 {
    nominal.min(source.w as f32).min(source.h as f32).max(1.0)
}

impl EditorState {
    /// `handle_hit` is the grip hotspot size in display pixels; it widens in
    /// source space as the image is scaled down.
    pub fn new(source: SourceSize, default_size: f32, min_size: f32, handle_hit: f32) -> Self {
        let min_size = effective_min_size(source, min_size);

        Self {
            crop: CropRect::centered_in(source, default_size, min_size),
            interaction: Interaction::Idle,
            source,
            min_size,
            handle_hit,
        }
    }

    pub fn crop(&self) -> CropRect {
        self.crop
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    /// The reducer. Consumes one pointer event and updates crop and
    /// interaction together.
    pub fn pointer_event(&mut self, event: PointerEvent, geometry: &DisplayGeometry) {
        match event {
            PointerEvent::Pressed { x, y } => {
                let (px, py) = geometry.to_source_point(x, y);
                let half_extent = self.handle_hit / geometry.scale() / 2.0;

                if let Some(handle) = Handle::at_point(&self.crop, px, py, half_extent) {
                    self.interaction = Interaction::Resizing {
                        handle,
                        anchor: (px, py),
                    };
                } else if self.crop.contains(px, py) {
                    self.interaction = Interaction::Dragging {
                        offset: (px - self.crop.x, py - self.crop.y),
                    };
                }
                // Outside the rect and every grip: stay idle.
            }

            PointerEvent::Moved { x, y } => {
                let (px, py) = geometry.to_source_point(x, y);

                match self.interaction {
                    Interaction::Dragging { offset } => {
                        self.crop.move_to(px - offset.0, py - offset.1, self.source);
                    }
                    Interaction::Resizing { handle, anchor } => {
                        let dx = px - anchor.0;
                        let dy = py - anchor.1;
                        self.crop.resize_from(handle, dx, dy, self.min_size, self.source);
                        self.interaction = Interaction::Resizing {
                            handle,
                            anchor: (px, py),
                        };
                    }
                    Interaction::Idle => {}
                }
            }

            PointerEvent::Released | PointerEvent::Left => {
                self.interaction = Interaction::Idle;
            }
        }
    }

    /// Cursor for a display-space position: the active gesture wins, idle
    /// falls back to a hit-test.
    pub fn cursor_hint(&self, x: f32, y: f32, geometry: &DisplayGeometry) -> CursorHint {
        match self.interaction {
            Interaction::Resizing { handle, .. } => handle.cursor(),
            Interaction::Dragging { .. } => CursorHint::Move,
            Interaction::Idle => {
                let (px, py) = geometry.to_source_point(x, y);
                let half_extent = self.handle_hit / geometry.scale() / 2.0;

                if let Some(handle) = Handle::at_point(&self.crop, px, py, half_extent) {
                    handle.cursor()
                } else if self.crop.contains(px, py) {
                    CursorHint::Move
                } else {
                    CursorHint::Default
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MAX_DISPLAY_SIZE;
    use crate::rect::{DEFAULT_CROP_SIZE, MIN_CROP_SIZE};

    const HIT: f32 = 20.0;

    fn editor(w: u32, h: u32) -> (EditorState, DisplayGeometry) {
        let source = SourceSize::new(w, h);
        let geometry = DisplayGeometry::fit(source, MAX_DISPLAY_SIZE).unwrap();
        let state = EditorState::new(source, DEFAULT_CROP_SIZE, MIN_CROP_SIZE, HIT);
        (state, geometry)
    }

    fn press(state: &mut EditorState, geometry: &DisplayGeometry, x: f32, y: f32) {
        state.pointer_event(PointerEvent::Pressed { x, y }, geometry);
    }

    fn moved(state: &mut EditorState, geometry: &DisplayGeometry, x: f32, y: f32) {
        state.pointer_event(PointerEvent::Moved { x, y }, geometry);
    }

    #[test]
    fn press_on_grip_starts_resizing() {
        // 400x300 stays below the display bound, so display == source.
        let (mut state, geometry) = editor(400, 300);
        assert_eq!(state.crop(), CropRect { x: 100.0, y: 50.0, w: 200.0, h: 200.0 });

        press(&mut state, &geometry, 300.0, 250.0);
        assert!(matches!(
            state.interaction(),
            Interaction::Resizing { handle: Handle::BottomRight, .. }
        ));
    }

    #[test]
    fn press_inside_starts_dragging_with_offset() {
        let (mut state, geometry) = editor(400, 300);

        press(&mut state, &geometry, 150.0, 120.0);
        assert_eq!(
            state.interaction(),
            Interaction::Dragging { offset: (50.0, 70.0) }
        );
    }

    #[test]
    fn press_outside_is_a_no_op() {
        let (mut state, geometry) = editor(400, 300);
        let before = state.crop();

        press(&mut state, &geometry, 10.0, 10.0);
        assert_eq!(state.interaction(), Interaction::Idle);

        // Moving afterwards must not disturb the rect either.
        moved(&mut state, &geometry, 200.0, 200.0);
        assert_eq!(state.crop(), before);
    }

    #[test]
    fn drag_follows_the_pointer_and_clamps() {
        let (mut state, geometry) = editor(400, 300);

        press(&mut state, &geometry, 150.0, 120.0);
        moved(&mut state, &geometry, 120.0, 100.0);
        assert_eq!(state.crop(), CropRect { x: 70.0, y: 30.0, w: 200.0, h: 200.0 });

        // Keep dragging far past the left edge: origin pins at zero, the
        // dimensions stay put.
        moved(&mut state, &geometry, -300.0, 100.0);
        assert_eq!(state.crop(), CropRect { x: 0.0, y: 30.0, w: 200.0, h: 200.0 });
    }

    #[test]
    fn resize_applies_incremental_deltas() {
        let (mut state, geometry) = editor(400, 300);

        press(&mut state, &geometry, 300.0, 250.0);

        // Overshoot to the right; width clamps to the source.
        moved(&mut state, &geometry, 600.0, 250.0);
        assert_eq!(state.crop(), CropRect { x: 0.0, y: 50.0, w: 400.0, h: 200.0 });

        // Coming back must move relative to the *last* pointer position,
        // not the gesture start.
        moved(&mut state, &geometry, 450.0, 250.0);
        assert_eq!(state.crop(), CropRect { x: 0.0, y: 50.0, w: 250.0, h: 200.0 });
    }

    #[test]
    fn release_and_leave_always_reset() {
        let (mut state, geometry) = editor(400, 300);

        press(&mut state, &geometry, 300.0, 250.0);
        state.pointer_event(PointerEvent::Released, &geometry);
        assert_eq!(state.interaction(), Interaction::Idle);

        press(&mut state, &geometry, 150.0, 120.0);
        state.pointer_event(PointerEvent::Left, &geometry);
        assert_eq!(state.interaction(), Interaction::Idle);
    }

    #[test]
    fn scaled_display_converts_before_hit_testing() {
        // 1200x800 shows at 600x400, scale 0.5. The centered 200px crop
        // sits at (500, 300) in source space, (250, 150) on screen.
        let (mut state, geometry) = editor(1200, 800);
        assert_eq!(geometry.scale(), 0.5);
        assert_eq!(state.crop(), CropRect { x: 500.0, y: 300.0, w: 200.0, h: 200.0 });

        // Bottom-right grip at source (700, 500) = display (350, 250).
        press(&mut state, &geometry, 350.0, 250.0);
        assert!(matches!(
            state.interaction(),
            Interaction::Resizing { handle: Handle::BottomRight, .. }
        ));

        // 40 display pixels are 80 source pixels.
        moved(&mut state, &geometry, 390.0, 270.0);
        assert_eq!(state.crop(), CropRect { x: 500.0, y: 300.0, w: 280.0, h: 240.0 });
    }

    #[test]
    fn tiny_source_shrinks_the_minimum() {
        let source = SourceSize::new(30, 40);
        let geometry = DisplayGeometry::fit(source, MAX_DISPLAY_SIZE).unwrap();
        let mut state = EditorState::new(source, DEFAULT_CROP_SIZE, MIN_CROP_SIZE, HIT);

        assert_eq!(state.min_size(), 30.0);
        assert_eq!(state.crop(), CropRect { x: 0.0, y: 5.0, w: 30.0, h: 30.0 });

        // Shrinking below the effective minimum floors there and stays
        // inside the image.
        press(&mut state, &geometry, 30.0, 35.0);
        moved(&mut state, &geometry, 0.0, 0.0);
        let crop = state.crop();
        assert!(crop.w >= 30.0 && crop.h >= 30.0);
        assert!(crop.x >= 0.0 && crop.y >= 0.0);
        assert!(crop.right() <= 30.0 && crop.bottom() <= 40.0);
    }

    #[test]
    fn cursor_hints_follow_position_and_gesture() {
        let (mut state, geometry) = editor(400, 300);

        assert_eq!(state.cursor_hint(300.0, 250.0, &geometry), CursorHint::SeResize);
        assert_eq!(state.cursor_hint(200.0, 150.0, &geometry), CursorHint::Move);
        assert_eq!(state.cursor_hint(10.0, 10.0, &geometry), CursorHint::Default);

        // While dragging, the move cursor sticks even over a grip.
        press(&mut state, &geometry, 150.0, 120.0);
        assert_eq!(state.cursor_hint(300.0, 250.0, &geometry), CursorHint::Move);
    }
}
