// Author: Dustin Pilgrim
// License: MIT
//
// One editing session: owns the decoded source, the display geometry, the
// cached base frame and the interaction state. When the session ends the
// embedding application gets either an encoded crop or a cancel callback,
// never both, never twice.

use std::mem;

use eventline::{debug, error, info};
use image::RgbaImage;

use cropit_core::{CropRect, CursorHint, DisplayGeometry, EditorState, PointerEvent};

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::raster::{EncodedImage, rasterize};
use crate::render::{RenderStyle, Scene, paint};
use crate::source::SourceImage;

pub type CropCallback = Box<dyn FnOnce(EncodedImage)>;
pub type CancelCallback = Box<dyn FnOnce()>;

/// Numbers for a status readout next to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub selection_w: u32,
    pub selection_h: u32,
    pub source_w: u32,
    pub source_h: u32,
    pub display_w: u32,
    pub display_h: u32,
}

pub struct EditorSession {
    config: EditorConfig,
    source: SourceImage,
    geometry: DisplayGeometry,
    display_base: RgbaImage,
    state: EditorState,
    style: RenderStyle,
    on_crop: Option<CropCallback>,
    on_cancel: Option<CancelCallback>,
    finished: bool,
}

impl EditorSession {
    /// Decode `blob` and start a session over it.
    pub fn open(blob: &[u8], config: EditorConfig) -> Result<Self> {
        let source = SourceImage::decode(blob)?;
        let geometry = DisplayGeometry::fit(source.size(), config.max_display)?;
        let state = EditorState::new(
            source.size(),
            config.default_crop_size,
            config.min_crop_size,
            config.handle_hit,
        );
        let display_base = source.display_base(&geometry);
        let style = RenderStyle::from(&config);

        info!(
            "session opened: source {}x{}, display {:.0}x{:.0}, scale {:.3}",
            source.width(),
            source.height(),
            geometry.display_width(),
            geometry.display_height(),
            geometry.scale()
        );

        Ok(Self {
            config,
            source,
            geometry,
            display_base,
            state,
            style,
            on_crop: None,
            on_cancel: None,
            finished: false,
        })
    }

    /// Receives the encoded crop when the user confirms.
    pub fn set_on_crop(&mut self, callback: impl FnOnce(EncodedImage) + 'static) {
        self.on_crop = Some(Box::new(callback));
    }

    /// Fires when the user cancels, at most once.
    pub fn set_on_cancel(&mut self, callback: impl FnOnce() + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    /// Feed one display-space pointer event through the reducer. Events
    /// arriving after the session finished are dropped.
    pub fn pointer(&mut self, event: PointerEvent) {
        if self.finished {
            return;
        }

        let before = self.state.interaction();
        self.state.pointer_event(event, &self.geometry);
        let after = self.state.interaction();

        if mem::discriminant(&before) != mem::discriminant(&after) {
            debug!("interaction: {:?} -> {:?}", before, after);
        }
    }

    pub fn crop_rect(&self) -> CropRect {
        self.state.crop()
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn cursor_hint(&self, x: f32, y: f32) -> CursorHint {
        self.state.cursor_hint(x, y, &self.geometry)
    }

    pub fn scene(&self) -> Scene {
        let crop = self.state.crop();
        Scene::build(&self.geometry, &crop, &self.style)
    }

    /// Current preview frame: the cached base with chrome painted on top.
    pub fn preview(&self) -> RgbaImage {
        paint(&self.display_base, &self.scene())
    }

    pub fn status(&self) -> SessionStatus {
        let crop = self.state.crop();
        SessionStatus {
            selection_w: crop.w.round() as u32,
            selection_h: crop.h.round() as u32,
            source_w: self.source.width(),
            source_h: self.source.height(),
            display_w: self.geometry.display_width().round() as u32,
            display_h: self.geometry.display_height().round() as u32,
        }
    }

    /// Rasterize the selection and finish the session. On encode failure
    /// the session stays open so the user can adjust and try again.
    pub fn confirm(&mut self) -> Result<()> {
        if self.finished {
            return Err(EditorError::Finished);
        }

        let crop = self.state.crop();
        let encoded = match rasterize(&self.source, &crop, self.config.output) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!("rasterize failed: {e}");
                return Err(e);
            }
        };

        self.finished = true;
        info!(
            "crop confirmed: {}x{} at ({}, {}), {} bytes",
            encoded.width,
            encoded.height,
            crop.x.round(),
            crop.y.round(),
            encoded.bytes.len()
        );

        if let Some(callback) = self.on_crop.take() {
            callback(encoded);
        }

        Ok(())
    }

    /// Finish without producing output. Repeat calls are no-ops.
    pub fn cancel(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        info!("session cancelled");

        if let Some(callback) = self.on_cancel.take() {
            callback();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(w, h, Rgba([120u8, 80, 40, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn open_centers_the_selection_and_reports_status() {
        let session = EditorSession::open(&png_bytes(1200, 800), EditorConfig::default()).unwrap();

        assert_eq!(
            session.crop_rect(),
            CropRect { x: 500.0, y: 300.0, w: 200.0, h: 200.0 }
        );
        assert_eq!(
            session.status(),
            SessionStatus {
                selection_w: 200,
                selection_h: 200,
                source_w: 1200,
                source_h: 800,
                display_w: 600,
                display_h: 400,
            }
        );
    }

    #[test]
    fn undecodable_blob_is_rejected() {
        // The session holds boxed callbacks, so match on the Result directly.
        let result = EditorSession::open(b"not an image", EditorConfig::default());
        assert!(matches!(result, Err(EditorError::Decode(_))));
    }

    #[test]
    fn preview_matches_the_display_size() {
        let session = EditorSession::open(&png_bytes(1200, 800), EditorConfig::default()).unwrap();
        assert_eq!(session.preview().dimensions(), (600, 400));
    }

    #[test]
    fn cursor_hint_passes_through_display_coordinates() {
        let session = EditorSession::open(&png_bytes(1200, 800), EditorConfig::default()).unwrap();

        // Bottom-right grip: source (700, 500), display (350, 250).
        assert_eq!(session.cursor_hint(350.0, 250.0), CursorHint::SeResize);
        assert_eq!(session.cursor_hint(10.0, 10.0), CursorHint::Default);
    }

    #[test]
    fn pointer_events_after_finish_are_dropped() {
        let mut session =
            EditorSession::open(&png_bytes(400, 300), EditorConfig::default()).unwrap();
        let before = session.crop_rect();

        session.cancel();
        session.pointer(PointerEvent::Pressed { x: 150.0, y: 120.0 });
        session.pointer(PointerEvent::Moved { x: 300.0, y: 250.0 });

        assert_eq!(session.crop_rect(), before);
        assert!(session.is_finished());
    }
}
