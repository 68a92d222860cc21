// Author: Dustin Pilgrim
// License: MIT
//
// Crop editor engine: decode a source image, drive a pointer-based
// selection over a scaled display view, paint preview frames, and
// rasterize the selection once confirmed.

pub mod config;
pub mod error;
pub mod logging;
pub mod raster;
pub mod render;
pub mod session;
pub mod source;

pub use cropit_core::{
    CropRect, CursorHint, DisplayGeometry, EditorState, GeometryError, Handle, Interaction,
    PixelRect, PointerEvent, SourceSize,
};

pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use raster::{EncodedImage, OutputFormat, rasterize};
pub use render::{RenderStyle, Scene, paint};
pub use session::{EditorSession, SessionStatus};
pub use source::SourceImage;
