// Author: Dustin Pilgrim
// License: MIT

pub mod error;
pub mod geometry;
pub mod handle;
pub mod rect;
pub mod state;

pub use error::GeometryError;
pub use geometry::{DisplayGeometry, SourceSize};
pub use handle::{CursorHint, Handle};
pub use rect::{CropRect, PixelRect};
pub use state::{EditorState, Interaction, PointerEvent};
