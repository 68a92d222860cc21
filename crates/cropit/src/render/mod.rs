// Author: Dustin Pilgrim
// License: MIT
//
// Preview rendering: a pure scene description plus a software compositor
// that paints it over the cached display-size base image.

mod paint;
mod pixels;
mod scene;

pub use paint::paint;
pub use scene::{GripMark, Quad, RenderStyle, Scene};
