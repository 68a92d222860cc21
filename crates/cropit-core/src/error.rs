// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("source image has a zero dimension ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
}
