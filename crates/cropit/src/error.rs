// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("image decode failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("image encode failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error(transparent)]
    Geometry(#[from] cropit_core::GeometryError),

    #[error("{0}")]
    Config(String),

    #[error("logging init failed: {0}")]
    Logging(String),

    #[error("editor session already finished")]
    Finished,
}
