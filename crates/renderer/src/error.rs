//! Error type for the render entry points.

use profile_common::ProfileError;
use thiserror::Error;

use crate::png::PngError;

/// Raised before rendering starts (bad parameters or extent) or when an
/// output canvas cannot be created. Sample and triangle data never cause one.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Parameters(#[from] ProfileError),

    #[error("Failed to allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error(transparent)]
    Png(#[from] PngError),
}
