//! Profile image rendering for resistivity and chargeability sections.
//!
//! Two paths turn profile data into a false-color RGBA image:
//! - [`raster::render`]: scattered samples, gridded with inverse-distance
//!   weighting over a binned neighbor search and painted in square blocks
//! - [`mesh::render_mesh`]: inversion-mesh triangles, each flat-filled with
//!   its own value
//!
//! Both paths share the domain selection, palettes and colorbar, and return
//! a [`RenderOutput`] that can be encoded with [`PixelBuffer::to_png`].

pub mod buffer;
pub mod colorbar;
pub mod domain;
pub mod error;
pub mod idw;
pub mod mesh;
pub mod neighbors;
pub mod palette;
pub mod png;
pub mod raster;
pub mod spatial;

pub use buffer::PixelBuffer;
pub use colorbar::{format_tick, render_colorbar, tick_labels, Colorbar, TickLabel};
pub use domain::{compute_domain, Domain, DomainSelection, Scale};
pub use error::RenderError;
pub use mesh::render_mesh;
pub use palette::{color_at, Color, Palette};
pub use png::PngError;
pub use raster::{render, RenderOutput, RenderStats, ScreenTransform};
pub use spatial::BinGrid;
