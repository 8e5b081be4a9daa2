//! Common types shared by the profile imaging crates.
//!
//! Holds the data model consumed by the renderer (samples, mesh triangles,
//! bounding boxes), the render parameters and the adapters that turn
//! ingested records into render inputs.

pub mod bbox;
pub mod error;
pub mod palette;
pub mod params;
pub mod records;
pub mod sample;

pub use bbox::BoundingBox;
pub use error::{ProfileError, ProfileResult};
pub use palette::Palette;
pub use params::RenderParameters;
pub use records::{
    available_fields, samples_from_records, triangles_from_records, PointRecord, TriangleRecord,
    ValueColumns, ValueField,
};
pub use sample::{Sample, Triangle};
