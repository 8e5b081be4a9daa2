//! Small fixtures whose expected renders can be worked out by hand.

use profile_common::{BoundingBox, RenderParameters, Sample, Triangle};

/// Three samples at the corners of a unit right triangle.
pub fn three_point_samples() -> Vec<Sample> {
    vec![
        Sample::new(0.0, 0.0, 10.0),
        Sample::new(1.0, 0.0, 20.0),
        Sample::new(0.0, 1.0, 30.0),
    ]
}

/// A 200 m line surveyed down to 50 m.
pub fn profile_bbox() -> BoundingBox {
    BoundingBox::new(0.0, -50.0, 200.0, 0.0)
}

/// Two triangles tiling the square `[0, size] × [0, size]`, split along the
/// falling diagonal. The upper-left half carries `upper`, the lower-right
/// half carries `lower`.
pub fn split_square(size: f64, upper: f64, lower: f64) -> Vec<Triangle> {
    vec![
        Triangle::new((0.0, 0.0), (0.0, size), (size, size), upper),
        Triangle::new((0.0, 0.0), (size, size), (size, 0.0), lower),
    ]
}

/// Default parameters resized to `width × height` with the given block size.
pub fn params_with(width: u32, height: u32, block_size_px: u32) -> RenderParameters {
    RenderParameters {
        output_width_px: width,
        output_height_px: height,
        block_size_px,
        ..RenderParameters::default()
    }
}
