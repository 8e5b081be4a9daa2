//! Synthetic profile data.
//!
//! The layered generators describe a three-layer earth: a moderately
//! resistive cover, a conductive middle layer and a resistive basement.
//! Depths are negative `y` values with the surface at `y = 0`.

use profile_common::{BoundingBox, Sample, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Resistivity (ohm·m) of the layer at depth `y`.
pub fn layered_resistivity(y: f64) -> f64 {
    if y > -10.0 {
        100.0
    } else if y > -30.0 {
        10.0
    } else {
        1000.0
    }
}

/// A pseudo-section: `columns × rows` samples on a regular grid.
///
/// Columns are `spacing` apart starting at `x = 0`; rows start half a
/// spacing below the surface.
pub fn layered_section_samples(columns: usize, rows: usize, spacing: f64) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(columns * rows);
    for col in 0..columns {
        for row in 0..rows {
            let x = col as f64 * spacing;
            let y = -(row as f64 + 0.5) * spacing;
            samples.push(Sample::new(x, y, layered_resistivity(y)));
        }
    }
    samples
}

/// A rectangular mesh of `columns × rows` cells of `cell` size, each split
/// into two triangles along its rising diagonal.
pub fn layered_mesh(columns: usize, rows: usize, cell: f64) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(columns * rows * 2);
    for col in 0..columns {
        for row in 0..rows {
            let x0 = col as f64 * cell;
            let x1 = x0 + cell;
            let y0 = -(row as f64) * cell;
            let y1 = y0 - cell;
            let value = layered_resistivity((y0 + y1) / 2.0);
            triangles.push(Triangle::new((x0, y1), (x1, y1), (x1, y0), value));
            triangles.push(Triangle::new((x0, y1), (x1, y0), (x0, y0), value));
        }
    }
    triangles
}

/// `count` uniformly scattered samples inside `bbox` with values in
/// `[min_value, max_value)`. The same seed always yields the same samples.
pub fn random_samples(
    count: usize,
    bbox: &BoundingBox,
    min_value: f64,
    max_value: f64,
    seed: u64,
) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Sample::new(
                rng.gen_range(bbox.min_x..bbox.max_x),
                rng.gen_range(bbox.min_y..bbox.max_y),
                rng.gen_range(min_value..max_value),
            )
        })
        .collect()
}

/// `count - 1` copies of `base` followed by a single `outlier`.
pub fn values_with_outlier(count: usize, base: f64, outlier: f64) -> Vec<f64> {
    let mut values = vec![base; count.saturating_sub(1)];
    values.push(outlier);
    values
}
