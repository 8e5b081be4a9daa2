//! Uniform bin grid over the visible profile.
//!
//! Built once per render pass and only read afterwards, so the raster
//! workers share it without locking.

use profile_common::{BoundingBox, Sample};

/// Default number of bins per axis.
pub const DEFAULT_BIN_COUNT: usize = 48;

/// `bins × bins` buckets of samples covering a bounding box.
///
/// Points outside the box are clamped into the edge bins rather than
/// rejected. Non-finite samples are left out.
#[derive(Debug, Clone)]
pub struct BinGrid {
    bbox: BoundingBox,
    bins: usize,
    cells: Vec<Vec<Sample>>,
    len: usize,
}

impl BinGrid {
    pub fn build(samples: &[Sample], bbox: &BoundingBox, bins: usize) -> Self {
        let bins = bins.max(1);
        let mut grid = Self {
            bbox: *bbox,
            bins,
            cells: vec![Vec::new(); bins * bins],
            len: 0,
        };

        for sample in samples.iter().filter(|s| s.is_finite()) {
            let (ix, iy) = grid.bin_index(sample.x, sample.y);
            grid.cells[ix * bins + iy].push(*sample);
            grid.len += 1;
        }

        grid
    }

    /// Bin holding `(x, y)`, clamped to the grid.
    pub fn bin_index(&self, x: f64, y: f64) -> (usize, usize) {
        (
            axis_index(x, self.bbox.min_x, self.bbox.max_x, self.bins),
            axis_index(y, self.bbox.min_y, self.bbox.max_y, self.bins),
        )
    }

    pub fn cell(&self, ix: usize, iy: usize) -> &[Sample] {
        &self.cells[ix * self.bins + iy]
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Number of indexed samples.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// `floor((v - min) / (max - min) * bins)` clamped to `0..bins`; a
/// zero-width axis puts everything in bin 0.
fn axis_index(v: f64, min: f64, max: f64, bins: usize) -> usize {
    let span = max - min;
    if span.is_nan() || span <= 0.0 || !v.is_finite() {
        return 0;
    }
    let scaled = ((v - min) / span * bins as f64).floor();
    scaled.clamp(0.0, (bins - 1) as f64) as usize
}
