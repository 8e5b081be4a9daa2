//! Scattered-sample profile rendering.
//!
//! The output image is walked in square blocks of `block_size_px`. Each
//! block's center is mapped back to data space, its neighbors are pulled
//! from the bin grid, an IDW value is computed and the whole block is
//! painted with that value's color. Block rows are independent and are
//! painted in parallel over disjoint row bands.

use std::time::Instant;

use profile_common::{BoundingBox, Palette, ProfileError, RenderParameters, Sample};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::colorbar::{render_colorbar, Colorbar};
use crate::domain::{compute_domain, Domain, DomainSelection};
use crate::error::RenderError;
use crate::idw::idw;
use crate::neighbors::k_nearest;
use crate::palette::{color_at, Color};
use crate::spatial::BinGrid;

/// Linear mapping between the visible data extent and pixel space.
///
/// X grows to the right; Y is inverted so `max_y` lands on row 0 and deeper
/// values render further down.
#[derive(Debug, Clone, Copy)]
pub struct ScreenTransform {
    visible: BoundingBox,
    width: f64,
    height: f64,
}

impl ScreenTransform {
    pub fn new(visible: BoundingBox, width: u32, height: u32) -> Self {
        Self {
            visible,
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn visible(&self) -> &BoundingBox {
        &self.visible
    }

    /// Data coordinates to pixel coordinates. A zero-size data axis maps to
    /// the middle of the image.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let span_x = self.visible.width();
        let span_y = self.visible.height();
        let px = if span_x > 0.0 {
            (x - self.visible.min_x) / span_x * self.width
        } else {
            self.width / 2.0
        };
        let py = if span_y > 0.0 {
            (self.visible.max_y - y) / span_y * self.height
        } else {
            self.height / 2.0
        };
        (px, py)
    }

    /// Pixel coordinates to data coordinates.
    pub fn to_data(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.visible.min_x + px / self.width * self.visible.width(),
            self.visible.max_y - py / self.height * self.visible.height(),
        )
    }
}

/// Bookkeeping from one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RenderStats {
    /// Samples or triangles handed in.
    pub inputs: usize,
    /// Blocks evaluated (scattered path only).
    pub blocks: usize,
    /// Blocks left transparent because no neighbor was found.
    pub no_data_blocks: usize,
    /// Inputs dropped for non-finite coordinates or values.
    pub skipped: usize,
    /// Triangles dropped by the curtain clip (mesh path only).
    pub clipped: usize,
    pub elapsed_ms: f64,
}

/// Profile image, its legend and the domain both were painted with.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: PixelBuffer,
    pub colorbar: Colorbar,
    pub selection: DomainSelection,
    pub stats: RenderStats,
}

/// Render scattered samples over `bbox`.
///
/// Samples with non-finite fields are ignored. Blocks with no neighbor in
/// reach stay transparent.
pub fn render(
    samples: &[Sample],
    bbox: &BoundingBox,
    params: &RenderParameters,
) -> Result<RenderOutput, RenderError> {
    let started = Instant::now();
    check_inputs(bbox, params)?;

    let values: Vec<f64> = samples
        .iter()
        .filter(|s| s.is_finite())
        .map(|s| s.value)
        .collect();
    let selection = select_domain(&values, params);

    let visible = bbox.clip_x(params.clip_left_right_percent);
    let grid = BinGrid::build(samples, &visible, params.bin_count);
    let sampler = BlockSampler {
        grid: &grid,
        transform: ScreenTransform::new(visible, params.output_width_px, params.output_height_px),
        domain: selection.domain,
        palette: params.palette,
        k: params.neighbor_count,
        max_ring: params.max_ring,
    };

    let width = params.output_width_px as usize;
    let block = params.block_size_px as usize;
    let mut image = PixelBuffer::new(params.output_width_px, params.output_height_px);

    let (blocks, no_data_blocks) = image
        .data_mut()
        .par_chunks_mut(width * 4 * block)
        .enumerate()
        .map(|(band, rows)| sampler.paint_band(rows, band * block, width, block))
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    let colorbar = render_colorbar(
        &selection.domain,
        params.palette,
        params.colorbar_width_px,
        params.colorbar_height_px,
    );

    let stats = RenderStats {
        inputs: samples.len(),
        blocks,
        no_data_blocks,
        skipped: samples.len() - grid.len(),
        clipped: 0,
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    };

    debug!(
        samples = stats.inputs,
        indexed = grid.len(),
        block_size = params.block_size_px,
        blocks = stats.blocks,
        no_data_blocks = stats.no_data_blocks,
        domain_low = selection.domain.low,
        domain_high = selection.domain.high,
        scale = ?selection.domain.scale,
        elapsed_ms = stats.elapsed_ms,
        "Rendered scattered profile"
    );

    Ok(RenderOutput {
        image,
        colorbar,
        selection,
        stats,
    })
}

/// Interpolated value at a data-space point, or `None` for no data.
pub fn interpolate(grid: &BinGrid, x: f64, y: f64, k: usize, max_ring: usize) -> Option<f64> {
    let candidates = k_nearest(grid, x, y, k, max_ring);
    idw(x, y, &candidates, k)
}

/// Read-only state shared by every band worker.
struct BlockSampler<'a> {
    grid: &'a BinGrid,
    transform: ScreenTransform,
    domain: Domain,
    palette: Palette,
    k: usize,
    max_ring: usize,
}

impl BlockSampler<'_> {
    fn color_at_pixel(&self, px: f64, py: f64) -> Color {
        let (x, y) = self.transform.to_data(px, py);
        match interpolate(self.grid, x, y, self.k, self.max_ring) {
            Some(value) => color_at(value, &self.domain, self.palette),
            None => Color::transparent(),
        }
    }

    /// Paint one band of up to `block` rows starting at row `top`.
    /// Returns `(blocks, no_data_blocks)`.
    fn paint_band(&self, rows: &mut [u8], top: usize, width: usize, block: usize) -> (usize, usize) {
        let row_bytes = width * 4;
        let band_height = rows.len() / row_bytes;
        let center_y = top as f64 + band_height as f64 / 2.0;

        let mut blocks = 0;
        let mut no_data = 0;
        for left in (0..width).step_by(block) {
            let block_width = block.min(width - left);
            let center_x = left as f64 + block_width as f64 / 2.0;
            blocks += 1;

            let color = self.color_at_pixel(center_x, center_y);
            if color.is_transparent() {
                no_data += 1;
                continue;
            }

            let rgba = color.to_array();
            for row in rows.chunks_exact_mut(row_bytes) {
                for px in row[left * 4..(left + block_width) * 4].chunks_exact_mut(4) {
                    px.copy_from_slice(&rgba);
                }
            }
        }

        (blocks, no_data)
    }
}

pub(crate) fn check_inputs(bbox: &BoundingBox, params: &RenderParameters) -> Result<(), RenderError> {
    params.validate()?;
    if !bbox.is_valid() {
        return Err(ProfileError::InvalidBbox(format!(
            "{},{},{},{}",
            bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
        ))
        .into());
    }
    Ok(())
}

pub(crate) fn select_domain(values: &[f64], params: &RenderParameters) -> DomainSelection {
    let selection = compute_domain(values, params.domain_clip, params.use_log_scale);
    if selection.log_fallback {
        warn!(
            values = values.len(),
            "No positive values for log scale, using a linear domain"
        );
    }
    selection
}
