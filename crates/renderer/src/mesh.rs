//! Inversion-mesh rendering.
//!
//! Each triangle is filled with the flat color of its own value, with no
//! interpolation across triangles. Anti-aliasing is off so shared edges do
//! not bleed into each other. Later triangles paint over earlier ones where
//! their fills overlap.

use std::time::Instant;

use profile_common::{BoundingBox, RenderParameters, Triangle};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::colorbar::render_colorbar;
use crate::error::RenderError;
use crate::palette::color_at;
use crate::raster::{check_inputs, select_domain, RenderOutput, RenderStats, ScreenTransform};

/// Wireframe overlay color, translucent black.
pub const WIREFRAME_RGBA: [u8; 4] = [0, 0, 0, 64];

/// Wireframe stroke width in pixels.
pub const WIREFRAME_WIDTH: f32 = 0.5;

/// Render mesh triangles over `bbox`.
///
/// Triangles with a non-finite vertex or value are skipped, as are triangles
/// whose centroid falls outside the curtain-clipped x range. Pixels not
/// covered by any triangle stay transparent.
pub fn render_mesh(
    triangles: &[Triangle],
    bbox: &BoundingBox,
    params: &RenderParameters,
) -> Result<RenderOutput, RenderError> {
    let started = Instant::now();
    check_inputs(bbox, params)?;

    let values: Vec<f64> = triangles
        .iter()
        .filter(|t| t.is_finite())
        .map(|t| t.value)
        .collect();
    let selection = select_domain(&values, params);
    let domain = selection.domain;

    let (width, height) = (params.output_width_px, params.output_height_px);
    let visible = bbox.clip_x(params.clip_left_right_percent);
    let transform = ScreenTransform::new(visible, width, height);

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
    let mut paint = Paint::default();
    paint.anti_alias = false;

    let mut outlines = Vec::new();
    let mut skipped = 0;
    let mut clipped = 0;

    for triangle in triangles {
        if !triangle.is_finite() {
            skipped += 1;
            continue;
        }
        if !visible.contains_x(triangle.centroid().0) {
            clipped += 1;
            continue;
        }
        // The builder refuses outlines it cannot bound.
        let Some(path) = triangle_path(&transform, triangle) else {
            skipped += 1;
            continue;
        };

        let color = color_at(triangle.value, &domain, params.palette);
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        if params.wireframe {
            outlines.push(path);
        }
    }

    if params.wireframe {
        stroke_wireframe(&mut pixmap, &outlines);
    }

    let image = pixmap_to_buffer(&pixmap).ok_or(RenderError::Canvas { width, height })?;
    let colorbar = render_colorbar(
        &domain,
        params.palette,
        params.colorbar_width_px,
        params.colorbar_height_px,
    );

    let stats = RenderStats {
        inputs: triangles.len(),
        blocks: 0,
        no_data_blocks: 0,
        skipped,
        clipped,
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    };

    debug!(
        triangles = stats.inputs,
        skipped,
        clipped,
        wireframe = params.wireframe,
        domain_low = domain.low,
        domain_high = domain.high,
        scale = ?domain.scale,
        elapsed_ms = stats.elapsed_ms,
        "Rendered mesh profile"
    );

    Ok(RenderOutput {
        image,
        colorbar,
        selection,
        stats,
    })
}

fn triangle_path(transform: &ScreenTransform, triangle: &Triangle) -> Option<Path> {
    let [a, b, c] = triangle
        .vertices()
        .map(|(x, y)| transform.to_screen(x, y));

    let mut pb = PathBuilder::new();
    pb.move_to(a.0 as f32, a.1 as f32);
    pb.line_to(b.0 as f32, b.1 as f32);
    pb.line_to(c.0 as f32, c.1 as f32);
    pb.close();
    pb.finish()
}

fn stroke_wireframe(pixmap: &mut Pixmap, outlines: &[Path]) {
    let [r, g, b, a] = WIREFRAME_RGBA;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;

    let stroke = Stroke {
        width: WIREFRAME_WIDTH,
        ..Stroke::default()
    };

    for path in outlines {
        pixmap.stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Copy a premultiplied pixmap into a straight-alpha buffer.
fn pixmap_to_buffer(pixmap: &Pixmap) -> Option<PixelBuffer> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    PixelBuffer::from_rgba(pixmap.width(), pixmap.height(), data)
}
