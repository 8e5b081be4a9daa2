//! Tests for scattered-sample rendering.

use profile_common::{BoundingBox, Palette, ProfileError, RenderParameters, Sample};
use profile_renderer::{color_at, render, RenderError, Scale};
use test_utils::{layered_section_samples, params_with, profile_bbox, random_samples};

// ============================================================================
// Block law
// ============================================================================

#[test]
fn test_block_matches_single_pixel_render_at_center() {
    let bbox = BoundingBox::new(0.0, 0.0, 90.0, 45.0);
    let samples = random_samples(150, &bbox, 1.0, 500.0, 21);

    let coarse = render(&samples, &bbox, &params_with(90, 45, 3)).unwrap();
    let fine = render(&samples, &bbox, &params_with(90, 45, 1)).unwrap();
    assert_eq!(coarse.selection, fine.selection);

    for by in (0..45).step_by(3) {
        for bx in (0..90).step_by(3) {
            let expected = fine.image.pixel(bx + 1, by + 1);
            for dy in 0..3 {
                for dx in 0..3 {
                    assert_eq!(
                        coarse.image.pixel(bx + dx, by + dy),
                        expected,
                        "block ({}, {}) pixel ({}, {})",
                        bx,
                        by,
                        dx,
                        dy
                    );
                }
            }
        }
    }
}

#[test]
fn test_partial_edge_blocks_are_painted() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let samples = random_samples(40, &bbox, 1.0, 2.0, 4);
    let params = RenderParameters {
        bin_count: 4,
        ..params_with(10, 10, 4)
    };
    let output = render(&samples, &bbox, &params).unwrap();
    // 3 × 3 blocks, the last row and column only two pixels deep
    assert_eq!(output.stats.blocks, 9);
    assert_eq!(output.image.painted_pixels(), 100);
    assert_eq!(output.image.pixel(9, 9), output.image.pixel(8, 8));
}

#[test]
fn test_render_is_deterministic() {
    let bbox = profile_bbox();
    let samples = random_samples(500, &bbox, 5.0, 5000.0, 77);
    let params = params_with(160, 40, 2);
    let first = render(&samples, &bbox, &params).unwrap();
    let second = render(&samples, &bbox, &params).unwrap();
    assert_eq!(first.image, second.image);
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_layered_section_colors() {
    let samples = layered_section_samples(21, 5, 10.0);
    let params = RenderParameters {
        neighbor_count: 1,
        ..params_with(200, 50, 5)
    };
    let output = render(&samples, &profile_bbox(), &params).unwrap();
    let domain = output.selection.domain;

    // Top band sits in the 100 ohm·m cover, bottom band in the basement
    let top = color_at(100.0, &domain, params.palette);
    let bottom = color_at(1000.0, &domain, params.palette);
    assert_ne!(top, bottom);
    for x in [0, 57, 123, 199] {
        assert_eq!(output.image.pixel(x, 0), Some(top));
        assert_eq!(output.image.pixel(x, 49), Some(bottom));
    }
}

#[test]
fn test_single_sample_floods_with_midpoint() {
    let bbox = BoundingBox::new(0.0, -10.0, 20.0, 0.0);
    let params = RenderParameters {
        palette: Palette::Greys,
        bin_count: 4,
        ..params_with(20, 10, 2)
    };
    let output = render(&[Sample::new(5.0, -5.0, 42.0)], &bbox, &params).unwrap();

    assert!(output.selection.domain.is_degenerate());
    assert_eq!(output.image.painted_pixels(), 200);
    let pixel = output.image.pixel(13, 7).unwrap();
    assert_eq!(pixel.to_array(), [128, 128, 128, 255]);
}

#[test]
fn test_log_request_without_positive_values() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let samples: Vec<Sample> = random_samples(60, &bbox, -50.0, -1.0, 8);
    let params = RenderParameters {
        use_log_scale: true,
        bin_count: 4,
        ..params_with(20, 20, 2)
    };
    let output = render(&samples, &bbox, &params).unwrap();

    assert!(output.selection.log_fallback);
    assert_eq!(output.selection.domain.scale, Scale::Linear);
    assert_eq!(output.stats.no_data_blocks, 0);
    assert_eq!(output.image.painted_pixels(), 400);
}

// ============================================================================
// No data
// ============================================================================

#[test]
fn test_empty_input_renders_transparent() {
    let output = render(&[], &profile_bbox(), &params_with(40, 20, 4)).unwrap();
    assert_eq!(output.image.painted_pixels(), 0);
    assert_eq!(output.stats.blocks, 50);
    assert_eq!(output.stats.no_data_blocks, 50);
    assert_eq!(output.selection.domain.low, 0.0);
    assert_eq!(output.selection.domain.high, 1.0);
}

#[test]
fn test_non_finite_samples_are_ignored() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let samples = [
        Sample::new(5.0, 5.0, f64::NAN),
        Sample::new(f64::INFINITY, 5.0, 1.0),
    ];
    let params = RenderParameters {
        bin_count: 4,
        ..params_with(10, 10, 5)
    };
    let output = render(&samples, &bbox, &params).unwrap();
    assert_eq!(output.stats.skipped, 2);
    assert_eq!(output.image.painted_pixels(), 0);
}

#[test]
fn test_far_corner_has_no_data() {
    let bbox = BoundingBox::new(0.0, 0.0, 96.0, 96.0);
    let samples = [Sample::new(1.0, 1.0, 3.0)];
    let output = render(&samples, &bbox, &params_with(96, 96, 2)).unwrap();
    // The sample is in the bottom-left bin; the top-right corner is far
    // beyond the default search radius
    assert!(output.image.pixel(0, 95).is_some_and(|c| !c.is_transparent()));
    assert!(output.image.pixel(95, 0).is_some_and(|c| c.is_transparent()));
    assert!(output.stats.no_data_blocks > 0);
}

// ============================================================================
// Curtain clip and colorbar
// ============================================================================

#[test]
fn test_full_clip_collapses_to_center_line() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let samples = random_samples(30, &bbox, 1.0, 9.0, 1);
    let params = RenderParameters {
        clip_left_right_percent: 100.0,
        bin_count: 4,
        ..params_with(8, 8, 1)
    };
    let output = render(&samples, &bbox, &params).unwrap();
    // Every column samples x = 5, so columns repeat
    for y in 0..8 {
        assert_eq!(output.image.pixel(0, y), output.image.pixel(7, y));
    }
}

#[test]
fn test_colorbar_follows_parameters() {
    let params = RenderParameters {
        colorbar_width_px: 50,
        colorbar_height_px: 6,
        ..params_with(20, 10, 2)
    };
    let samples = layered_section_samples(3, 3, 5.0);
    let output = render(&samples, &profile_bbox(), &params).unwrap();
    assert_eq!(output.colorbar.image.width(), 50);
    assert_eq!(output.colorbar.image.height(), 6);
    assert_eq!(output.colorbar.ticks[0].value, output.selection.domain.low);
}

// ============================================================================
// Rejected inputs
// ============================================================================

#[test]
fn test_invalid_parameters_are_rejected() {
    let err = render(&[], &profile_bbox(), &params_with(10, 10, 0)).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Parameters(ProfileError::InvalidParameter { .. })
    ));
}

#[test]
fn test_invalid_bbox_is_rejected() {
    let bbox = BoundingBox::new(0.0, f64::NAN, 10.0, 0.0);
    let err = render(&[], &bbox, &params_with(10, 10, 1)).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Parameters(ProfileError::InvalidBbox(_))
    ));
}
