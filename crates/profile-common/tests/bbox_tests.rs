//! Tests for profile extents.

use profile_common::{BoundingBox, Sample, Triangle};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_samples_skips_non_finite() {
    let samples = [
        Sample::new(2.0, -1.0, 1.0),
        Sample::new(f64::NAN, -40.0, 1.0),
        Sample::new(8.0, -6.0, 1.0),
    ];
    let bbox = BoundingBox::from_samples(&samples).unwrap();
    assert_eq!(bbox, BoundingBox::new(2.0, -6.0, 8.0, -1.0));
}

#[test]
fn test_from_samples_empty() {
    assert!(BoundingBox::from_samples(&[]).is_none());
}

#[test]
fn test_from_triangles_covers_vertices() {
    let triangles = [Triangle::new((0.0, 0.0), (4.0, -3.0), (-1.0, -2.0), 1.0)];
    let bbox = BoundingBox::from_triangles(&triangles).unwrap();
    assert_eq!(bbox, BoundingBox::new(-1.0, -3.0, 4.0, 0.0));
}

// ============================================================================
// Curtain clip
// ============================================================================

#[test]
fn test_clip_x_each_side() {
    let bbox = BoundingBox::new(0.0, -50.0, 200.0, 0.0);
    let clipped = bbox.clip_x(10.0);
    assert_eq!(clipped.min_x, 20.0);
    assert_eq!(clipped.max_x, 180.0);
    assert_eq!(clipped.min_y, -50.0);
    assert_eq!(clipped.max_y, 0.0);
}

#[test]
fn test_clip_x_saturates_at_half() {
    let bbox = BoundingBox::new(0.0, 0.0, 100.0, 10.0);
    let clipped = bbox.clip_x(100.0);
    assert_eq!(clipped.min_x, 50.0);
    assert_eq!(clipped.max_x, 50.0);
    assert!(clipped.is_valid());
}

#[test]
fn test_clip_zero_is_identity() {
    let bbox = BoundingBox::new(-5.0, -5.0, 5.0, 5.0);
    assert_eq!(bbox.clip_x(0.0), bbox);
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_round_trip_values() {
    let bbox: BoundingBox = " 0, -50, 200, 0 ".parse().unwrap();
    assert_eq!(bbox, BoundingBox::new(0.0, -50.0, 200.0, 0.0));
}

#[test]
fn test_parse_rejects_unordered() {
    assert!("10,0,5,1".parse::<BoundingBox>().is_err());
    assert!("1,2,3".parse::<BoundingBox>().is_err());
    assert!("a,b,c,d".parse::<BoundingBox>().is_err());
}
