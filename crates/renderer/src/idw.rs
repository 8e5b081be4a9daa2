//! Inverse-distance-weighted interpolation.

use profile_common::Sample;

/// Floor on the weight sum.
pub const WEIGHT_EPSILON: f64 = 1e-12;

/// IDW estimate at `(x, y)` from the `k` nearest `candidates`, power 2.
///
/// Candidates are ranked by squared distance with a stable sort, so equal
/// distances keep their input order. A candidate on the query, or so close
/// that its weight overflows, returns its own value. Returns `None` when no
/// finite candidate is available.
pub fn idw(x: f64, y: f64, candidates: &[Sample], k: usize) -> Option<f64> {
    let mut ranked: Vec<(f64, f64)> = candidates
        .iter()
        .filter(|s| s.is_finite())
        .map(|s| (s.distance_sq(x, y), s.value))
        .collect();
    if ranked.is_empty() {
        return None;
    }

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.truncate(k.max(1));

    // Ranked nearest first, so the first overflowing weight is the closest
    if let Some(&(_, value)) = ranked.iter().find(|(d2, _)| !(1.0 / d2).is_finite()) {
        return Some(value);
    }

    let (weighted, total) = ranked
        .iter()
        .fold((0.0, 0.0), |(weighted, total), &(d2, value)| {
            let w = 1.0 / d2;
            (weighted + w * value, total + w)
        });

    Some(weighted / total.max(WEIGHT_EPSILON))
}
