//! Color domain selection.
//!
//! Picks the value window a palette is stretched over. Linear domains use a
//! trimmed-quantile window so a single bad electrode or inversion artifact
//! does not wash out the rest of the section; log domains use the min/max
//! of the strictly positive values.
//!
//! Domain bounds live in *scalar* space: raw units for [`Scale::Linear`],
//! `log10` units for [`Scale::Log`].

use serde::Serialize;

/// Floor applied before `log10` so zero never reaches the logarithm.
pub const LOG_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Linear,
    Log,
}

/// Numeric window plus the transform that maps values into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub low: f64,
    pub high: f64,
    pub scale: Scale,
}

impl Domain {
    /// Used when there is nothing to frame.
    pub const FALLBACK: Domain = Domain {
        low: 0.0,
        high: 1.0,
        scale: Scale::Linear,
    };

    /// Bounds are reordered if given high-first.
    pub fn new(low: f64, high: f64, scale: Scale) -> Self {
        if low <= high {
            Self { low, high, scale }
        } else {
            Self {
                low: high,
                high: low,
                scale,
            }
        }
    }

    /// Map a raw value into scalar space.
    pub fn to_scalar(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear => value,
            Scale::Log if value.is_nan() => f64::NAN,
            Scale::Log => value.max(LOG_EPSILON).log10(),
        }
    }

    /// Inverse of [`Domain::to_scalar`].
    pub fn from_scalar(&self, scalar: f64) -> f64 {
        match self.scale {
            Scale::Linear => scalar,
            Scale::Log => 10f64.powf(scalar),
        }
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    /// Position of `value` within the domain, clamped to `[0, 1]`.
    ///
    /// A degenerate domain maps every finite value to `0.5`; NaN stays NaN.
    pub fn normalize(&self, value: f64) -> f64 {
        let scalar = self.to_scalar(value);
        if scalar.is_nan() {
            return f64::NAN;
        }
        if self.is_degenerate() {
            return 0.5;
        }
        ((scalar - self.low) / self.span()).clamp(0.0, 1.0)
    }

    /// Lower bound in display (untransformed) units.
    pub fn display_low(&self) -> f64 {
        self.from_scalar(self.low)
    }

    /// Domain midpoint in display units; the geometric mean under log scale.
    pub fn display_mid(&self) -> f64 {
        self.from_scalar((self.low + self.high) / 2.0)
    }

    /// Upper bound in display units.
    pub fn display_high(&self) -> f64 {
        self.from_scalar(self.high)
    }
}

/// A computed domain plus whether a log request had to fall back to linear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainSelection {
    pub domain: Domain,
    pub log_fallback: bool,
}

/// Select the color domain for `values`.
///
/// - No finite values: `[0, 1]` linear.
/// - `use_log` with at least one positive value: `log10` of the positive
///   min/max.
/// - Otherwise the `clip` and `1 - clip` quantiles of the finite values,
///   falling back to their raw min/max when the two quantiles coincide.
///
/// A larger `clip` never widens a non-degenerate trimmed window. The tie
/// fallback is the exception: once both quantiles land on the same value
/// the window jumps back out to min/max, so `[1, 1, 1, 1, 100]` gives
/// `[1, 92.08]` at `clip = 0.02` but `[1, 100]` at `clip = 0.3`.
pub fn compute_domain(values: &[f64], clip: f64, use_log: bool) -> DomainSelection {
    if use_log {
        let positive = values.iter().copied().filter(|v| v.is_finite() && *v > 0.0);
        if let Some((min, max)) = min_max(positive) {
            return DomainSelection {
                domain: Domain::new(min.log10(), max.log10(), Scale::Log),
                log_fallback: false,
            };
        }
    }

    DomainSelection {
        domain: linear_domain(values, clip),
        log_fallback: use_log,
    }
}

fn linear_domain(values: &[f64], clip: f64) -> Domain {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Domain::FALLBACK;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let clip = if clip.is_finite() { clip.clamp(0.0, 0.5) } else { 0.0 };
    let low = quantile_sorted(&sorted, clip);
    let high = quantile_sorted(&sorted, 1.0 - clip);

    match (low, high) {
        (Some(low), Some(high)) if low.is_finite() && high.is_finite() && low < high => {
            Domain::new(low, high, Scale::Linear)
        }
        _ => Domain::new(sorted[0], sorted[sorted.len() - 1], Scale::Linear),
    }
}

/// Quantile `q` of ascending `sorted`, interpolating linearly between the
/// order statistics at `floor` and `ceil` of `(n - 1) * q`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !q.is_finite() {
        return None;
    }
    let position = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}
