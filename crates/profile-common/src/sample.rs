//! Value-bearing points and flat-shaded mesh cells.

use serde::{Deserialize, Serialize};

/// A scattered measurement: one scalar (resistivity, or one IP gate) at one
/// profile position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// True when the position and the value are all finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.value.is_finite()
    }

    /// Squared euclidean distance from this sample to `(x, y)`.
    #[inline]
    pub fn distance_sq(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

/// One inversion mesh cell with its own value.
///
/// Vertices are plain coordinates; no connectivity to neighbouring cells is
/// kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v1: (f64, f64),
    pub v2: (f64, f64),
    pub v3: (f64, f64),
    pub value: f64,
}

impl Triangle {
    pub fn new(v1: (f64, f64), v2: (f64, f64), v3: (f64, f64), value: f64) -> Self {
        Self { v1, v2, v3, value }
    }

    pub fn vertices(&self) -> [(f64, f64); 3] {
        [self.v1, self.v2, self.v3]
    }

    pub fn centroid(&self) -> (f64, f64) {
        (
            (self.v1.0 + self.v2.0 + self.v3.0) / 3.0,
            (self.v1.1 + self.v2.1 + self.v3.1) / 3.0,
        )
    }

    /// True when every vertex coordinate and the value are finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
            && self
                .vertices()
                .iter()
                .all(|(x, y)| x.is_finite() && y.is_finite())
    }
}
