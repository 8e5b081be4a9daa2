//! Bounding box types and operations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sample::{Sample, Triangle};

/// Extent of a profile in data units (distance along the line, elevation or
/// depth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every finite point, or `None` if there is none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<BoundingBox>, (x, y)| {
                Some(match acc {
                    None => BoundingBox::new(x, y, x, y),
                    Some(b) => BoundingBox::new(
                        b.min_x.min(x),
                        b.min_y.min(y),
                        b.max_x.max(x),
                        b.max_y.max(y),
                    ),
                })
            })
    }

    /// Extent of a sample collection.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        Self::from_points(samples.iter().map(Sample::position))
    }

    /// Extent of a triangle collection, over all vertices.
    pub fn from_triangles(triangles: &[Triangle]) -> Option<Self> {
        Self::from_points(triangles.iter().flat_map(|t| t.vertices()))
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// All corners finite and ordered.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Curtain clip: drop `percent` of the width at each horizontal edge.
    ///
    /// The percentage is clamped to 0..=50; at 50 the box collapses onto its
    /// vertical center line.
    pub fn clip_x(&self, percent: f64) -> BoundingBox {
        let fraction = if percent.is_finite() {
            (percent / 100.0).clamp(0.0, 0.5)
        } else {
            0.0
        };
        let cut = self.width() * fraction;
        BoundingBox {
            min_x: self.min_x + cut,
            max_x: self.max_x - cut,
            ..*self
        }
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.contains_x(x) && y >= self.min_y && y <= self.max_y
    }

    /// Check if an x coordinate lies inside the horizontal extent.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x && x <= self.max_x
    }
}

/// Parses "minx,miny,maxx,maxy".
impl FromStr for BoundingBox {
    type Err = BboxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        }

        let mut coords = [0.0f64; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BboxParseError::InvalidNumber(part.to_string()))?;
        }

        let bbox = BoundingBox::new(coords[0], coords[1], coords[2], coords[3]);
        if !bbox.is_valid() {
            return Err(BboxParseError::Unordered(s.to_string()));
        }
        Ok(bbox)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BboxParseError {
    #[error("Invalid BBOX format: {0}. Expected 'minx,miny,maxx,maxy'")]
    InvalidFormat(String),

    #[error("Invalid number in BBOX: {0}")]
    InvalidNumber(String),

    #[error("BBOX corners out of order: {0}")]
    Unordered(String),
}
