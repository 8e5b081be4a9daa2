//! Colorbar (legend strip) generation.

use serde::Serialize;

use crate::buffer::PixelBuffer;
use crate::domain::Domain;
use crate::palette::{color_at, Palette};

/// One legend tick in display (untransformed) units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLabel {
    pub value: f64,
    pub label: String,
}

impl TickLabel {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: format_tick(value),
        }
    }
}

/// Horizontal legend strip, low end on the left, plus its low/mid/high ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub image: PixelBuffer,
    pub ticks: [TickLabel; 3],
}

/// Paint `domain` across a `width`×`height` strip.
///
/// Columns sample the domain evenly in scalar space and go through the same
/// [`color_at`] law as the profile image.
pub fn render_colorbar(domain: &Domain, palette: Palette, width: u32, height: u32) -> Colorbar {
    let mut image = PixelBuffer::new(width, height);
    let steps = width.saturating_sub(1).max(1) as f64;

    for column in 0..width {
        let scalar = domain.low + domain.span() * (column as f64 / steps);
        let color = color_at(domain.from_scalar(scalar), domain, palette);
        image.fill_rect(column, 0, 1, height, color);
    }

    Colorbar {
        image,
        ticks: tick_labels(domain),
    }
}

/// Low, mid and high ticks in display units.
pub fn tick_labels(domain: &Domain) -> [TickLabel; 3] {
    [
        TickLabel::new(domain.display_low()),
        TickLabel::new(domain.display_mid()),
        TickLabel::new(domain.display_high()),
    ]
}

/// Compact label: scientific notation outside 0.01..10000, fewer decimals
/// as magnitude grows.
pub fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if !(0.01..10_000.0).contains(&magnitude) {
        format!("{:.2e}", value)
    } else if magnitude >= 100.0 {
        format!("{:.0}", value)
    } else if magnitude >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}
