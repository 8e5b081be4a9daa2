//! Continuous color palettes and the value-to-color mapping.
//!
//! Each palette is a fixed table of evenly spaced RGB stops, linearly
//! interpolated. Stop tables follow the matplotlib/d3 definitions of the
//! same names.

use crate::domain::Domain;

pub use profile_common::Palette;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], 255)
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84], [72, 35, 116], [64, 67, 135], [52, 94, 141],
    [41, 120, 142], [32, 146, 140], [53, 183, 121], [109, 205, 89], [253, 231, 37],
];

const PLASMA: [[u8; 3]; 9] = [
    [13, 8, 135], [75, 3, 161], [126, 3, 168], [168, 34, 150],
    [204, 71, 120], [232, 107, 84], [248, 149, 64], [252, 194, 36], [240, 249, 33],
];

const INFERNO: [[u8; 3]; 9] = [
    [0, 0, 4], [31, 12, 72], [85, 15, 109], [136, 34, 106],
    [186, 54, 85], [227, 89, 51], [249, 140, 10], [249, 201, 50], [252, 255, 164],
];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4], [28, 16, 68], [79, 18, 123], [129, 37, 129],
    [181, 54, 122], [229, 80, 100], [251, 135, 97], [254, 194, 135], [252, 253, 191],
];

const TURBO: [[u8; 3]; 11] = [
    [48, 18, 59], [70, 68, 172], [62, 137, 236], [30, 192, 208],
    [53, 224, 138], [147, 244, 78], [213, 226, 45], [254, 188, 43],
    [253, 121, 36], [215, 48, 31], [122, 4, 3],
];

const CIVIDIS: [[u8; 3]; 9] = [
    [0, 34, 78], [18, 53, 112], [59, 73, 108], [87, 93, 109],
    [112, 113, 115], [138, 134, 120], [165, 156, 116], [196, 180, 102], [254, 232, 56],
];

// Diverging, red at the low end like d3's interpolateSpectral.
const SPECTRAL: [[u8; 3]; 11] = [
    [158, 1, 66], [213, 62, 79], [244, 109, 67], [253, 174, 97],
    [254, 224, 139], [255, 255, 191], [230, 245, 152], [171, 221, 164],
    [102, 194, 165], [50, 136, 189], [94, 79, 162],
];

// Light to dark.
const GREYS: [[u8; 3]; 2] = [[255, 255, 255], [0, 0, 0]];

/// Stop table of a palette, low end first.
pub fn stops(palette: Palette) -> &'static [[u8; 3]] {
    match palette {
        Palette::Viridis => &VIRIDIS,
        Palette::Plasma => &PLASMA,
        Palette::Inferno => &INFERNO,
        Palette::Magma => &MAGMA,
        Palette::Turbo => &TURBO,
        Palette::Cividis => &CIVIDIS,
        Palette::Spectral => &SPECTRAL,
        Palette::Greys => &GREYS,
    }
}

/// Evaluate a palette at `t`; `t` is clamped to `[0, 1]` and NaN reads as
/// the midpoint.
pub fn sample(palette: Palette, t: f64) -> Color {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let stops = stops(palette);
    if stops.len() == 1 {
        return Color::opaque(stops[0]);
    }

    let position = t * (stops.len() - 1) as f64;
    let index = (position.floor() as usize).min(stops.len() - 2);
    let local = position - index as f64;
    interpolate_color(
        Color::opaque(stops[index]),
        Color::opaque(stops[index + 1]),
        local,
    )
}

/// Linear color interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

    Color::new(
        lerp(color1.r, color2.r),
        lerp(color1.g, color2.g),
        lerp(color1.b, color2.b),
        lerp(color1.a, color2.a),
    )
}

/// Map a raw value to its color under `domain`.
///
/// Out-of-domain values saturate at the palette ends, a degenerate domain
/// yields the palette midpoint, and NaN yields transparent (no data).
pub fn color_at(value: f64, domain: &Domain, palette: Palette) -> Color {
    let t = domain.normalize(value);
    if t.is_nan() {
        return Color::transparent();
    }
    sample(palette, t)
}
