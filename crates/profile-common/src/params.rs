//! Render parameters.
//!
//! A plain configuration struct: every render call is fully determined by
//! its inputs plus one `RenderParameters`. Parameters load from YAML or JSON
//! files; omitted fields take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};
use crate::palette::Palette;

/// Largest accepted output dimension in pixels.
pub const MAX_DIMENSION_PX: u32 = 16_384;

/// Largest accepted spatial-index resolution per axis.
pub const MAX_BIN_COUNT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderParameters {
    /// Edge length of the square pixel block painted from one interpolation.
    #[serde(default = "default_block_size")]
    pub block_size_px: u32,

    /// Number of nearest samples used by the IDW estimate.
    #[serde(default = "default_neighbor_count")]
    pub neighbor_count: usize,

    /// Percentage of the profile width discarded at each horizontal edge.
    #[serde(default)]
    pub clip_left_right_percent: f64,

    /// Quantile trimmed from each tail when framing a linear color domain.
    #[serde(default = "default_domain_clip")]
    pub domain_clip: f64,

    #[serde(default)]
    pub use_log_scale: bool,

    #[serde(default)]
    pub palette: Palette,

    #[serde(default = "default_output_width")]
    pub output_width_px: u32,

    #[serde(default = "default_output_height")]
    pub output_height_px: u32,

    #[serde(default = "default_colorbar_width")]
    pub colorbar_width_px: u32,

    #[serde(default = "default_colorbar_height")]
    pub colorbar_height_px: u32,

    /// Spatial-index bins per axis.
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,

    /// Outermost ring the neighbor search may expand to.
    #[serde(default = "default_max_ring")]
    pub max_ring: usize,

    /// Stroke mesh triangle edges over the fill.
    #[serde(default)]
    pub wireframe: bool,
}

fn default_block_size() -> u32 {
    4
}

fn default_neighbor_count() -> usize {
    8
}

fn default_domain_clip() -> f64 {
    0.02
}

fn default_output_width() -> u32 {
    800
}

fn default_output_height() -> u32 {
    400
}

fn default_colorbar_width() -> u32 {
    256
}

fn default_colorbar_height() -> u32 {
    16
}

fn default_bin_count() -> usize {
    48
}

fn default_max_ring() -> usize {
    8
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            block_size_px: default_block_size(),
            neighbor_count: default_neighbor_count(),
            clip_left_right_percent: 0.0,
            domain_clip: default_domain_clip(),
            use_log_scale: false,
            palette: Palette::default(),
            output_width_px: default_output_width(),
            output_height_px: default_output_height(),
            colorbar_width_px: default_colorbar_width(),
            colorbar_height_px: default_colorbar_height(),
            bin_count: default_bin_count(),
            max_ring: default_max_ring(),
            wireframe: false,
        }
    }
}

impl RenderParameters {
    /// Parse parameters from a YAML string.
    pub fn from_yaml(yaml: &str) -> ProfileResult<Self> {
        let params: Self = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse parameters from a JSON string.
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a file; `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Reject parameter values the renderer cannot honor.
    pub fn validate(&self) -> ProfileResult<()> {
        if self.block_size_px == 0 {
            return Err(ProfileError::invalid_parameter(
                "block_size_px",
                "must be at least 1",
            ));
        }
        if self.neighbor_count == 0 {
            return Err(ProfileError::invalid_parameter(
                "neighbor_count",
                "must be at least 1",
            ));
        }
        if !(0.0..=100.0).contains(&self.clip_left_right_percent) {
            return Err(ProfileError::invalid_parameter(
                "clip_left_right_percent",
                format!("{} is outside 0-100", self.clip_left_right_percent),
            ));
        }
        if !(0.0..=0.5).contains(&self.domain_clip) {
            return Err(ProfileError::invalid_parameter(
                "domain_clip",
                format!("{} is outside 0-0.5", self.domain_clip),
            ));
        }
        check_dimension("output_width_px", self.output_width_px)?;
        check_dimension("output_height_px", self.output_height_px)?;
        check_dimension("colorbar_width_px", self.colorbar_width_px)?;
        check_dimension("colorbar_height_px", self.colorbar_height_px)?;
        if self.bin_count == 0 || self.bin_count > MAX_BIN_COUNT {
            return Err(ProfileError::invalid_parameter(
                "bin_count",
                format!("must be within 1-{}", MAX_BIN_COUNT),
            ));
        }
        Ok(())
    }
}

fn check_dimension(param: &str, value: u32) -> ProfileResult<()> {
    if value == 0 || value > MAX_DIMENSION_PX {
        return Err(ProfileError::invalid_parameter(
            param,
            format!("{} is outside 1-{}", value, MAX_DIMENSION_PX),
        ));
    }
    Ok(())
}
