//! Names of the built-in color palettes.
//!
//! The set is closed: each name maps to one continuous color function in the
//! renderer. Parameter files and CLI flags refer to palettes by these names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Turbo,
    Cividis,
    Spectral,
    #[serde(alias = "grays", alias = "grey", alias = "gray")]
    Greys,
}

impl Palette {
    pub const ALL: [Palette; 8] = [
        Palette::Viridis,
        Palette::Plasma,
        Palette::Inferno,
        Palette::Magma,
        Palette::Turbo,
        Palette::Cividis,
        Palette::Spectral,
        Palette::Greys,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Viridis => "viridis",
            Palette::Plasma => "plasma",
            Palette::Inferno => "inferno",
            Palette::Magma => "magma",
            Palette::Turbo => "turbo",
            Palette::Cividis => "cividis",
            Palette::Spectral => "spectral",
            Palette::Greys => "greys",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viridis" => Ok(Palette::Viridis),
            "plasma" => Ok(Palette::Plasma),
            "inferno" => Ok(Palette::Inferno),
            "magma" => Ok(Palette::Magma),
            "turbo" => Ok(Palette::Turbo),
            "cividis" => Ok(Palette::Cividis),
            "spectral" => Ok(Palette::Spectral),
            "greys" | "grays" | "grey" | "gray" => Ok(Palette::Greys),
            _ => Err(ProfileError::UnknownPalette(s.to_string())),
        }
    }
}
