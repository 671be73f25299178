//! Persisted HUD settings.
//!
//! Settings come from a small TOML file; every field has a default so an
//! empty file is valid.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use spellhud_types::error::{HudError, Result};

/// Skin used when the selected one is not loaded.
pub const DEFAULT_SKIN_KEY: &str = "default";

/// Screen corner the HUD is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HudPosition {
    #[default]
    BottomLeft,
    TopLeft,
    TopRight,
    BottomRight,
}

impl HudPosition {
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// Anchored to the right edge.
    pub const fn flip_x(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Anchored to the top edge.
    pub const fn flip_y(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom_left",
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomRight => "bottom_right",
        }
    }
}

impl fmt::Display for HudPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HudPosition {
    type Err = HudError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| HudError::Config(format!("unknown HUD position '{s}'")))
    }
}

/// User-selected HUD options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HudSettings {
    /// Key of the selected skin.
    pub skin: String,
    pub position: HudPosition,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            skin: DEFAULT_SKIN_KEY.to_string(),
            position: HudPosition::default(),
        }
    }
}

impl HudSettings {
    /// Parse settings from TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| HudError::Config(format!("settings: {e}")))
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| HudError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }
}
