//! Overlay configuration
//!
//! A static set of named options resolved once when an engine is
//! constructed. Defaults follow classic desktop scrollbar proportions.
//! Configs can also be loaded from TOML, where any omitted field keeps its
//! default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with components in `0.0..=1.0`
pub type Color = [f32; 4];

/// Errors raised while resolving an overlay configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML source did not describe a valid config
    #[error("invalid overlay config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Appearance and behavior options for overlay widgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Widget width in pixels
    pub width: f32,
    /// Step-arrow button height in pixels
    pub arrow_height: f32,
    /// Distance scrolled by a single arrow click
    pub click_step: f32,
    /// Distance scrolled per frame while an arrow is long-pressed
    pub repeat_step: f32,
    /// Long-press delay before auto-repeat begins (milliseconds)
    pub repeat_delay_ms: u64,
    /// Quiet period before a mutation-triggered rescan runs (milliseconds)
    pub rescan_quiet_ms: u64,
    /// Stacking priority of overlay widgets
    pub z_index: u32,
    /// Thumb and arrow color when idle
    pub idle_color: Color,
    /// Track background while hovered
    pub hover_background: Color,
    /// Thumb color while dragged
    pub active_color: Color,
    /// Minimum thumb height in pixels
    pub min_thumb: f32,
    /// Minimum visible extent for an element to qualify for tracking
    pub min_region_extent: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: 12.0,
            arrow_height: 20.0,
            click_step: 100.0,
            repeat_step: 15.0,
            repeat_delay_ms: 500,
            rescan_quiet_ms: 500,
            z_index: 999_999,
            // Semi-transparent gray thumb and arrows
            idle_color: [0.5, 0.5, 0.5, 0.5],
            // Very subtle track wash on hover
            hover_background: [0.5, 0.5, 0.5, 0.1],
            active_color: [0.39, 0.39, 0.39, 0.8],
            min_thumb: 20.0,
            min_region_extent: 100.0,
        }
    }
}

impl OverlayConfig {
    /// Parse a config from TOML; omitted fields keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}
