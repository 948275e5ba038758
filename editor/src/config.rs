//! Editor configuration supplied by the host page.
//!
//! The host may pass a JSON object; missing keys fall back to the constants in
//! [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_ZOOM, POINT_BOX_BORDER, POINT_BOX_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into an [`EditorConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field is out of range.
    #[error("invalid {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Inner edge length of a vertex handle, in screen pixels.
    pub handle_size_px: f64,
    /// Border width of a vertex handle, in screen pixels.
    pub handle_border_px: f64,
    /// Smallest accepted zoom factor.
    pub min_zoom: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { handle_size_px: POINT_BOX_SIZE, handle_border_px: POINT_BOX_BORDER, min_zoom: MIN_ZOOM }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.handle_size_px.is_finite() || self.handle_size_px <= 0.0 {
            return Err(ConfigError::Invalid { field: "handle_size_px", value: self.handle_size_px });
        }
        if !self.handle_border_px.is_finite() || self.handle_border_px < 0.0 {
            return Err(ConfigError::Invalid { field: "handle_border_px", value: self.handle_border_px });
        }
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(ConfigError::Invalid { field: "min_zoom", value: self.min_zoom });
        }
        Ok(())
    }

    /// Distance from a handle's center to its outer border edge, in screen pixels.
    #[must_use]
    pub fn handle_radius_px(&self) -> f64 {
        0.5 * (self.handle_size_px + 2.0 * self.handle_border_px)
    }
}
