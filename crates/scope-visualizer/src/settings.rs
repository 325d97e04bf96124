//! Visualizer settings
//!
//! Settings load from TOML or JSON. Every field is optional; missing fields
//! fall back to the built-in palette and border appearance.

use std::path::Path;

use anyhow::Context;
use scope_theme::{builtin, RangeTypeColors, ThemeKind};
use serde::{Deserialize, Serialize};

use crate::render::BorderAppearance;

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported settings format: {0:?}")]
    UnsupportedFormat(String),
    #[error("Invalid {field}: {value:?} is not a pixel length")]
    InvalidLength { field: &'static str, value: String },
}

/// Colors per highlighted range type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeColors {
    pub domain: RangeTypeColors,
    pub content: RangeTypeColors,
    pub removal: RangeTypeColors,
    pub iteration: RangeTypeColors,
}

impl Default for ScopeColors {
    fn default() -> Self {
        Self {
            domain: *builtin::DOMAIN,
            content: *builtin::CONTENT,
            removal: *builtin::REMOVAL,
            iteration: *builtin::ITERATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Theme kind of the host editor; informational for renderers that only
    /// paint one variant
    pub theme: ThemeKind,
    pub border: BorderAppearance,
    pub colors: ScopeColors,
}

impl VisualizerSettings {
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads `path`, picking the format from its extension
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Self::from_toml(&std::fs::read_to_string(path)?),
            "json" => Self::from_json(&std::fs::read_to_string(path)?),
            _ => Err(SettingsError::UnsupportedFormat(extension)),
        }
    }

    /// Loads settings from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) if path.exists() => {
                let settings = Self::from_file(path)
                    .with_context(|| format!("loading visualizer settings from {}", path.display()))?;
                tracing::debug!(path = %path.display(), "loaded visualizer settings");
                Ok(settings)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        check_length("border.width", &self.border.width)?;
        check_length("border.radius", &self.border.radius)?;
        Ok(())
    }
}

fn check_length(field: &'static str, value: &str) -> Result<(), SettingsError> {
    let valid = value
        .strip_suffix("px")
        .and_then(|number| number.parse::<f32>().ok())
        .is_some_and(|number| number.is_finite() && number >= 0.0);

    if valid {
        Ok(())
    } else {
        Err(SettingsError::InvalidLength {
            field,
            value: value.to_string(),
        })
    }
}
