//! Editor configuration loaded from JSON.

use crate::shapes::{FigureKind, LineType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidRange(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup settings of an editor session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub min_stroke_width: i64,
    pub max_stroke_width: i64,
    pub default_stroke_width: i64,
    pub default_kind: FigureKind,
    /// Index into the edge palette.
    pub default_edge_index: usize,
    /// Index into the fill palette.
    pub default_fill_index: usize,
    pub default_line_type: LineType,
    /// Whether style changes also rewrite the figures already drawn.
    pub restyle_existing: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_stroke_width: 1,
            max_stroke_width: 30,
            default_stroke_width: 4,
            default_kind: FigureKind::Circle,
            default_edge_index: 6,
            default_fill_index: 0,
            default_line_type: LineType::Solid,
            restyle_existing: true,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the width bounds are consistent and the palette indices exist.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_stroke_width < 0 {
            return Err(ConfigError::InvalidRange(format!(
                "minimum stroke width {} is negative",
                self.min_stroke_width
            )));
        }
        if self.min_stroke_width > self.max_stroke_width {
            return Err(ConfigError::InvalidRange(format!(
                "minimum stroke width {} exceeds maximum {}",
                self.min_stroke_width, self.max_stroke_width
            )));
        }
        if !(self.min_stroke_width..=self.max_stroke_width).contains(&self.default_stroke_width) {
            return Err(ConfigError::InvalidRange(format!(
                "default stroke width {} outside {}..={}",
                self.default_stroke_width, self.min_stroke_width, self.max_stroke_width
            )));
        }
        if self.default_edge_index >= crate::palette::EDGE_PALETTE.len() {
            return Err(ConfigError::InvalidRange(format!(
                "edge palette has no entry {}",
                self.default_edge_index
            )));
        }
        if self.default_fill_index >= crate::palette::FILL_PALETTE.len() {
            return Err(ConfigError::InvalidRange(format!(
                "fill palette has no entry {}",
                self.default_fill_index
            )));
        }
        Ok(())
    }

    /// Stroke width bounds as `(min, max)`, swapped back into order if the
    /// configuration was never validated.
    pub fn stroke_width_bounds(&self) -> (i64, i64) {
        let (a, b) = (self.min_stroke_width, self.max_stroke_width);
        (a.min(b), a.max(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.default_stroke_width, 4);
        assert_eq!(config.default_edge_index, 6);
        assert!(config.restyle_existing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "default_kind": "Polygon", "restyle_existing": false }"#)
            .unwrap();
        assert_eq!(config.default_kind, FigureKind::Polygon);
        assert!(!config.restyle_existing);
        assert_eq!(config.max_stroke_width, 30);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = EditorConfig::from_json(r#"{ "min_stroke_width": 10, "max_stroke_width": 5 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));

        let err = EditorConfig::from_json(r#"{ "default_stroke_width": 99 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));

        let err = EditorConfig::from_json(r#"{ "default_edge_index": 9 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = EditorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_stroke_width": 7, "default_line_type": "Dashed" }}"#).unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.default_stroke_width, 7);
        assert_eq!(config.default_line_type, LineType::Dashed);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = EditorConfig {
            default_kind: FigureKind::RoundedRectangle,
            ..Default::default()
        };
        let parsed = EditorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_stroke_width_bounds_ordered() {
        assert_eq!(EditorConfig::default().stroke_width_bounds(), (1, 30));

        let config = EditorConfig {
            min_stroke_width: 10,
            max_stroke_width: 5,
            ..Default::default()
        };
        assert_eq!(config.stroke_width_bounds(), (5, 10));
    }
}
