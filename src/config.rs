use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::error::SketchResult;

/// Width of every rendered stroke, in canvas units.
pub const DEFAULT_LINE_WIDTH: f32 = 8.0;

/// Settings for the floating text label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub default_text: String,
    pub default_position: Pos2,
    pub font_size: f32,
    pub color: Color32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            default_text: "Enter text".to_owned(),
            default_position: Pos2::new(100.0, 100.0),
            font_size: 24.0,
            color: Color32::BLACK,
        }
    }
}

/// Everything the sketch screen can be tuned with.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON document is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct SketchConfig {
    pub line_width: f32,
    pub stroke_color: Color32,
    pub background: Color32,
    pub label: LabelConfig,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            stroke_color: Color32::BLACK,
            background: Color32::WHITE,
            label: LabelConfig::default(),
        }
    }
}

impl SketchConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> SketchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SketchError;

    #[test]
    fn test_defaults_match_screen() {
        let config = SketchConfig::default();
        assert_eq!(config.line_width, 8.0);
        assert_eq!(config.stroke_color, Color32::BLACK);
        assert_eq!(config.label.default_position, Pos2::new(100.0, 100.0));
        assert_eq!(config.label.font_size, 24.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SketchConfig::from_json(r#"{ "line_width": 4.0 }"#).unwrap();
        assert_eq!(config.line_width, 4.0);
        assert_eq!(config.label, LabelConfig::default());
        assert_eq!(config.background, Color32::WHITE);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = SketchConfig::from_json("{ line_width: ");
        assert!(matches!(result, Err(SketchError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_survives_reload() {
        let mut config = SketchConfig::default();
        config.label.default_text = "Hello".to_owned();
        let json = config.to_json().unwrap();
        assert_eq!(SketchConfig::from_json(&json).unwrap(), config);
    }
}
