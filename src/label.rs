use egui::{Pos2, Vec2};

use crate::config::LabelConfig;

/// The single floating text label, independent of the strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    text: String,
    position: Pos2,
    default_text: String,
    default_position: Pos2,
}

impl TextLabel {
    pub fn new(default_text: impl Into<String>, default_position: Pos2) -> Self {
        let default_text = default_text.into();
        Self {
            text: default_text.clone(),
            position: default_position,
            default_text,
            default_position,
        }
    }

    pub fn from_config(config: &LabelConfig) -> Self {
        Self::new(config.default_text.clone(), config.default_position)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for text-edit widgets.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    /// Shift the label by a drag delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Restore the text and position the label was created with.
    pub fn reset(&mut self) {
        self.text.clone_from(&self.default_text);
        self.position = self.default_position;
    }
}

impl Default for TextLabel {
    fn default() -> Self {
        Self::from_config(&LabelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_translate_accumulates() {
        let mut label = TextLabel::new("hi", pos2(100.0, 100.0));
        label.translate(vec2(5.0, 0.0));
        label.translate(vec2(0.0, 5.0));
        assert_eq!(label.position(), pos2(105.0, 105.0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut label = TextLabel::default();
        label.set_text("");
        label.translate(vec2(-40.0, 12.5));

        label.reset();
        assert_eq!(label.text(), "Enter text");
        assert_eq!(label.position(), pos2(100.0, 100.0));
    }

    #[test]
    fn test_text_is_not_validated() {
        let mut label = TextLabel::default();
        label.text_mut().push_str("\n\t✓");
        assert_eq!(label.text(), "Enter text\n\t✓");
    }
}
