use eframe::egui;

use crate::session::Mode;

/// A toolbar button for one [`Mode`], highlighted while that mode is active.
pub struct ModeButton {
    pub mode: Mode,
    pub selected: bool,
}

impl ModeButton {
    pub fn new(mode: Mode, selected: bool) -> Self {
        Self { mode, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let fill = if self.selected {
            egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
        } else {
            ui.visuals().widgets.inactive.weak_bg_fill
        };

        let text = egui::RichText::new(self.mode.label()).color(if self.selected {
            egui::Color32::BLACK
        } else {
            ui.visuals().text_color()
        });

        let mut button = egui::Button::new(text).fill(fill);
        if self.selected {
            button = button.stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)));
        }
        ui.add(button)
    }
}
