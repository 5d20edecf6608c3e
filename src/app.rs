use crate::components::ModeButton;
use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::session::{Mode, SketchSession};

/// The sketch screen: a mode/clear toolbar above a drawing canvas.
pub struct SketchApp {
    session: SketchSession,
    renderer: Renderer,
    input: InputHandler,
    label_font_size: f32,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn with_config(config: SketchConfig) -> Self {
        log::debug!("Starting sketch screen with {:?}", config);
        Self {
            session: SketchSession::new(&config),
            renderer: Renderer::new(&config),
            input: InputHandler::new(),
            label_font_size: config.label.font_size,
        }
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SketchSession {
        &mut self.session
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in Mode::ALL {
                let selected = self.session.mode() == mode;
                if ModeButton::new(mode, selected).show(ui).clicked() {
                    self.session.select_mode(mode);
                }
            }
            if ui.button("Clear").clicked() {
                self.session.clear();
            }
        });
    }

    fn text_field(&mut self, ui: &mut egui::Ui) {
        let font = egui::FontId::proportional(self.label_font_size);
        ui.add(
            egui::TextEdit::singleline(self.session.label_mut().text_mut())
                .font(font)
                .desired_width(f32::INFINITY),
        );
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());

        let events = self.input.process_response(&response);
        self.session.handle_drags(events);

        let rect = response.rect;
        self.renderer.render(&painter, rect, &self.session.snapshot());
        self.renderer.render_label(&painter, rect, self.session.label());
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(8.0);
            self.toolbar(ui);
            if self.session.mode() == Mode::Text {
                self.text_field(ui);
            }
            ui.add_space(8.0);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.canvas(ui));
    }
}
