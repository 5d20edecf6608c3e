use egui::Color32;

use crate::canvas::{CanvasState, Snapshot};
use crate::config::SketchConfig;
use crate::input::DragEvent;
use crate::label::TextLabel;
use crate::tools::{Tool, ToolContext, ToolType};

/// Which target receives drag gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Drawing,
    Text,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Drawing, Self::Text];

    pub fn label(self) -> &'static str {
        match self {
            Self::Drawing => "Drawing",
            Self::Text => "Text",
        }
    }
}

/// Owns all sketch state and routes input to it.
///
/// The tool handling a drag is picked from the mode when the drag starts
/// and keeps the drag until it ends, so switching modes mid-drag neither
/// reroutes nor cancels the gesture.
#[derive(Debug)]
pub struct SketchSession {
    canvas: CanvasState,
    label: TextLabel,
    mode: Mode,
    color: Color32,
    active_tool: Option<ToolType>,
}

impl SketchSession {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            canvas: CanvasState::new(),
            label: TextLabel::from_config(&config.label),
            mode: Mode::default(),
            color: config.stroke_color,
            active_tool: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn select_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("Mode switched: {} -> {}", self.mode.label(), mode.label());
            self.mode = mode;
        }
    }

    /// Wipe the canvas and reset the label. The mode is kept.
    pub fn clear(&mut self) {
        log::info!("Clearing {} strokes", self.canvas.stroke_count());
        self.canvas.clear_all();
        self.label.reset();
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Color for strokes started from now on.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    pub fn handle_drag(&mut self, event: DragEvent) {
        let mut ctx = ToolContext::new(&mut self.canvas, &mut self.label);
        match event {
            DragEvent::Start { position } => {
                if self.active_tool.is_some() {
                    log::debug!("Ignored drag start at {:?}: a drag is already active", position);
                    return;
                }
                let mut tool = ToolType::for_mode(self.mode, self.color);
                tool.on_drag_start(position, &mut ctx);
                self.active_tool = Some(tool);
            }
            DragEvent::Move { position, delta } => match self.active_tool.as_mut() {
                Some(tool) => tool.on_drag_move(position, delta, &mut ctx),
                None => log::debug!("Ignored drag move without a start"),
            },
            DragEvent::End => match self.active_tool.take() {
                Some(mut tool) => tool.on_drag_end(&mut ctx),
                None => log::debug!("Ignored drag end without a start"),
            },
        }
    }

    pub fn handle_drags(&mut self, events: impl IntoIterator<Item = DragEvent>) {
        for event in events {
            self.handle_drag(event);
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.canvas.snapshot()
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn label(&self) -> &TextLabel {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut TextLabel {
        &mut self.label
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        self.active_tool.as_ref()
    }
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}
