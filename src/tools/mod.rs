use egui::{Pos2, Vec2};

use crate::canvas::CanvasState;
use crate::label::TextLabel;
use crate::session::Mode;

mod draw_stroke_tool;
pub use draw_stroke_tool::{DrawStrokeState, DrawStrokeTool};

mod move_label_tool;
pub use move_label_tool::{MoveLabelState, MoveLabelTool};

/// The state a tool is allowed to touch while handling a drag.
pub struct ToolContext<'a> {
    pub canvas: &'a mut CanvasState,
    pub label: &'a mut TextLabel,
}

impl<'a> ToolContext<'a> {
    pub fn new(canvas: &'a mut CanvasState, label: &'a mut TextLabel) -> Self {
        Self { canvas, label }
    }
}

/// Tool trait defines how a drag gesture is applied to the sketch
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Name of the tool's current internal state, for debugging
    fn current_state_name(&self) -> &'static str;

    /// The pointer went down and started dragging at `pos`.
    fn on_drag_start(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>);

    /// The pointer moved to `pos`, `delta` away from the previous event.
    fn on_drag_move(&mut self, pos: Pos2, delta: Vec2, ctx: &mut ToolContext<'_>);

    /// The pointer was released.
    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>);
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Clone, Debug)]
pub enum ToolType {
    DrawStroke(DrawStrokeTool),
    MoveLabel(MoveLabelTool),
}

impl ToolType {
    /// The tool that receives drags in `mode`.
    pub fn for_mode(mode: Mode, color: egui::Color32) -> Self {
        match mode {
            Mode::Drawing => Self::DrawStroke(DrawStrokeTool::new(color)),
            Mode::Text => Self::MoveLabel(MoveLabelTool::new()),
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.name(),
            Self::MoveLabel(tool) => tool.name(),
        }
    }

    fn current_state_name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.current_state_name(),
            Self::MoveLabel(tool) => tool.current_state_name(),
        }
    }

    fn on_drag_start(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::DrawStroke(tool) => tool.on_drag_start(pos, ctx),
            Self::MoveLabel(tool) => tool.on_drag_start(pos, ctx),
        }
    }

    fn on_drag_move(&mut self, pos: Pos2, delta: Vec2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::DrawStroke(tool) => tool.on_drag_move(pos, delta, ctx),
            Self::MoveLabel(tool) => tool.on_drag_move(pos, delta, ctx),
        }
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::DrawStroke(tool) => tool.on_drag_end(ctx),
            Self::MoveLabel(tool) => tool.on_drag_end(ctx),
        }
    }
}
