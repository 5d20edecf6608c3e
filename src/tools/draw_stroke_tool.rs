use egui::{Color32, Pos2, Vec2};

use crate::stroke::StrokeHandle;
use crate::tools::{Tool, ToolContext};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawStrokeState {
    Idle,
    Drawing { handle: StrokeHandle },
}

/// Feeds a drag gesture into the canvas as a freehand stroke.
#[derive(Clone, Debug)]
pub struct DrawStrokeTool {
    color: Color32,
    state: DrawStrokeState,
}

impl DrawStrokeTool {
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            state: DrawStrokeState::Idle,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn state(&self) -> DrawStrokeState {
        self.state
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        "DrawStroke"
    }

    fn current_state_name(&self) -> &'static str {
        match self.state {
            DrawStrokeState::Idle => "Idle",
            DrawStrokeState::Drawing { .. } => "Drawing",
        }
    }

    fn on_drag_start(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        match ctx.canvas.begin_stroke(pos, self.color) {
            Ok(handle) => self.state = DrawStrokeState::Drawing { handle },
            Err(err) => log::debug!("DrawStroke: {}", err),
        }
    }

    fn on_drag_move(&mut self, pos: Pos2, _delta: Vec2, ctx: &mut ToolContext<'_>) {
        // Every reported position becomes a point, no filtering
        if let DrawStrokeState::Drawing { handle } = self.state {
            ctx.canvas.extend_stroke(handle, pos);
        }
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>) {
        if let DrawStrokeState::Drawing { handle } = self.state {
            ctx.canvas.commit_stroke(handle);
        }
        self.state = DrawStrokeState::Idle;
    }
}
