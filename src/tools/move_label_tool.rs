use egui::{Pos2, Vec2};

use crate::tools::{Tool, ToolContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveLabelState {
    Idle,
    Dragging,
}

/// Repositions the text label by the per-event drag delta.
#[derive(Clone, Debug)]
pub struct MoveLabelTool {
    state: MoveLabelState,
}

impl MoveLabelTool {
    pub fn new() -> Self {
        Self {
            state: MoveLabelState::Idle,
        }
    }

    pub fn state(&self) -> MoveLabelState {
        self.state
    }
}

impl Default for MoveLabelTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for MoveLabelTool {
    fn name(&self) -> &'static str {
        "MoveLabel"
    }

    fn current_state_name(&self) -> &'static str {
        match self.state {
            MoveLabelState::Idle => "Idle",
            MoveLabelState::Dragging => "Dragging",
        }
    }

    fn on_drag_start(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_>) {
        self.state = MoveLabelState::Dragging;
    }

    fn on_drag_move(&mut self, _pos: Pos2, delta: Vec2, ctx: &mut ToolContext<'_>) {
        if self.state == MoveLabelState::Dragging {
            ctx.label.translate(delta);
        }
    }

    fn on_drag_end(&mut self, _ctx: &mut ToolContext<'_>) {
        self.state = MoveLabelState::Idle;
    }
}
