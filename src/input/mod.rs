use egui::{Pos2, Vec2};

/// One phase of a drag gesture, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer went down and started dragging
    Start { position: Pos2 },
    /// The pointer moved; `position` is absolute, `delta` is since the last event
    Move { position: Pos2, delta: Vec2 },
    /// The pointer was released
    End,
}

/// What the canvas widget reported about dragging during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSample {
    pub started: bool,
    pub dragging: bool,
    pub stopped: bool,
    /// Pointer position in screen coordinates, if known this frame
    pub pointer: Option<Pos2>,
    pub delta: Vec2,
}

impl DragSample {
    pub fn from_response(response: &egui::Response) -> Self {
        Self {
            started: response.drag_started(),
            dragging: response.dragged(),
            stopped: response.drag_stopped(),
            pointer: response.interact_pointer_pos(),
            delta: response.drag_delta(),
        }
    }
}

/// Turns per-frame drag samples into an ordered stream of [`DragEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    in_drag: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.in_drag
    }

    /// Process one frame. `origin` is the top-left corner of the canvas in
    /// screen coordinates.
    pub fn process(&mut self, sample: DragSample, origin: Pos2) -> Vec<DragEvent> {
        let mut events = Vec::new();
        let local = sample.pointer.map(|pos| (pos - origin).to_pos2());

        if sample.started && !self.in_drag {
            if let Some(position) = local {
                events.push(DragEvent::Start { position });
                self.in_drag = true;
                self.last_position = Some(position);
            }
        } else if sample.dragging && self.in_drag && sample.delta != Vec2::ZERO {
            // Fall back to integrating the delta when the pointer position is unknown
            let position = local.or_else(|| self.last_position.map(|last| last + sample.delta));
            if let Some(position) = position {
                events.push(DragEvent::Move {
                    position,
                    delta: sample.delta,
                });
                self.last_position = Some(position);
            }
        }

        if sample.stopped && self.in_drag {
            events.push(DragEvent::End);
            self.in_drag = false;
            self.last_position = None;
        }

        events
    }

    /// Convenience wrapper reading the sample straight from an egui response.
    pub fn process_response(&mut self, response: &egui::Response) -> Vec<DragEvent> {
        self.process(DragSample::from_response(response), response.rect.min)
    }
}
