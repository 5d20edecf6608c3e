use egui::{Color32, Pos2};
use uuid::Uuid;

/// Identifies the in-progress stroke a gesture is feeding.
///
/// Every call to `begin_stroke` mints a fresh handle, so a handle kept
/// across a `clear_all` never matches the next stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeHandle(Uuid);

impl StrokeHandle {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

// Immutable stroke, only ever produced by committing a MutableStroke
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
}

impl Stroke {
    pub fn new(color: Color32, points: Vec<Pos2>) -> Self {
        Self { points, color }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke whose drag never moved.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}

// Stroke being extended by the active drag
#[derive(Clone, Debug)]
pub struct MutableStroke {
    handle: StrokeHandle,
    points: Vec<Pos2>,
    color: Color32,
}

impl MutableStroke {
    pub(crate) fn new(handle: StrokeHandle, origin: Pos2, color: Color32) -> Self {
        Self {
            handle,
            points: vec![origin],
            color,
        }
    }

    pub fn handle(&self) -> StrokeHandle {
        self.handle
    }

    pub(crate) fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    // Moves the points out, the builder is gone afterwards
    pub(crate) fn into_stroke(self) -> Stroke {
        Stroke::new(self.color, self.points)
    }
}
