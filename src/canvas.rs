use egui::{Color32, Pos2};

use crate::error::{SketchError, SketchResult};
use crate::stroke::{MutableStroke, Stroke, StrokeHandle};

/// Strokes owned by the drawing surface.
///
/// Committed strokes are append-only and only ever removed all at once by
/// [`CanvasState::clear_all`]. At most one stroke is in progress, and it is
/// never part of the committed list until `commit_stroke` moves it there.
#[derive(Debug, Default)]
pub struct CanvasState {
    strokes: Vec<Stroke>,
    in_progress: Option<MutableStroke>,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke containing only `origin`.
    pub fn begin_stroke(&mut self, origin: Pos2, color: Color32) -> SketchResult<StrokeHandle> {
        if self.in_progress.is_some() {
            log::debug!("Rejected begin_stroke at {:?}: a stroke is already in progress", origin);
            return Err(SketchError::StrokeInProgress);
        }

        let handle = StrokeHandle::new();
        self.in_progress = Some(MutableStroke::new(handle, origin, color));
        Ok(handle)
    }

    /// Append a point to the in-progress stroke identified by `handle`.
    pub fn extend_stroke(&mut self, handle: StrokeHandle, point: Pos2) {
        match self.in_progress.as_mut() {
            Some(stroke) if stroke.handle() == handle => stroke.add_point(point),
            Some(_) => log::debug!("Ignored extend_stroke with a stale handle"),
            None => log::debug!("Ignored extend_stroke: no stroke in progress"),
        }
    }

    /// Move the in-progress stroke to the end of the committed list.
    pub fn commit_stroke(&mut self, handle: StrokeHandle) {
        match self.in_progress.take() {
            Some(stroke) if stroke.handle() == handle => {
                let stroke = stroke.into_stroke();
                log::debug!("Committed stroke with {} points", stroke.len());
                self.strokes.push(stroke);
            }
            Some(other) => {
                log::debug!("Ignored commit_stroke with a stale handle");
                self.in_progress = Some(other);
            }
            None => log::debug!("Ignored commit_stroke: no stroke in progress"),
        }
    }

    /// Drop every committed stroke and cancel the in-progress one.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
        self.in_progress = None;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            committed: &self.strokes,
            in_progress: self.in_progress.as_ref(),
        }
    }

    pub fn committed(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn in_progress(&self) -> Option<&MutableStroke> {
        self.in_progress.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

/// A borrowed stroke, committed or not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeView<'a> {
    pub points: &'a [Pos2],
    pub color: Color32,
}

/// Read-only view of everything eligible for rendering, in draw order.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    committed: &'a [Stroke],
    in_progress: Option<&'a MutableStroke>,
}

impl<'a> Snapshot<'a> {
    /// Committed strokes in commit order, then the in-progress stroke.
    pub fn iter(&self) -> impl Iterator<Item = StrokeView<'a>> + use<'a> {
        let (committed, in_progress) = (self.committed, self.in_progress);
        let committed = committed.iter().map(|stroke| StrokeView {
            points: stroke.points(),
            color: stroke.color(),
        });
        let active = in_progress.map(|stroke| StrokeView {
            points: stroke.points(),
            color: stroke.color(),
        });
        committed.chain(active)
    }

    pub fn len(&self) -> usize {
        self.committed.len() + usize::from(self.in_progress.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_in_progress(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn to_strokes(&self) -> Vec<Stroke> {
        self.iter()
            .map(|view| Stroke::new(view.color, view.points.to_vec()))
            .collect()
    }
}
