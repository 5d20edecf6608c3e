use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::canvas::Snapshot;
use crate::config::SketchConfig;
use crate::label::TextLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
}

/// Drawing instructions for one stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    pub points: Vec<Pos2>,
    pub color: Color32,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokePath {
    /// Convert to egui shapes, shifted by `origin`.
    ///
    /// egui lines have butt ends, so round caps and joins are a filled disc
    /// at every vertex underneath the polyline.
    pub fn to_shapes(&self, origin: Vec2) -> Vec<Shape> {
        let radius = self.width / 2.0;
        let points: Vec<Pos2> = self.points.iter().map(|p| *p + origin).collect();

        let mut shapes: Vec<Shape> = points
            .iter()
            .map(|p| Shape::circle_filled(*p, radius, self.color))
            .collect();
        if points.len() > 1 {
            shapes.push(Shape::line(points, EguiStroke::new(self.width, self.color)));
        }
        shapes
    }
}

/// Draws snapshots. Holds only settings, never anything from a previous
/// frame, so rendering the same snapshot twice gives the same output.
#[derive(Debug, Clone)]
pub struct Renderer {
    line_width: f32,
    background: Color32,
    label_font: FontId,
    label_color: Color32,
}

impl Renderer {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            line_width: config.line_width,
            background: config.background,
            label_font: FontId::proportional(config.label.font_size),
            label_color: config.label.color,
        }
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// The draw list for a snapshot, in snapshot order.
    pub fn plan(&self, snapshot: &Snapshot<'_>) -> Vec<StrokePath> {
        snapshot
            .iter()
            .filter(|view| !view.points.is_empty())
            .map(|view| StrokePath {
                points: view.points.to_vec(),
                color: view.color,
                width: self.line_width,
                cap: LineCap::Round,
                join: LineJoin::Round,
            })
            .collect()
    }

    /// egui shapes for a snapshot whose canvas starts at `origin` on screen.
    pub fn shapes(&self, snapshot: &Snapshot<'_>, origin: Pos2) -> Vec<Shape> {
        self.plan(snapshot)
            .iter()
            .flat_map(|path| path.to_shapes(origin.to_vec2()))
            .collect()
    }

    /// Paint the background and every stroke into `rect`.
    pub fn render(&self, painter: &Painter, rect: Rect, snapshot: &Snapshot<'_>) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);
        painter.extend(self.shapes(snapshot, rect.min));
    }

    /// Paint the text label on top of the strokes.
    pub fn render_label(&self, painter: &Painter, rect: Rect, label: &TextLabel) -> Rect {
        painter.with_clip_rect(rect).text(
            rect.min + label.position().to_vec2(),
            Align2::LEFT_TOP,
            label.text(),
            self.label_font.clone(),
            self.label_color,
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasState;
    use egui::pos2;

    fn sample_canvas() -> CanvasState {
        let mut canvas = CanvasState::new();
        let handle = canvas.begin_stroke(pos2(0.0, 0.0), Color32::RED).unwrap();
        canvas.extend_stroke(handle, pos2(10.0, 0.0));
        canvas.commit_stroke(handle);
        let handle = canvas.begin_stroke(pos2(5.0, 5.0), Color32::BLUE).unwrap();
        canvas.extend_stroke(handle, pos2(5.0, 15.0));
        canvas
    }

    #[test]
    fn test_plan_uses_round_eight_unit_lines() {
        let canvas = sample_canvas();
        let plan = Renderer::default().plan(&canvas.snapshot());

        assert_eq!(plan.len(), 2);
        for path in &plan {
            assert_eq!(path.width, 8.0);
            assert_eq!(path.cap, LineCap::Round);
            assert_eq!(path.join, LineJoin::Round);
        }
        // The in-progress stroke is drawn last
        assert_eq!(plan[0].color, Color32::RED);
        assert_eq!(plan[1].color, Color32::BLUE);
    }

    #[test]
    fn test_plan_is_repeatable() {
        let canvas = sample_canvas();
        let renderer = Renderer::default();
        let first = renderer.plan(&canvas.snapshot());
        let second = renderer.plan(&canvas.snapshot());
        assert_eq!(first, second);
        assert_eq!(
            renderer.shapes(&canvas.snapshot(), Pos2::ZERO).len(),
            renderer.shapes(&canvas.snapshot(), Pos2::ZERO).len()
        );
    }

    #[test]
    fn test_single_point_is_a_dot() {
        let path = StrokePath {
            points: vec![pos2(3.0, 3.0)],
            color: Color32::BLACK,
            width: 8.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        };
        let shapes = path.to_shapes(Vec2::ZERO);
        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, pos2(3.0, 3.0));
                assert_eq!(circle.radius, 4.0);
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_shapes_are_offset_to_canvas() {
        let canvas = sample_canvas();
        let shapes = Renderer::default().shapes(&canvas.snapshot(), pos2(100.0, 50.0));

        // Two vertices plus a polyline per stroke
        assert_eq!(shapes.len(), 6);
        match &shapes[0] {
            Shape::Circle(circle) => assert_eq!(circle.center, pos2(100.0, 50.0)),
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_render_basics() {
        let canvas = sample_canvas();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, rect);

        let renderer = Renderer::default();
        renderer.render(&painter, rect, &canvas.snapshot());
    }
}
