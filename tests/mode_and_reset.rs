use egui::{pos2, vec2};
use sketchbook::{DragEvent, Mode, Renderer, SketchConfig, SketchSession};

fn session_with_content() -> SketchSession {
    let mut session = SketchSession::default();
    session.handle_drags([
        DragEvent::Start { position: pos2(0.0, 0.0) },
        DragEvent::Move { position: pos2(3.0, 4.0), delta: vec2(3.0, 4.0) },
        DragEvent::End,
    ]);
    session.set_text("note");
    session
}

#[test]
fn test_switching_mode_leaves_state_alone() {
    let mut session = session_with_content();
    let strokes = session.snapshot().to_strokes();
    let label = session.label().clone();

    for mode in [Mode::Text, Mode::Text, Mode::Drawing, Mode::Text] {
        session.select_mode(mode);
        assert_eq!(session.mode(), mode);
        assert_eq!(session.snapshot().to_strokes(), strokes);
        assert_eq!(session.label(), &label);
    }
}

#[test]
fn test_clear_resets_everything_but_mode() {
    let mut session = session_with_content();
    session.select_mode(Mode::Text);
    session.handle_drags([
        DragEvent::Start { position: pos2(0.0, 0.0) },
        DragEvent::Move { position: pos2(30.0, 0.0), delta: vec2(30.0, 0.0) },
        DragEvent::End,
    ]);

    session.clear();
    assert!(session.snapshot().is_empty());
    assert_eq!(session.label().text(), "Enter text");
    assert_eq!(session.label().position(), pos2(100.0, 100.0));
    assert_eq!(session.mode(), Mode::Text);
}

#[test]
fn test_clear_uses_configured_label_defaults() {
    let config = SketchConfig::from_json(
        r#"{ "label": { "default_text": "Title", "default_position": { "x": 12.0, "y": 34.0 } } }"#,
    )
    .unwrap();
    let mut session = SketchSession::new(&config);
    assert_eq!(session.label().text(), "Title");

    session.set_text("changed");
    session.label_mut().translate(vec2(1.0, 1.0));
    session.clear();
    assert_eq!(session.label().text(), "Title");
    assert_eq!(session.label().position(), pos2(12.0, 34.0));
}

#[test]
fn test_stray_events_are_absorbed() {
    let mut session = session_with_content();
    let before = session.snapshot().to_strokes();

    session.handle_drag(DragEvent::Move { position: pos2(9.0, 9.0), delta: vec2(1.0, 1.0) });
    session.handle_drag(DragEvent::End);
    session.handle_drag(DragEvent::End);

    assert_eq!(session.snapshot().to_strokes(), before);
    assert!(session.active_tool().is_none());
}

#[test]
fn test_render_plan_is_a_function_of_the_snapshot() {
    let mut session = session_with_content();
    session.handle_drag(DragEvent::Start { position: pos2(8.0, 8.0) });

    let renderer = Renderer::new(&SketchConfig::default());
    let first = renderer.plan(&session.snapshot());
    let second = renderer.plan(&session.snapshot());
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].points, vec![pos2(0.0, 0.0), pos2(3.0, 4.0)]);

    session.clear();
    assert!(renderer.plan(&session.snapshot()).is_empty());
}
