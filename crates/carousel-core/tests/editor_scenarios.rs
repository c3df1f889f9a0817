use carousel_core::{
    Background, CanvasSize, Editor, EditorConfig, EditorState, Element, ElementPatch,
    PointerEvent, StylePatch, Template, TextStyle, Theme,
};
use kurbo::{Point, Size};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn text(content: &str) -> Element {
    Element::text(
        Point::new(540.0, 540.0),
        Size::new(600.0, 60.0),
        content,
        TextStyle::new(16.0, 400, "#fff"),
    )
}

#[test]
fn add_then_undo_restores_initial_document() {
    init_logging();
    let mut state = EditorState::default();
    let initial = state.slides().to_vec();

    state.add_element(text("Hi"));
    assert_eq!(state.active_slide().len(), 1);
    assert!(state.can_undo());

    assert!(state.undo());
    assert_eq!(state.slides(), initial.as_slice());
    assert!(state.selected_element().is_none());
    assert!(state.can_redo());
}

#[test]
fn full_session_round_trips_through_history() {
    init_logging();
    let mut editor = Editor::new(EditorConfig::default().with_canvas_size(CanvasSize::portrait()));
    let start = editor.state.slides().to_vec();

    let title = editor.add_text();
    editor.state.update_element_with_history(
        title,
        &ElementPatch::new().with_content("Ownership in 5 slides"),
    );
    editor.add_slide_from_template(Template::find("tips-list").unwrap());
    editor.state.duplicate_slide(1);
    editor.state.set_theme(Theme::light());
    editor.state.delete_slide(0);
    let end = editor.state.slides().to_vec();

    let mut undos = 0;
    while editor.undo() {
        undos += 1;
    }
    assert_eq!(undos, 6);
    assert_eq!(editor.state.slides(), start.as_slice());
    assert_eq!(editor.state.active_slide_index(), 0);

    while editor.redo() {}
    assert_eq!(editor.state.slides(), end.as_slice());
}

#[test]
fn drag_gesture_is_clamped_and_undone_in_one_step() {
    init_logging();
    let mut editor = Editor::default();
    let id = editor.add_text();
    editor.state.select_element(None);

    editor.handle_pointer(PointerEvent::down((270.0, 270.0)));
    for x in [200.0, 0.0, -250.0] {
        editor.handle_pointer(PointerEvent::moved((x, 270.0)));
    }
    editor.handle_pointer(PointerEvent::up((-250.0, 270.0)));

    let moved = editor.state.active_slide().element(id).unwrap().center();
    assert_eq!(moved, Point::new(0.0, 540.0));

    assert!(editor.undo());
    let restored = editor.state.active_slide().element(id).unwrap().center();
    assert_eq!(restored, Point::new(540.0, 540.0));
}

#[test]
fn resize_gesture_respects_floor() {
    init_logging();
    let mut editor = Editor::default();
    let id = editor.add_text();

    // Bottom-right handle of the 600x60 text at scale 0.5.
    editor.handle_pointer(PointerEvent::down((415.0, 280.0)));
    editor.handle_pointer(PointerEvent::moved((0.0, 0.0)));
    editor.handle_pointer(PointerEvent::up((0.0, 0.0)));

    let element = editor.state.active_slide().element(id).unwrap();
    assert_eq!(element.size(), Size::new(50.0, 30.0));

    assert!(editor.undo());
    let element = editor.state.active_slide().element(id).unwrap();
    assert_eq!(element.size(), Size::new(600.0, 60.0));
}

#[test]
fn style_merge_keeps_untouched_fields() {
    init_logging();
    let mut state = EditorState::default();
    let id = state.add_element(text("Hi"));
    let patch = ElementPatch::from_json(r#"{"style": {"fontSize": 20}}"#).unwrap();
    assert_eq!(
        patch.style,
        Some(StylePatch {
            font_size: Some(20.0),
            ..StylePatch::default()
        })
    );
    state.update_element(id, &patch);

    let style = state.selected_element().unwrap().style.clone().unwrap();
    assert!((style.font_size - 20.0).abs() < f64::EPSILON);
    assert_eq!(style.color, "#fff");
}

#[test]
fn history_is_bounded_to_fifty_entries() {
    init_logging();
    let mut state = EditorState::default();
    for i in 0..75 {
        state.update_slide_background(Background::solid(format!("#{i:06x}")));
    }
    assert_eq!(state.history().len(), 50);
    assert_eq!(
        state.history().oldest().unwrap().slides[0].background,
        Background::solid(format!("#{:06x}", 24))
    );
}

#[test]
fn fifty_mutations_undo_back_to_start() {
    init_logging();
    let mut state = EditorState::default();
    let start = state.slides().to_vec();
    for i in 0..50 {
        state.update_slide_background(Background::solid(format!("#{i:06x}")));
    }
    let end = state.slides().to_vec();

    let mut undos = 0;
    while state.undo() {
        undos += 1;
    }
    assert_eq!(undos, 50);
    assert_eq!(state.slides(), start.as_slice());
    assert!(state.history().len() <= 50);

    let mut redos = 0;
    while state.redo() {
        redos += 1;
    }
    assert_eq!(redos, 50);
    assert_eq!(state.slides(), end.as_slice());
}

#[test]
fn redo_branch_is_discarded_by_new_mutation() {
    init_logging();
    let mut state = EditorState::default();
    state.add_slide();
    state.add_slide();
    assert!(state.undo());
    assert!(state.can_redo());

    state.add_element(text("branch"));
    assert!(!state.can_redo());
    assert!(!state.redo());
}

#[test]
fn last_slide_cannot_be_deleted() {
    init_logging();
    let mut state = EditorState::default();
    state.add_slide();
    state.delete_slide(0);
    state.delete_slide(0);
    assert_eq!(state.slides().len(), 1);
    assert_eq!(state.active_slide_index(), 0);
}
