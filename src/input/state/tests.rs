use super::*;
use crate::draw::color::{BLACK, BLUE, RED};
use crate::draw::Mark;
use crate::input::{Action, MouseButton, Tool};

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        BLACK,
        2.0, // thickness
        vec!["⭐".to_string(), "❤".to_string(), "🙂".to_string()],
        0.0, // sticker_rotation
    )
}

#[test]
fn from_config_applies_drawing_defaults() {
    let config = crate::config::Config::default();
    let state = InputState::from_config(&config);

    assert_eq!(state.current_color, BLACK);
    assert_eq!(state.current_thickness, config.drawing.thin_thickness);
    assert_eq!(state.palette, config.stickers.palette);
    assert_eq!(state.active_tool(), Tool::Marker);
    assert!(state.needs_redraw);
}

#[test]
fn press_move_release_produces_one_stroke() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 10, 10);
    assert!(matches!(state.state, DrawingState::Stroking { .. }));
    state.on_pointer_motion(20, 10);
    state.on_pointer_motion(20, 20);
    state.on_pointer_release(MouseButton::Left, 20, 20);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.frame.len(), 1);
    match &state.frame.marks()[0] {
        Mark::Stroke { points, thick, color } => {
            assert_eq!(points, &vec![(10, 10), (20, 10), (20, 20)]);
            assert_eq!(*thick, 2.0);
            assert_eq!(*color, BLACK);
        }
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn stroke_is_immutable_after_release() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(5, 5);
    state.on_pointer_release(MouseButton::Left, 5, 5);

    // Motion without a held button must not extend the finished stroke.
    state.on_pointer_motion(50, 50);
    match &state.frame.marks()[0] {
        Mark::Stroke { points, .. } => assert_eq!(points.len(), 2),
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn selected_sticker_places_on_press() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectSticker("⭐".to_string()));
    assert_eq!(state.active_tool(), Tool::Sticker);

    state.on_pointer_press(MouseButton::Left, 50, 50);
    // One-shot placement: no drag phase, still idle.
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.frame.len(), 1);
    match &state.frame.marks()[0] {
        Mark::Sticker { glyph, x, y, rotation } => {
            assert_eq!(glyph, "⭐");
            assert_eq!((*x, *y), (50, 50));
            assert_eq!(*rotation, 0.0);
        }
        other => panic!("expected sticker, got {:?}", other),
    }

    // Dragging after placement draws nothing new.
    state.on_pointer_motion(60, 60);
    state.on_pointer_release(MouseButton::Left, 60, 60);
    assert_eq!(state.frame.len(), 1);
}

#[test]
fn selecting_thickness_returns_to_marker_mode() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectSticker("🙂".to_string()));
    assert_eq!(state.active_tool(), Tool::Sticker);

    state.handle_action(Action::SelectThickness(5.0));
    assert_eq!(state.active_tool(), Tool::Marker);
    assert_eq!(state.current_thickness, 5.0);
}

#[test]
fn thickness_selection_is_clamped() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectThickness(500.0));
    assert_eq!(state.current_thickness, 20.0);
    state.handle_action(Action::SelectThickness(0.0));
    assert_eq!(state.current_thickness, 1.0);
}

#[test]
fn color_selection_applies_to_new_strokes_only() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(10, 0);
    state.on_pointer_release(MouseButton::Left, 10, 0);

    state.handle_action(Action::SelectColor(RED));
    state.on_pointer_press(MouseButton::Left, 0, 10);
    state.on_pointer_motion(10, 10);
    state.on_pointer_release(MouseButton::Left, 10, 10);

    match &state.frame.marks()[0] {
        Mark::Stroke { color, .. } => assert_eq!(*color, BLACK),
        other => panic!("expected stroke, got {:?}", other),
    }
    match &state.frame.marks()[1] {
        Mark::Stroke { color, .. } => assert_eq!(*color, RED),
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn undo_mid_drag_finalizes_then_removes_the_stroke() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(10, 0);
    state.handle_action(Action::Undo);

    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.frame.is_empty());
    assert_eq!(state.frame.redo_len(), 1);

    // The release that ends the original drag must not resurrect anything.
    state.on_pointer_release(MouseButton::Left, 10, 0);
    assert!(state.frame.is_empty());
}

#[test]
fn redo_mid_drag_is_a_noop() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(10, 0);
    state.on_pointer_release(MouseButton::Left, 10, 0);
    state.handle_action(Action::Undo);
    assert_eq!(state.frame.redo_len(), 1);

    // Starting a new stroke invalidates the redo history, so a redo fired
    // during the drag has nothing to replay.
    state.on_pointer_press(MouseButton::Left, 20, 0);
    state.handle_action(Action::Redo);
    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.redo_len(), 0);
}

#[test]
fn clear_resets_frame_and_drawing_state() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(10, 0);
    state.handle_action(Action::Clear);

    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.frame.is_empty());
    assert_eq!(state.frame.redo_len(), 0);
}

#[test]
fn custom_sticker_joins_palette_and_becomes_selected() {
    let mut state = create_test_input_state();
    let before = state.palette.len();

    state.handle_action(Action::AddCustomSticker("🦀".to_string()));
    assert_eq!(state.palette.len(), before + 1);
    assert_eq!(state.selected_sticker.as_deref(), Some("🦀"));

    // Re-adding the same glyph selects it without duplicating the entry.
    state.handle_action(Action::AddCustomSticker("🦀".to_string()));
    assert_eq!(state.palette.len(), before + 1);
}

#[test]
fn empty_custom_sticker_is_ignored() {
    let mut state = create_test_input_state();
    let before = state.palette.len();

    state.handle_action(Action::AddCustomSticker("   ".to_string()));
    assert_eq!(state.palette.len(), before);
    assert_eq!(state.selected_sticker, None);
}

#[test]
fn export_action_sets_pending_flag_once() {
    let mut state = create_test_input_state();
    assert!(!state.take_pending_export());

    state.handle_action(Action::Export);
    assert!(state.take_pending_export());
    assert!(!state.take_pending_export());
}

#[test]
fn marker_preview_follows_hover() {
    let mut state = create_test_input_state();
    assert!(state.preview_mark().is_none());

    state.on_pointer_motion(30, 40);
    match state.preview_mark() {
        Some(Mark::Stroke { points, thick, .. }) => {
            assert_eq!(points, vec![(30, 40)]);
            assert_eq!(thick, 2.0);
        }
        other => panic!("expected one-point stroke preview, got {:?}", other),
    }
}

#[test]
fn sticker_preview_is_a_ghost_of_the_selection() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectSticker("❤".to_string()));
    state.on_pointer_motion(70, 80);

    match state.preview_mark() {
        Some(Mark::Sticker { glyph, x, y, .. }) => {
            assert_eq!(glyph, "❤");
            assert_eq!((x, y), (70, 80));
        }
        other => panic!("expected sticker preview, got {:?}", other),
    }
}

#[test]
fn no_preview_while_dragging_or_after_pointer_leave() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(5, 5);
    assert!(state.preview_mark().is_none());
    state.on_pointer_release(MouseButton::Left, 5, 5);

    state.on_pointer_motion(10, 10);
    assert!(state.preview_mark().is_some());
    state.on_pointer_leave();
    assert!(state.preview_mark().is_none());
}

#[test]
fn right_press_finalizes_the_stroke_early() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(10, 0);
    state.on_pointer_press(MouseButton::Right, 10, 0);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.frame.len(), 1);

    // Further motion with the left button still down must not extend it.
    state.on_pointer_motion(20, 0);
    match &state.frame.marks()[0] {
        Mark::Stroke { points, .. } => assert_eq!(points.len(), 2),
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn color_keeps_tool_mode() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectSticker("⭐".to_string()));
    state.handle_action(Action::SelectColor(BLUE));
    assert_eq!(state.active_tool(), Tool::Sticker);
}
