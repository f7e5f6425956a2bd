//! End-to-end gesture flows: click, double-click, drag, scroll.

use crate::helpers::*;
use mouse_manager::{ActionKind, ButtonKind, ListenerKind, WheelFields};

// ============================================================================
// Click & Double Click
// ============================================================================

#[test]
fn test_click_emits_down_up_click() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 100.0, 100.0, ButtonKind::Left);
    release(&mut manager, 102.0, 101.0, ButtonKind::Left);

    assert_eq!(
        recorder.names(),
        vec![
            "mouse-event",
            "mouse-down",
            "mouse-event",
            "mouse-up",
            "mouse-event",
            "click"
        ]
    );
    assert_eq!(manager.action(), Some(ActionKind::Click));
    assert!(!manager.btn_left());
}

#[test]
fn test_small_gestures_never_drag() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    for dx in [-5.0, -2.5, 0.0, 3.0, 5.0] {
        for dy in [-5.0, 0.0, 4.9, 5.0] {
            recorder.clear();
            press(&mut manager, 200.0, 200.0, ButtonKind::Left);
            move_on_canvas(&mut manager, 200.0 + dx, 200.0 + dy);
            release(&mut manager, 200.0 + dx, 200.0 + dy, ButtonKind::Left);

            let actions = recorder.actions();
            assert_eq!(actions.last(), Some(&ActionKind::Click), "dx={dx} dy={dy}");
            assert!(
                !actions.iter().any(|a| matches!(
                    a,
                    ActionKind::DragStart | ActionKind::Dragging | ActionKind::DragEnd
                )),
                "dx={dx} dy={dy}: {actions:?}"
            );
        }
    }
}

#[test]
fn test_custom_threshold_widens_click() {
    let (mut manager, recorder) = TestManagerBuilder::new().with_threshold(20.0).build();
    assert_eq!(manager.threshold(), 20.0);

    press(&mut manager, 100.0, 100.0, ButtonKind::Left);
    move_on_canvas(&mut manager, 115.0, 100.0);
    release(&mut manager, 115.0, 100.0, ButtonKind::Left);

    assert_eq!(
        recorder.actions(),
        vec![
            ActionKind::MouseDown,
            ActionKind::MouseMove,
            ActionKind::MouseUp,
            ActionKind::Click
        ]
    );
}

#[test]
fn test_zero_threshold_falls_back_to_default() {
    let (manager, _recorder) = TestManagerBuilder::new().with_threshold(0.0).build();
    assert_eq!(manager.threshold(), 5.0);
}

#[test]
fn test_double_click_after_click() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 50.0, 50.0, ButtonKind::Left);
    release(&mut manager, 50.0, 50.0, ButtonKind::Left);
    press(&mut manager, 50.0, 50.0, ButtonKind::Left);
    release(&mut manager, 50.0, 50.0, ButtonKind::Left);
    recorder.clear();

    double_click(&mut manager, 50.0, 50.0);

    assert_eq!(recorder.names(), vec!["mouse-event", "double-click"]);
    assert_eq!(manager.action(), Some(ActionKind::DoubleClick));
}

#[test]
fn test_double_click_trigger_after_drag_is_silent() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    drag(&mut manager, (10.0, 10.0), (60.0, 10.0));
    recorder.clear();
    double_click(&mut manager, 60.0, 10.0);

    assert!(recorder.is_empty());
    // The raw trigger is still recorded as the current action
    assert_eq!(manager.action(), Some(ActionKind::DoubleClick));
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_sequence() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 100.0, 100.0, ButtonKind::Left);
    move_on_canvas(&mut manager, 110.0, 100.0);
    move_on_canvas(&mut manager, 120.0, 100.0);
    release(&mut manager, 120.0, 100.0, ButtonKind::Left);

    assert_eq!(
        recorder.actions(),
        vec![
            ActionKind::MouseDown,
            ActionKind::MouseMove,
            ActionKind::DragStart,
            ActionKind::Dragging,
            ActionKind::MouseMove,
            ActionKind::Dragging,
            ActionKind::MouseUp,
            ActionKind::DragEnd,
        ]
    );

    let emissions = recorder.emissions();
    let drag_start = emissions
        .iter()
        .find(|e| e.action() == Some(ActionKind::DragStart))
        .map(|e| e.snapshot.clone());
    let drag_start = drag_start.expect("drag-start emitted");
    assert_eq!((drag_start.page_x, drag_start.page_y), (100.0, 100.0));
    assert!(drag_start.btn_left);

    let drag_end = &emissions[emissions.len() - 1].snapshot;
    assert!(!drag_end.btn_left && !drag_end.btn_middle && !drag_end.btn_right);
}

#[test]
fn test_drag_continues_outside_surface() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 100.0, 100.0, ButtonKind::Left);
    move_on_canvas(&mut manager, 110.0, 100.0);
    recorder.clear();

    move_outside(&mut manager, 300.0, 300.0);
    assert_eq!(recorder.actions(), vec![ActionKind::Dragging]);
    assert_eq!((manager.page_x(), manager.page_y()), (300.0, 300.0));

    release_outside(&mut manager, 300.0, 300.0, ButtonKind::Left);
    assert_eq!(
        recorder.actions(),
        vec![ActionKind::Dragging, ActionKind::DragEnd]
    );
    assert!(!manager.btn_left());
    assert_eq!(manager.action(), Some(ActionKind::DragEnd));
}

#[test]
fn test_outside_events_ignored_without_drag() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    move_outside(&mut manager, 300.0, 300.0);
    release_outside(&mut manager, 300.0, 300.0, ButtonKind::Left);

    assert!(recorder.is_empty());
    assert_eq!(manager.action(), None);
}

#[test]
fn test_canvas_events_do_not_reach_document_route() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 100.0, 100.0, ButtonKind::Left);
    move_on_canvas(&mut manager, 110.0, 100.0);
    recorder.clear();

    // Bubbles to the document too, which must not add a second dragging
    move_on_canvas(&mut manager, 115.0, 100.0);
    assert_eq!(
        recorder.actions(),
        vec![ActionKind::MouseMove, ActionKind::Dragging]
    );
}

#[test]
fn test_right_button_drag() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 0.0, 0.0, ButtonKind::Right);
    assert!(manager.btn_right());
    move_on_canvas(&mut manager, 0.0, 40.0);
    release(&mut manager, 0.0, 40.0, ButtonKind::Right);

    assert!(recorder.actions().contains(&ActionKind::DragStart));
    assert_eq!(recorder.actions().last(), Some(&ActionKind::DragEnd));
    assert!(!manager.btn_right());
}

// ============================================================================
// Scroll
// ============================================================================

#[test]
fn test_scroll_directions() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    wheel(
        &mut manager,
        ListenerKind::MouseWheel,
        WheelFields {
            wheel_delta_y: Some(120.0),
            ..WheelFields::default()
        },
    );
    wheel(
        &mut manager,
        ListenerKind::DomMouseScroll,
        WheelFields {
            axis: Some(2),
            detail: Some(3.0),
            ..WheelFields::default()
        },
    );

    assert_eq!(
        recorder.names(),
        vec!["mouse-event", "scroll-up", "mouse-event", "scroll-down"]
    );
}

#[test]
fn test_wheel_without_delta_is_dropped() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    wheel(&mut manager, ListenerKind::MouseWheel, WheelFields::default());

    assert!(recorder.is_empty());
    assert_eq!(manager.action(), None);
}

// ============================================================================
// Coordinates
// ============================================================================

#[test]
fn test_local_coordinates_use_offset_and_transform() {
    let (mut manager, recorder) = TestManagerBuilder::new()
        .with_canvas_offset(100.0, 50.0)
        .with_transform((2.0, 2.0), (5.0, 0.0))
        .build();

    press(&mut manager, 110.0, 70.0, ButtonKind::Left);

    let snapshot = &recorder.emissions()[1].snapshot;
    assert_eq!((snapshot.x, snapshot.y), (25.0, 40.0));
    assert_eq!((manager.x(), manager.y()), (25.0, 40.0));
}

#[test]
fn test_deltas_are_scaled_but_not_translated() {
    let (mut manager, _recorder) = TestManagerBuilder::new()
        .with_transform((2.0, 0.5), (100.0, 100.0))
        .build();

    move_on_canvas(&mut manager, 10.0, 10.0);
    move_on_canvas(&mut manager, 14.0, 6.0);

    assert_eq!((manager.delta_x(), manager.delta_y()), (8.0, -2.0));
}

#[test]
fn test_setters_apply_to_next_snapshot() {
    let (mut manager, recorder) = TestManagerBuilder::new().build();

    manager.set_scale_x(3.0);
    manager.set_scale_y(3.0);
    manager.set_translate_x(1.0);
    manager.set_translate_y(-1.0);
    move_on_canvas(&mut manager, 2.0, 2.0);

    let snapshot = &recorder.emissions()[1].snapshot;
    assert_eq!((snapshot.x, snapshot.y), (7.0, 5.0));
    assert_eq!(manager.scale_x(), 3.0);
    assert_eq!(manager.translate_y(), -1.0);
}

#[test]
fn test_source_id_is_attached() {
    let (mut manager, recorder) = TestManagerBuilder::new()
        .with_source_id("left-pane")
        .build();

    press(&mut manager, 1.0, 1.0, ButtonKind::Left);

    assert_eq!(manager.source_id(), Some("left-pane"));
    assert!(recorder
        .emissions()
        .iter()
        .all(|e| e.snapshot.source_id.as_deref() == Some("left-pane")));
}
