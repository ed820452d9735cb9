//! Integrationstests für die Lesereihenfolge: Ableitung, Drag-Session und Entfernen.

mod common;

use common::{ids, loaded_editor, reading_order, ViewEvent};
use segmentation_editor::{EditorController, EditorIntent, EditorState, Point};

fn send(controller: &mut EditorController, state: &mut EditorState, intent: EditorIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn move_c_before_a(controller: &mut EditorController, state: &mut EditorState) {
    send(controller, state, EditorIntent::ReadingOrderDragStarted);
    send(
        controller,
        state,
        EditorIntent::ReadingOrderMoveRequested {
            moving_id: "C".into(),
            anchor_id: "A".into(),
        },
    );
}

#[test]
fn test_image_segments_are_excluded_and_order_is_derived_once() {
    let (mut controller, mut state, _events) = loaded_editor();
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));

    send(
        &mut controller,
        &mut state,
        EditorIntent::PolygonTypeChangeRequested {
            id: "B".into(),
            new_type: "paragraph".into(),
        },
    );
    send(&mut controller, &mut state, EditorIntent::PageDisplayRequested { page: 0 });

    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
}

#[test]
fn test_committed_drag_is_one_undo_step() {
    let (mut controller, mut state, events) = loaded_editor();

    move_c_before_a(&mut controller, &mut state);
    assert_eq!(
        events.borrow().last(),
        Some(&ViewEvent::ReadingOrder(ids(&["C", "A"])))
    );
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));

    send(&mut controller, &mut state, EditorIntent::ReadingOrderDragFinished);
    assert_eq!(reading_order(&state, 0), ids(&["C", "A"]));
    assert!(state.reading_order.staged_page().is_none());

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));

    send(&mut controller, &mut state, EditorIntent::RedoRequested);
    assert_eq!(reading_order(&state, 0), ids(&["C", "A"]));
}

#[test]
fn test_unchanged_drag_records_nothing() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(&mut controller, &mut state, EditorIntent::ReadingOrderDragStarted);
    send(&mut controller, &mut state, EditorIntent::ReadingOrderDragFinished);

    assert!(!state.can_undo());
}

#[test]
fn test_staged_reorder_is_discarded_on_page_change() {
    let (mut controller, mut state, _events) = loaded_editor();
    move_c_before_a(&mut controller, &mut state);

    send(&mut controller, &mut state, EditorIntent::PageDisplayRequested { page: 2 });
    assert!(state.reading_order.staged_page().is_none());

    send(&mut controller, &mut state, EditorIntent::PageDisplayRequested { page: 0 });
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
    assert!(!state.can_undo());
}

#[test]
fn test_cancelled_drag_redisplays_committed_order() {
    let (mut controller, mut state, events) = loaded_editor();
    move_c_before_a(&mut controller, &mut state);

    send(&mut controller, &mut state, EditorIntent::ReadingOrderDragCancelled);

    assert_eq!(
        events.borrow().last(),
        Some(&ViewEvent::ReadingOrder(ids(&["A", "C"])))
    );
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
}

#[test]
fn test_remove_from_reading_order_keeps_segment_visible() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::ReadingOrderRemoveRequested { id: "A".into() },
    );

    assert_eq!(reading_order(&state, 0), ids(&["C"]));
    assert!(state
        .model
        .visible_segments(0)
        .iter()
        .any(|s| s.id == "A"));

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
}

#[test]
fn test_removing_absent_id_is_noop() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::ReadingOrderRemoveRequested { id: "B".into() },
    );

    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
    assert!(!state.can_undo());
}

#[test]
fn test_segment_deleted_during_drag_stays_out_of_order() {
    let (mut controller, mut state, _events) = loaded_editor();
    move_c_before_a(&mut controller, &mut state);

    send(&mut controller, &mut state, EditorIntent::PolygonClicked { id: "A".into() });
    send(&mut controller, &mut state, EditorIntent::DeleteSelectedRequested);
    assert_eq!(reading_order(&state, 0), ids(&["C"]));

    send(&mut controller, &mut state, EditorIntent::ReadingOrderDragFinished);

    assert_eq!(reading_order(&state, 0), ids(&["C"]));
    let export = state.model.export_settings(0).expect("Export-Einstellungen");
    assert!(export.segments_to_ignore.contains("A"));
    assert!(export.reading_order.iter().all(|id| id != "A"));
}

#[test]
fn test_segment_drawn_during_drag_is_kept_on_commit() {
    let (mut controller, mut state, _events) = loaded_editor();
    move_c_before_a(&mut controller, &mut state);

    send(
        &mut controller,
        &mut state,
        EditorIntent::SegmentDrawn {
            points: vec![
                Point::new(0.5, 0.5),
                Point::new(0.6, 0.5),
                Point::new(0.6, 0.6),
            ],
        },
    );
    assert_eq!(reading_order(&state, 0), ids(&["A", "C", "created0"]));

    send(&mut controller, &mut state, EditorIntent::ReadingOrderDragFinished);
    assert_eq!(reading_order(&state, 0), ids(&["C", "A", "created0"]));

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert_eq!(reading_order(&state, 0), ids(&["A", "C", "created0"]));
}
