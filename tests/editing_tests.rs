//! Integrationstests für die Bearbeitungs-Flows:
//! - Segment zeichnen, Typ ändern, Undo (fixierte Segmente)
//! - Merge über die Netzwerk-Gegenseite
//! - Löschen der Selektion, Regionen und Region of Interest

mod common;

use common::{ids, loaded_editor, reading_order, rect, ViewEvent};
use segmentation_editor::core::IGNORE_REGION_TYPE;
use segmentation_editor::{
    EditorController, EditorIntent, EditorState, OutgoingRequest, Point, PolygonKind,
};

fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ]
}

fn send(controller: &mut EditorController, state: &mut EditorState, intent: EditorIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn select_all(controller: &mut EditorController, state: &mut EditorState, values: &[&str]) {
    send(controller, state, EditorIntent::MultiSelectToggled { enabled: true });
    for id in values {
        send(controller, state, EditorIntent::PolygonClicked { id: id.to_string() });
    }
}

#[test]
fn test_drawn_segment_type_change_undoes_step_by_step() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::SegmentDrawn {
            points: square(0.5, 0.9, 0.05),
        },
    );
    let fixed = state.model.page(0).unwrap().fixed_segments.get("created0").cloned();
    let fixed = fixed.expect("Neues fixiertes Segment erwartet");
    assert_eq!(fixed.polygon_type, "paragraph");
    assert_eq!(reading_order(&state, 0), ids(&["A", "C", "created0"]));

    send(
        &mut controller,
        &mut state,
        EditorIntent::PolygonTypeChangeRequested {
            id: "created0".into(),
            new_type: "heading".into(),
        },
    );
    assert_eq!(
        state.model.effective_segment(0, "created0").unwrap().polygon_type,
        "heading"
    );

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert_eq!(
        state.model.effective_segment(0, "created0").unwrap().polygon_type,
        "paragraph"
    );

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert!(state.model.resolve_polygon_type(0, "created0").is_none());
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
    assert!(!state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn test_result_type_change_is_stored_as_override() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::PolygonTypeChangeRequested {
            id: "A".into(),
            new_type: "heading".into(),
        },
    );

    let export = state.model.export_settings(0).unwrap();
    assert_eq!(export.changed_types.get("A").map(String::as_str), Some("heading"));
    assert_eq!(
        state.model.page(0).unwrap().result_segments["A"].polygon_type,
        "paragraph"
    );
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert!(state.model.export_settings(0).unwrap().changed_types.is_empty());
}

#[test]
fn test_merge_round_trip_through_network_and_undo() {
    let (mut controller, mut state, _events) = loaded_editor();
    select_all(&mut controller, &mut state, &["A", "B", "C"]);

    send(&mut controller, &mut state, EditorIntent::MergeSelectedRequested);
    let requests = state.take_pending_requests();
    let [OutgoingRequest::Merge {
        ticket,
        segment_ids,
    }] = requests.as_slice()
    else {
        panic!("Merge-Anfrage erwartet: {requests:?}");
    };
    // Bilder werden nicht zusammengeführt
    assert_eq!(segment_ids, &ids(&["A", "C"]));

    send(
        &mut controller,
        &mut state,
        EditorIntent::MergeCompleted {
            ticket: *ticket,
            constituents: segment_ids.clone(),
            merged: rect("M", "paragraph", 0.1, 0.1),
        },
    );

    let export = state.model.export_settings(0).unwrap();
    assert!(export.segments_to_ignore.contains("A"));
    assert!(export.segments_to_ignore.contains("C"));
    assert_eq!(export.segments_to_merge.get("M"), Some(&ids(&["A", "C"])));
    assert_eq!(reading_order(&state, 0), ids(&["M"]));
    assert_eq!(state.model.resolve_polygon_type(0, "M"), Some(PolygonKind::Fixed));
    assert_eq!(state.selection.ids().collect::<Vec<_>>(), vec!["M"]);

    send(&mut controller, &mut state, EditorIntent::UndoRequested);

    let export = state.model.export_settings(0).unwrap();
    assert!(export.segments_to_ignore.is_empty());
    assert!(export.segments_to_merge.is_empty());
    assert!(state.model.resolve_polygon_type(0, "M").is_none());
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
}

#[test]
fn test_merge_needs_two_result_segments() {
    let (mut controller, mut state, _events) = loaded_editor();
    select_all(&mut controller, &mut state, &["A", "B"]);

    send(&mut controller, &mut state, EditorIntent::MergeSelectedRequested);

    assert!(state.take_pending_requests().is_empty());
}

#[test]
fn test_stale_merge_result_is_ignored() {
    let (mut controller, mut state, _events) = loaded_editor();
    select_all(&mut controller, &mut state, &["A", "C"]);
    send(&mut controller, &mut state, EditorIntent::MergeSelectedRequested);
    let Some(OutgoingRequest::Merge { ticket, segment_ids }) = state.take_pending_requests().pop()
    else {
        panic!("Merge-Anfrage erwartet");
    };

    // Neuladen des Buchs macht das Ticket ungültig
    send(
        &mut controller,
        &mut state,
        EditorIntent::BookLoaded {
            response: common::book_response(),
            page: 0,
        },
    );
    send(
        &mut controller,
        &mut state,
        EditorIntent::MergeCompleted {
            ticket,
            constituents: segment_ids,
            merged: rect("M", "paragraph", 0.1, 0.1),
        },
    );

    assert!(state.model.resolve_polygon_type(0, "M").is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_delete_selection_hides_results_and_undo_restores_order() {
    let (mut controller, mut state, _events) = loaded_editor();
    select_all(&mut controller, &mut state, &["A", "C"]);

    send(&mut controller, &mut state, EditorIntent::DeleteSelectedRequested);

    assert!(state.selection.is_empty());
    assert!(reading_order(&state, 0).is_empty());
    let visible: Vec<&str> = state
        .model
        .visible_segments(0)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(visible, vec!["B"]);

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert_eq!(reading_order(&state, 0), ids(&["A", "C"]));
    assert_eq!(state.model.visible_segments(0).len(), 3);
}

#[test]
fn test_region_polygon_in_new_region_and_complete_removal() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::RegionPolygonDrawn {
            points: square(0.0, 0.0, 0.1),
            region_type: Some("caption".into()),
        },
    );
    assert!(state.model.present_region_types().contains("caption"));
    assert_eq!(state.model.resolve_polygon_type(0, "created0"), Some(PolygonKind::Region));

    send(
        &mut controller,
        &mut state,
        EditorIntent::RegionDeleteRequested {
            region_type: "caption".into(),
        },
    );
    assert!(!state.model.present_region_types().contains("caption"));

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    let page = state.model.page(0).unwrap();
    assert!(page.regions["caption"].polygons.contains_key("created0"));
}

#[test]
fn test_protected_region_is_not_removed() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::RegionDeleteRequested {
            region_type: "paragraph".into(),
        },
    );

    assert!(state.model.page(0).unwrap().regions.contains_key("paragraph"));
    assert!(!state.can_undo());
}

#[test]
fn test_region_of_interest_creates_four_ignore_rectangles() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::RegionOfInterestDrawn {
            points: vec![Point::new(0.2, 0.1), Point::new(0.8, 0.9)],
        },
    );

    let page = state.model.page(0).unwrap();
    let ignore = &page.regions[IGNORE_REGION_TYPE];
    assert_eq!(ignore.polygons.len(), 4);
    assert!(ignore.polygons.values().all(|p| p.polygon_type == IGNORE_REGION_TYPE));
    assert!(!state.model.present_region_types().contains(IGNORE_REGION_TYPE));

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert!(!state
        .model
        .page(0)
        .unwrap()
        .regions
        .contains_key(IGNORE_REGION_TYPE));
}

#[test]
fn test_editing_hidden_region_shows_it_again() {
    let (mut controller, mut state, events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::RegionVisibilityToggled {
            region_type: "paragraph".into(),
            visible: false,
        },
    );
    assert!(state.hidden_regions.contains("paragraph"));

    send(
        &mut controller,
        &mut state,
        EditorIntent::RegionPolygonDrawn {
            points: square(0.0, 0.0, 0.1),
            region_type: Some("paragraph".into()),
        },
    );

    assert!(state.hidden_regions.is_empty());
    assert_eq!(
        events.borrow().last(),
        Some(&ViewEvent::RegionVisibility("paragraph".into(), true))
    );
}

#[test]
fn test_cut_lifecycle() {
    let (mut controller, mut state, _events) = loaded_editor();

    send(
        &mut controller,
        &mut state,
        EditorIntent::CutDrawn {
            points: vec![Point::new(0.0, 0.5), Point::new(1.0, 0.5)],
        },
    );
    assert_eq!(state.model.resolve_polygon_type(0, "created0"), Some(PolygonKind::Cut));

    send(
        &mut controller,
        &mut state,
        EditorIntent::PolygonTransformed {
            id: "created0".into(),
            points: vec![Point::new(0.0, 0.6), Point::new(1.0, 0.6)],
        },
    );
    assert_eq!(state.model.page(0).unwrap().cuts["created0"].points[0].y, 0.6);

    send(&mut controller, &mut state, EditorIntent::PolygonClicked { id: "created0".into() });
    send(&mut controller, &mut state, EditorIntent::DeleteSelectedRequested);
    assert!(state.model.resolve_polygon_type(0, "created0").is_none());

    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    send(&mut controller, &mut state, EditorIntent::UndoRequested);
    assert_eq!(state.model.page(0).unwrap().cuts["created0"].points[0].y, 0.5);
}

#[test]
fn test_result_segments_cannot_be_transformed() {
    let (mut controller, mut state, _events) = loaded_editor();
    let before = state.model.page(0).unwrap().result_segments["A"].clone();

    send(
        &mut controller,
        &mut state,
        EditorIntent::PolygonTransformed {
            id: "A".into(),
            points: square(0.5, 0.5, 0.1),
        },
    );

    assert_eq!(state.model.page(0).unwrap().result_segments["A"], before);
    assert!(!state.can_undo());
}
