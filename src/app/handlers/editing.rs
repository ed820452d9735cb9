//! Handler für Erstellen, Transformieren, Typwechsel, Löschen und Merge.

use crate::app::actions::{
    Action, AddCut, AddFixedSegment, AddRegionPolygon, ChangeRegionPolygonType,
    ChangeRegionSettings, ChangeSegmentType, CompositeAction, RemoveCompleteRegion,
    RemoveCut, RemoveRegionPolygon, RemoveSegment, TransformCut, TransformRegionPolygon,
    TransformSegment,
};
use crate::app::requests::{OutgoingRequest, PageTicket};
use crate::app::{EditorState, SelectionType};
use crate::core::{
    bounding_box, Cut, Point, Polygon, PolygonKind, IGNORE_REGION_TYPE, IMAGE_SEGMENT_TYPE,
};

/// Erstellt ein Polygon in der Region des gegebenen Typs.
pub fn create_region_polygon(state: &mut EditorState, points: Vec<Point>, region_type: &str) {
    let page = state.current_page;
    let id = state.next_created_id();
    let polygon = Polygon::new(id, points, region_type);
    state.record_action(Box::new(AddRegionPolygon::new(page, region_type, polygon)));
    show_region(state, region_type);
}

/// Erstellt eine Region of Interest: vier Ignore-Rechtecke um die Bounding-Box.
pub fn create_region_of_interest(state: &mut EditorState, points: &[Point]) {
    let Some((min, max)) = bounding_box(points) else {
        log::warn!("Region of Interest ohne Punkte ignoriert");
        return;
    };
    let (left, top) = (min.x.max(0.0), min.y.max(0.0));
    let (right, bottom) = (max.x.min(1.0), max.y.min(1.0));

    let rectangles = [
        rectangle(0.0, 0.0, 1.0, top),
        rectangle(0.0, 0.0, left, 1.0),
        rectangle(0.0, bottom, 1.0, 1.0),
        rectangle(right, 0.0, 1.0, 1.0),
    ];

    let page = state.current_page;
    let mut children: Vec<Box<dyn Action>> = Vec::with_capacity(rectangles.len());
    for points in rectangles {
        let id = state.next_created_id();
        let polygon = Polygon::new(id, points, IGNORE_REGION_TYPE);
        children.push(Box::new(AddRegionPolygon::new(
            page,
            IGNORE_REGION_TYPE,
            polygon,
        )));
    }
    state.record_action(Box::new(CompositeAction::new(
        "Region of Interest erstellen",
        children,
    )));
}

fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

/// Erstellt ein fixiertes Segment mit dem Standardtyp.
pub fn create_segment(state: &mut EditorState, points: Vec<Point>) {
    let page = state.current_page;
    let id = state.next_created_id();
    let segment_type = state.default_polygon_type();
    let segment = Polygon::new(id, points, segment_type);
    state.record_action(Box::new(AddFixedSegment::new(page, segment)));
}

/// Erstellt einen Cut.
pub fn create_cut(state: &mut EditorState, points: Vec<Point>) {
    if points.len() < 2 {
        log::warn!("Cut mit weniger als zwei Punkten ignoriert");
        return;
    }
    let page = state.current_page;
    let id = state.next_created_id();
    state.record_action(Box::new(AddCut::new(page, Cut::new(id, points))));
}

/// Transformiert ein fixiertes Segment, Regions-Polygon oder einen Cut.
///
/// Ergebnis-Segmente sind nicht transformierbar.
pub fn transform_polygon(state: &mut EditorState, id: &str, points: Vec<Point>) {
    let page = state.current_page;
    let action: Box<dyn Action> = match state.model.resolve_polygon_type(page, id) {
        Some(PolygonKind::Fixed) => Box::new(TransformSegment::new(page, id, points)),
        Some(PolygonKind::Region) => {
            let region_type = state
                .model
                .page(page)
                .and_then(|p| p.region_type_of(id))
                .map(str::to_string);
            if let Some(region_type) = region_type {
                show_region(state, &region_type);
            }
            Box::new(TransformRegionPolygon::new(page, id, points))
        }
        Some(PolygonKind::Cut) => Box::new(TransformCut::new(page, id, points)),
        other => {
            log::debug!("Transformation für {} ({:?}) nicht möglich", id, other);
            return;
        }
    };
    state.record_action(action);
}

/// Baut die passende Typwechsel-Action; `None`, wenn der Typ unverändert ist.
fn type_change_action(state: &EditorState, id: &str, new_type: &str) -> Option<Box<dyn Action>> {
    let page = state.current_page;
    let kind = state.model.resolve_polygon_type(page, id)?;
    let current_type = match kind {
        PolygonKind::Region => state.model.page(page)?.region_type_of(id)?.to_string(),
        PolygonKind::Fixed | PolygonKind::Result => {
            state.model.effective_segment(page, id)?.polygon_type
        }
        PolygonKind::Cut => return None,
    };
    if current_type == new_type {
        return None;
    }
    Some(match kind {
        PolygonKind::Region => Box::new(ChangeRegionPolygonType::new(page, id, new_type)),
        _ => Box::new(ChangeSegmentType::new(page, id, new_type)),
    })
}

/// Ändert den Typ eines einzelnen Polygons.
pub fn change_polygon_type(state: &mut EditorState, id: &str, new_type: &str) {
    let is_region =
        state.model.resolve_polygon_type(state.current_page, id) == Some(PolygonKind::Region);
    if let Some(action) = type_change_action(state, id, new_type) {
        state.record_action(action);
    } else {
        log::debug!("Typwechsel für {} ohne Wirkung", id);
    }
    if is_region {
        show_region(state, new_type);
    }
}

/// Ändert den Typ aller selektierten Polygone in einem Schritt.
pub fn change_selection_type(state: &mut EditorState, new_type: &str) {
    let ids: Vec<String> = state.selection.ids().map(str::to_string).collect();
    let children: Vec<Box<dyn Action>> = ids
        .iter()
        .filter_map(|id| type_change_action(state, id, new_type))
        .collect();
    if children.is_empty() {
        return;
    }
    if state.selection.selection_type() == SelectionType::Region {
        show_region(state, new_type);
    }
    state.record_action(Box::new(CompositeAction::new("Typ der Selektion ändern", children)));
}

/// Löscht alle selektierten Polygone in einem Schritt.
pub fn delete_selected(state: &mut EditorState) {
    let page = state.current_page;
    let ids: Vec<String> = state.selection.ids().map(str::to_string).collect();
    let mut children: Vec<Box<dyn Action>> = Vec::with_capacity(ids.len());
    for id in &ids {
        match state.model.resolve_polygon_type(page, id) {
            Some(PolygonKind::Region) => children.push(Box::new(RemoveRegionPolygon::new(page, id))),
            Some(PolygonKind::Fixed | PolygonKind::Result) => {
                children.push(Box::new(RemoveSegment::new(page, id)))
            }
            Some(PolygonKind::Cut) => children.push(Box::new(RemoveCut::new(page, id))),
            None => log::warn!("Löschen: Polygon {} unbekannt", id),
        }
    }
    if children.is_empty() {
        return;
    }
    state.record_action(Box::new(CompositeAction::new("Selektion löschen", children)));
}

/// Fordert das zusammengeführte Polygon der selektierten Ergebnis-Segmente an.
///
/// Fixierte Segmente und Bilder werden nicht zusammengeführt; es braucht
/// mindestens zwei Bestandteile.
pub fn request_merge(state: &mut EditorState) {
    let page = state.current_page;
    if state.selection.selection_type() != SelectionType::Segment {
        return;
    }
    let segment_ids: Vec<String> = state
        .selection
        .ids()
        .filter(|id| state.model.resolve_polygon_type(page, id) == Some(PolygonKind::Result))
        .filter(|id| {
            state
                .model
                .effective_segment(page, id)
                .is_some_and(|s| s.polygon_type != IMAGE_SEGMENT_TYPE)
        })
        .map(str::to_string)
        .collect();
    if segment_ids.len() < 2 {
        log::debug!("Merge braucht mindestens zwei Ergebnis-Segmente");
        return;
    }
    let ticket = PageTicket::current(&state.model, page);
    log::info!("Merge von {} Segmenten angefordert", segment_ids.len());
    state
        .pending_requests
        .push(OutgoingRequest::Merge { ticket, segment_ids });
}

/// Übernimmt das zusammengeführte Polygon als eine Composite-Action.
pub fn apply_merge(
    state: &mut EditorState,
    ticket: PageTicket,
    constituents: Vec<String>,
    merged: Polygon,
) {
    if !ticket.is_current(&state.model) {
        log::warn!("Veraltetes Merge-Ergebnis für Seite {} verworfen", ticket.page);
        return;
    }
    let page = ticket.page;
    let merged_id = merged.id.clone();

    log::info!("Segmente zu {} zusammengeführt (Seite {})", merged_id, page);
    let action = CompositeAction::merge_segments(page, constituents, merged);
    state
        .histories
        .record(page, Box::new(action), &mut state.model);
    state.invalidate_export(page);

    if page == state.current_page {
        for id in state.selection.clear() {
            state.view.select_polygon(&id, false);
        }
        state.selection.toggle(&merged_id, SelectionType::Segment, false);
        state.view.select_polygon(&merged_id, true);
    }
}

/// Ändert Mindestgröße und maximale Vorkommen eines Regionstyps.
pub fn change_region_settings(
    state: &mut EditorState,
    region_type: &str,
    min_size: f64,
    max_occurrences: i32,
) {
    let page = state.current_page;
    state.record_action(Box::new(ChangeRegionSettings::new(
        page,
        region_type,
        min_size,
        max_occurrences,
    )));
}

/// Entfernt einen Regionstyp komplett, sofern er vorhanden und nicht geschützt ist.
pub fn remove_region(state: &mut EditorState, region_type: &str) {
    if state.options.is_protected_region(region_type) {
        log::warn!("Regionstyp {} ist geschützt und wird nicht gelöscht", region_type);
        return;
    }
    let page = state.current_page;
    let present = state
        .model
        .page(page)
        .is_some_and(|p| p.regions.contains_key(region_type));
    if !present {
        log::debug!("Regionstyp {} auf Seite {} nicht vorhanden", region_type, page);
        return;
    }
    state.record_action(Box::new(RemoveCompleteRegion::new(page, region_type)));
}

/// Blendet alle Polygone eines Regionstyps ein oder aus.
pub fn set_region_visibility(state: &mut EditorState, region_type: &str, visible: bool) {
    if visible {
        state.hidden_regions.shift_remove(region_type);
    } else {
        state.hidden_regions.insert(region_type.to_string());
    }
    state.view.set_region_visibility(region_type, visible);
}

/// Blendet alle Regionstypen außer "ignore" ein oder aus.
pub fn set_all_regions_visibility(state: &mut EditorState, visible: bool) {
    let region_types = state.model.present_region_types();
    for region_type in &region_types {
        set_region_visibility(state, region_type, visible);
    }
    log::debug!(
        "{} Regionstyp(en) {}",
        region_types.len(),
        if visible { "eingeblendet" } else { "ausgeblendet" }
    );
}

fn show_region(state: &mut EditorState, region_type: &str) {
    if state.hidden_regions.contains(region_type) {
        set_region_visibility(state, region_type, true);
    }
}
