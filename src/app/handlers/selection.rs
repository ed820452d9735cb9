//! Handler für Selektions-Operationen.

use crate::app::{EditorState, SelectionType};

/// Meldet abgewählte IDs an die Darstellung und markiert die aktuelle Selektion.
fn sync_view(state: &mut EditorState, deselected: Vec<String>) {
    for id in deselected {
        if !state.selection.is_selected(&id) {
            state.view.select_polygon(&id, false);
        }
    }
    let selected: Vec<String> = state.selection.ids().map(str::to_string).collect();
    for id in selected {
        state.view.select_polygon(&id, true);
    }
}

/// Schaltet die Selektion eines Polygons um.
pub fn select_polygon(state: &mut EditorState, id: &str, multi_select: bool) {
    let Some(kind) = state.model.resolve_polygon_type(state.current_page, id) else {
        log::warn!("Selektion: Polygon {} unbekannt", id);
        return;
    };
    let deselected = state
        .selection
        .toggle(id, SelectionType::from(kind), multi_select);
    sync_view(state, deselected);
}

/// Selektiert die Segmente innerhalb eines Rechtecks.
pub fn select_in_rect(state: &mut EditorState, ids: &[String], multi_select: bool) {
    let model = &state.model;
    let page = state.current_page;
    let deselected = state.selection.select_rect(
        ids.iter().map(String::as_str),
        |id| model.resolve_polygon_type(page, id),
        multi_select,
    );
    sync_view(state, deselected);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut EditorState) {
    for id in state.selection.clear() {
        state.view.select_polygon(&id, false);
    }
}

/// Setzt den Mehrfachauswahl-Modus.
pub fn set_multi_select(state: &mut EditorState, enabled: bool) {
    state.multi_select = enabled;
    log::debug!("Mehrfachauswahl: {}", enabled);
}

/// Reicht eine Hervorhebung an die Darstellung weiter.
pub fn highlight(state: &mut EditorState, id: &str, highlighted: bool) {
    state.view.highlight_polygon(id, highlighted);
}
