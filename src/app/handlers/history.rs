//! Handler für Undo/Redo-Operationen.

use crate::app::EditorState;

/// Führt einen Undo-Schritt auf der aktuellen Seite aus, falls vorhanden.
pub fn undo(state: &mut EditorState) {
    let page = state.current_page;
    if state.histories.undo(page, &mut state.model) {
        state.invalidate_export(page);
        refresh_view(state);
        log::info!("Undo ausgeführt (Seite {})", page);
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt auf der aktuellen Seite aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    let page = state.current_page;
    if state.histories.redo(page, &mut state.model) {
        state.invalidate_export(page);
        refresh_view(state);
        log::info!("Redo ausgeführt (Seite {})", page);
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

fn refresh_view(state: &mut EditorState) {
    let page = state.current_page;
    state.view.display_page(page);
    if let Some(export) = state.model.export_settings(page) {
        state.view.display_reading_order(&export.reading_order);
    }
}
