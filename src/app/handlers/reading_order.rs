//! Handler für die Drag-Session der Lesereihenfolge.

use crate::app::actions::RemoveFromReadingOrder;
use crate::app::EditorState;

/// Startet eine Session mit der committeten Reihenfolge der aktuellen Seite.
pub fn stage(state: &mut EditorState) {
    let page = state.current_page;
    let current = state.model.ensure_export_settings(page).reading_order.clone();
    let staged = state.reading_order.stage(page, &current);
    state.view.display_reading_order(staged);
}

/// Verschiebt ein Element der gestagten Reihenfolge vor den Anker.
pub fn move_staged(state: &mut EditorState, moving_id: &str, anchor_id: &str) {
    if state.reading_order.staged_page() != Some(state.current_page) {
        stage(state);
    }
    if !state.reading_order.move_staged(moving_id, anchor_id) {
        log::debug!("Verschieben {} vor {} ohne Wirkung", moving_id, anchor_id);
        return;
    }
    if let Some(order) = state.reading_order.staged_order() {
        state.view.display_reading_order(order);
    }
}

/// Übernimmt die gestagte Reihenfolge als eine undo-fähige Action.
pub fn commit(state: &mut EditorState) {
    let page = state.current_page;
    if state
        .reading_order
        .commit(page, &mut state.model, &mut state.histories)
    {
        state.invalidate_export(page);
    }
    display_committed(state);
}

/// Verwirft die Session und zeigt wieder die committete Reihenfolge.
pub fn discard(state: &mut EditorState) {
    if state.reading_order.staged_page().is_none() {
        return;
    }
    state.reading_order.discard();
    display_committed(state);
}

/// Entfernt ein Element aus der committeten Reihenfolge.
pub fn remove(state: &mut EditorState, id: &str) {
    let page = state.current_page;
    let present = state
        .model
        .export_settings(page)
        .is_some_and(|e| e.reading_order_position(id).is_some());
    if !present {
        log::debug!("{} ist nicht in der Lesereihenfolge", id);
        return;
    }
    state.record_action(Box::new(RemoveFromReadingOrder::new(page, id)));
    display_committed(state);
}

fn display_committed(state: &mut EditorState) {
    if let Some(export) = state.model.export_settings(state.current_page) {
        state.view.display_reading_order(&export.reading_order);
    }
}
