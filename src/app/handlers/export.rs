//! Handler für die Export-Vorbereitung (Seite und Settings).

use crate::app::requests::{OutgoingRequest, PageTicket};
use crate::app::EditorState;
use indexmap::IndexMap;

/// Stellt das Export-Artefakt der aktuellen Seite zusammen und fordert den Export an.
pub fn prepare_export(state: &mut EditorState) {
    let page = state.current_page;
    let artifact = state.model.export_artifact(page);
    let ticket = PageTicket::current(&state.model, page);
    let revision = state.export_revision(page);
    log::info!("Export für Seite {} angefordert (Revision {})", page, revision);
    state.pending_requests.push(OutgoingRequest::PrepareExport {
        ticket,
        artifact,
        page_xml_version: state.options.page_xml_version.clone(),
        revision,
    });
}

/// Verarbeitet die Bestätigung der Gegenseite.
///
/// Die Seite gilt danach als gespeichert. Der Download wird nur freigegeben,
/// wenn die Seite noch angezeigt wird und seit der Anforderung unverändert ist.
pub fn apply_export_prepared(state: &mut EditorState, ticket: PageTicket, revision: u64) {
    if !ticket.is_current(&state.model) {
        log::warn!("Veraltete Export-Bestätigung für Seite {} verworfen", ticket.page);
        return;
    }
    let page = ticket.page;
    state.model.mark_saved(page);

    if page != state.current_page || revision != state.export_revision(page) {
        log::debug!("Seite {} seit Export-Anforderung geändert, kein Download", page);
        return;
    }
    state.mark_downloadable(page);
}

/// Übernimmt die Parameter und fordert den Settings-Export an.
///
/// Die exportierten Settings enthalten die fixierten Segmente und Cuts aller
/// bearbeiteten Seiten.
pub fn prepare_settings_export(state: &mut EditorState, parameters: IndexMap<String, f64>) {
    state.model.settings_mut().parameters.extend(parameters);
    let settings = state.model.settings_snapshot(state.current_page);
    let revision = state.settings_revision();
    log::info!(
        "Settings-Export angefordert ({} Seite(n), Revision {})",
        settings.pages.len(),
        revision
    );
    state
        .pending_requests
        .push(OutgoingRequest::PrepareSettingsExport { settings, revision });
}

/// Gibt den Settings-Download frei, sofern sich seit der Anforderung nichts geändert hat.
pub fn apply_settings_export_prepared(state: &mut EditorState, revision: u64) {
    if revision != state.settings_revision() {
        log::debug!(
            "Settings seit Export-Anforderung geändert (Revision {} statt {}), kein Download",
            revision,
            state.settings_revision()
        );
        return;
    }
    state.mark_settings_downloadable();
}
