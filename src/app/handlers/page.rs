//! Handler für Buch laden, Seitenwechsel und Segmentierung.

use crate::app::requests::{OutgoingRequest, PageTicket, SegmentationFailure, SegmentationReport};
use crate::app::EditorState;
use crate::core::{BookSettings, LoadBookResponse, PageId, SegmentationResponse, SegmentationStatus};
use indexmap::IndexMap;

/// Übernimmt eine `loadBook`-Antwort und setzt alle seitenbezogenen Zustände zurück.
pub fn load_book(state: &mut EditorState, response: LoadBookResponse) {
    state.model.load_book(response);
    state.histories.reset_all();
    state.reading_order.discard();
    for id in state.selection.clear() {
        state.view.select_polygon(&id, false);
    }
    state.clear_downloadable();
    state.invalidate_settings_export();
    state.hidden_regions.clear();
}

/// Ersetzt die Settings komplett (z.B. nach Upload einer Settings-Datei).
pub fn apply_settings(state: &mut EditorState, settings: BookSettings) {
    state.model.apply_settings(settings);
    state.histories.reset_all();
    state.reading_order.discard();
    for id in state.selection.clear() {
        state.view.select_polygon(&id, false);
    }
    state.clear_downloadable();
    state.invalidate_settings_export();
}

/// Setzt den Bild-Segmentierungsmodus für folgende Segmentierungen.
pub fn set_image_mode(state: &mut EditorState, mode: String) {
    if state.model.settings().image_seg_type == mode {
        return;
    }
    log::info!("Bild-Segmentierungsmodus: {}", mode);
    state.model.settings_mut().image_seg_type = mode;
    state.invalidate_settings_export();
}

/// Legt fest, ob Bildregionen bei der Segmentierung zusammengefasst werden.
pub fn set_image_combine(state: &mut EditorState, combine: bool) {
    if state.model.settings().combine == combine {
        return;
    }
    log::info!("Bildregionen zusammenfassen: {}", combine);
    state.model.settings_mut().combine = combine;
    state.invalidate_settings_export();
}

/// Zeigt eine Seite an.
///
/// Ist die Seite weder segmentiert noch gespeichert, wird eine Segmentierung
/// angefordert; sonst werden Seitenzustand und Export-Einstellungen angelegt.
pub fn display_page(state: &mut EditorState, page: PageId) {
    state.current_page = page;

    if !state.model.is_segmented(page) && !state.model.is_saved(page) {
        log::info!("Seite {} noch nicht segmentiert, fordere Segmentierung an", page);
        let ticket = PageTicket::bump(&mut state.model, page);
        state.pending_requests.push(OutgoingRequest::Segment {
            tickets: vec![ticket],
            settings: state.model.settings().clone(),
        });
        return;
    }

    state.model.ensure_page(page);
    let order = state.model.ensure_export_settings(page).reading_order.clone();
    state.view.display_page(page);
    state.view.display_reading_order(&order);
    for region_type in &state.hidden_regions {
        state.view.set_region_visibility(region_type, false);
    }
    log::debug!("Seite {} angezeigt", page);
}

/// Fordert eine Segmentierung für die Seiten an.
///
/// Nicht gespeicherte Seiten verlieren dabei ihren Status "segmentiert".
pub fn request_segmentation(
    state: &mut EditorState,
    pages: Vec<PageId>,
    parameters: IndexMap<String, f64>,
) {
    state.model.settings_mut().parameters.extend(parameters);
    state.model.demote_unsaved_pages();
    state.invalidate_settings_export();

    let tickets: Vec<PageTicket> = pages
        .iter()
        .map(|&page| PageTicket::bump(&mut state.model, page))
        .collect();
    log::info!("Segmentierung angefordert für {} Seite(n)", tickets.len());
    state.pending_requests.push(OutgoingRequest::Segment {
        tickets,
        settings: state.model.settings().clone(),
    });
}

/// Übernimmt eine Segmentierungsantwort.
///
/// Jede Seite wird nur übernommen, wenn ihr Ticket noch aktuell ist und der
/// Status SUCCESS lautet. Fehlgeschlagene Seiten bleiben unverändert.
pub fn apply_segmentation(
    state: &mut EditorState,
    tickets: Vec<PageTicket>,
    response: SegmentationResponse,
) {
    let mut report = SegmentationReport::default();

    for ticket in tickets {
        let page = ticket.page;
        if !ticket.is_current(&state.model) {
            log::warn!(
                "Veraltete Segmentierung für Seite {} verworfen (Generation {} statt {})",
                page,
                ticket.generation,
                state.model.generation(page)
            );
            report.rejected.push(page);
            continue;
        }

        let status = response
            .pages
            .get(&page)
            .map_or(SegmentationStatus::Unknown, |r| r.status);
        let Some(result) = response
            .pages
            .get(&page)
            .filter(|r| r.status == SegmentationStatus::Success)
        else {
            log::warn!("Segmentierung für Seite {} fehlgeschlagen: {:?}", page, status);
            report.failures.push(SegmentationFailure { page, status });
            continue;
        };

        state.model.apply_external_segmentation(page, result.segments.clone());
        state.histories.reset_page(page);
        state.invalidate_export(page);
        report.applied.push(page);

        if page == state.current_page {
            state.reading_order.discard();
            display_page(state, page);
        }
    }

    state.last_segmentation_report = Some(report);
}
