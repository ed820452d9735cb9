//! Schnittstelle zur Darstellungs-Gegenseite.
//!
//! Alle Aufrufe sind reine Benachrichtigungen ohne Rückwirkung auf das Modell.

use crate::core::PageId;

/// Benachrichtigungen an die Darstellung. Standard-Implementierungen ignorieren alles.
pub trait EditorView {
    /// Polygon als (ab)gewählt darstellen.
    fn select_polygon(&mut self, _id: &str, _selected: bool) {}

    /// Polygon hervorheben oder Hervorhebung entfernen.
    fn highlight_polygon(&mut self, _id: &str, _highlighted: bool) {}

    /// Alle Polygone eines Regionstyps ein-/ausblenden.
    fn set_region_visibility(&mut self, _region_type: &str, _visible: bool) {}

    /// Seite neu darstellen.
    fn display_page(&mut self, _page: PageId) {}

    /// Lesereihenfolge anzeigen (committed oder gestagt).
    fn display_reading_order(&mut self, _order: &[String]) {}

    /// Export-Download freigeben oder sperren.
    fn set_downloadable(&mut self, _page: PageId, _downloadable: bool) {}

    /// Settings-Download freigeben oder sperren.
    fn set_settings_downloadable(&mut self, _downloadable: bool) {}
}

/// Darstellung ohne Wirkung (Standard für Headless-Betrieb und Tests).
#[derive(Debug, Default)]
pub struct NullView;

impl EditorView for NullView {}
