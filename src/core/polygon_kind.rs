//! Auflösung, welche Sammlung eine Polygon-ID besitzt.

use super::PageState;

/// Besitzende Sammlung einer Polygon-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonKind {
    /// Fixiertes Segment
    Fixed,
    /// Ergebnis-Segment des Algorithmus
    Result,
    /// Polygon einer Region
    Region,
    /// Manueller Schnitt
    Cut,
}

impl PolygonKind {
    /// Fixierte und Ergebnis-Segmente gelten beide als Segment.
    pub fn is_segment(self) -> bool {
        matches!(self, PolygonKind::Fixed | PolygonKind::Result)
    }
}

/// Bestimmt die besitzende Sammlung einer Polygon-ID.
///
/// Reihenfolge (erster Treffer gewinnt): fixierte Segmente → Ergebnis-Segmente
/// → Regionen → Cuts. Keine Seiteneffekte.
pub fn resolve(page: &PageState, polygon_id: &str) -> Option<PolygonKind> {
    if page.fixed_segments.contains_key(polygon_id) {
        return Some(PolygonKind::Fixed);
    }
    if page.result_segments.contains_key(polygon_id) {
        return Some(PolygonKind::Result);
    }
    if page.find_region_polygon(polygon_id).is_some() {
        return Some(PolygonKind::Region);
    }
    if page.cuts.contains_key(polygon_id) {
        return Some(PolygonKind::Cut);
    }
    None
}
