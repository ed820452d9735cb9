//! Geometrische Sortierung für die Standard-Lesereihenfolge.
//!
//! Die Sortierung gehört fachlich zum Darstellungs-Kollaborateur; der Editor
//! konsumiert sie nur über [`ReadingOrderSort`].

use super::Polygon;

/// Reine Sortierfunktion über Segmente (keine Seiteneffekte).
pub trait ReadingOrderSort {
    /// Liefert die Segment-IDs in Lesereihenfolge.
    fn sort_reading_order(&self, segments: &[&Polygon]) -> Vec<String>;
}

/// Standard-Sortierung: oben nach unten, bei gleicher Höhe links nach rechts.
///
/// Sortierschlüssel ist die obere linke Ecke der Bounding-Box; Segmente ohne
/// Punkte landen am Ende. Gleichstände werden über die ID aufgelöst, damit
/// das Ergebnis deterministisch bleibt.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricReadingOrder;

impl ReadingOrderSort for GeometricReadingOrder {
    fn sort_reading_order(&self, segments: &[&Polygon]) -> Vec<String> {
        let mut keyed: Vec<(f64, f64, &str)> = segments
            .iter()
            .map(|s| match s.bounds() {
                Some((min, _)) => (min.y, min.x, s.id.as_str()),
                None => (f64::INFINITY, f64::INFINITY, s.id.as_str()),
            })
            .collect();
        keyed.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then(a.1.total_cmp(&b.1))
                .then_with(|| a.2.cmp(b.2))
        });
        keyed.into_iter().map(|(_, _, id)| id.to_string()).collect()
    }
}

/// Leitet die Standard-Lesereihenfolge ab: ausgeschlossene Typen (z.B. "image")
/// werden verworfen, der Rest über `sorter` sortiert.
pub fn derive_default(
    sorter: &dyn ReadingOrderSort,
    segments: &[&Polygon],
    excluded_types: &[String],
) -> Vec<String> {
    let candidates: Vec<&Polygon> = segments
        .iter()
        .copied()
        .filter(|s| !excluded_types.iter().any(|t| *t == s.polygon_type))
        .collect();
    sorter.sort_reading_order(&candidates)
}
