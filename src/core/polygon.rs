//! Polygone, Punkte und manuelle Schnitte (Cuts).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Seitenrelativer Punkt (normalisiert auf 0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontale Position (0 = linker Rand)
    pub x: f64,
    /// Vertikale Position (0 = oberer Rand)
    pub y: f64,
}

impl Point {
    /// Erstellt einen neuen Punkt.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Konvertiert in einen glam-Vektor für Geometrie-Berechnungen.
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Achsen-alignierte Bounding-Box einer Punktmenge als `(min, max)`.
///
/// Gibt `None` zurück, wenn keine Punkte vorhanden sind.
pub fn bounding_box(points: &[Point]) -> Option<(DVec2, DVec2)> {
    let first = points.first()?.to_vec();
    Some(points.iter().skip(1).fold((first, first), |(min, max), p| {
        let v = p.to_vec();
        (min.min(v), max.max(v))
    }))
}

/// Polygon mit ID, Punktfolge und Typ-Label (z.B. "paragraph", "image").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Eindeutige ID innerhalb der besitzenden Sammlung
    pub id: String,
    /// Geordnete Eckpunkte
    pub points: Vec<Point>,
    /// Typ-Label
    #[serde(rename = "type")]
    pub polygon_type: String,
}

impl Polygon {
    /// Erstellt ein neues Polygon.
    pub fn new(id: impl Into<String>, points: Vec<Point>, polygon_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            points,
            polygon_type: polygon_type.into(),
        }
    }

    /// Bounding-Box des Polygons.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        bounding_box(&self.points)
    }
}

/// Manueller Schnitt: Trennlinie aus zwei oder mehr Punkten, unabhängig von Regionen/Segmenten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Eindeutige ID innerhalb der Seite
    pub id: String,
    /// Punkte der Linie
    pub points: Vec<Point>,
}

impl Cut {
    /// Erstellt einen neuen Cut.
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }
}
