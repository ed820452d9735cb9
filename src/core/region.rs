//! Benannte Regionen (Polygon-Kategorien mit Größen-/Vorkommens-Beschränkungen).

use super::Polygon;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reservierter Regionstyp für Ausschlussflächen (nie in `present_region_types`).
pub const IGNORE_REGION_TYPE: &str = "ignore";

/// Bevorzugte Lage einer Region auf der Seite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityPosition {
    /// Region bevorzugt am oberen Seitenrand
    Top,
    /// Region bevorzugt am unteren Seitenrand
    Bottom,
    /// Keine Lagepräferenz
    #[default]
    None,
}

/// Benannte Region: besitzt Polygone eines Typs plus Beschränkungen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Regionstyp (Schlüssel der Region)
    #[serde(rename = "type")]
    pub region_type: String,
    /// Polygone dieser Region, indexiert nach ID
    #[serde(default)]
    pub polygons: IndexMap<String, Polygon>,
    /// Minimale Größe eines Vorkommens
    #[serde(default)]
    pub min_size: f64,
    /// Maximale Anzahl Vorkommen (-1 = unbegrenzt)
    #[serde(default = "unlimited_occurrences")]
    pub max_occurrences: i32,
    /// Bevorzugte Lage
    #[serde(default)]
    pub priority_position: PriorityPosition,
}

fn unlimited_occurrences() -> i32 {
    -1
}

impl Region {
    /// Erstellt eine leere Region ohne Beschränkungen.
    pub fn new(region_type: impl Into<String>) -> Self {
        Self {
            region_type: region_type.into(),
            polygons: IndexMap::new(),
            min_size: 0.0,
            max_occurrences: unlimited_occurrences(),
            priority_position: PriorityPosition::None,
        }
    }

    /// Gibt `true` zurück für den reservierten Ignore-Typ.
    pub fn is_ignore(&self) -> bool {
        self.region_type == IGNORE_REGION_TYPE
    }
}
