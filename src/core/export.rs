//! Export-Einstellungen pro Seite und das daraus gebaute Export-Artefakt.

use super::{PageId, Polygon};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Seitenbezogenes Overlay über der Roh-Segmentierung.
///
/// Wird pro Seite beim ersten Zugriff angelegt; `reading_order` wird dabei
/// genau einmal abgeleitet und danach nur noch umsortiert oder gekürzt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    /// Ausgeblendete Ergebnis-Segmente
    pub segments_to_ignore: IndexSet<String>,
    /// Zusammengeführte Segmente (Ergebnis-ID → Bestandteile)
    pub segments_to_merge: IndexMap<String, Vec<String>>,
    /// Typ-Überschreibungen für Ergebnis-Segmente
    pub changed_types: IndexMap<String, String>,
    /// Snapshot der fixierten Segmente zum Exportzeitpunkt
    pub fixed_regions: IndexMap<String, Polygon>,
    /// Segment-IDs in Lesereihenfolge
    pub reading_order: Vec<String>,
}

impl ExportSettings {
    /// Position einer Segment-ID in der Lesereihenfolge.
    pub fn reading_order_position(&self, id: &str) -> Option<usize> {
        self.reading_order.iter().position(|r| r == id)
    }

    /// Entfernt eine Segment-ID aus der Lesereihenfolge und gibt die alte Position zurück.
    pub fn remove_from_reading_order(&mut self, id: &str) -> Option<usize> {
        let index = self.reading_order_position(id)?;
        self.reading_order.remove(index);
        Some(index)
    }

    /// Fügt eine Segment-ID an der Position ein (begrenzt auf das Listenende).
    pub fn insert_into_reading_order(&mut self, index: usize, id: String) {
        if self.reading_order_position(&id).is_some() {
            return;
        }
        let index = index.min(self.reading_order.len());
        self.reading_order.insert(index, id);
    }
}

/// Serialisierbares Export-Artefakt einer Seite (Wire-Format für den Export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    /// Seitennummer
    pub page: PageId,
    /// Ausgeblendete Ergebnis-Segmente
    pub segments_to_ignore: Vec<String>,
    /// Zusammengeführte Segmente
    pub segments_to_merge: IndexMap<String, Vec<String>>,
    /// Typ-Überschreibungen
    pub changed_types: IndexMap<String, String>,
    /// Snapshot der fixierten Segmente
    pub fixed_regions: IndexMap<String, Polygon>,
    /// Segmente in Lesereihenfolge (mit effektivem Typ)
    pub reading_order: Vec<Polygon>,
}

impl ExportArtifact {
    /// Rendert das Artefakt als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
