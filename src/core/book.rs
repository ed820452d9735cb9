//! Buch-, Settings- und Segmentierungs-Payloads der Netzwerk-Gegenseite.
//!
//! Diese Typen bilden ab, was `loadBook`, `segmentBook` und `requestMergedSegment`
//! liefern. Sie werden nur gelesen bzw. in den Seitenzustand übernommen.

use super::{Cut, PageId, Polygon, Region};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Einzelne Buchseite (Bildreferenz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPage {
    /// Seitennummer
    pub id: PageId,
    /// Bilddatei der Seite
    pub image: String,
}

/// Geladenes Buch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Buch-ID
    pub id: u32,
    /// Anzeigename
    pub name: String,
    /// Seiten in Buchreihenfolge
    pub pages: Vec<BookPage>,
}

/// Nutzer-fixierte Inhalte einer Seite aus den Settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageSettings {
    /// Fixierte Segmente der Seite
    #[serde(default)]
    pub segments: IndexMap<String, Polygon>,
    /// Manuelle Schnitte der Seite
    #[serde(default)]
    pub cuts: IndexMap<String, Cut>,
}

/// Buchweite Settings: Vorlage, aus der jeder Seitenzustand aufgebaut wird.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSettings {
    /// Regionen (Vorlage für jede Seite)
    #[serde(default)]
    pub regions: IndexMap<String, Region>,
    /// Seitenspezifische fixierte Inhalte
    #[serde(default)]
    pub pages: IndexMap<PageId, PageSettings>,
    /// Algorithmus-Parameter (opak für den Editor)
    #[serde(default)]
    pub parameters: IndexMap<String, f64>,
    /// Bild-Segmentierungsmodus
    #[serde(default)]
    pub image_seg_type: String,
    /// Bildregionen zusammenfassen
    #[serde(default)]
    pub combine: bool,
}

/// Ergebnisstatus einer Seitensegmentierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentationStatus {
    /// Segmentierung erfolgreich
    Success,
    /// Bilddatei fehlt
    MissingFile,
    /// Seite konnte nicht geladen werden
    LoadError,
    /// Unbekannter Zustand
    #[default]
    #[serde(other)]
    Unknown,
}

/// Segmentierungsergebnis einer Seite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageSegmentation {
    /// Seitennummer
    pub page: PageId,
    /// Status der Segmentierung
    #[serde(default)]
    pub status: SegmentationStatus,
    /// Vom Algorithmus erzeugte Segmente
    #[serde(default)]
    pub segments: IndexMap<String, Polygon>,
}

/// Antwort auf `segmentBook`: Ergebnis pro angefragter Seite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentationResponse {
    /// Ergebnisse nach Seite
    pub pages: IndexMap<PageId, PageSegmentation>,
}

/// Antwort auf `loadBook`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBookResponse {
    /// Das Buch
    pub book: Book,
    /// Bereits vorhandene Segmentierung
    pub segmentation: SegmentationResponse,
    /// Bekannte Segmenttypen (Name → Index)
    #[serde(rename = "segmenttypes", default)]
    pub segment_types: IndexMap<String, i32>,
    /// Buchweite Settings
    pub settings: BookSettings,
}
