use crate::app::requests::PageTicket;
use crate::core::{BookSettings, LoadBookResponse, PageId, Point, Polygon, SegmentationResponse};
use crate::shared::EditorOptions;
use indexmap::IndexMap;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Buch, Segmentierung und Settings übernehmen
    LoadBook { response: LoadBookResponse },
    /// Settings komplett ersetzen
    ApplySettings { settings: BookSettings },
    /// Seite anzeigen (ggf. Segmentierung anfordern)
    DisplayPage { page: PageId },
    /// Segmentierung anfordern
    RequestSegmentation {
        pages: Vec<PageId>,
        parameters: IndexMap<String, f64>,
    },
    /// Segmentierungsantwort übernehmen
    ApplySegmentation {
        tickets: Vec<PageTicket>,
        response: SegmentationResponse,
    },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Bild-Segmentierungsmodus setzen
    SetImageMode { mode: String },
    /// Bildregionen zusammenfassen setzen
    SetImageCombine { combine: bool },

    /// Polygon (ab)wählen
    SelectPolygon { id: String, multi_select: bool },
    /// Segmente eines Rechtecks wählen
    SelectInRect { ids: Vec<String>, multi_select: bool },
    /// Selektion aufheben
    ClearSelection,
    /// Mehrfachauswahl setzen
    SetMultiSelect { enabled: bool },
    /// Hervorhebung weiterreichen
    HighlightPolygon { id: String, highlighted: bool },

    /// Regions-Polygon erstellen
    CreateRegionPolygon {
        points: Vec<Point>,
        region_type: String,
    },
    /// Region of Interest erstellen (vier Ignore-Rechtecke)
    CreateRegionOfInterest { points: Vec<Point> },
    /// Fixiertes Segment erstellen
    CreateSegment { points: Vec<Point> },
    /// Cut erstellen
    CreateCut { points: Vec<Point> },
    /// Polygon transformieren
    TransformPolygon { id: String, points: Vec<Point> },
    /// Typ eines Polygons ändern
    ChangePolygonType { id: String, new_type: String },
    /// Typ der Selektion ändern
    ChangeSelectionType { new_type: String },
    /// Selektion löschen
    DeleteSelected,
    /// Merge der Selektion anfordern
    RequestMerge,
    /// Merge-Antwort übernehmen
    ApplyMerge {
        ticket: PageTicket,
        constituents: Vec<String>,
        merged: Polygon,
    },

    /// Regionseinstellungen ändern
    ChangeRegionSettings {
        region_type: String,
        min_size: f64,
        max_occurrences: i32,
    },
    /// Regionstyp vollständig entfernen
    RemoveRegion { region_type: String },
    /// Sichtbarkeit eines Regionstyps setzen
    SetRegionVisibility { region_type: String, visible: bool },
    /// Sichtbarkeit aller Regionstypen setzen
    SetAllRegionsVisibility { visible: bool },

    /// Umsortier-Session starten
    StageReadingOrder,
    /// In der gestagten Reihenfolge verschieben
    MoveReadingOrder { moving_id: String, anchor_id: String },
    /// Gestagte Reihenfolge übernehmen
    CommitReadingOrder,
    /// Gestagte Reihenfolge verwerfen
    DiscardStagedReadingOrder,
    /// Segment aus der Lesereihenfolge entfernen
    RemoveFromReadingOrder { id: String },

    /// Undo auf der aktuellen Seite
    Undo,
    /// Redo auf der aktuellen Seite
    Redo,

    /// Export der aktuellen Seite vorbereiten
    PrepareExport,
    /// Export-Antwort übernehmen
    ApplyExportPrepared { ticket: PageTicket, revision: u64 },
    /// Settings-Export vorbereiten
    PrepareSettingsExport { parameters: IndexMap<String, f64> },
    /// Settings-Export-Antwort übernehmen
    ApplySettingsExportPrepared { revision: u64 },
}
