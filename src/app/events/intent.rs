use crate::app::requests::PageTicket;
use crate::core::{BookSettings, LoadBookResponse, PageId, Point, Polygon, SegmentationResponse};
use crate::shared::EditorOptions;
use indexmap::IndexMap;

/// Editor-Intents: Eingaben aus Darstellung, Netzwerk oder Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    // ── Lebenszyklus ────────────────────────────────────────────
    /// `loadBook` ist abgeschlossen, danach wird `page` angezeigt
    BookLoaded {
        response: LoadBookResponse,
        page: PageId,
    },
    /// Neue Settings wurden hochgeladen
    SettingsUploaded { settings: BookSettings },
    /// Seite anzeigen
    PageDisplayRequested { page: PageId },
    /// Seiten mit neuen Parametern segmentieren
    SegmentationRequested {
        pages: Vec<PageId>,
        parameters: IndexMap<String, f64>,
    },
    /// `segmentBook`-Antwort ist eingetroffen
    SegmentationCompleted {
        tickets: Vec<PageTicket>,
        response: SegmentationResponse,
    },
    /// Laufzeit-Optionen übernehmen
    OptionsChanged { options: EditorOptions },
    /// Bild-Segmentierungsmodus gewählt
    ImageModeChanged { mode: String },
    /// Bildregionen zusammenfassen an/aus
    ImageCombineToggled { combine: bool },

    // ── Selektion ───────────────────────────────────────────────
    /// Polygon angeklickt
    PolygonClicked { id: String },
    /// Rechteck-Selektion mit den IDs innerhalb des Rechtecks
    RectangleSelected { ids: Vec<String> },
    /// Selektion aufheben
    SelectionCleared,
    /// Mehrfachauswahl umschalten
    MultiSelectToggled { enabled: bool },
    /// Maus betritt/verlässt ein Polygon
    PolygonHovered { id: String, hovered: bool },

    // ── Erstellen ───────────────────────────────────────────────
    /// Region gezeichnet (ohne Typ: erster vorhandener Regionstyp)
    RegionPolygonDrawn {
        points: Vec<Point>,
        region_type: Option<String>,
    },
    /// Region of Interest gezeichnet
    RegionOfInterestDrawn { points: Vec<Point> },
    /// Fixiertes Segment gezeichnet
    SegmentDrawn { points: Vec<Point> },
    /// Cut gezeichnet
    CutDrawn { points: Vec<Point> },

    // ── Bearbeiten ──────────────────────────────────────────────
    /// Polygon verschoben/skaliert
    PolygonTransformed { id: String, points: Vec<Point> },
    /// Typ eines einzelnen Polygons ändern
    PolygonTypeChangeRequested { id: String, new_type: String },
    /// Typ aller selektierten Polygone ändern
    SelectionTypeChangeRequested { new_type: String },
    /// Selektion löschen
    DeleteSelectedRequested,
    /// Selektierte Ergebnis-Segmente zusammenführen
    MergeSelectedRequested,
    /// `requestMergedSegment`-Antwort ist eingetroffen
    MergeCompleted {
        ticket: PageTicket,
        constituents: Vec<String>,
        merged: Polygon,
    },

    // ── Regionen ────────────────────────────────────────────────
    /// Mindestgröße/Vorkommen einer Region ändern
    RegionSettingsChanged {
        region_type: String,
        min_size: f64,
        max_occurrences: i32,
    },
    /// Regionstyp vollständig löschen
    RegionDeleteRequested { region_type: String },
    /// Regionstyp ein-/ausblenden
    RegionVisibilityToggled { region_type: String, visible: bool },
    /// Alle Regionstypen ein-/ausblenden
    AllRegionsVisibilityToggled { visible: bool },

    // ── Lesereihenfolge ─────────────────────────────────────────
    /// Drag-Session in der Lesereihenfolge beginnt
    ReadingOrderDragStarted,
    /// Segment vor ein anderes ziehen
    ReadingOrderMoveRequested { moving_id: String, anchor_id: String },
    /// Drag-Session beendet (übernehmen)
    ReadingOrderDragFinished,
    /// Drag-Session abgebrochen
    ReadingOrderDragCancelled,
    /// Segment aus der Lesereihenfolge entfernen
    ReadingOrderRemoveRequested { id: String },

    // ── History ─────────────────────────────────────────────────
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,

    // ── Export ──────────────────────────────────────────────────
    /// Aktuelle Seite exportieren
    ExportRequested,
    /// Export-Vorbereitung abgeschlossen
    ExportPrepared { ticket: PageTicket, revision: u64 },
    /// Settings mit den aktuellen Parametern exportieren
    SettingsExportRequested { parameters: IndexMap<String, f64> },
    /// Settings-Export-Vorbereitung abgeschlossen
    SettingsExportPrepared { revision: u64 },
}
