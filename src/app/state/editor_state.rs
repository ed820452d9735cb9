use crate::app::actions::Action;
use crate::app::history::PageHistories;
use crate::app::reading_order::ReadingOrderManager;
use crate::app::requests::{OutgoingRequest, SegmentationReport};
use crate::app::view::{EditorView, NullView};
use crate::app::CommandLog;
use crate::core::{PageId, SegmentationModel};
use crate::shared::EditorOptions;
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashMap};

use super::SelectionSet;

/// Hauptzustand des Editors
pub struct EditorState {
    /// Segmentierungsmodell (alle Seiten)
    pub model: SegmentationModel,
    /// Undo/Redo-Histories pro Seite
    pub histories: PageHistories,
    /// Selection-State
    pub selection: SelectionSet,
    /// Gestagte Lesereihenfolge
    pub reading_order: ReadingOrderManager,
    /// Aktuell angezeigte Seite
    pub current_page: PageId,
    /// Mehrfachauswahl aktiv
    pub multi_select: bool,
    /// Ausgehende Anfragen, die der Host abholt
    pub pending_requests: Vec<OutgoingRequest>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ausgeblendete Regionstypen
    pub hidden_regions: IndexSet<String>,
    /// Ergebnis der zuletzt verarbeiteten Segmentierungsantwort
    pub last_segmentation_report: Option<SegmentationReport>,
    /// Darstellungs-Gegenseite
    pub view: Box<dyn EditorView>,
    downloadable: BTreeSet<PageId>,
    export_revisions: HashMap<PageId, u64>,
    settings_revision: u64,
    settings_downloadable: bool,
    created_counter: u64,
}

impl EditorState {
    /// Erstellt einen neuen, leeren Editor-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen Editor-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let mut model = SegmentationModel::new();
        model.set_excluded_reading_order_types(options.reading_order_excluded_types.clone());
        Self {
            model,
            histories: PageHistories::new(),
            selection: SelectionSet::new(),
            reading_order: ReadingOrderManager::new(),
            current_page: 0,
            multi_select: options.multi_select,
            pending_requests: Vec::new(),
            command_log: CommandLog::new(),
            options,
            hidden_regions: IndexSet::new(),
            last_segmentation_report: None,
            view: Box::new(NullView),
            downloadable: BTreeSet::new(),
            export_revisions: HashMap::new(),
            settings_revision: 0,
            settings_downloadable: false,
            created_counter: 0,
        }
    }

    /// Ersetzt die Darstellungs-Gegenseite.
    pub fn with_view(mut self, view: Box<dyn EditorView>) -> Self {
        self.view = view;
        self
    }

    /// Entnimmt alle ausstehenden Anfragen (der Host reicht sie weiter).
    pub fn take_pending_requests(&mut self) -> Vec<OutgoingRequest> {
        std::mem::take(&mut self.pending_requests)
    }

    /// Erzeugt eine neue Polygon-ID, die auf der aktuellen Seite noch frei ist.
    pub fn next_created_id(&mut self) -> String {
        loop {
            let id = format!("{}{}", self.options.created_id_prefix, self.created_counter);
            self.created_counter += 1;
            if self
                .model
                .resolve_polygon_type(self.current_page, &id)
                .is_none()
            {
                return id;
            }
        }
    }

    /// Erster vorhandener Regionstyp oder der konfigurierte Standardtyp.
    pub fn default_polygon_type(&self) -> String {
        self.model
            .present_region_types()
            .first()
            .cloned()
            .unwrap_or_else(|| self.options.default_region_type.clone())
    }

    /// Zeichnet eine Action auf der aktuellen Seite auf.
    pub fn record_action(&mut self, action: Box<dyn Action>) {
        let page = self.current_page;
        log::info!("{} (Seite {})", action.description(), page);
        self.histories.record(page, action, &mut self.model);
        self.invalidate_export(page);
    }

    /// Macht einen früheren Export der Seite ungültig.
    ///
    /// Der Settings-Export enthält die fixierten Inhalte aller Seiten und
    /// wird dabei ebenfalls ungültig.
    pub fn invalidate_export(&mut self, page: PageId) {
        *self.export_revisions.entry(page).or_insert(0) += 1;
        if self.downloadable.remove(&page) {
            self.view.set_downloadable(page, false);
        }
        self.invalidate_settings_export();
    }

    /// Macht einen früheren Settings-Export ungültig.
    pub fn invalidate_settings_export(&mut self) {
        self.settings_revision += 1;
        if std::mem::take(&mut self.settings_downloadable) {
            self.view.set_settings_downloadable(false);
        }
    }

    /// Änderungsstand der Settings (steigt mit jeder Änderung).
    pub fn settings_revision(&self) -> u64 {
        self.settings_revision
    }

    /// Gibt den Settings-Export zum Download frei.
    pub fn mark_settings_downloadable(&mut self) {
        if !self.settings_downloadable {
            self.settings_downloadable = true;
            self.view.set_settings_downloadable(true);
        }
    }

    /// Gibt `true` zurück, wenn die Settings heruntergeladen werden können.
    pub fn is_settings_downloadable(&self) -> bool {
        self.settings_downloadable
    }

    /// Änderungsstand einer Seite (steigt mit jeder Änderung der History).
    pub fn export_revision(&self, page: PageId) -> u64 {
        self.export_revisions.get(&page).copied().unwrap_or(0)
    }

    /// Gibt den Export der Seite zum Download frei.
    pub fn mark_downloadable(&mut self, page: PageId) {
        if self.downloadable.insert(page) {
            self.view.set_downloadable(page, true);
        }
    }

    /// Gibt `true` zurück, wenn der Export der Seite heruntergeladen werden kann.
    pub fn is_downloadable(&self, page: PageId) -> bool {
        self.downloadable.contains(&page)
    }

    /// Verwirft alle Download-Freigaben.
    pub fn clear_downloadable(&mut self) {
        let pages: Vec<PageId> = self.downloadable.iter().copied().collect();
        self.downloadable.clear();
        for page in pages {
            self.view.set_downloadable(page, false);
        }
    }

    /// Gibt zurück, ob auf der aktuellen Seite ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.histories
            .get(self.current_page)
            .is_some_and(|h| h.can_undo())
    }

    /// Gibt zurück, ob auf der aktuellen Seite ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.histories
            .get(self.current_page)
            .is_some_and(|h| h.can_redo())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
