//! Das Segmentierungsmodell: besitzt alle Seitenzustände und Export-Einstellungen.
//!
//! Strukturelle Mutationen sind `pub(crate)` und werden ausschließlich aus
//! `execute`/`undo` einer Action aufgerufen. Nicht rückgängig machbare
//! Lebenszyklus-Operationen (Buch laden, Segmentierung übernehmen, Settings
//! ersetzen) sind öffentlich.

use super::polygon_kind::{self, PolygonKind};
use super::reading_order::{self, GeometricReadingOrder, ReadingOrderSort};
use super::{
    Book, BookSettings, Cut, ExportArtifact, ExportSettings, LoadBookResponse, PageId,
    PageSettings, PageState, Point, Polygon, Region, SegmentationStatus,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Standardmäßig von der Lesereihenfolge ausgeschlossener Segmenttyp.
pub const IMAGE_SEGMENT_TYPE: &str = "image";

/// Besitzt Buch, Settings, Seitenzustände und Export-Einstellungen einer Session.
pub struct SegmentationModel {
    book: Book,
    settings: BookSettings,
    pages: BTreeMap<PageId, PageState>,
    export_settings: BTreeMap<PageId, ExportSettings>,
    segmented_pages: BTreeSet<PageId>,
    saved_pages: BTreeSet<PageId>,
    /// Generationszähler pro Seite für das Verwerfen veralteter Antworten
    generations: HashMap<PageId, u64>,
    sorter: Box<dyn ReadingOrderSort>,
    excluded_reading_order_types: Vec<String>,
}

impl Default for SegmentationModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentationModel {
    /// Erstellt ein leeres Modell mit geometrischer Standard-Lesereihenfolge.
    pub fn new() -> Self {
        Self::with_sorter(Box::new(GeometricReadingOrder))
    }

    /// Erstellt ein leeres Modell mit eigener Lesereihenfolge-Sortierung.
    pub fn with_sorter(sorter: Box<dyn ReadingOrderSort>) -> Self {
        Self {
            book: Book::default(),
            settings: BookSettings::default(),
            pages: BTreeMap::new(),
            export_settings: BTreeMap::new(),
            segmented_pages: BTreeSet::new(),
            saved_pages: BTreeSet::new(),
            generations: HashMap::new(),
            sorter,
            excluded_reading_order_types: vec![IMAGE_SEGMENT_TYPE.to_string()],
        }
    }

    /// Setzt die Segmenttypen, die bei der Ableitung der Lesereihenfolge ausgelassen werden.
    pub fn set_excluded_reading_order_types(&mut self, types: Vec<String>) {
        self.excluded_reading_order_types = types;
    }

    /// Typen, die nicht in die Lesereihenfolge aufgenommen werden.
    pub fn excluded_reading_order_types(&self) -> &[String] {
        &self.excluded_reading_order_types
    }

    // ── Lebenszyklus ────────────────────────────────────────────────

    /// Ersetzt den gesamten Modellzustand durch eine `loadBook`-Antwort.
    ///
    /// Alle Seitenzustände und Export-Einstellungen werden verworfen, die
    /// Generation jeder bekannten Seite erhöht.
    pub fn load_book(&mut self, response: LoadBookResponse) {
        let LoadBookResponse {
            book,
            segmentation,
            settings,
            ..
        } = response;

        let known_pages: Vec<PageId> = self
            .pages
            .keys()
            .copied()
            .chain(book.pages.iter().map(|p| p.id))
            .collect();
        for page in known_pages {
            self.bump_generation(page);
        }

        self.book = book;
        self.settings = settings;
        self.pages.clear();
        self.export_settings.clear();
        self.segmented_pages.clear();
        self.saved_pages.clear();

        for (page, result) in segmentation.pages {
            if result.status != SegmentationStatus::Success {
                log::warn!(
                    "Seite {} beim Laden ohne Segmentierung ({:?})",
                    page,
                    result.status
                );
                continue;
            }
            self.pages.insert(
                page,
                PageState::from_template(&self.settings, page, result.segments),
            );
            self.segmented_pages.insert(page);
        }

        log::info!(
            "Buch '{}' geladen: {} Seite(n), {} segmentiert",
            self.book.name,
            self.book.pages.len(),
            self.segmented_pages.len()
        );
    }

    /// Übernimmt ein externes Segmentierungsergebnis für eine Seite.
    ///
    /// Ersetzt die Ergebnis-Segmente, verwirft die Export-Einstellungen der
    /// Seite (Lesereihenfolge wird neu abgeleitet) und markiert die Seite als
    /// segmentiert.
    pub fn apply_external_segmentation(
        &mut self,
        page: PageId,
        segments: IndexMap<String, Polygon>,
    ) {
        let count = segments.len();
        match self.pages.get_mut(&page) {
            Some(state) => state.result_segments = segments,
            None => {
                let state = PageState::from_template(&self.settings, page, segments);
                self.pages.insert(page, state);
            }
        }
        self.export_settings.remove(&page);
        self.segmented_pages.insert(page);
        log::info!("Segmentierung für Seite {} übernommen ({} Segmente)", page, count);
    }

    /// Ersetzt die Settings vollständig und baut bestehende Seiten neu auf.
    ///
    /// Ergebnis-Segmente bleiben erhalten, fixierte Segmente, Cuts und
    /// Regionen stammen danach aus der neuen Vorlage. Export-Einstellungen
    /// werden verworfen.
    pub fn apply_settings(&mut self, settings: BookSettings) {
        self.settings = settings;
        let pages: Vec<PageId> = self.pages.keys().copied().collect();
        for page in pages {
            let results = self
                .pages
                .remove(&page)
                .map(|p| p.result_segments)
                .unwrap_or_default();
            self.pages.insert(
                page,
                PageState::from_template(&self.settings, page, results),
            );
        }
        self.export_settings.clear();
        log::info!("Settings übernommen ({} Regionstyp(en))", self.settings.regions.len());
    }

    /// Stellt sicher, dass der Seitenzustand existiert (aus der Settings-Vorlage).
    pub fn ensure_page(&mut self, page: PageId) -> &mut PageState {
        let settings = &self.settings;
        self.pages
            .entry(page)
            .or_insert_with(|| PageState::from_template(settings, page, IndexMap::new()))
    }

    /// Liefert die Export-Einstellungen der Seite und legt sie beim ersten Zugriff an.
    ///
    /// Beim Anlegen wird die Lesereihenfolge genau einmal aus den sichtbaren
    /// Segmenten abgeleitet.
    pub fn ensure_export_settings(&mut self, page: PageId) -> &mut ExportSettings {
        if !self.export_settings.contains_key(&page) {
            self.ensure_page(page);
            let reading_order = self.derive_reading_order(page);
            log::debug!(
                "Export-Einstellungen für Seite {} angelegt ({} Einträge Lesereihenfolge)",
                page,
                reading_order.len()
            );
            self.export_settings.insert(
                page,
                ExportSettings {
                    reading_order,
                    ..Default::default()
                },
            );
        }
        self.export_settings.entry(page).or_default()
    }

    fn derive_reading_order(&self, page: PageId) -> Vec<String> {
        let visible = self.visible_segments(page);
        reading_order::derive_default(
            self.sorter.as_ref(),
            &visible,
            &self.excluded_reading_order_types,
        )
    }

    /// Setzt die Liste segmentierter Seiten auf die gespeicherten Seiten zurück.
    pub fn demote_unsaved_pages(&mut self) {
        self.segmented_pages = self.saved_pages.clone();
    }

    /// Markiert eine Seite als exportiert/gespeichert.
    pub fn mark_saved(&mut self, page: PageId) {
        self.saved_pages.insert(page);
    }

    /// Erhöht die Generation einer Seite und gibt den neuen Wert zurück.
    pub fn bump_generation(&mut self, page: PageId) -> u64 {
        let generation = self.generations.entry(page).or_insert(0);
        *generation += 1;
        *generation
    }

    // ── Lesende Zugriffe ────────────────────────────────────────────

    /// Aktuelle Generation einer Seite.
    pub fn generation(&self, page: PageId) -> u64 {
        self.generations.get(&page).copied().unwrap_or(0)
    }

    /// Das geladene Buch.
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Die aktuellen Settings (Vorlage).
    pub fn settings(&self) -> &BookSettings {
        &self.settings
    }

    /// Mutable Settings, z.B. für Algorithmus-Parameter.
    pub fn settings_mut(&mut self) -> &mut BookSettings {
        &mut self.settings
    }

    /// Settings mit dem aktuellen Bearbeitungsstand für den Settings-Export.
    ///
    /// Fixierte Segmente und Cuts jeder angelegten Seite werden nach
    /// `pages` zurückgeschrieben. Regionen stammen von der Seite `current`,
    /// ohne angelegte Seite bleibt die Vorlage.
    pub fn settings_snapshot(&self, current: PageId) -> BookSettings {
        let mut settings = self.settings.clone();
        for (page, state) in &self.pages {
            if state.fixed_segments.is_empty()
                && state.cuts.is_empty()
                && !settings.pages.contains_key(page)
            {
                continue;
            }
            settings.pages.insert(
                *page,
                PageSettings {
                    segments: state.fixed_segments.clone(),
                    cuts: state.cuts.clone(),
                },
            );
        }
        if let Some(state) = self.pages.get(&current) {
            settings.regions = state.regions.clone();
        }
        settings
    }

    /// Seitenzustand (falls bereits angelegt).
    pub fn page(&self, page: PageId) -> Option<&PageState> {
        self.pages.get(&page)
    }

    /// Export-Einstellungen (ohne sie anzulegen).
    pub fn export_settings(&self, page: PageId) -> Option<&ExportSettings> {
        self.export_settings.get(&page)
    }

    /// Gibt `true` zurück, wenn die Seite segmentiert ist.
    pub fn is_segmented(&self, page: PageId) -> bool {
        self.segmented_pages.contains(&page)
    }

    /// Gibt `true` zurück, wenn die Seite exportiert wurde.
    pub fn is_saved(&self, page: PageId) -> bool {
        self.saved_pages.contains(&page)
    }

    /// Alle segmentierten Seiten (aufsteigend).
    pub fn segmented_pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.segmented_pages.iter().copied()
    }

    /// Bestimmt die besitzende Sammlung einer Polygon-ID auf der Seite.
    pub fn resolve_polygon_type(&self, page: PageId, polygon_id: &str) -> Option<PolygonKind> {
        self.pages
            .get(&page)
            .and_then(|state| polygon_kind::resolve(state, polygon_id))
    }

    /// Geordnete Vereinigung aller Regionstypen außer "ignore" über alle Seiten.
    pub fn present_region_types(&self) -> IndexSet<String> {
        self.pages
            .values()
            .flat_map(|p| p.visible_region_types())
            .map(str::to_string)
            .collect()
    }

    /// Sichtbare Segmente: Ergebnis-Segmente ohne fixiertes Gegenstück und
    /// ohne Ignore-Eintrag, gefolgt von allen fixierten Segmenten.
    pub fn visible_segments(&self, page: PageId) -> Vec<&Polygon> {
        let Some(state) = self.pages.get(&page) else {
            return Vec::new();
        };
        let ignored = self.export_settings.get(&page).map(|e| &e.segments_to_ignore);
        state
            .result_segments
            .values()
            .filter(|s| !state.fixed_segments.contains_key(&s.id))
            .filter(|s| !ignored.is_some_and(|i| i.contains(&s.id)))
            .chain(state.fixed_segments.values())
            .collect()
    }

    /// Segment mit effektivem Typ (Typ-Überschreibung für Ergebnis-Segmente angewendet).
    pub fn effective_segment(&self, page: PageId, id: &str) -> Option<Polygon> {
        let state = self.pages.get(&page)?;
        if let Some(fixed) = state.fixed_segments.get(id) {
            return Some(fixed.clone());
        }
        let mut result = state.result_segments.get(id)?.clone();
        if let Some(changed) = self
            .export_settings
            .get(&page)
            .and_then(|e| e.changed_types.get(id))
        {
            result.polygon_type = changed.clone();
        }
        Some(result)
    }

    /// Baut das Export-Artefakt der Seite.
    ///
    /// Nimmt dabei einen Snapshot der fixierten Segmente in `fixed_regions` auf.
    pub fn export_artifact(&mut self, page: PageId) -> ExportArtifact {
        let fixed = self
            .pages
            .get(&page)
            .map(|p| p.fixed_segments.clone())
            .unwrap_or_default();
        self.ensure_export_settings(page).fixed_regions = fixed;

        let settings = self.export_settings.get(&page).cloned().unwrap_or_default();
        let reading_order = settings
            .reading_order
            .iter()
            .filter_map(|id| self.effective_segment(page, id))
            .collect();

        ExportArtifact {
            page,
            segments_to_ignore: settings.segments_to_ignore.into_iter().collect(),
            segments_to_merge: settings.segments_to_merge,
            changed_types: settings.changed_types,
            fixed_regions: settings.fixed_regions,
            reading_order,
        }
    }

    // ── Strukturelle Mutationen (nur aus Actions) ───────────────────

    fn page_mut(&mut self, page: PageId) -> Option<&mut PageState> {
        let state = self.pages.get_mut(&page);
        if state.is_none() {
            log::warn!("Seite {} existiert nicht im Modell", page);
        }
        state
    }

    /// Fügt ein fixiertes Segment ein. Verweigert bereits vorhandene IDs.
    pub(crate) fn insert_fixed_segment(
        &mut self,
        page: PageId,
        polygon: Polygon,
        index: Option<usize>,
    ) -> bool {
        let state = self.ensure_page(page);
        if state.fixed_segments.contains_key(&polygon.id) {
            log::warn!("Fixiertes Segment {} existiert bereits", polygon.id);
            return false;
        }
        let id = polygon.id.clone();
        match index {
            Some(i) if i <= state.fixed_segments.len() => {
                state.fixed_segments.shift_insert(i, id, polygon);
            }
            _ => {
                state.fixed_segments.insert(id, polygon);
            }
        }
        true
    }

    /// Entfernt ein fixiertes Segment und gibt Position und Polygon zurück.
    pub(crate) fn remove_fixed_segment(
        &mut self,
        page: PageId,
        id: &str,
    ) -> Option<(usize, Polygon)> {
        let removed = self
            .page_mut(page)?
            .fixed_segments
            .shift_remove_full(id)
            .map(|(index, _, polygon)| (index, polygon));
        if removed.is_none() {
            log::warn!("Fixiertes Segment {} nicht gefunden", id);
        }
        removed
    }

    /// Setzt den Typ eines fixierten Segments.
    pub(crate) fn set_fixed_segment_type(&mut self, page: PageId, id: &str, polygon_type: &str) -> bool {
        match self.page_mut(page).and_then(|p| p.fixed_segments.get_mut(id)) {
            Some(segment) => {
                segment.polygon_type = polygon_type.to_string();
                true
            }
            None => {
                log::warn!("Typwechsel: fixiertes Segment {} nicht gefunden", id);
                false
            }
        }
    }

    /// Ersetzt die Punkte eines fixierten Segments.
    pub(crate) fn set_fixed_segment_points(&mut self, page: PageId, id: &str, points: &[Point]) -> bool {
        match self.page_mut(page).and_then(|p| p.fixed_segments.get_mut(id)) {
            Some(segment) => {
                segment.points = points.to_vec();
                true
            }
            None => {
                log::warn!("Transformation: fixiertes Segment {} nicht gefunden", id);
                false
            }
        }
    }

    /// Blendet ein Ergebnis-Segment aus. Gibt `true` zurück, wenn es neu ausgeblendet wurde.
    pub(crate) fn ignore_result_segment(&mut self, page: PageId, id: &str) -> bool {
        self.ensure_export_settings(page)
            .segments_to_ignore
            .insert(id.to_string())
    }

    /// Hebt das Ausblenden eines Ergebnis-Segments auf.
    pub(crate) fn unignore_result_segment(&mut self, page: PageId, id: &str) -> bool {
        self.ensure_export_settings(page)
            .segments_to_ignore
            .shift_remove(id)
    }

    /// Setzt (oder entfernt) die Typ-Überschreibung und gibt den vorherigen Wert zurück.
    pub(crate) fn set_changed_type(
        &mut self,
        page: PageId,
        id: &str,
        polygon_type: Option<&str>,
    ) -> Option<String> {
        let settings = self.ensure_export_settings(page);
        match polygon_type {
            Some(t) => settings.changed_types.insert(id.to_string(), t.to_string()),
            None => settings.changed_types.shift_remove(id),
        }
    }

    /// Setzt (oder entfernt) einen Merge-Eintrag und gibt den vorherigen Wert zurück.
    pub(crate) fn set_segments_to_merge(
        &mut self,
        page: PageId,
        merged_id: &str,
        constituents: Option<Vec<String>>,
    ) -> Option<Vec<String>> {
        let settings = self.ensure_export_settings(page);
        match constituents {
            Some(ids) => settings.segments_to_merge.insert(merged_id.to_string(), ids),
            None => settings.segments_to_merge.shift_remove(merged_id),
        }
    }

    /// Entfernt eine ID aus der Lesereihenfolge (alte Position als Rückgabe).
    pub(crate) fn remove_from_reading_order(&mut self, page: PageId, id: &str) -> Option<usize> {
        self.ensure_export_settings(page).remove_from_reading_order(id)
    }

    /// Fügt eine ID an der Position in die Lesereihenfolge ein.
    pub(crate) fn insert_into_reading_order(&mut self, page: PageId, index: usize, id: &str) {
        self.ensure_export_settings(page)
            .insert_into_reading_order(index, id.to_string());
    }

    /// Ersetzt die Lesereihenfolge vollständig und gibt die bisherige zurück.
    pub(crate) fn set_reading_order(&mut self, page: PageId, order: Vec<String>) -> Vec<String> {
        std::mem::replace(&mut self.ensure_export_settings(page).reading_order, order)
    }

    /// Fügt eine Region ein. Verweigert bereits vorhandene Regionstypen.
    pub(crate) fn insert_region(&mut self, page: PageId, region: Region, index: Option<usize>) -> bool {
        let state = self.ensure_page(page);
        if state.regions.contains_key(&region.region_type) {
            log::warn!("Region {} existiert bereits", region.region_type);
            return false;
        }
        let key = region.region_type.clone();
        match index {
            Some(i) if i <= state.regions.len() => {
                state.regions.shift_insert(i, key, region);
            }
            _ => {
                state.regions.insert(key, region);
            }
        }
        true
    }

    /// Entfernt eine komplette Region und gibt Position und Region zurück.
    pub(crate) fn remove_region(&mut self, page: PageId, region_type: &str) -> Option<(usize, Region)> {
        let removed = self
            .page_mut(page)?
            .regions
            .shift_remove_full(region_type)
            .map(|(index, _, region)| (index, region));
        if removed.is_none() {
            log::warn!("Region {} nicht gefunden", region_type);
        }
        removed
    }

    /// Mutable Region (falls vorhanden).
    pub(crate) fn region_mut(&mut self, page: PageId, region_type: &str) -> Option<&mut Region> {
        self.pages.get_mut(&page)?.regions.get_mut(region_type)
    }

    /// Fügt ein Polygon in eine bestehende Region ein. Verweigert bereits
    /// vorhandene Polygon-IDs auf der Seite.
    pub(crate) fn insert_region_polygon(
        &mut self,
        page: PageId,
        region_type: &str,
        polygon: Polygon,
        index: Option<usize>,
    ) -> bool {
        let Some(state) = self.page_mut(page) else {
            return false;
        };
        if state.find_region_polygon(&polygon.id).is_some() {
            log::warn!("Regions-Polygon {} existiert bereits", polygon.id);
            return false;
        }
        let Some(region) = state.regions.get_mut(region_type) else {
            log::warn!("Region {} für Polygon {} fehlt", region_type, polygon.id);
            return false;
        };
        let id = polygon.id.clone();
        match index {
            Some(i) if i <= region.polygons.len() => {
                region.polygons.shift_insert(i, id, polygon);
            }
            _ => {
                region.polygons.insert(id, polygon);
            }
        }
        true
    }

    /// Entfernt ein Regions-Polygon; gibt Regionstyp, Position und Polygon zurück.
    pub(crate) fn remove_region_polygon(
        &mut self,
        page: PageId,
        id: &str,
    ) -> Option<(String, usize, Polygon)> {
        let state = self.page_mut(page)?;
        let removed = state.regions.values_mut().find_map(|region| {
            region
                .polygons
                .shift_remove_full(id)
                .map(|(index, _, polygon)| (region.region_type.clone(), index, polygon))
        });
        if removed.is_none() {
            log::warn!("Regions-Polygon {} nicht gefunden", id);
        }
        removed
    }

    /// Ersetzt die Punkte eines Regions-Polygons.
    pub(crate) fn set_region_polygon_points(&mut self, page: PageId, id: &str, points: &[Point]) -> bool {
        let polygon = self
            .page_mut(page)
            .and_then(|p| p.regions.values_mut().find_map(|r| r.polygons.get_mut(id)));
        match polygon {
            Some(polygon) => {
                polygon.points = points.to_vec();
                true
            }
            None => {
                log::warn!("Transformation: Regions-Polygon {} nicht gefunden", id);
                false
            }
        }
    }

    /// Fügt einen Cut ein. Verweigert bereits vorhandene IDs.
    pub(crate) fn insert_cut(&mut self, page: PageId, cut: Cut, index: Option<usize>) -> bool {
        let state = self.ensure_page(page);
        if state.cuts.contains_key(&cut.id) {
            log::warn!("Cut {} existiert bereits", cut.id);
            return false;
        }
        let id = cut.id.clone();
        match index {
            Some(i) if i <= state.cuts.len() => {
                state.cuts.shift_insert(i, id, cut);
            }
            _ => {
                state.cuts.insert(id, cut);
            }
        }
        true
    }

    /// Entfernt einen Cut und gibt Position und Cut zurück.
    pub(crate) fn remove_cut(&mut self, page: PageId, id: &str) -> Option<(usize, Cut)> {
        let removed = self
            .page_mut(page)?
            .cuts
            .shift_remove_full(id)
            .map(|(index, _, cut)| (index, cut));
        if removed.is_none() {
            log::warn!("Cut {} nicht gefunden", id);
        }
        removed
    }

    /// Ersetzt die Punkte eines Cuts.
    pub(crate) fn set_cut_points(&mut self, page: PageId, id: &str, points: &[Point]) -> bool {
        match self.page_mut(page).and_then(|p| p.cuts.get_mut(id)) {
            Some(cut) => {
                cut.points = points.to_vec();
                true
            }
            None => {
                log::warn!("Transformation: Cut {} nicht gefunden", id);
                false
            }
        }
    }
}
