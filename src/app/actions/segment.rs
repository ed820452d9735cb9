//! Actions für fixierte und Ergebnis-Segmente.

use super::Action;
use crate::core::{PageId, Point, Polygon, PolygonKind, SegmentationModel};

/// Fügt ein fixiertes Segment hinzu.
///
/// Existiert ein Ergebnis-Segment mit gleicher ID, wird es ausgeblendet, damit
/// die ID nur in einer Sammlung maßgeblich ist. Nicht ausgeschlossene Typen
/// werden an die Lesereihenfolge angehängt.
#[derive(Debug)]
pub struct AddFixedSegment {
    page: PageId,
    segment: Polygon,
    added: bool,
    ignored_result: bool,
    appended_to_order: bool,
}

impl AddFixedSegment {
    /// Erstellt die Action für ein neues fixiertes Segment.
    pub fn new(page: PageId, segment: Polygon) -> Self {
        Self {
            page,
            segment,
            added: false,
            ignored_result: false,
            appended_to_order: false,
        }
    }
}

impl Action for AddFixedSegment {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let page = self.page;
        let id = self.segment.id.clone();
        model.ensure_export_settings(page);

        self.added = model.insert_fixed_segment(page, self.segment.clone(), None);
        self.ignored_result = false;
        self.appended_to_order = false;
        if !self.added {
            return;
        }

        let has_result = model
            .page(page)
            .is_some_and(|p| p.result_segments.contains_key(&id));
        if has_result {
            self.ignored_result = model.ignore_result_segment(page, &id);
        }

        let excluded = model
            .excluded_reading_order_types()
            .iter()
            .any(|t| *t == self.segment.polygon_type);
        let in_order = model
            .ensure_export_settings(page)
            .reading_order_position(&id)
            .is_some();
        if !excluded && !in_order {
            model.insert_into_reading_order(page, usize::MAX, &id);
            self.appended_to_order = true;
        }
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        let id = &self.segment.id;
        if self.appended_to_order {
            model.remove_from_reading_order(self.page, id);
        }
        if self.ignored_result {
            model.unignore_result_segment(self.page, id);
        }
        if self.added {
            model.remove_fixed_segment(self.page, id);
        }
    }

    fn description(&self) -> &str {
        "Segment hinzufügen"
    }
}

/// Entfernt ein Segment.
///
/// Fixierte Segmente werden strukturell gelöscht, Ergebnis-Segmente nur über
/// `segments_to_ignore` ausgeblendet. In beiden Fällen verschwindet die ID aus
/// der Lesereihenfolge; Undo setzt sie an der alten Position wieder ein.
#[derive(Debug)]
pub struct RemoveSegment {
    page: PageId,
    id: String,
    removed_fixed: Option<(usize, Polygon)>,
    ignored_result: bool,
    order_index: Option<usize>,
}

impl RemoveSegment {
    /// Erstellt die Action für das Segment mit der ID.
    pub fn new(page: PageId, id: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            removed_fixed: None,
            ignored_result: false,
            order_index: None,
        }
    }
}

impl Action for RemoveSegment {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let page = self.page;
        model.ensure_export_settings(page);
        self.removed_fixed = None;
        self.ignored_result = false;
        self.order_index = None;

        match model.resolve_polygon_type(page, &self.id) {
            Some(PolygonKind::Fixed) => {
                self.removed_fixed = model.remove_fixed_segment(page, &self.id);
            }
            Some(PolygonKind::Result) => {
                self.ignored_result = model.ignore_result_segment(page, &self.id);
            }
            other => {
                log::warn!(
                    "Segment {} auf Seite {} nicht entfernbar ({:?})",
                    self.id,
                    page,
                    other
                );
                return;
            }
        }
        self.order_index = model.remove_from_reading_order(page, &self.id);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some((index, polygon)) = self.removed_fixed.take() {
            model.insert_fixed_segment(self.page, polygon, Some(index));
        }
        if self.ignored_result {
            model.unignore_result_segment(self.page, &self.id);
        }
        if let Some(index) = self.order_index {
            model.insert_into_reading_order(self.page, index, &self.id);
        }
    }

    fn description(&self) -> &str {
        "Segment entfernen"
    }
}

#[derive(Debug, Clone)]
enum TypeBackup {
    Fixed(String),
    Result(Option<String>),
}

/// Ändert den Typ eines Segments.
///
/// Fixierte Segmente werden direkt geändert, Ergebnis-Segmente erhalten eine
/// Typ-Überschreibung in `changed_types`.
#[derive(Debug)]
pub struct ChangeSegmentType {
    page: PageId,
    id: String,
    new_type: String,
    backup: Option<TypeBackup>,
}

impl ChangeSegmentType {
    /// Erstellt die Action für einen Typwechsel.
    pub fn new(page: PageId, id: impl Into<String>, new_type: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            new_type: new_type.into(),
            backup: None,
        }
    }
}

impl Action for ChangeSegmentType {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let page = self.page;
        model.ensure_export_settings(page);
        self.backup = match model.resolve_polygon_type(page, &self.id) {
            Some(PolygonKind::Fixed) => {
                let old = model
                    .page(page)
                    .and_then(|p| p.fixed_segments.get(&self.id))
                    .map(|s| s.polygon_type.clone());
                match old {
                    Some(old) if model.set_fixed_segment_type(page, &self.id, &self.new_type) => {
                        Some(TypeBackup::Fixed(old))
                    }
                    _ => None,
                }
            }
            Some(PolygonKind::Result) => {
                let previous = model.set_changed_type(page, &self.id, Some(&self.new_type));
                Some(TypeBackup::Result(previous))
            }
            other => {
                log::warn!(
                    "Typwechsel: {} auf Seite {} ist kein Segment ({:?})",
                    self.id,
                    page,
                    other
                );
                None
            }
        };
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        match self.backup.take() {
            Some(TypeBackup::Fixed(old)) => {
                model.set_fixed_segment_type(self.page, &self.id, &old);
            }
            Some(TypeBackup::Result(previous)) => {
                model.set_changed_type(self.page, &self.id, previous.as_deref());
            }
            None => {}
        }
    }

    fn description(&self) -> &str {
        "Segmenttyp ändern"
    }
}

/// Ersetzt die Punkte eines fixierten Segments.
#[derive(Debug)]
pub struct TransformSegment {
    page: PageId,
    id: String,
    points: Vec<Point>,
    previous: Option<Vec<Point>>,
}

impl TransformSegment {
    /// Erstellt die Action mit den neuen Punkten.
    pub fn new(page: PageId, id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            page,
            id: id.into(),
            points,
            previous: None,
        }
    }
}

impl Action for TransformSegment {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let old = model
            .page(self.page)
            .and_then(|p| p.fixed_segments.get(&self.id))
            .map(|s| s.points.clone());
        self.previous = match old {
            Some(old) if model.set_fixed_segment_points(self.page, &self.id, &self.points) => {
                Some(old)
            }
            _ => {
                log::warn!("Transformation: {} ist kein fixiertes Segment", self.id);
                None
            }
        };
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some(old) = self.previous.take() {
            model.set_fixed_segment_points(self.page, &self.id, &old);
        }
    }

    fn description(&self) -> &str {
        "Segment transformieren"
    }
}

/// Trägt ein zusammengeführtes Segment mit seinen Bestandteilen in `segments_to_merge` ein.
#[derive(Debug)]
pub struct RegisterMerge {
    page: PageId,
    merged_id: String,
    constituents: Vec<String>,
    previous: Option<Option<Vec<String>>>,
}

impl RegisterMerge {
    /// Erstellt die Action für einen Merge-Eintrag.
    pub fn new(page: PageId, merged_id: impl Into<String>, constituents: Vec<String>) -> Self {
        Self {
            page,
            merged_id: merged_id.into(),
            constituents,
            previous: None,
        }
    }
}

impl Action for RegisterMerge {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let previous =
            model.set_segments_to_merge(self.page, &self.merged_id, Some(self.constituents.clone()));
        self.previous = Some(previous);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some(previous) = self.previous.take() {
            model.set_segments_to_merge(self.page, &self.merged_id, previous);
        }
    }

    fn description(&self) -> &str {
        "Merge registrieren"
    }
}
