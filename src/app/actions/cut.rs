//! Actions für manuelle Schnitte.

use super::Action;
use crate::core::{Cut, PageId, Point, SegmentationModel};

/// Fügt einen Cut hinzu.
#[derive(Debug)]
pub struct AddCut {
    page: PageId,
    cut: Cut,
    added: bool,
}

impl AddCut {
    /// Erstellt die Action für einen neuen Cut.
    pub fn new(page: PageId, cut: Cut) -> Self {
        Self {
            page,
            cut,
            added: false,
        }
    }
}

impl Action for AddCut {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.added = model.insert_cut(self.page, self.cut.clone(), None);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if self.added {
            model.remove_cut(self.page, &self.cut.id);
        }
    }

    fn description(&self) -> &str {
        "Cut hinzufügen"
    }
}

/// Entfernt einen Cut.
#[derive(Debug)]
pub struct RemoveCut {
    page: PageId,
    id: String,
    removed: Option<(usize, Cut)>,
}

impl RemoveCut {
    /// Erstellt die Action für den Cut mit der ID.
    pub fn new(page: PageId, id: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            removed: None,
        }
    }
}

impl Action for RemoveCut {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.removed = model.remove_cut(self.page, &self.id);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some((index, cut)) = self.removed.take() {
            model.insert_cut(self.page, cut, Some(index));
        }
    }

    fn description(&self) -> &str {
        "Cut entfernen"
    }
}

/// Ersetzt die Punkte eines Cuts.
#[derive(Debug)]
pub struct TransformCut {
    page: PageId,
    id: String,
    points: Vec<Point>,
    previous: Option<Vec<Point>>,
}

impl TransformCut {
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

impl Action for TransformCut {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let old = model
            .page(self.page)
            .and_then(|p| p.cuts.get(&self.id))
            .map(|c| c.points.clone());
        self.previous = match old {
            Some(old) if model.set_cut_points(self.page, &self.id, &self.points) => Some(old),
            _ => None,
        };
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some(old) = self.previous.take() {
            model.set_cut_points(self.page, &self.id, &old);
        }
    }

    fn description(&self) -> &str {
        "Cut transformieren"
    }
}
