//! Actions für die Lesereihenfolge.

use super::Action;
use crate::core::{PageId, SegmentationModel};

/// Ersetzt die Lesereihenfolge durch eine neue Reihenfolge.
///
/// Die bisherige Reihenfolge wird erst in `execute` übernommen.
#[derive(Debug)]
pub struct ChangeReadingOrder {
    page: PageId,
    old_order: Option<Vec<String>>,
    new_order: Vec<String>,
}

impl ChangeReadingOrder {
    /// Erstellt die Action für die neue Reihenfolge.
    pub fn new(page: PageId, new_order: Vec<String>) -> Self {
        Self {
            page,
            old_order: None,
            new_order,
        }
    }
}

impl Action for ChangeReadingOrder {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.old_order = Some(model.set_reading_order(self.page, self.new_order.clone()));
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some(old_order) = self.old_order.take() {
            model.set_reading_order(self.page, old_order);
        }
    }

    fn description(&self) -> &str {
        "Lesereihenfolge ändern"
    }
}

/// Entfernt eine Segment-ID aus der Lesereihenfolge, ohne das Segment anzutasten.
#[derive(Debug)]
pub struct RemoveFromReadingOrder {
    page: PageId,
    id: String,
    index: Option<usize>,
}

impl RemoveFromReadingOrder {
    /// Erstellt die Action für die Segment-ID.
    pub fn new(page: PageId, id: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            index: None,
        }
    }
}

impl Action for RemoveFromReadingOrder {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.index = model.remove_from_reading_order(self.page, &self.id);
        if self.index.is_none() {
            log::debug!("{} ist nicht in der Lesereihenfolge", self.id);
        }
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some(index) = self.index.take() {
            model.insert_into_reading_order(self.page, index, &self.id);
        }
    }

    fn description(&self) -> &str {
        "Aus Lesereihenfolge entfernen"
    }
}
