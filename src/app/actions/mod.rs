//! Umkehrbare Änderungen am Segmentierungsmodell (Command-Pattern).
//!
//! Jede Action kennt ihre Seite und sichert beim Ausführen eine eigene,
//! tief kopierte Version genau der Daten, die `undo` wiederherstellt.
//! Fehlende IDs (Modell wurde außerhalb verändert) sind No-ops mit Warnung.

mod cut;
mod reading_order;
mod region;
mod segment;

pub use cut::{AddCut, RemoveCut, TransformCut};
pub use reading_order::{ChangeReadingOrder, RemoveFromReadingOrder};
pub use region::{
    AddRegionPolygon, ChangeRegionPolygonType, ChangeRegionSettings, RemoveCompleteRegion,
    RemoveRegionPolygon, TransformRegionPolygon,
};
pub use segment::{AddFixedSegment, ChangeSegmentType, RegisterMerge, RemoveSegment, TransformSegment};

use crate::core::{PageId, Polygon, SegmentationModel};
use std::fmt;

/// Eine umkehrbare Änderung am [`SegmentationModel`].
pub trait Action: fmt::Debug {
    /// Wendet die Änderung an (auch für Redo).
    fn execute(&mut self, model: &mut SegmentationModel);

    /// Stellt exakt den Zustand vor dem letzten `execute` wieder her.
    fn undo(&mut self, model: &mut SegmentationModel);

    /// Kurzbeschreibung für Log und History-Anzeige.
    fn description(&self) -> &str;
}

/// Gruppiert mehrere Actions zu einem atomaren Undo/Redo-Schritt.
///
/// `execute` läuft in Reihenfolge, `undo` in umgekehrter Reihenfolge.
#[derive(Debug)]
pub struct CompositeAction {
    description: String,
    children: Vec<Box<dyn Action>>,
}

impl CompositeAction {
    /// Erstellt eine Gruppe aus den gegebenen Actions.
    pub fn new(description: impl Into<String>, children: Vec<Box<dyn Action>>) -> Self {
        Self {
            description: description.into(),
            children,
        }
    }

    /// Merge als ein Schritt: jeder Bestandteil wird entfernt, das
    /// zusammengeführte Polygon als fixiertes Segment angelegt und der Eintrag
    /// in `segments_to_merge` registriert.
    pub fn merge_segments(page: PageId, constituents: Vec<String>, merged: Polygon) -> Self {
        let merged_id = merged.id.clone();
        let mut children: Vec<Box<dyn Action>> = constituents
            .iter()
            .map(|id| Box::new(RemoveSegment::new(page, id)) as Box<dyn Action>)
            .collect();
        children.push(Box::new(AddFixedSegment::new(page, merged)));
        children.push(Box::new(RegisterMerge::new(page, merged_id, constituents)));
        Self::new("Segmente zusammenführen", children)
    }

    /// Anzahl der enthaltenen Actions.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Gibt `true` zurück, wenn die Gruppe leer ist.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Action for CompositeAction {
    fn execute(&mut self, model: &mut SegmentationModel) {
        for child in &mut self.children {
            child.execute(model);
        }
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        for child in self.children.iter_mut().rev() {
            child.undo(model);
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests;
