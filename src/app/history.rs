//! Undo/Redo pro Seite: lineare Action-Liste mit Cursor.

use super::actions::Action;
use crate::core::{PageId, SegmentationModel};
use std::collections::HashMap;

/// Lineare History einer Seite.
///
/// `cursor` zeigt auf die zuletzt ausgeführte Action (`None` = nichts
/// ausgeführt bzw. alles rückgängig gemacht). Ein `record` nach Undo verwirft
/// den Redo-Zweig.
#[derive(Debug, Default)]
pub struct ActionHistory {
    actions: Vec<Box<dyn Action>>,
    cursor: Option<usize>,
}

impl ActionHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self::default()
    }

    /// Führt die Action aus und hängt sie an; verwirft vorher den Redo-Zweig.
    pub fn record(&mut self, mut action: Box<dyn Action>, model: &mut SegmentationModel) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.actions.len() {
            log::debug!("Redo-Zweig verworfen ({} Actions)", self.actions.len() - keep);
            self.actions.truncate(keep);
        }
        action.execute(model);
        log::debug!("Action ausgeführt: {}", action.description());
        self.actions.push(action);
        self.cursor = Some(self.actions.len() - 1);
    }

    /// Macht die Action am Cursor rückgängig. Gibt `false` zurück, wenn nichts zu tun ist.
    pub fn undo(&mut self, model: &mut SegmentationModel) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let Some(action) = self.actions.get_mut(cursor) else {
            return false;
        };
        action.undo(model);
        log::debug!("Action rückgängig: {}", action.description());
        self.cursor = cursor.checked_sub(1);
        true
    }

    /// Führt die nächste Action erneut aus. Gibt `false` zurück, wenn nichts zu tun ist.
    pub fn redo(&mut self, model: &mut SegmentationModel) -> bool {
        let next = self.cursor.map_or(0, |c| c + 1);
        let Some(action) = self.actions.get_mut(next) else {
            return false;
        };
        action.execute(model);
        log::debug!("Action wiederholt: {}", action.description());
        self.cursor = Some(next);
        true
    }

    /// Verwirft alle Actions.
    pub fn reset(&mut self) {
        self.actions.clear();
        self.cursor = None;
    }

    /// Index der zuletzt ausgeführten Action.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Anzahl gespeicherter Actions (inklusive Redo-Zweig).
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Gibt `true` zurück, wenn keine Actions gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.actions.len()
    }
}

/// Histories aller Seiten; eine Seite erhält ihre History bei der ersten Action.
#[derive(Debug, Default)]
pub struct PageHistories {
    pages: HashMap<PageId, ActionHistory>,
}

impl PageHistories {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// History einer Seite (falls bereits angelegt).
    pub fn get(&self, page: PageId) -> Option<&ActionHistory> {
        self.pages.get(&page)
    }

    /// Zeichnet eine Action auf der History der Seite auf.
    pub fn record(&mut self, page: PageId, action: Box<dyn Action>, model: &mut SegmentationModel) {
        self.pages.entry(page).or_default().record(action, model);
    }

    /// Undo auf der History der Seite.
    pub fn undo(&mut self, page: PageId, model: &mut SegmentationModel) -> bool {
        self.pages
            .get_mut(&page)
            .is_some_and(|history| history.undo(model))
    }

    /// Redo auf der History der Seite.
    pub fn redo(&mut self, page: PageId, model: &mut SegmentationModel) -> bool {
        self.pages
            .get_mut(&page)
            .is_some_and(|history| history.redo(model))
    }

    /// Setzt die History einer Seite zurück.
    pub fn reset_page(&mut self, page: PageId) {
        if let Some(history) = self.pages.get_mut(&page) {
            history.reset();
        }
    }

    /// Setzt alle Histories zurück.
    pub fn reset_all(&mut self) {
        for history in self.pages.values_mut() {
            history.reset();
        }
    }
}
