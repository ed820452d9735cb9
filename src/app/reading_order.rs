//! Interaktive Umsortierung der Lesereihenfolge.
//!
//! Während einer Drag-Session wird nur eine gestagte Kopie verändert. Erst
//! `commit` zeichnet den Unterschied als eine einzige Action auf.

use super::actions::ChangeReadingOrder;
use super::history::PageHistories;
use crate::core::{PageId, SegmentationModel};
use indexmap::IndexSet;

/// Verwaltet die gestagte Lesereihenfolge einer Seite.
#[derive(Debug, Default)]
pub struct ReadingOrderManager {
    staged: Option<StagedOrder>,
}

#[derive(Debug, Clone)]
struct StagedOrder {
    page: PageId,
    temp: Vec<String>,
}

impl ReadingOrderManager {
    /// Erstellt einen Manager ohne gestagte Reihenfolge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Umsortier-Session mit einer Kopie der aktuellen Reihenfolge.
    ///
    /// Eine bereits laufende Session derselben Seite bleibt erhalten.
    pub fn stage(&mut self, page: PageId, current: &[String]) -> &[String] {
        let keep = self.staged.as_ref().is_some_and(|s| s.page == page);
        if !keep {
            self.staged = Some(StagedOrder {
                page,
                temp: current.to_vec(),
            });
        }
        self.staged_order().unwrap_or_default()
    }

    /// Gestagte Reihenfolge (falls eine Session läuft).
    pub fn staged_order(&self) -> Option<&[String]> {
        self.staged.as_ref().map(|s| s.temp.as_slice())
    }

    /// Seite der laufenden Session.
    pub fn staged_page(&self) -> Option<PageId> {
        self.staged.as_ref().map(|s| s.page)
    }

    /// Verschiebt `moving_id` in der gestagten Reihenfolge vor `anchor_id`.
    pub fn move_staged(&mut self, moving_id: &str, anchor_id: &str) -> bool {
        match self.staged.as_mut() {
            Some(staged) => Self::move_before(&mut staged.temp, moving_id, anchor_id),
            None => false,
        }
    }

    /// Entfernt `moving_id` und fügt es direkt vor `anchor_id` wieder ein.
    ///
    /// No-op (Rückgabe `false`), wenn eine der IDs fehlt oder beide gleich sind.
    pub fn move_before(order: &mut Vec<String>, moving_id: &str, anchor_id: &str) -> bool {
        if moving_id == anchor_id {
            return false;
        }
        let Some(from) = order.iter().position(|id| id == moving_id) else {
            return false;
        };
        if !order.iter().any(|id| id == anchor_id) {
            return false;
        }
        let moving = order.remove(from);
        let Some(to) = order.iter().position(|id| id == anchor_id) else {
            return false;
        };
        order.insert(to, moving);
        true
    }

    /// Gleicht eine gestagte Reihenfolge mit der committeten ab.
    ///
    /// IDs, die inzwischen nicht mehr committet sind, entfallen. Neu
    /// hinzugekommene IDs werden in committeter Reihenfolge angehängt.
    pub fn rebase(staged: Vec<String>, committed: &[String]) -> Vec<String> {
        let committed_ids: IndexSet<&str> = committed.iter().map(String::as_str).collect();
        let mut order: Vec<String> = staged
            .into_iter()
            .filter(|id| committed_ids.contains(id.as_str()))
            .collect();
        let staged_ids: IndexSet<String> = order.iter().cloned().collect();
        order.extend(
            committed
                .iter()
                .filter(|id| !staged_ids.contains(id.as_str()))
                .cloned(),
        );
        order
    }

    /// Übernimmt die gestagte Reihenfolge als eine Action und leert den Puffer.
    ///
    /// Änderungen am Modell während der Session bleiben erhalten (siehe
    /// [`Self::rebase`]). Gibt `true` zurück, wenn eine Action aufgezeichnet wurde.
    pub fn commit(
        &mut self,
        page: PageId,
        model: &mut SegmentationModel,
        histories: &mut PageHistories,
    ) -> bool {
        let Some(staged) = self.staged.take() else {
            log::debug!("Lesereihenfolge: keine gestagte Änderung");
            return false;
        };
        if staged.page != page {
            log::warn!(
                "Gestagte Lesereihenfolge gehört zu Seite {}, nicht {}",
                staged.page,
                page
            );
            return false;
        }
        let committed = model.ensure_export_settings(page).reading_order.clone();
        let order = Self::rebase(staged.temp, &committed);
        if order == committed {
            return false;
        }
        let action = ChangeReadingOrder::new(page, order);
        histories.record(page, Box::new(action), model);
        log::info!("Lesereihenfolge für Seite {} übernommen", page);
        true
    }

    /// Verwirft eine laufende Session ohne Änderung am Modell.
    pub fn discard(&mut self) {
        if self.staged.take().is_some() {
            log::debug!("Gestagte Lesereihenfolge verworfen");
        }
    }
}
