use crate::core::PolygonKind;
use indexmap::IndexSet;

/// Gemeinsamer Typ aller selektierten Polygone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionType {
    /// Nichts selektiert
    #[default]
    None,
    /// Regions-Polygone
    Region,
    /// Fixierte oder Ergebnis-Segmente
    Segment,
    /// Cuts
    Cut,
}

impl From<PolygonKind> for SelectionType {
    fn from(kind: PolygonKind) -> Self {
        match kind {
            PolygonKind::Fixed | PolygonKind::Result => SelectionType::Segment,
            PolygonKind::Region => SelectionType::Region,
            PolygonKind::Cut => SelectionType::Cut,
        }
    }
}

/// Auswahlbezogener Zustand: geordnete IDs ohne Duplikate plus gemeinsamer Typ.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected_ids: IndexSet<String>,
    selection_type: SelectionType,
}

impl SelectionSet {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schaltet die Selektion einer ID um.
    ///
    /// Ohne Mehrfachauswahl oder bei abweichendem Typ wird vorher geleert,
    /// danach wird `id` hinzugefügt bzw. entfernt. Gibt die abgewählten IDs zurück.
    pub fn toggle(&mut self, id: &str, selection_type: SelectionType, multi_select: bool) -> Vec<String> {
        let mut deselected = Vec::new();
        if !multi_select || selection_type != self.selection_type {
            deselected = self.clear();
        }

        if !self.selected_ids.shift_remove(id) {
            self.selected_ids.insert(id.to_string());
        } else {
            deselected.push(id.to_string());
        }
        self.update_type(selection_type);
        deselected
    }

    /// Selektiert die übergebenen IDs eines Rechtecks.
    ///
    /// Nur segmentartige IDs (fixiert/Ergebnis) qualifizieren; Regionen und
    /// Cuts werden ausgelassen. Gibt die abgewählten IDs zurück.
    pub fn select_rect<'a, F>(
        &mut self,
        ids: impl IntoIterator<Item = &'a str>,
        resolve: F,
        multi_select: bool,
    ) -> Vec<String>
    where
        F: Fn(&str) -> Option<PolygonKind>,
    {
        let mut deselected = Vec::new();
        if !multi_select || self.selection_type != SelectionType::Segment {
            deselected = self.clear();
        }
        for id in ids {
            if !resolve(id).is_some_and(PolygonKind::is_segment) {
                continue;
            }
            if self.selected_ids.shift_remove(id) {
                deselected.push(id.to_string());
            } else {
                self.selected_ids.insert(id.to_string());
            }
        }
        self.update_type(SelectionType::Segment);
        deselected
    }

    /// Leert die Selektion und gibt die bisher selektierten IDs zurück.
    pub fn clear(&mut self) -> Vec<String> {
        self.selection_type = SelectionType::None;
        self.selected_ids.drain(..).collect()
    }

    /// Gibt `true` zurück, wenn die ID selektiert ist.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Selektierte IDs in Auswahlreihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected_ids.iter().map(String::as_str)
    }

    /// Gemeinsamer Typ der Selektion.
    pub fn selection_type(&self) -> SelectionType {
        self.selection_type
    }

    fn update_type(&mut self, selection_type: SelectionType) {
        self.selection_type = if self.selected_ids.is_empty() {
            SelectionType::None
        } else {
            selection_type
        };
    }
}
