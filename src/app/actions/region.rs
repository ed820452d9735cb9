//! Actions für Regionen und ihre Polygone.

use super::Action;
use crate::core::{PageId, Point, Polygon, Region, SegmentationModel};

/// Fügt ein Polygon einer Region hinzu (legt die Region bei Bedarf an).
#[derive(Debug)]
pub struct AddRegionPolygon {
    page: PageId,
    region_type: String,
    polygon: Polygon,
    created_region: bool,
    added: bool,
}

impl AddRegionPolygon {
    /// Erstellt die Action; der Polygon-Typ wird auf den Regionstyp gesetzt.
    pub fn new(page: PageId, region_type: impl Into<String>, mut polygon: Polygon) -> Self {
        let region_type = region_type.into();
        polygon.polygon_type = region_type.clone();
        Self {
            page,
            region_type,
            polygon,
            created_region: false,
            added: false,
        }
    }
}

impl Action for AddRegionPolygon {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let has_region = model.ensure_page(self.page).regions.contains_key(&self.region_type);
        self.created_region =
            !has_region && model.insert_region(self.page, Region::new(&self.region_type), None);
        self.added = model.insert_region_polygon(
            self.page,
            &self.region_type,
            self.polygon.clone(),
            None,
        );
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if self.added {
            model.remove_region_polygon(self.page, &self.polygon.id);
        }
        if self.created_region {
            model.remove_region(self.page, &self.region_type);
        }
    }

    fn description(&self) -> &str {
        "Regions-Polygon hinzufügen"
    }
}

/// Entfernt ein einzelnes Regions-Polygon.
#[derive(Debug)]
pub struct RemoveRegionPolygon {
    page: PageId,
    id: String,
    removed: Option<(String, usize, Polygon)>,
}

impl RemoveRegionPolygon {
    /// Erstellt die Action für das Polygon mit der ID.
    pub fn new(page: PageId, id: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            removed: None,
        }
    }
}

impl Action for RemoveRegionPolygon {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.removed = model.remove_region_polygon(self.page, &self.id);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some((region_type, index, polygon)) = self.removed.take() {
            model.insert_region_polygon(self.page, &region_type, polygon, Some(index));
        }
    }

    fn description(&self) -> &str {
        "Regions-Polygon entfernen"
    }
}

/// Ersetzt die Punkte eines Regions-Polygons.
#[derive(Debug)]
pub struct TransformRegionPolygon {
    page: PageId,
    id: String,
    points: Vec<Point>,
    previous: Option<Vec<Point>>,
}

impl TransformRegionPolygon {
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

impl Action for TransformRegionPolygon {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let old = model
            .page(self.page)
            .and_then(|p| p.find_region_polygon(&self.id))
            .map(|p| p.points.clone());
        self.previous = match old {
            Some(old) if model.set_region_polygon_points(self.page, &self.id, &self.points) => {
                Some(old)
            }
            _ => None,
        };
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some(old) = self.previous.take() {
            model.set_region_polygon_points(self.page, &self.id, &old);
        }
    }

    fn description(&self) -> &str {
        "Regions-Polygon transformieren"
    }
}

/// Verschiebt ein Regions-Polygon in die Region eines anderen Typs.
#[derive(Debug)]
pub struct ChangeRegionPolygonType {
    page: PageId,
    id: String,
    new_type: String,
    removed: Option<(String, usize, Polygon)>,
    created_region: bool,
}

impl ChangeRegionPolygonType {
    /// Erstellt die Action für einen Typwechsel.
    pub fn new(page: PageId, id: impl Into<String>, new_type: impl Into<String>) -> Self {
        Self {
            page,
            id: id.into(),
            new_type: new_type.into(),
            removed: None,
            created_region: false,
        }
    }
}

impl Action for ChangeRegionPolygonType {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.created_region = false;
        self.removed = model.remove_region_polygon(self.page, &self.id);
        let Some((_, _, polygon)) = &self.removed else {
            return;
        };

        let mut moved = polygon.clone();
        moved.polygon_type = self.new_type.clone();
        let has_region = model.ensure_page(self.page).regions.contains_key(&self.new_type);
        if !has_region {
            self.created_region =
                model.insert_region(self.page, Region::new(&self.new_type), None);
        }
        model.insert_region_polygon(self.page, &self.new_type, moved, None);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        let Some((region_type, index, polygon)) = self.removed.take() else {
            return;
        };
        model.remove_region_polygon(self.page, &self.id);
        if self.created_region {
            model.remove_region(self.page, &self.new_type);
        }
        model.insert_region_polygon(self.page, &region_type, polygon, Some(index));
    }

    fn description(&self) -> &str {
        "Regionstyp ändern"
    }
}

/// Entfernt eine komplette Region samt aller Polygone.
#[derive(Debug)]
pub struct RemoveCompleteRegion {
    page: PageId,
    region_type: String,
    removed: Option<(usize, Region)>,
}

impl RemoveCompleteRegion {
    /// Erstellt die Action für den Regionstyp.
    pub fn new(page: PageId, region_type: impl Into<String>) -> Self {
        Self {
            page,
            region_type: region_type.into(),
            removed: None,
        }
    }
}

impl Action for RemoveCompleteRegion {
    fn execute(&mut self, model: &mut SegmentationModel) {
        self.removed = model.remove_region(self.page, &self.region_type);
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if let Some((index, region)) = self.removed.take() {
            model.insert_region(self.page, region, Some(index));
        }
    }

    fn description(&self) -> &str {
        "Region entfernen"
    }
}

/// Ändert Mindestgröße und maximale Vorkommen einer Region.
#[derive(Debug)]
pub struct ChangeRegionSettings {
    page: PageId,
    region_type: String,
    min_size: f64,
    max_occurrences: i32,
    previous: Option<(f64, i32)>,
    created_region: bool,
}

impl ChangeRegionSettings {
    /// Erstellt die Action mit den neuen Beschränkungen.
    pub fn new(
        page: PageId,
        region_type: impl Into<String>,
        min_size: f64,
        max_occurrences: i32,
    ) -> Self {
        Self {
            page,
            region_type: region_type.into(),
            min_size,
            max_occurrences,
            previous: None,
            created_region: false,
        }
    }
}

impl Action for ChangeRegionSettings {
    fn execute(&mut self, model: &mut SegmentationModel) {
        let has_region = model.ensure_page(self.page).regions.contains_key(&self.region_type);
        self.created_region =
            !has_region && model.insert_region(self.page, Region::new(&self.region_type), None);
        self.previous = model.region_mut(self.page, &self.region_type).map(|region| {
            let previous = (region.min_size, region.max_occurrences);
            region.min_size = self.min_size;
            region.max_occurrences = self.max_occurrences;
            previous
        });
    }

    fn undo(&mut self, model: &mut SegmentationModel) {
        if self.created_region {
            model.remove_region(self.page, &self.region_type);
            return;
        }
        if let Some((min_size, max_occurrences)) = self.previous.take() {
            if let Some(region) = model.region_mut(self.page, &self.region_type) {
                region.min_size = min_size;
                region.max_occurrences = max_occurrences;
            }
        }
    }

    fn description(&self) -> &str {
        "Regionseinstellungen ändern"
    }
}
