//! Seitenzustand: fixierte Segmente, Ergebnis-Segmente, Cuts und Regionen.

use super::{BookSettings, Cut, Polygon, Region, IGNORE_REGION_TYPE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Seitennummer (0-basiert).
pub type PageId = u32;

/// Vollständiger Bearbeitungszustand einer Seite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    /// Vom Nutzer erstellte/bestätigte Segmente (strukturell löschbar)
    pub fixed_segments: IndexMap<String, Polygon>,
    /// Vom Segmentierungsalgorithmus erzeugte Segmente (nur ausblendbar)
    pub result_segments: IndexMap<String, Polygon>,
    /// Manuelle Schnitte
    pub cuts: IndexMap<String, Cut>,
    /// Regionen nach Regionstyp
    pub regions: IndexMap<String, Region>,
}

impl PageState {
    /// Baut den Seitenzustand aus der Settings-Vorlage und dem Segmentierungsergebnis auf.
    pub fn from_template(
        settings: &BookSettings,
        page: PageId,
        result_segments: IndexMap<String, Polygon>,
    ) -> Self {
        let page_settings = settings.pages.get(&page);
        Self {
            fixed_segments: page_settings
                .map(|p| p.segments.clone())
                .unwrap_or_default(),
            result_segments,
            cuts: page_settings.map(|p| p.cuts.clone()).unwrap_or_default(),
            regions: settings.regions.clone(),
        }
    }

    /// Sucht ein Regions-Polygon über alle Regionen hinweg.
    pub fn find_region_polygon(&self, id: &str) -> Option<&Polygon> {
        self.regions.values().find_map(|r| r.polygons.get(id))
    }

    /// Gibt den Regionstyp zurück, der das Polygon mit dieser ID besitzt.
    pub fn region_type_of(&self, id: &str) -> Option<&str> {
        self.regions
            .values()
            .find(|r| r.polygons.contains_key(id))
            .map(|r| r.region_type.as_str())
    }

    /// Iterator über alle Regionstypen außer dem reservierten Ignore-Typ.
    pub fn visible_region_types(&self) -> impl Iterator<Item = &str> {
        self.regions
            .keys()
            .map(String::as_str)
            .filter(|t| *t != IGNORE_REGION_TYPE)
    }
}
