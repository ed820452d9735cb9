//! Zentrale Konfiguration des Segmentierungs-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Export ──────────────────────────────────────────────────────────

/// Standard-Version des PageXML-Exports.
pub const PAGE_XML_VERSION: &str = "2010-03-19";

// ── Erstellung ─────────────────────────────────────────────────────

/// Regionstyp, wenn noch kein Regionstyp vorhanden ist.
pub const DEFAULT_REGION_TYPE: &str = "other";
/// Präfix für IDs vom Nutzer erstellter Polygone.
pub const CREATED_ID_PREFIX: &str = "created";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `segmentation_editor.toml` neben der Binary des Hosts gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Export ──────────────────────────────────────────────────
    /// PageXML-Version für Export-Anfragen
    pub page_xml_version: String,

    // ── Erstellung ──────────────────────────────────────────────
    /// Regionstyp für neue Polygone, wenn kein Typ vorhanden ist
    pub default_region_type: String,
    /// Präfix für IDs neu erstellter Polygone
    pub created_id_prefix: String,

    // ── Selektion ───────────────────────────────────────────────
    /// Mehrfachauswahl beim Start aktiv
    pub multi_select: bool,

    // ── Lesereihenfolge ─────────────────────────────────────────
    /// Segmenttypen ohne Platz in der Lesereihenfolge
    pub reading_order_excluded_types: Vec<String>,

    // ── Regionen ────────────────────────────────────────────────
    /// Regionstypen, die nicht vollständig gelöscht werden dürfen
    pub protected_region_types: Vec<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            page_xml_version: PAGE_XML_VERSION.to_string(),
            default_region_type: DEFAULT_REGION_TYPE.to_string(),
            created_id_prefix: CREATED_ID_PREFIX.to_string(),
            multi_select: false,
            reading_order_excluded_types: vec!["image".to_string()],
            protected_region_types: vec!["image".to_string(), "paragraph".to_string()],
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Gibt `true` zurück, wenn der Regionstyp nicht komplett gelöscht werden darf.
    pub fn is_protected_region(&self, region_type: &str) -> bool {
        self.protected_region_types.iter().any(|t| t == region_type)
    }
}
