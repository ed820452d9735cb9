//! Ausgehende Anfragen an die Netzwerk-Gegenseite und Seiten-Tickets.
//!
//! Jede Anfrage trägt das Ticket der Seite, für die sie gestellt wurde.
//! Antworten werden gegen die aktuelle Generation dieser Seite geprüft.

use crate::core::{BookSettings, ExportArtifact, PageId, SegmentationModel, SegmentationStatus};

/// Seite plus Generation zum Zeitpunkt der Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTicket {
    /// Zielseite der Anfrage
    pub page: PageId,
    /// Generation der Seite beim Absenden
    pub generation: u64,
}

impl PageTicket {
    /// Ticket mit der aktuellen Generation (ohne sie zu erhöhen).
    pub fn current(model: &SegmentationModel, page: PageId) -> Self {
        Self {
            page,
            generation: model.generation(page),
        }
    }

    /// Erhöht die Generation der Seite und stellt ein Ticket darauf aus.
    ///
    /// Ältere Tickets dieser Seite werden damit ungültig.
    pub fn bump(model: &mut SegmentationModel, page: PageId) -> Self {
        Self {
            page,
            generation: model.bump_generation(page),
        }
    }

    /// Gibt `true` zurück, wenn die Seite seit der Anfrage nicht neu geladen wurde.
    pub fn is_current(&self, model: &SegmentationModel) -> bool {
        model.generation(self.page) == self.generation
    }
}

/// Anfrage, die der Host an die Netzwerk-Gegenseite weiterreicht.
#[derive(Debug, Clone, PartialEq)]
pub enum OutgoingRequest {
    /// Segmentierung (`segmentBook`) für mehrere Seiten
    Segment {
        /// Ein Ticket pro angefragter Seite
        tickets: Vec<PageTicket>,
        /// Settings inklusive Algorithmus-Parameter
        settings: BookSettings,
    },
    /// Zusammengeführtes Polygon (`requestMergedSegment`)
    Merge {
        /// Zielseite
        ticket: PageTicket,
        /// Bestandteile des Merges
        segment_ids: Vec<String>,
    },
    /// Export vorbereiten
    PrepareExport {
        /// Zielseite
        ticket: PageTicket,
        /// Export-Artefakt
        artifact: ExportArtifact,
        /// PageXML-Version
        page_xml_version: String,
        /// Änderungsstand der Seite beim Absenden
        revision: u64,
    },
    /// Settings-Export vorbereiten (`prepareSettingsExport`)
    PrepareSettingsExport {
        /// Settings mit fixierten Segmenten und Cuts aller Seiten
        settings: BookSettings,
        /// Änderungsstand der Settings beim Absenden
        revision: u64,
    },
}

/// Fehlgeschlagene Seitensegmentierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationFailure {
    /// Betroffene Seite
    pub page: PageId,
    /// Gemeldeter Status
    pub status: SegmentationStatus,
}

/// Ergebnis einer verarbeiteten Segmentierungsantwort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentationReport {
    /// Erfolgreich übernommene Seiten
    pub applied: Vec<PageId>,
    /// Seiten mit Status ungleich SUCCESS
    pub failures: Vec<SegmentationFailure>,
    /// Seiten mit veraltetem oder fehlendem Ticket
    pub rejected: Vec<PageId>,
}

impl SegmentationReport {
    /// Gibt `true` zurück, wenn keine Seite fehlgeschlagen ist.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
