//! Seitenbezogenes Protokoll ausgeführter Commands.
//!
//! Jeder Eintrag hält fest, auf welcher Seite ein Command ausgeführt wurde.
//! Das Protokoll ist begrenzt; bei Überlauf fällt die ältere Hälfte weg.

use super::EditorCommand;
use crate::core::PageId;

/// Ein protokollierter Command mit der Seite, die beim Ausführen aktuell war.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    /// Aktuelle Seite beim Ausführen
    pub page: PageId,
    /// Der ausgeführte Command
    pub command: EditorCommand,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen Command für die Seite.
    pub fn record(&mut self, page: PageId, command: &EditorCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        log::trace!("Seite {}: {:?}", page, command);
        self.entries.push(LoggedCommand {
            page,
            command: command.clone(),
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge in Ausführungsreihenfolge.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last_command(&self) -> Option<&EditorCommand> {
        self.entries.last().map(|e| &e.command)
    }

    /// Commands, die auf der Seite ausgeführt wurden.
    pub fn for_page(&self, page: PageId) -> impl Iterator<Item = &EditorCommand> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.page == page)
            .map(|e| &e.command)
    }
}
