//! Command-Log der Benutzeraktionen (ohne Per-Frame-Commands).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu; Per-Frame-Commands werden übersprungen.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if command.is_per_frame() {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_commands_are_not_recorded() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::AdvanceGalleryScroll { dt: 0.016 });
        log.record(&AppCommand::ConfirmGallery);
        assert_eq!(log.len(), 1);
        assert!(matches!(log.entries()[0], AppCommand::ConfirmGallery));
    }

    #[test]
    fn log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..1500 {
            log.record(&AppCommand::ToggleControlPanel);
        }
        assert!(log.len() <= 1000);
    }
}
