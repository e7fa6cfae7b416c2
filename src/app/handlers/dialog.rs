//! Handler für Optionen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    use_cases::session::request_exit(state);
}

/// Fängt oder gibt den Zeiger frei.
pub fn set_pointer_lock(state: &mut AppState, locked: bool) {
    use_cases::session::set_pointer_lock(state, locked);
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::session::apply_options(state, options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}
