//! Handler für Wandaufbau und Vorschaubilder.

use crate::app::use_cases;
use crate::app::AppState;

/// Baut die Wand neu auf.
pub fn regenerate(state: &mut AppState) {
    use_cases::wall::regenerate(state);
}

/// Leert die Wand.
pub fn clear(state: &mut AppState) {
    use_cases::wall::clear(state);
}

/// Erzeugt die Vorschaubilder neu.
pub fn generate_previews(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::previews::regenerate(state)?;
    Ok(())
}
