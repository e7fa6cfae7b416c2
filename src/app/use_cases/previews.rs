//! Use-Cases für die Erzeugung der Galerie-Vorschaubilder.

use crate::app::AppState;
use crate::core::{generate_previews, HoldTemplateLibrary, PreviewReport, PREVIEW_SIZE};
use crate::shared::EditorOptions;
use std::path::Path;
use std::sync::Arc;

/// Erzeugt alle Vorschaubilder aus den Vorlagen der Optionen.
pub fn generate_from_options(options: &EditorOptions) -> anyhow::Result<PreviewReport> {
    let library = HoldTemplateLibrary::load_from_dir(&options.templates_dir())?;
    Ok(generate_previews(&library, &options.previews_dir()))
}

/// Prüft, ob im Vorschau-Verzeichnis noch keine Vorschaubilder liegen.
pub fn previews_missing(previews_dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(previews_dir) else {
        return true;
    };
    !entries.flatten().any(|entry| {
        crate::core::catalog::variant_name_from_path(&entry.path()).is_some()
    })
}

/// Erzeugt die Vorschaubilder neu und verwirft den gecachten Katalog.
pub fn regenerate(state: &mut AppState) -> anyhow::Result<PreviewReport> {
    let library = HoldTemplateLibrary::load_from_dir(&state.options.templates_dir())?;
    let report = generate_previews(&library, &state.options.previews_dir());

    state.templates = Some(Arc::new(library));
    super::gallery::reload_catalog(state);
    state.ui.status_message = Some(format!(
        "Generated {} previews ({}x{} px), {} failed",
        report.written.len(),
        PREVIEW_SIZE,
        PREVIEW_SIZE,
        report.failed
    ));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_counts_as_missing() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        assert!(previews_missing(&dir.path().join("previews")));
        assert!(previews_missing(dir.path()));

        std::fs::write(dir.path().join("jug_preview.png"), b"x").expect("schreiben");
        assert!(!previews_missing(dir.path()));
    }

    #[test]
    fn regenerate_writes_previews_and_invalidates_catalog() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let templates = dir.path().join("templates");
        std::fs::create_dir_all(&templates).expect("Verzeichnis");
        std::fs::write(
            templates.join("jug.toml"),
            "name = \"jug\"\nradii = [0.2, 0.12, 0.1]\ncolor = [0.9, 0.3, 0.1, 1.0]\n",
        )
        .expect("schreiben");

        let mut options = EditorOptions::default();
        options.asset_root = dir.path().to_path_buf();
        options.wall_grid.columns = 1;
        options.wall_grid.rows = 1;
        let mut state = AppState::with_options(options);

        let report = regenerate(&mut state).expect("Vorschau");
        assert_eq!(report.written.len(), 1);
        assert!(state.options.previews_dir().join("jug_preview.png").exists());
        assert!(!state.gallery.is_loaded());
        assert!(state.templates.as_ref().is_some_and(|t| t.get("jug").is_some()));
    }
}
