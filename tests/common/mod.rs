//! Gemeinsame Fixtures für Integrationstests: Asset-Verzeichnis, Zielen, Ticks.
#![allow(dead_code)]

use climbing_gym_editor::app::use_cases;
use climbing_gym_editor::core::preview::write_preview;
use climbing_gym_editor::{
    AnchorId, AppController, AppEffect, AppState, EditorOptions, FrameInput, HoldTemplate,
    TargetId,
};
use glam::Vec3;
use tempfile::TempDir;

pub const DT: f32 = 1.0 / 60.0;

/// AppState mit eigenem Asset-Verzeichnis (Vorlagen + Vorschaubilder).
pub struct TestWorld {
    _assets: TempDir,
    pub state: AppState,
    pub controller: AppController,
}

/// Vorlage mit Standard-Geometrie.
pub fn template(name: &str) -> HoldTemplate {
    HoldTemplate {
        name: name.to_string(),
        radii: [0.1, 0.08, 0.05],
        color: [0.8, 0.3, 0.2, 1.0],
        collider_radius: None,
    }
}

/// Baut eine Welt mit 3×2 Bohrlöchern.
///
/// `templates` bekommen Vorlage und Vorschaubild, `orphans` nur ein Vorschaubild.
pub fn world(templates: &[&str], orphans: &[&str], columns: usize) -> TestWorld {
    let assets = tempfile::tempdir().expect("Temp-Verzeichnis");

    let mut options = EditorOptions::default();
    options.asset_root = assets.path().to_path_buf();
    options.wall_grid.columns = 3;
    options.wall_grid.rows = 2;
    options.gallery_columns = columns;

    let templates_dir = options.templates_dir();
    std::fs::create_dir_all(&templates_dir).expect("Vorlagen-Verzeichnis");
    for name in templates {
        let content = toml::to_string(&template(name)).expect("Vorlage serialisieren");
        std::fs::write(templates_dir.join(format!("{name}.toml")), content)
            .expect("Vorlage schreiben");
    }

    let report =
        use_cases::previews::generate_from_options(&options).expect("Vorschaubilder erzeugen");
    assert_eq!(report.written.len(), templates.len());
    for name in orphans {
        write_preview(&template(name), &options.previews_dir()).expect("Vorschaubild schreiben");
    }

    TestWorld {
        _assets: assets,
        state: AppState::with_options(options),
        controller: AppController::new(),
    }
}

impl TestWorld {
    /// Richtet die Kamera exakt auf einen Punkt aus.
    pub fn aim_at(&mut self, target: Vec3) {
        let camera = &mut self.state.view.camera;
        let dir = (target - camera.position).normalize();
        camera.yaw_deg = dir.x.atan2(-dir.z).to_degrees();
        camera.pitch_deg = (-dir.y).asin().to_degrees();
    }

    /// Richtet die Kamera auf ein Bohrloch aus.
    pub fn aim_at_anchor(&mut self, anchor: AnchorId) {
        let position = self
            .state
            .scene
            .anchor(anchor)
            .expect("Bohrloch existiert")
            .position();
        self.aim_at(position);
    }

    /// Bohrloch nach Index in Generierungs-Reihenfolge.
    pub fn anchor_at(&self, index: usize) -> AnchorId {
        self.state
            .scene
            .anchors()
            .nth(index)
            .expect("Wand hat genug Bohrlöcher")
            .id()
    }

    pub fn tick(&mut self, input: FrameInput) -> Vec<AppEffect> {
        self.controller
            .tick(&mut self.state, &input, DT)
            .expect("Tick muss funktionieren")
    }

    /// Ein Frame ohne Eingabe.
    pub fn idle(&mut self) -> Vec<AppEffect> {
        self.tick(FrameInput::default())
    }

    /// Zielt auf das Bohrloch und drückt Select.
    pub fn open_gallery_at(&mut self, anchor: AnchorId) -> Vec<AppEffect> {
        self.aim_at_anchor(anchor);
        self.tick(FrameInput {
            select_pressed: true,
            ..Default::default()
        })
    }

    /// Bestätigt die Galerie-Auswahl per Eingabe.
    pub fn confirm(&mut self) -> Vec<AppEffect> {
        self.tick(FrameInput {
            confirm_pressed: true,
            ..Default::default()
        })
    }

    pub fn hovered(&self) -> Option<TargetId> {
        self.state.selector.hovered()
    }
}
