//! Zentrale Konfiguration für den Climbing Gym Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{LayerMask, RoomDimensions, RotationSettings, TargetColors, WallGridSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Kamera ──────────────────────────────────────────────────────────

/// Bewegungsgeschwindigkeit in Welteinheiten pro Sekunde.
pub const CAMERA_MOVE_SPEED: f32 = 5.0;
/// Maus-Empfindlichkeit in Grad pro Pixel.
pub const CAMERA_LOOK_SENSITIVITY: f32 = 0.2;
/// Radius der Kollisionskugel der Kamera.
pub const CAMERA_COLLISION_RADIUS: f32 = 0.5;
/// Fester Physik-Zeitschritt in Sekunden (50 Hz).
pub const PHYSICS_FIXED_DT: f32 = 0.02;
/// Startposition der Kamera (Augenhöhe, Raummitte).
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 1.7, 5.0];
/// Vertikales Sichtfeld in Grad.
pub const CAMERA_FOV_DEG: f32 = 70.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Maximale Reichweite des Auswahl-Strahls.
pub const SELECTION_MAX_DISTANCE: f32 = 100.0;
/// Radius der Auswahl-Kugel eines Bohrlochs.
pub const BOLT_HOLE_RADIUS: f32 = 0.12;
/// Hover-Farbe der Bohrlöcher (RGBA: Gelb).
pub const BOLT_HOLE_HOVER_COLOR: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
/// Selected-Farbe der Bohrlöcher (RGBA: Grün).
pub const BOLT_HOLE_SELECTED_COLOR: [f32; 4] = [0.2, 0.9, 0.3, 1.0];
/// Grundfarbe der Bohrlöcher (RGBA: Dunkelgrau).
pub const BOLT_HOLE_COLOR: [f32; 4] = [0.25, 0.25, 0.28, 1.0];
/// Hervorhebung platzierter Griffe (RGBA: Gold).
pub const HOLD_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.8, 0.0, 1.0];

// ── Wand ────────────────────────────────────────────────────────────

/// Spalten des Bohrloch-Rasters.
pub const WALL_GRID_COLUMNS: u32 = 20;
/// Zeilen des Bohrloch-Rasters.
pub const WALL_GRID_ROWS: u32 = 30;
/// Randabstand des Rasters zu den Wandkanten.
pub const WALL_PADDING: f32 = 1.0;
/// Versatz der Bohrlöcher von der Wand-Rückseite.
pub const WALL_BOLT_DEPTH: f32 = 0.13;

// ── Raum ────────────────────────────────────────────────────────────

/// Raumabmessungen (Breite, Höhe, Tiefe).
pub const ROOM_DIMENSIONS: [f32; 3] = [20.0, 15.0, 20.0];
/// Farbe des Bodens.
pub const FLOOR_COLOR: [f32; 4] = [0.35, 0.33, 0.30, 1.0];
/// Farbe der Wände.
pub const WALL_COLOR: [f32; 4] = [0.78, 0.74, 0.66, 1.0];
/// Farbe der Decke.
pub const CEILING_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

// ── Galerie ─────────────────────────────────────────────────────────

/// Spalten des Galerie-Rasters.
pub const GALLERY_COLUMNS: usize = 4;
/// Kantenlänge einer Galerie-Zelle in Pixeln.
pub const GALLERY_ITEM_SIZE: f32 = 100.0;
/// Abstand zwischen Galerie-Zellen in Pixeln.
pub const GALLERY_SPACING: f32 = 10.0;
/// Sichtbare Höhe des Galerie-Viewports in Pixeln.
pub const GALLERY_VIEWPORT_HEIGHT: f32 = 330.0;
/// Scroll-Geschwindigkeit (1/s).
pub const GALLERY_SCROLL_SPEED: f32 = 10.0;
/// Hintergrund normaler Zellen.
pub const GALLERY_CELL_COLOR: [f32; 4] = [0.18, 0.18, 0.2, 1.0];
/// Hintergrund der ausgewählten Zelle.
pub const GALLERY_CELL_SELECTED_COLOR: [f32; 4] = [0.2, 0.55, 0.9, 1.0];

// ── Griffe ──────────────────────────────────────────────────────────

/// Grad Griff-Drehung pro Grad Kamera-Neigung.
pub const HOLD_ROTATION_MULTIPLIER: f32 = 8.0;
/// Glättung der Griff-Drehung (1/s).
pub const HOLD_ROTATION_SMOOTH_SPEED: f32 = 10.0;
/// Versatz eines neuen Griffs relativ zum Bohrloch.
pub const HOLD_SPAWN_OFFSET: [f32; 3] = [0.0, 0.0, 0.05];
/// Start-Rotation eines neuen Griffs (Euler, Grad).
pub const HOLD_SPAWN_ROTATION_DEG: [f32; 3] = [0.0, 0.0, 0.0];

// ── Umgebung ────────────────────────────────────────────────────────

/// Hintergrund-/Himmelsfarbe.
pub const BACKGROUND_COLOR: [f32; 4] = [0.53, 0.62, 0.72, 1.0];
/// Nebel-Beginn (Distanz).
pub const FOG_START: f32 = 15.0;
/// Nebel-Ende (Distanz).
pub const FOG_END: f32 = 50.0;

// ── Assets ──────────────────────────────────────────────────────────

/// Wurzelverzeichnis der Griff-Assets.
pub const ASSET_ROOT: &str = "assets/holds";

/// Tastenbelegung; Namen werden mit `egui::Key::from_name` aufgelöst.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    /// Auswahl des gehoverten Ziels
    pub select: String,
    /// Galerie schließen
    pub cancel: String,
    /// Galerie-Auswahl bestätigen
    pub confirm: String,
    /// Gehoverten Griff löschen (mehrere Tasten möglich)
    pub delete: Vec<String>,
    /// Kontrollpanel ein-/ausblenden
    pub menu_toggle: String,
    pub navigate_up: String,
    pub navigate_down: String,
    pub navigate_left: String,
    pub navigate_right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "W".into(),
            backward: "S".into(),
            left: "A".into(),
            right: "D".into(),
            select: "E".into(),
            cancel: "Escape".into(),
            confirm: "Enter".into(),
            delete: vec!["Delete".into(), "Backspace".into()],
            menu_toggle: "Tab".into(),
            navigate_up: "ArrowUp".into(),
            navigate_down: "ArrowDown".into(),
            navigate_left: "ArrowLeft".into(),
            navigate_right: "ArrowRight".into(),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `climbing_gym_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Bewegungsgeschwindigkeit (Einheiten/s)
    pub move_speed: f32,
    /// Maus-Empfindlichkeit (Grad/Pixel)
    pub look_sensitivity: f32,
    /// Radius der Kollisionskugel
    pub collision_radius: f32,
    /// Fester Physik-Zeitschritt (s)
    pub fixed_dt: f32,
    /// Startposition der Kamera
    pub camera_start_position: [f32; 3],
    /// Vertikales Sichtfeld (Grad)
    #[serde(default = "default_camera_fov_deg")]
    pub camera_fov_deg: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Reichweite des Auswahl-Strahls
    pub max_selection_distance: f32,
    /// Layer, die der Auswahl-Strahl trifft
    #[serde(default)]
    pub selection_mask: LayerMask,
    /// Auswahl-Radius eines Bohrlochs
    pub bolt_hole_radius: f32,
    /// Grundfarbe der Bohrlöcher
    pub bolt_hole_color: [f32; 4],
    /// Hover-Farbe der Bohrlöcher
    pub hover_color: [f32; 4],
    /// Selected-Farbe der Bohrlöcher
    pub selected_color: [f32; 4],
    /// Hervorhebung platzierter Griffe
    pub hold_highlight_color: [f32; 4],

    // ── Wand ────────────────────────────────────────────────────
    pub wall_grid: WallGridSettings,

    // ── Raum ────────────────────────────────────────────────────
    pub room: RoomDimensions,
    pub floor_color: [f32; 4],
    pub wall_color: [f32; 4],
    pub ceiling_color: [f32; 4],

    // ── Galerie ─────────────────────────────────────────────────
    /// Spalten des Galerie-Rasters
    pub gallery_columns: usize,
    /// Zellgröße (px)
    pub gallery_item_size: f32,
    /// Zellabstand (px)
    pub gallery_spacing: f32,
    /// Sichtbare Höhe des Galerie-Viewports (px)
    pub gallery_viewport_height: f32,
    /// Scroll-Geschwindigkeit (1/s)
    pub gallery_scroll_speed: f32,
    pub gallery_cell_color: [f32; 4],
    pub gallery_cell_selected_color: [f32; 4],

    // ── Griffe ──────────────────────────────────────────────────
    /// Grad Griff-Drehung pro Grad Kamera-Neigung
    pub rotation_multiplier: f32,
    /// Glättung der Griff-Drehung (1/s)
    pub rotation_smooth_speed: f32,
    /// Versatz neuer Griffe relativ zum Bohrloch
    pub spawn_offset: [f32; 3],
    /// Start-Rotation neuer Griffe (Grad)
    pub spawn_rotation_deg: [f32; 3],

    // ── Umgebung ────────────────────────────────────────────────
    pub background_color: [f32; 4],
    pub fog_start: f32,
    pub fog_end: f32,

    // ── Assets & Eingabe ────────────────────────────────────────
    /// Wurzel mit `previews/` und `templates/`
    pub asset_root: PathBuf,
    #[serde(default)]
    pub key_bindings: KeyBindings,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            move_speed: CAMERA_MOVE_SPEED,
            look_sensitivity: CAMERA_LOOK_SENSITIVITY,
            collision_radius: CAMERA_COLLISION_RADIUS,
            fixed_dt: PHYSICS_FIXED_DT,
            camera_start_position: CAMERA_START_POSITION,
            camera_fov_deg: CAMERA_FOV_DEG,

            max_selection_distance: SELECTION_MAX_DISTANCE,
            selection_mask: LayerMask::ALL,
            bolt_hole_radius: BOLT_HOLE_RADIUS,
            bolt_hole_color: BOLT_HOLE_COLOR,
            hover_color: BOLT_HOLE_HOVER_COLOR,
            selected_color: BOLT_HOLE_SELECTED_COLOR,
            hold_highlight_color: HOLD_HIGHLIGHT_COLOR,

            wall_grid: WallGridSettings {
                columns: WALL_GRID_COLUMNS,
                rows: WALL_GRID_ROWS,
                padding: WALL_PADDING,
                bolt_depth: WALL_BOLT_DEPTH,
            },

            room: RoomDimensions {
                width: ROOM_DIMENSIONS[0],
                height: ROOM_DIMENSIONS[1],
                depth: ROOM_DIMENSIONS[2],
            },
            floor_color: FLOOR_COLOR,
            wall_color: WALL_COLOR,
            ceiling_color: CEILING_COLOR,

            gallery_columns: GALLERY_COLUMNS,
            gallery_item_size: GALLERY_ITEM_SIZE,
            gallery_spacing: GALLERY_SPACING,
            gallery_viewport_height: GALLERY_VIEWPORT_HEIGHT,
            gallery_scroll_speed: GALLERY_SCROLL_SPEED,
            gallery_cell_color: GALLERY_CELL_COLOR,
            gallery_cell_selected_color: GALLERY_CELL_SELECTED_COLOR,

            rotation_multiplier: HOLD_ROTATION_MULTIPLIER,
            rotation_smooth_speed: HOLD_ROTATION_SMOOTH_SPEED,
            spawn_offset: HOLD_SPAWN_OFFSET,
            spawn_rotation_deg: HOLD_SPAWN_ROTATION_DEG,

            background_color: BACKGROUND_COLOR,
            fog_start: FOG_START,
            fog_end: FOG_END,

            asset_root: PathBuf::from(ASSET_ROOT),
            key_bindings: KeyBindings::default(),
        }
    }
}

/// Serde-Default für `camera_fov_deg` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_camera_fov_deg() -> f32 {
    CAMERA_FOV_DEG
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
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
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("climbing_gym_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("climbing_gym_editor.toml")
    }

    /// Verzeichnis der Vorschaubilder.
    pub fn previews_dir(&self) -> PathBuf {
        self.asset_root.join("previews")
    }

    /// Verzeichnis der Griff-Vorlagen.
    pub fn templates_dir(&self) -> PathBuf {
        self.asset_root.join("templates")
    }

    pub fn target_colors(&self) -> TargetColors {
        TargetColors {
            hover: self.hover_color,
            selected: self.selected_color,
        }
    }

    pub fn rotation_settings(&self) -> RotationSettings {
        RotationSettings {
            multiplier: self.rotation_multiplier,
            smooth_speed: self.rotation_smooth_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut options = EditorOptions::default();
        options.gallery_columns = 3;
        options.key_bindings.select = "F".into();

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let options = EditorOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("kaputt.toml");
        std::fs::write(&path, "move_speed = \"schnell\"").expect("schreiben");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("opts.toml");
        let mut options = EditorOptions::default();
        options.fog_end = 80.0;
        options.save_to_file(&path).expect("speichern");
        assert_eq!(EditorOptions::load_from_file(&path), options);
    }

    #[test]
    fn asset_dirs_derive_from_root() {
        let options = EditorOptions::default();
        assert_eq!(options.previews_dir(), Path::new("assets/holds/previews"));
        assert_eq!(options.templates_dir(), Path::new("assets/holds/templates"));
    }
}
