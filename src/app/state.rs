//! Application State: zentrale Datenhaltung.

mod gallery;
mod selector;
mod ui;
mod view;

pub use gallery::{GalleryCell, GalleryColors, GalleryLayout, GalleryScroll, GalleryState};
pub use selector::{HoverTransition, PointerSelector};
pub use ui::UiState;
pub use view::ViewState;

use super::events::AppEffect;
use super::use_cases;
use super::CommandLog;
use crate::core::{HoldTemplateLibrary, Scene, TargetId};
use crate::shared::EditorOptions;
use glam::Vec3;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Raum, Bohrlöcher, Griffe und Material-Instanzen
    pub scene: Scene,
    /// Kamera und Physik-Takt
    pub view: ViewState,
    /// Aktuell gehovertes Ziel
    pub selector: PointerSelector,
    /// Griff-Galerie
    pub gallery: GalleryState,
    /// Griff-Vorlagen (beim ersten Öffnen der Galerie geladen)
    pub templates: Option<Arc<HoldTemplateLibrary>>,
    /// HUD-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Gesammelte Host-Aufträge des laufenden Ticks
    pub pending_effects: Vec<AppEffect>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt Raum und Wand aus den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self {
            scene: use_cases::wall::build_scene(&options),
            view: ViewState::new(Vec3::from_array(options.camera_start_position)),
            selector: PointerSelector::new(),
            gallery: GalleryState::new(),
            templates: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            pending_effects: Vec::new(),
            should_exit: false,
        };
        use_cases::wall::regenerate(&mut state);
        state
    }

    /// Merkt einen Host-Auftrag für das Ende des Ticks vor.
    pub fn push_effect(&mut self, effect: AppEffect) {
        self.pending_effects.push(effect);
    }

    /// Entnimmt alle gesammelten Host-Aufträge.
    pub fn take_effects(&mut self) -> Vec<AppEffect> {
        std::mem::take(&mut self.pending_effects)
    }

    /// Gibt die Anzahl platzierter Griffe zurück (für UI-Anzeige)
    pub fn hold_count(&self) -> usize {
        self.scene.hold_count()
    }

    /// Anzeigename des gehoverten Ziels.
    pub fn hovered_name(&self) -> Option<String> {
        self.selector
            .hovered()
            .and_then(|target| self.scene.target_name(target))
    }

    /// Gehoverter Griff, falls das Ziel ein Griff ist.
    pub fn hovered_hold(&self) -> Option<crate::core::HoldId> {
        match self.selector.hovered() {
            Some(TargetId::Hold(id)) => Some(id),
            _ => None,
        }
    }

    pub fn gallery_colors(&self) -> GalleryColors {
        GalleryColors {
            normal: self.options.gallery_cell_color,
            selected: self.options.gallery_cell_selected_color,
        }
    }

    pub fn gallery_layout(&self) -> GalleryLayout {
        GalleryLayout {
            columns: self.options.gallery_columns.max(1),
            item_size: self.options.gallery_item_size,
            spacing: self.options.gallery_spacing,
            viewport_height: self.options.gallery_viewport_height,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
