use crate::core::{GridDirection, HoldId, LayerMask, Ray};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zeiger fangen/freigeben
    SetPointerLock { locked: bool },
    /// Anwendung beenden
    RequestExit,
    /// Kontrollpanel umschalten
    ToggleControlPanel,
    /// Optionen-Dialog umschalten
    ToggleOptionsDialog,
    /// Feste Physik-Schritte für `dt` ausführen
    AdvancePhysics { dt: f32, move_axes: glam::Vec2 },
    /// Kamera drehen
    RotateCamera { delta: glam::Vec2 },
    /// Hover-Ziel per Raycast bestimmen
    ResolveHover {
        ray: Ray,
        max_distance: f32,
        mask: LayerMask,
    },
    /// Select auf dem gehoverten Ziel auslösen
    SelectHovered,
    /// Griff löschen
    DeleteHold { hold: HoldId },
    /// Dreh-Drags aktualisieren
    UpdateHoldDrags {
        pitch_deg: f32,
        primary_pressed: bool,
        primary_down: bool,
        dt: f32,
    },
    /// Galerie-Auswahl bewegen
    NavigateGallery { direction: GridDirection },
    /// Galerie-Eintrag auswählen
    SelectGalleryEntry { index: usize },
    /// Galerie-Auswahl als Griff setzen
    ConfirmGallery,
    /// Galerie schließen
    CloseGallery,
    /// Galerie-Scroll um `dt` fortschreiben
    AdvanceGalleryScroll { dt: f32 },
    /// Wand neu aufbauen
    RegenerateWall,
    /// Wand leeren
    ClearWall,
    /// Vorschaubilder erzeugen und Katalog neu laden
    GeneratePreviews,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

impl AppCommand {
    /// Commands, die in jedem Frame laufen (Physik, Look, Raycast, Drag, Scroll).
    pub fn is_per_frame(&self) -> bool {
        matches!(
            self,
            AppCommand::AdvancePhysics { .. }
                | AppCommand::RotateCamera { .. }
                | AppCommand::ResolveHover { .. }
                | AppCommand::UpdateHoldDrags { .. }
                | AppCommand::AdvanceGalleryScroll { .. }
        )
    }
}
