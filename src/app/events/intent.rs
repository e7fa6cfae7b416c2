use crate::core::GridDirection;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Sitzung gestartet (Zeiger fangen)
    SessionStarted,
    /// Anwendung beenden
    ExitRequested,
    /// Kontrollpanel ein-/ausblenden
    ControlPanelToggleRequested,
    /// Optionen-Dialog ein-/ausblenden
    OptionsDialogToggleRequested,
    /// Zeiger fangen (Viewport-Klick) oder freigeben (Cancel außerhalb der Galerie)
    PointerLockRequested { locked: bool },
    /// Physik um `dt` vorrücken; `move_axes` = (rechts, vorwärts) in [-1, 1]
    PhysicsStepRequested { dt: f32, move_axes: glam::Vec2 },
    /// Maus-Delta in Screen-Pixeln
    CameraLookRequested { delta: glam::Vec2 },
    /// Auswahl-Strahl aus der Bildmitte auswerten
    PointerRaycastRequested,
    /// Select-Eingabe auf dem gehoverten Ziel
    SelectHoveredRequested,
    /// Gehoverten Griff löschen
    DeleteHoveredHoldRequested,
    /// Dreh-Drag fortführen (Primär-Taste gedrückt/gehalten)
    HoldDragUpdateRequested {
        primary_pressed: bool,
        primary_down: bool,
        dt: f32,
    },
    /// Galerie-Auswahl per Pfeiltaste bewegen
    GalleryNavigateRequested { direction: GridDirection },
    /// Galerie-Zelle angeklickt
    GalleryEntryClicked { index: usize },
    /// Galerie-Auswahl bestätigen (Griff setzen)
    GalleryConfirmRequested,
    /// Galerie schließen
    GalleryCancelRequested,
    /// Galerie-Scroll animieren
    GalleryScrollTick { dt: f32 },
    /// Wand mit aktuellen Raster-Optionen neu aufbauen
    RegenerateWallRequested,
    /// Alle Bohrlöcher und Griffe entfernen
    ClearWallRequested,
    /// Vorschaubilder aus den Vorlagen neu erzeugen
    PreviewGenerationRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
