use crate::core::{AnchorId, HoldId};

/// Aufträge an den Host, gesammelt während eines Ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEffect {
    /// Zeiger fangen (true) oder freigeben (false)
    SetPointerLock { locked: bool },
    /// Griff wurde gesetzt
    HoldSpawned {
        hold: HoldId,
        anchor: AnchorId,
        variant: String,
    },
    /// Griff wurde entfernt
    HoldRemoved { hold: HoldId, anchor: AnchorId },
    /// Galerie geöffnet (Anzeigename des Bohrlochs)
    GalleryOpened { anchor_name: String },
    GalleryClosed,
    /// Fenster schließen
    ExitRequested,
}
