//! Selectable-Vertrag: Hover-Enter, Hover-Exit und Select.

use super::material::{MaterialStore, Rgba};
use serde::{Deserialize, Serialize};

/// Identität eines Bohrlochs (Anker)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u64);

/// Identität eines platzierten Griffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HoldId(pub u64);

/// Verweis auf ein auswählbares Ziel in der Szene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    Anchor(AnchorId),
    Hold(HoldId),
}

impl TargetId {
    /// Layer, auf dem das Ziel liegt.
    pub fn layer(self) -> LayerMask {
        match self {
            TargetId::Anchor(_) => LayerMask::ANCHORS,
            TargetId::Hold(_) => LayerMask::HOLDS,
        }
    }
}

/// Bitmaske der Selektions-Layer für den Raycast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ANCHORS: LayerMask = LayerMask(1);
    pub const HOLDS: LayerMask = LayerMask(1 << 1);
    pub const ALL: LayerMask = LayerMask(Self::ANCHORS.0 | Self::HOLDS.0);

    /// Prüft, ob alle Bits von `other` gesetzt sind.
    pub fn contains(self, other: LayerMask) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Sichtbarer Zustand eines Ziels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Idle,
    Hovered,
    Selected,
}

/// Hervorhebungsfarben eines Ziels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetColors {
    /// Farbe im Hover-Zustand
    pub hover: Rgba,
    /// Farbe im Selected-Zustand
    pub selected: Rgba,
}

/// Folgeaktion eines Select-Aufrufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Keine Folgeaktion
    None,
    /// Galerie für dieses Bohrloch öffnen
    OpenGallery { anchor: AnchorId },
    /// Galerie schließen (Bohrloch wurde abgewählt)
    CloseGallery,
    /// Griff entfernen und Galerie für sein Bohrloch öffnen
    ReplaceHold { hold: HoldId, anchor: AnchorId },
}

/// Gemeinsamer Vertrag aller auswählbaren Szenen-Objekte.
///
/// Die Material-Instanz gehört dem Ziel selbst; der Store wird nur durchgereicht.
pub trait Selectable {
    /// Zeiger (Fadenkreuz) liegt ab jetzt auf dem Ziel.
    fn on_hover_enter(&mut self, materials: &mut MaterialStore);
    /// Zeiger hat das Ziel verlassen.
    fn on_hover_exit(&mut self, materials: &mut MaterialStore);
    /// Auswahl-Eingabe, während das Ziel gehovert ist.
    fn on_select(&mut self, materials: &mut MaterialStore) -> SelectOutcome;
}
