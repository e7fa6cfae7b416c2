//! Bohrloch (Anker): trägt höchstens einen Griff und öffnet bei Auswahl die Galerie.

use super::material::{MaterialHandle, MaterialStore, Rgba};
use super::selectable::{AnchorId, HoldId, Selectable, SelectOutcome, TargetColors, TargetState};
use super::wall::BoltHoleSpec;
use glam::{UVec2, Vec3};

/// Bohrloch auf der Kletterwand
#[derive(Debug, Clone)]
pub struct BoltHole {
    id: AnchorId,
    name: String,
    grid: UVec2,
    position: Vec3,
    occupant: Option<HoldId>,
    colors: TargetColors,
    material: Option<MaterialHandle>,
    default_color: Rgba,
    hovered: bool,
    selected: bool,
}

impl BoltHole {
    /// Erstellt ein Bohrloch ohne Material; `init` klont das Material.
    pub fn new(id: AnchorId, spec: &BoltHoleSpec, colors: TargetColors) -> Self {
        Self {
            id,
            name: spec.name.clone(),
            grid: spec.grid,
            position: spec.position,
            occupant: None,
            colors,
            material: None,
            default_color: [1.0; 4],
            hovered: false,
            selected: false,
        }
    }

    /// Klont das Quell-Material in eine eigene Instanz.
    ///
    /// Fehlt das Quell-Material, bleibt das Bohrloch ohne Material und alle
    /// Hervorhebungen werden zu No-ops.
    pub fn init(&mut self, materials: &mut MaterialStore, source: &str) {
        if self.material.is_some() {
            return;
        }
        let Some(color) = materials.source_color(source) else {
            log::warn!(
                "{}: Quell-Material '{}' fehlt, Hervorhebung deaktiviert",
                self.name,
                source
            );
            return;
        };
        self.default_color = color;
        self.material = materials.instantiate(source);
        self.update_visual(materials);
    }

    /// Gibt die Material-Instanz frei.
    pub fn dispose(&mut self, materials: &mut MaterialStore) {
        if let Some(handle) = self.material.take() {
            materials.release(handle);
        }
    }

    pub fn id(&self) -> AnchorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> UVec2 {
        self.grid
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Griff auf diesem Bohrloch.
    pub fn occupant(&self) -> Option<HoldId> {
        self.occupant
    }

    /// Unbesetzte Bohrlöcher sind sichtbar und auswählbar.
    pub fn is_visible(&self) -> bool {
        self.occupant.is_none()
    }

    /// Markiert das Bohrloch als besetzt (ausgeblendet).
    pub fn occupy(&mut self, hold: HoldId) {
        self.occupant = Some(hold);
    }

    /// Gibt das Bohrloch frei (wieder sichtbar).
    pub fn vacate(&mut self) -> Option<HoldId> {
        self.occupant.take()
    }

    /// Hebt den Selected-Zustand auf (z.B. wenn die Galerie geschlossen wird).
    pub fn deselect(&mut self, materials: &mut MaterialStore) {
        if self.selected {
            self.selected = false;
            self.update_visual(materials);
        }
    }

    pub fn state(&self) -> TargetState {
        if self.selected {
            TargetState::Selected
        } else if self.hovered {
            TargetState::Hovered
        } else {
            TargetState::Idle
        }
    }

    /// Aktuell gerenderte Farbe (None ohne Material).
    pub fn current_color(&self, materials: &MaterialStore) -> Option<Rgba> {
        self.material.and_then(|handle| materials.color(handle))
    }

    pub fn has_material(&self) -> bool {
        self.material.is_some()
    }

    fn update_visual(&self, materials: &mut MaterialStore) {
        let Some(handle) = self.material else {
            return;
        };
        let color = match self.state() {
            TargetState::Selected => self.colors.selected,
            TargetState::Hovered => self.colors.hover,
            TargetState::Idle => self.default_color,
        };
        materials.set_color(handle, color);
    }
}

impl Selectable for BoltHole {
    fn on_hover_enter(&mut self, materials: &mut MaterialStore) {
        self.hovered = true;
        self.update_visual(materials);
    }

    fn on_hover_exit(&mut self, materials: &mut MaterialStore) {
        self.hovered = false;
        self.update_visual(materials);
    }

    fn on_select(&mut self, materials: &mut MaterialStore) -> SelectOutcome {
        self.selected = !self.selected;
        self.update_visual(materials);
        if self.selected {
            SelectOutcome::OpenGallery { anchor: self.id }
        } else {
            SelectOutcome::CloseGallery
        }
    }
}
