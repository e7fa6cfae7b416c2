use glam::Vec3;
use indexmap::IndexMap;

use super::bolt_hole::BoltHole;
use super::collision::{intersect_sphere, Aabb, Ray};
use super::hold::SelectableHold;
use super::hold_template::HoldTemplate;
use super::material::{MaterialStore, Rgba};
use super::room::RoomLayout;
use super::selectable::{AnchorId, HoldId, LayerMask, Selectable, TargetColors, TargetId};
use super::wall::BoltHoleSpec;

/// Name des Quell-Materials aller Bohrlöcher
pub const BOLT_HOLE_MATERIAL: &str = "bolt_hole";

/// Treffer des Auswahl-Raycasts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    pub target: TargetId,
    pub distance: f32,
}

/// Ergebnis von `Scene::spawn_hold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnResult {
    /// Neu erzeugter Griff
    pub hold: HoldId,
    /// Griff, der vorher auf dem Bohrloch saß und ersetzt wurde
    pub replaced: Option<HoldId>,
}

/// Alle Szenen-Objekte mit ihren Material-Instanzen
#[derive(Debug, Default)]
pub struct Scene {
    room: RoomLayout,
    anchors: IndexMap<AnchorId, BoltHole>,
    holds: IndexMap<HoldId, SelectableHold>,
    materials: MaterialStore,
    anchor_radius: f32,
    next_anchor_id: u64,
    next_hold_id: u64,
    spawned_total: u64,
}

impl Scene {
    /// Erstellt eine leere Szene im gegebenen Raum.
    pub fn new(room: RoomLayout, anchor_radius: f32) -> Self {
        Self {
            room,
            anchor_radius,
            ..Default::default()
        }
    }

    pub fn room(&self) -> &RoomLayout {
        &self.room
    }

    /// Ersetzt den Raum (Wand bleibt unberührt).
    pub fn set_room(&mut self, room: RoomLayout) {
        self.room = room;
    }

    pub fn set_anchor_radius(&mut self, radius: f32) {
        self.anchor_radius = radius;
    }

    /// Kollisionsboxen der Raumteile.
    pub fn colliders(&self) -> Vec<Aabb> {
        self.room.colliders()
    }

    pub fn materials(&self) -> &MaterialStore {
        &self.materials
    }

    pub fn materials_mut(&mut self) -> &mut MaterialStore {
        &mut self.materials
    }

    // ── Bohrlöcher ──────────────────────────────────────────────

    /// Baut die Wand neu auf. Gibt alle dabei entfernten Ziele zurück.
    pub fn rebuild_anchors(&mut self, specs: &[BoltHoleSpec], colors: TargetColors) -> Vec<TargetId> {
        let removed = self.clear_wall();
        for spec in specs {
            let id = AnchorId(self.next_anchor_id);
            self.next_anchor_id += 1;
            let mut hole = BoltHole::new(id, spec, colors);
            hole.init(&mut self.materials, BOLT_HOLE_MATERIAL);
            self.anchors.insert(id, hole);
        }
        log::info!("Wand aufgebaut: {} Bohrlöcher", self.anchors.len());
        removed
    }

    /// Entfernt alle Griffe und Bohrlöcher und gibt ihre Materialien frei.
    pub fn clear_wall(&mut self) -> Vec<TargetId> {
        let mut removed = Vec::with_capacity(self.holds.len() + self.anchors.len());
        for (id, mut hold) in self.holds.drain(..) {
            hold.dispose(&mut self.materials);
            removed.push(TargetId::Hold(id));
        }
        for (id, mut hole) in self.anchors.drain(..) {
            hole.dispose(&mut self.materials);
            removed.push(TargetId::Anchor(id));
        }
        if !removed.is_empty() {
            log::info!("Wand geleert: {} Objekte entfernt", removed.len());
        }
        removed
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&BoltHole> {
        self.anchors.get(&id)
    }

    /// Bohrloch nach Anzeigename.
    pub fn anchor_by_name(&self, name: &str) -> Option<&BoltHole> {
        self.anchors.values().find(|hole| hole.name() == name)
    }

    pub fn anchors(&self) -> impl Iterator<Item = &BoltHole> {
        self.anchors.values()
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Hebt den Selected-Zustand eines Bohrlochs auf.
    pub fn deselect_anchor(&mut self, id: AnchorId) {
        if let Some(hole) = self.anchors.get_mut(&id) {
            hole.deselect(&mut self.materials);
        }
    }

    // ── Griffe ──────────────────────────────────────────────────

    pub fn hold(&self, id: HoldId) -> Option<&SelectableHold> {
        self.holds.get(&id)
    }

    pub fn hold_mut(&mut self, id: HoldId) -> Option<&mut SelectableHold> {
        self.holds.get_mut(&id)
    }

    pub fn holds(&self) -> impl Iterator<Item = &SelectableHold> {
        self.holds.values()
    }

    pub fn holds_mut(&mut self) -> impl Iterator<Item = &mut SelectableHold> {
        self.holds.values_mut()
    }

    pub fn hold_count(&self) -> usize {
        self.holds.len()
    }

    /// Anzahl aller bisher erzeugten Griffe (inkl. ersetzter).
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Setzt einen Griff aus einer Vorlage auf ein Bohrloch.
    ///
    /// Ein bereits vorhandener Griff auf dem Bohrloch wird ersetzt.
    /// Gibt `None` zurück, wenn das Bohrloch nicht existiert.
    pub fn spawn_hold(
        &mut self,
        template: &HoldTemplate,
        anchor: AnchorId,
        offset: Vec3,
        rotation_deg: Vec3,
        highlight: Rgba,
    ) -> Option<SpawnResult> {
        let hole = self.anchors.get(&anchor)?;
        let anchor_position = hole.position();
        let replaced = match hole.occupant() {
            Some(old) => self.remove_hold(old).map(|_| old),
            None => None,
        };

        // Quelle folgt immer der aktuellen Vorlage; vorhandene Instanzen bleiben unberührt
        let material = template.material_name();
        self.materials.register_source(&material, template.color);

        let id = HoldId(self.next_hold_id);
        self.next_hold_id += 1;
        let mut hold = SelectableHold::new(
            id,
            template,
            anchor,
            anchor_position + offset,
            rotation_deg,
            highlight,
        );
        hold.init(&mut self.materials, &material);
        self.holds.insert(id, hold);
        if let Some(hole) = self.anchors.get_mut(&anchor) {
            hole.occupy(id);
        }
        self.spawned_total += 1;

        log::info!(
            "Griff '{}' platziert auf {}",
            template.name,
            self.anchors
                .get(&anchor)
                .map(BoltHole::name)
                .unwrap_or_default()
        );
        Some(SpawnResult { hold: id, replaced })
    }

    /// Entfernt einen Griff; sein Bohrloch wird wieder sichtbar.
    pub fn remove_hold(&mut self, id: HoldId) -> Option<AnchorId> {
        let mut hold = self.holds.shift_remove(&id)?;
        hold.dispose(&mut self.materials);
        let anchor = hold.anchor();
        if let Some(hole) = self.anchors.get_mut(&anchor) {
            if hole.occupant() == Some(id) {
                hole.vacate();
            }
        }
        log::info!("Griff '{}' entfernt", hold.variant());
        Some(anchor)
    }

    /// Aktiviert/deaktiviert alle Griffe (deaktivieren beendet Drags).
    pub fn set_holds_enabled(&mut self, enabled: bool) {
        for hold in self.holds.values_mut() {
            hold.set_enabled(enabled);
        }
    }

    // ── Ziele ───────────────────────────────────────────────────

    /// Anzeigename eines Ziels.
    pub fn target_name(&self, target: TargetId) -> Option<String> {
        match target {
            TargetId::Anchor(id) => self.anchors.get(&id).map(|hole| hole.name().to_string()),
            TargetId::Hold(id) => self.holds.get(&id).map(|hold| hold.variant().to_string()),
        }
    }

    /// Ruft `f` mit dem Ziel und dem Material-Speicher auf.
    pub fn with_target<R>(
        &mut self,
        target: TargetId,
        f: impl FnOnce(&mut dyn Selectable, &mut MaterialStore) -> R,
    ) -> Option<R> {
        let materials = &mut self.materials;
        match target {
            TargetId::Anchor(id) => {
                let hole = self.anchors.get_mut(&id)?;
                Some(f(hole, materials))
            }
            TargetId::Hold(id) => {
                let hold = self.holds.get_mut(&id)?;
                Some(f(hold, materials))
            }
        }
    }

    /// Nächster Treffer entlang des Strahls auf den Layern in `mask`.
    ///
    /// Besetzte (ausgeblendete) Bohrlöcher werden nie getroffen.
    pub fn raycast(&self, ray: &Ray, max_distance: f32, mask: LayerMask) -> Option<SceneHit> {
        let anchors = mask
            .contains(LayerMask::ANCHORS)
            .then(|| {
                self.anchors
                    .values()
                    .filter(|hole| hole.is_visible())
                    .filter_map(|hole| {
                        intersect_sphere(ray, hole.position(), self.anchor_radius, max_distance)
                            .map(|hit| SceneHit {
                                target: TargetId::Anchor(hole.id()),
                                distance: hit.distance,
                            })
                    })
            })
            .into_iter()
            .flatten();

        let holds = mask
            .contains(LayerMask::HOLDS)
            .then(|| {
                self.holds.values().filter_map(|hold| {
                    intersect_sphere(ray, hold.position(), hold.collider_radius(), max_distance)
                        .map(|hit| SceneHit {
                            target: TargetId::Hold(hold.id()),
                            distance: hit.distance,
                        })
                })
            })
            .into_iter()
            .flatten();

        anchors
            .chain(holds)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
