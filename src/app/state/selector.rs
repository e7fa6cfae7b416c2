use crate::core::{Scene, SelectOutcome, TargetId};

/// Ergebnis eines Hover-Abgleichs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// Ziel unverändert (auch: weiterhin nichts)
    Unchanged,
    /// Neues Ziel ohne Vorgänger
    Entered(TargetId),
    /// Vorheriges Ziel verlassen, nichts getroffen
    Exited(TargetId),
    /// Wechsel von einem Ziel zum nächsten (Exit vor Enter)
    Switched { from: TargetId, to: TargetId },
}

/// Hält das eine aktuell gehoverte Ziel.
#[derive(Debug, Clone, Default)]
pub struct PointerSelector {
    hovered: Option<TargetId>,
}

impl PointerSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector mit vorbelegtem Hover-Ziel (ohne Enter-Callback).
    #[cfg(test)]
    pub(crate) fn with_hovered(target: TargetId) -> Self {
        Self {
            hovered: Some(target),
        }
    }

    pub fn hovered(&self) -> Option<TargetId> {
        self.hovered
    }

    /// Gleicht das Raycast-Ergebnis mit dem gehoverten Ziel ab.
    ///
    /// Hover-Exit auf dem alten Ziel läuft immer vor Hover-Enter auf dem neuen.
    /// Ein nicht mehr existierendes altes Ziel wird ohne Exit verworfen.
    pub fn resolve(&mut self, hit: Option<TargetId>, scene: &mut Scene) -> HoverTransition {
        if hit == self.hovered {
            return HoverTransition::Unchanged;
        }

        let previous = self.hovered.take();
        if let Some(old) = previous {
            scene.with_target(old, |target, materials| target.on_hover_exit(materials));
        }

        let entered = hit.filter(|&new| {
            scene
                .with_target(new, |target, materials| target.on_hover_enter(materials))
                .is_some()
        });
        self.hovered = entered;

        match (previous, entered) {
            (Some(from), Some(to)) => HoverTransition::Switched { from, to },
            (None, Some(to)) => HoverTransition::Entered(to),
            (Some(from), None) => HoverTransition::Exited(from),
            (None, None) => HoverTransition::Unchanged,
        }
    }

    /// Ruft Select auf dem gehoverten Ziel auf.
    pub fn select(&mut self, scene: &mut Scene) -> SelectOutcome {
        let Some(target) = self.hovered else {
            return SelectOutcome::None;
        };
        match scene.with_target(target, |target, materials| target.on_select(materials)) {
            Some(outcome) => outcome,
            None => {
                self.hovered = None;
                SelectOutcome::None
            }
        }
    }

    /// Vergisst ein zerstörtes Ziel ohne Hover-Exit.
    pub fn forget(&mut self, target: TargetId) {
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }

    /// Vergisst alle übergebenen Ziele ohne Hover-Exit.
    pub fn forget_all(&mut self, targets: &[TargetId]) {
        if self.hovered.is_some_and(|hovered| targets.contains(&hovered)) {
            self.hovered = None;
        }
    }

    /// Beendet die Hover-Sitzung mit Exit.
    pub fn clear(&mut self, scene: &mut Scene) -> HoverTransition {
        self.resolve(None, scene)
    }
}
