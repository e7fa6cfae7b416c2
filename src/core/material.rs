//! Material-Verwaltung: geteilte Quell-Materialien und geklonte Instanzen pro Ziel.
//!
//! Quell-Materialien werden nie verändert. Jedes Ziel klont beim `init` genau
//! eine Instanz und gibt sie beim `dispose` wieder frei.

use indexmap::IndexMap;
use std::collections::HashMap;

/// RGBA-Farbe mit Komponenten im Bereich 0.0..=1.0
pub type Rgba = [f32; 4];

/// Handle auf eine geklonte Material-Instanz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(u64);

/// Geteiltes Quell-Material
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMaterial {
    /// Eindeutiger Name
    pub name: String,
    /// Basisfarbe
    pub color: Rgba,
}

#[derive(Debug, Clone)]
struct MaterialInstance {
    source: String,
    color: Rgba,
}

/// Speicher für Quell-Materialien und deren Instanzen
#[derive(Debug, Default)]
pub struct MaterialStore {
    sources: IndexMap<String, SourceMaterial>,
    instances: HashMap<MaterialHandle, MaterialInstance>,
    next_handle: u64,
}

impl MaterialStore {
    /// Erstellt einen leeren Material-Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert (oder überschreibt) ein Quell-Material.
    pub fn register_source(&mut self, name: &str, color: Rgba) {
        self.sources.insert(
            name.to_string(),
            SourceMaterial {
                name: name.to_string(),
                color,
            },
        );
    }

    /// Farbe eines Quell-Materials.
    pub fn source_color(&self, name: &str) -> Option<Rgba> {
        self.sources.get(name).map(|source| source.color)
    }

    /// Klont ein Quell-Material in eine neue Instanz.
    ///
    /// Gibt `None` zurück, wenn das Quell-Material nicht existiert.
    pub fn instantiate(&mut self, source: &str) -> Option<MaterialHandle> {
        let color = self.sources.get(source)?.color;
        let handle = MaterialHandle(self.next_handle);
        self.next_handle += 1;
        self.instances.insert(
            handle,
            MaterialInstance {
                source: source.to_string(),
                color,
            },
        );
        Some(handle)
    }

    /// Aktuelle Farbe einer Instanz.
    pub fn color(&self, handle: MaterialHandle) -> Option<Rgba> {
        self.instances.get(&handle).map(|instance| instance.color)
    }

    /// Setzt die Farbe einer Instanz. Gibt `false` zurück, wenn das Handle unbekannt ist.
    pub fn set_color(&mut self, handle: MaterialHandle, color: Rgba) -> bool {
        match self.instances.get_mut(&handle) {
            Some(instance) => {
                instance.color = color;
                true
            }
            None => false,
        }
    }

    /// Gibt eine Instanz frei. Gibt `false` zurück, wenn sie bereits freigegeben war.
    pub fn release(&mut self, handle: MaterialHandle) -> bool {
        match self.instances.remove(&handle) {
            Some(instance) => {
                log::debug!("Material-Instanz {:?} von '{}' freigegeben", handle, instance.source);
                true
            }
            None => false,
        }
    }

    /// Anzahl lebender Instanzen.
    pub fn live_instances(&self) -> usize {
        self.instances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgba = [0.5, 0.5, 0.5, 1.0];
    const RED: Rgba = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn instances_do_not_share_color() {
        let mut store = MaterialStore::new();
        store.register_source("bolt", GREY);

        let a = store.instantiate("bolt").expect("Instanz a");
        let b = store.instantiate("bolt").expect("Instanz b");
        assert!(store.set_color(a, RED));

        assert_eq!(store.color(a), Some(RED));
        assert_eq!(store.color(b), Some(GREY));
        assert_eq!(store.source_color("bolt"), Some(GREY));
    }

    #[test]
    fn missing_source_yields_no_instance() {
        let mut store = MaterialStore::new();
        assert!(store.instantiate("missing").is_none());
        assert_eq!(store.live_instances(), 0);
    }

    #[test]
    fn release_is_counted_once() {
        let mut store = MaterialStore::new();
        store.register_source("bolt", GREY);
        let handle = store.instantiate("bolt").expect("Instanz");
        assert_eq!(store.live_instances(), 1);

        assert!(store.release(handle));
        assert!(!store.release(handle));
        assert_eq!(store.live_instances(), 0);
        assert!(!store.set_color(handle, RED));
    }
}
