//! Griff-Vorlagen: eine TOML-Datei pro Variante (`<variant>.toml`).

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::material::Rgba;

/// Beschreibung einer Griff-Variante
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldTemplate {
    /// Varianten-Name; muss zum Basisnamen des Vorschaubilds passen
    pub name: String,
    /// Halbachsen des Ellipsoids (X, Y, Z)
    pub radii: [f32; 3],
    /// Grundfarbe (RGBA)
    pub color: Rgba,
    /// Radius der Auswahl-Kugel; ohne Angabe die größte Halbachse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collider_radius: Option<f32>,
}

impl HoldTemplate {
    /// Effektiver Radius der Auswahl-Kugel.
    pub fn collider_radius(&self) -> f32 {
        self.collider_radius
            .unwrap_or_else(|| self.radii.iter().copied().fold(0.0, f32::max))
    }

    /// Name des Quell-Materials dieser Variante.
    pub fn material_name(&self) -> String {
        format!("hold/{}", self.name)
    }

    /// Liest eine einzelne Vorlage.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Vorlage nicht lesbar: {}", path.display()))?;
        let template: HoldTemplate = toml::from_str(&content)
            .with_context(|| format!("Vorlage fehlerhaft: {}", path.display()))?;
        if template.name.trim().is_empty() {
            anyhow::bail!("Vorlage ohne Namen: {}", path.display());
        }
        Ok(template)
    }
}

/// Alle Vorlagen, nach Namen sortiert
#[derive(Debug, Clone, Default)]
pub struct HoldTemplateLibrary {
    templates: IndexMap<String, HoldTemplate>,
}

impl HoldTemplateLibrary {
    pub fn from_templates(templates: impl IntoIterator<Item = HoldTemplate>) -> Self {
        let mut templates: IndexMap<_, _> = templates
            .into_iter()
            .map(|template| (template.name.clone(), template))
            .collect();
        templates.sort_keys();
        Self { templates }
    }

    /// Lädt alle `*.toml` eines Verzeichnisses.
    ///
    /// Fehlerhafte Dateien werden geloggt und übersprungen; nur ein nicht
    /// lesbares Verzeichnis ist ein Fehler.
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Vorlagen-Verzeichnis nicht lesbar: {}", dir.display()))?;

        let mut templates = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            match HoldTemplate::load_from_file(&path) {
                Ok(template) => templates.push(template),
                Err(e) => log::warn!("Vorlage übersprungen: {:#}", e),
            }
        }

        let library = Self::from_templates(templates);
        log::info!(
            "{} Griff-Vorlagen geladen aus {}",
            library.len(),
            dir.display()
        );
        Ok(library)
    }

    pub fn get(&self, name: &str) -> Option<&HoldTemplate> {
        self.templates.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HoldTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
