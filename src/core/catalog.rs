//! Griff-Katalog: Vorschaubilder `<variant>_preview.png` und Raster-Layout der Galerie.

use anyhow::Context;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Namens-Suffix der Vorschaubilder
pub const PREVIEW_SUFFIX: &str = "_preview";

/// Vorschaubild einer Variante
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    /// Pfad zur PNG-Datei
    pub path: PathBuf,
    /// Größe in Pixeln (Breite, Höhe)
    pub size: [u32; 2],
}

/// Unveränderlicher Katalog-Eintrag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Varianten-Name (ohne `_preview`)
    pub name: String,
    pub preview: PreviewImage,
}

/// Ganzzahlige Raster-Koordinate einer Galerie-Zelle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nachbar-Koordinate in Richtung `direction`.
    pub fn step(self, direction: GridDirection) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Navigationsrichtung im Galerie-Raster (Zeile 0 oben)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDirection {
    Up,
    Down,
    Left,
    Right,
}

impl GridDirection {
    /// Versatz (dx, dy); "hoch" verringert die Zeile.
    pub fn offset(self) -> (i32, i32) {
        match self {
            GridDirection::Up => (0, -1),
            GridDirection::Down => (0, 1),
            GridDirection::Left => (-1, 0),
            GridDirection::Right => (1, 0),
        }
    }
}

/// Raster-Koordinate des Eintrags `index` bei `columns` Spalten.
pub fn grid_coord_for_index(index: usize, columns: usize) -> GridCoord {
    let columns = columns.max(1);
    GridCoord::new((index % columns) as i32, (index / columns) as i32)
}

/// Extrahiert den Varianten-Namen aus einem Dateinamen `<variant>_preview.png`.
pub fn variant_name_from_path(path: &Path) -> Option<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("png") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let name = stem.strip_suffix(PREVIEW_SUFFIX)?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Geordneter Katalog aller Varianten
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    /// Baut einen Katalog; Einträge werden nach Namen sortiert, Duplikate überschrieben.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut entries: IndexMap<_, _> = entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect();
        entries.sort_keys();
        Self { entries }
    }

    /// Liest alle Vorschaubilder eines Verzeichnisses.
    ///
    /// Nicht dekodierbare Bilder werden geloggt und übersprungen.
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        let read_dir = std::fs::read_dir(dir)
            .with_context(|| format!("Vorschau-Verzeichnis nicht lesbar: {}", dir.display()))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let path = dir_entry?.path();
            let Some(name) = variant_name_from_path(&path) else {
                continue;
            };
            match image::image_dimensions(&path) {
                Ok((width, height)) => entries.push(CatalogEntry {
                    name,
                    preview: PreviewImage {
                        path,
                        size: [width, height],
                    },
                }),
                Err(e) => log::warn!(
                    "Vorschaubild übersprungen ({}): {}",
                    path.display(),
                    e
                ),
            }
        }

        let catalog = Self::from_entries(entries);
        log::info!(
            "Katalog geladen: {} Varianten aus {}",
            catalog.len(),
            dir.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Eintrag an Position `index`.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    /// Position eines Eintrags nach Namen.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            preview: PreviewImage {
                path: PathBuf::from(format!("{name}_preview.png")),
                size: [256, 256],
            },
        }
    }

    #[test]
    fn variant_name_strips_suffix() {
        assert_eq!(
            variant_name_from_path(Path::new("a/jug_preview.png")),
            Some("jug".to_string())
        );
        assert_eq!(variant_name_from_path(Path::new("jug.png")), None);
        assert_eq!(variant_name_from_path(Path::new("jug_preview.jpg")), None);
        assert_eq!(variant_name_from_path(Path::new("_preview.png")), None);
    }

    #[test]
    fn row_major_layout() {
        let coords: Vec<_> = (0..7).map(|i| grid_coord_for_index(i, 3)).collect();
        assert_eq!(
            coords,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(1, 0),
                GridCoord::new(2, 0),
                GridCoord::new(0, 1),
                GridCoord::new(1, 1),
                GridCoord::new(2, 1),
                GridCoord::new(0, 2),
            ]
        );
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let catalog = Catalog::from_entries(vec![entry("sloper"), entry("crimp"), entry("jug")]);
        let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["crimp", "jug", "sloper"]);
        assert_eq!(catalog.index_of("jug"), Some(1));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn up_decreases_row() {
        assert_eq!(GridCoord::new(1, 1).step(GridDirection::Up), GridCoord::new(1, 0));
        assert_eq!(GridCoord::new(1, 1).step(GridDirection::Right), GridCoord::new(2, 1));
    }

    #[test]
    fn load_from_dir_reads_png_dimensions() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        image::RgbaImage::new(4, 2)
            .save(dir.path().join("jug_preview.png"))
            .expect("PNG schreiben");
        std::fs::write(dir.path().join("crimp_preview.png"), b"kein png").expect("schreiben");
        std::fs::write(dir.path().join("readme.txt"), b"x").expect("schreiben");

        let catalog = Catalog::load_from_dir(dir.path()).expect("Katalog");
        assert_eq!(catalog.len(), 1);
        let jug = catalog.get(0).expect("Eintrag");
        assert_eq!(jug.name, "jug");
        assert_eq!(jug.preview.size, [4, 2]);
    }
}
