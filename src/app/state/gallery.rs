use crate::core::{grid_coord_for_index, AnchorId, Catalog, CatalogEntry, GridCoord, GridDirection, Rgba};
use std::sync::Arc;

/// Eine Zelle im Galerie-Raster
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryCell {
    pub coord: GridCoord,
    /// Aktuelle Hintergrundfarbe
    pub background: Rgba,
}

/// Scroll-Position normiert auf 0.0 (oben) bis 1.0 (unten)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GalleryScroll {
    pub current: f32,
    pub target: f32,
}

/// Pixel-Geometrie des Galerie-Rasters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryLayout {
    pub columns: usize,
    pub item_size: f32,
    pub spacing: f32,
    pub viewport_height: f32,
}

impl GalleryLayout {
    /// Anzahl Zeilen für `count` Einträge.
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns.max(1))
    }

    /// Gesamthöhe des Inhalts in Pixeln.
    pub fn content_height(&self, count: usize) -> f32 {
        let rows = self.rows(count);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.item_size + (rows - 1) as f32 * self.spacing
    }

    /// Scrollbarer Bereich (Inhalt minus Viewport), nie negativ.
    pub fn scroll_range(&self, count: usize) -> f32 {
        (self.content_height(count) - self.viewport_height).max(0.0)
    }

    /// Oberkante einer Zeile in Pixeln.
    pub fn row_top(&self, row: usize) -> f32 {
        row as f32 * (self.item_size + self.spacing)
    }
}

/// Farben der Galerie-Zellen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryColors {
    pub normal: Rgba,
    pub selected: Rgba,
}

/// Zustand der Griff-Galerie. Überlebt Öffnen/Schließen.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    /// Galerie wird angezeigt
    pub visible: bool,
    /// Bohrloch, für das die Galerie geöffnet wurde
    pub anchor: Option<AnchorId>,
    /// Anzeigename des Bohrlochs
    pub anchor_name: String,
    /// Index des ausgewählten Eintrags
    pub selected: Option<usize>,
    /// Eine Zelle pro Katalog-Eintrag
    pub cells: Vec<GalleryCell>,
    pub scroll: GalleryScroll,
    catalog: Option<Arc<Catalog>>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wurde der Katalog bereits geladen?
    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        self.catalog.as_ref()
    }

    /// Übernimmt einen Katalog und baut die Zellen neu auf.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>, columns: usize, colors: GalleryColors) {
        self.cells = (0..catalog.len())
            .map(|index| GalleryCell {
                coord: grid_coord_for_index(index, columns),
                background: colors.normal,
            })
            .collect();
        self.catalog = Some(catalog);
        self.selected = None;
        self.scroll = GalleryScroll::default();
    }

    /// Verwirft den Katalog; er wird beim nächsten Öffnen neu geladen.
    pub fn invalidate_catalog(&mut self) {
        self.catalog = None;
        self.cells.clear();
        self.selected = None;
        self.scroll = GalleryScroll::default();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Ausgewählter Katalog-Eintrag.
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        let catalog = self.catalog.as_ref()?;
        catalog.get(self.selected?)
    }

    /// Index der Zelle mit exakt dieser Koordinate.
    pub fn index_at(&self, coord: GridCoord) -> Option<usize> {
        self.cells.iter().position(|cell| cell.coord == coord)
    }

    /// Wählt einen Eintrag aus; die vorherige Zelle bekommt ihren Grund-Hintergrund zurück.
    ///
    /// Gibt `false` zurück, wenn der Index außerhalb liegt.
    pub fn select(&mut self, index: usize, colors: GalleryColors) -> bool {
        if index >= self.cells.len() {
            return false;
        }
        if let Some(cell) = self.selected.and_then(|prev| self.cells.get_mut(prev)) {
            cell.background = colors.normal;
        }
        self.cells[index].background = colors.selected;
        self.selected = Some(index);
        true
    }

    /// Bewegt die Auswahl um genau eine Zelle; am Rand passiert nichts.
    pub fn navigate(&mut self, direction: GridDirection, colors: GalleryColors) -> bool {
        let Some(current) = self.selected.and_then(|index| self.cells.get(index)) else {
            return false;
        };
        match self.index_at(current.coord.step(direction)) {
            Some(next) => self.select(next, colors),
            None => false,
        }
    }

    /// Berechnet das Scroll-Ziel so, dass die ausgewählte Zeile ganz sichtbar ist.
    ///
    /// Liegt die Zeile bereits im sichtbaren Bereich, bleibt das Ziel unverändert.
    pub fn update_scroll_target(&mut self, layout: GalleryLayout) {
        let range = layout.scroll_range(self.cells.len());
        if range <= 0.0 {
            self.scroll.target = 0.0;
            return;
        }
        let Some(cell) = self.selected.and_then(|index| self.cells.get(index)) else {
            return;
        };

        let row_top = layout.row_top(cell.coord.y.max(0) as usize);
        let row_bottom = row_top + layout.item_size;
        let view_top = self.scroll.target.clamp(0.0, 1.0) * range;
        let view_bottom = view_top + layout.viewport_height;

        let new_top = if row_top < view_top {
            row_top
        } else if row_bottom > view_bottom {
            row_bottom - layout.viewport_height
        } else {
            return;
        };
        self.scroll.target = (new_top / range).clamp(0.0, 1.0);
    }

    /// Nähert die aktuelle Scroll-Position dem Ziel an.
    pub fn advance_scroll(&mut self, dt: f32, speed: f32) {
        let t = (speed * dt).clamp(0.0, 1.0);
        self.scroll.current += (self.scroll.target - self.scroll.current) * t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PreviewImage;
    use approx::assert_relative_eq;
    use std::path::PathBuf;

    const COLORS: GalleryColors = GalleryColors {
        normal: [0.1, 0.1, 0.1, 1.0],
        selected: [0.2, 0.5, 0.9, 1.0],
    };

    const LAYOUT: GalleryLayout = GalleryLayout {
        columns: 3,
        item_size: 100.0,
        spacing: 10.0,
        viewport_height: 210.0,
    };

    fn catalog(count: usize) -> Arc<Catalog> {
        Arc::new(Catalog::from_entries((0..count).map(|i| CatalogEntry {
            name: format!("hold_{i:02}"),
            preview: PreviewImage {
                path: PathBuf::from(format!("hold_{i:02}_preview.png")),
                size: [256, 256],
            },
        })))
    }

    fn gallery(count: usize) -> GalleryState {
        let mut gallery = GalleryState::new();
        gallery.set_catalog(catalog(count), 3, COLORS);
        gallery
    }

    fn highlighted(gallery: &GalleryState) -> Vec<usize> {
        gallery
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.background == COLORS.selected)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn exactly_one_cell_highlighted() {
        let mut g = gallery(7);
        assert!(g.select(0, COLORS));
        assert!(g.select(4, COLORS));
        assert_eq!(highlighted(&g), vec![4]);
        assert!(!g.select(7, COLORS));
        assert_eq!(g.selected, Some(4));
    }

    #[test]
    fn navigation_has_no_wrap_or_fallback() {
        let mut g = gallery(7);
        g.select(2, COLORS);
        assert!(!g.navigate(GridDirection::Right, COLORS));
        assert_eq!(g.selected, Some(2));

        // (2,1) → unten liegt (2,2) nicht vor
        g.select(5, COLORS);
        assert!(!g.navigate(GridDirection::Down, COLORS));
        assert_eq!(g.selected, Some(5));

        g.select(3, COLORS);
        assert!(g.navigate(GridDirection::Down, COLORS));
        assert_eq!(g.selected, Some(6));
        assert!(g.navigate(GridDirection::Up, COLORS));
        assert_eq!(g.selected, Some(3));
    }

    #[test]
    fn navigate_without_selection_is_noop() {
        let mut g = gallery(4);
        assert!(!g.navigate(GridDirection::Down, COLORS));
        assert_eq!(g.selected, None);
    }

    #[test]
    fn scroll_target_keeps_selected_row_visible() {
        let mut g = gallery(12);
        // 4 Zeilen: Inhalt 430 px, Bereich 220 px
        assert_relative_eq!(LAYOUT.scroll_range(12), 220.0);

        g.select(1, COLORS);
        g.update_scroll_target(LAYOUT);
        assert_relative_eq!(g.scroll.target, 0.0);

        g.select(10, COLORS);
        g.update_scroll_target(LAYOUT);
        // Zeile 3: 330..430 → Oberkante 220 → 1.0
        assert_relative_eq!(g.scroll.target, 1.0);

        g.select(4, COLORS);
        g.update_scroll_target(LAYOUT);
        // Zeile 1 beginnt bei 110 und liegt über dem Sichtbereich (220..430)
        assert_relative_eq!(g.scroll.target, 0.5);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut g = gallery(3);
        g.select(2, COLORS);
        g.update_scroll_target(LAYOUT);
        assert_relative_eq!(g.scroll.target, 0.0);
    }

    #[test]
    fn scroll_approaches_target() {
        let mut g = gallery(12);
        g.scroll.target = 1.0;
        g.advance_scroll(0.05, 10.0);
        assert_relative_eq!(g.scroll.current, 0.5);
        g.advance_scroll(0.05, 10.0);
        assert_relative_eq!(g.scroll.current, 0.75);
        g.advance_scroll(1.0, 10.0);
        assert_relative_eq!(g.scroll.current, 1.0);
    }
}
