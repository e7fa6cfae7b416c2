mod common;

use approx::assert_relative_eq;
use climbing_gym_editor::app::use_cases;
use climbing_gym_editor::{AppIntent, FrameInput, GridCoord, GridDirection};
use common::world;

const SEVEN: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

fn navigate(w: &mut common::TestWorld, direction: GridDirection) {
    w.tick(FrameInput {
        navigation: vec![direction],
        ..Default::default()
    });
}

fn click(w: &mut common::TestWorld, index: usize) {
    w.controller
        .handle_intent(&mut w.state, AppIntent::GalleryEntryClicked { index })
        .expect("Klick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_catalog_is_laid_out_row_major() {
    let mut w = world(&SEVEN, &[], 3);
    w.open_gallery_at(w.anchor_at(0));

    let coords: Vec<GridCoord> = w.state.gallery.cells.iter().map(|cell| cell.coord).collect();
    let expected: Vec<GridCoord> = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2)]
        .into_iter()
        .map(|(x, y)| GridCoord::new(x, y))
        .collect();
    assert_eq!(coords, expected);

    let names: Vec<_> = w
        .state
        .gallery
        .catalog()
        .expect("Katalog geladen")
        .iter()
        .map(|entry| entry.name.clone())
        .collect();
    assert_eq!(names, SEVEN);
}

#[test]
fn test_navigation_stops_at_grid_edges() {
    let mut w = world(&SEVEN, &[], 3);
    w.open_gallery_at(w.anchor_at(0));

    // (0,0): nach oben und links geht nichts
    navigate(&mut w, GridDirection::Up);
    navigate(&mut w, GridDirection::Left);
    assert_eq!(w.state.gallery.selected, Some(0));

    // Rechter Rand
    click(&mut w, 2);
    navigate(&mut w, GridDirection::Right);
    assert_eq!(w.state.gallery.selected, Some(2));

    // (2,1) hat keinen Nachbarn unten
    click(&mut w, 5);
    navigate(&mut w, GridDirection::Down);
    assert_eq!(w.state.gallery.selected, Some(5));

    // (0,1) → (0,2)
    click(&mut w, 3);
    navigate(&mut w, GridDirection::Down);
    assert_eq!(w.state.gallery.selected, Some(6));
}

#[test]
fn test_click_highlights_exactly_one_cell() {
    let mut w = world(&SEVEN, &[], 3);
    w.open_gallery_at(w.anchor_at(0));
    let selected_color = w.state.options.gallery_cell_selected_color;

    click(&mut w, 4);
    click(&mut w, 1);

    let highlighted: Vec<usize> = w
        .state
        .gallery
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.background == selected_color)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(highlighted, vec![1]);
    assert_eq!(
        w.state.gallery.selected_entry().map(|entry| entry.name.as_str()),
        Some("b")
    );
}

#[test]
fn test_navigation_scrolls_selected_row_into_view() {
    let names: Vec<String> = (0..12).map(|i| format!("hold_{i:02}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut w = world(&names, &[], 3);
    w.open_gallery_at(w.anchor_at(0));
    assert_relative_eq!(w.state.gallery.scroll.target, 0.0);

    for _ in 0..3 {
        navigate(&mut w, GridDirection::Down);
    }
    assert_eq!(w.state.gallery.selected, Some(9));
    assert_relative_eq!(w.state.gallery.scroll.target, 1.0);

    for _ in 0..120 {
        w.idle();
    }
    assert_relative_eq!(w.state.gallery.scroll.current, 1.0, epsilon = 1e-3);
}

#[test]
fn test_missing_template_keeps_gallery_open() {
    let mut w = world(&["crimp", "jug"], &["ghost"], 4);
    w.open_gallery_at(w.anchor_at(0));

    // Sortiert: crimp, ghost, jug
    click(&mut w, 1);
    w.confirm();

    assert!(w.state.gallery.visible);
    assert_eq!(w.state.hold_count(), 0);
    assert!(w
        .state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|msg| msg.contains("ghost")));
}

#[test]
fn test_empty_catalog_opens_without_selection() {
    let mut w = world(&[], &[], 4);
    w.open_gallery_at(w.anchor_at(0));

    assert!(w.state.gallery.visible);
    assert!(w.state.gallery.is_empty());
    assert_eq!(w.state.gallery.selected, None);

    w.confirm();
    assert_eq!(w.state.hold_count(), 0);
    assert!(w.state.gallery.visible);
}

#[test]
fn test_changing_columns_keeps_open_gallery_usable() {
    let mut w = world(&["crimp", "jug", "sloper"], &[], 3);
    w.open_gallery_at(w.anchor_at(0));
    click(&mut w, 1);

    let mut options = w.state.options.clone();
    options.gallery_columns = 2;
    use_cases::session::apply_options(&mut w.state, options);

    assert!(w.state.gallery.visible);
    assert_eq!(w.state.gallery.len(), 3);
    assert_eq!(w.state.gallery.selected, Some(1));
    assert_eq!(w.state.gallery.cells[2].coord, GridCoord::new(0, 1));

    w.confirm();
    assert_eq!(w.state.hold_count(), 1);
    let hold = w.state.scene.holds().next().expect("Griff gesetzt");
    assert_eq!(hold.variant(), "jug");
}
