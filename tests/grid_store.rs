use pixel_canvas::constants::{GRID_SIZE, HIGH_SCORE_KEY, HISTORY_CAPACITY, STORAGE_KEY};
use pixel_canvas::{Color, Command, Grid, GridStore, KeyValueStore, MemoryStore};

const RED: Color = Color::rgb(0xFF, 0x00, 0x00);

/// Grid after painting the first `n` cells of row 0 black
fn grid_after(n: usize) -> Grid {
    let mut grid = Grid::new();
    for col in 0..n {
        grid.set(0, col, Color::BLACK).unwrap();
    }
    grid
}

fn paint_row(store: &mut GridStore<MemoryStore>, n: usize) {
    for col in 0..n {
        assert_eq!(store.paint(0, col, Color::BLACK), Ok(true));
    }
}

#[test]
fn test_fresh_store_is_blank() {
    let store = GridStore::open(MemoryStore::new());
    assert!(store.grid().is_blank());
    assert_eq!(store.paint_count(), 0);
    assert_eq!(store.high_score(), 0);
    assert!(!store.can_undo());
}

#[test]
fn test_undo_after_ten_paints() {
    let mut store = GridStore::open(MemoryStore::new());
    paint_row(&mut store, 10);
    assert!(store.undo());
    assert_eq!(*store.grid(), grid_after(9));
}

#[test]
fn test_undo_stops_at_oldest_snapshot() {
    let mut store = GridStore::open(MemoryStore::new());
    paint_row(&mut store, 12);
    assert_eq!(store.undo_depth(), HISTORY_CAPACITY);

    for _ in 0..HISTORY_CAPACITY {
        assert!(store.undo());
    }
    // Snapshots from before paints 3..=12 were kept; the oldest one is the
    // grid after two paints.
    assert_eq!(*store.grid(), grid_after(2));

    assert!(!store.undo());
    assert!(!store.undo());
    assert_eq!(*store.grid(), grid_after(2));
}

#[test]
fn test_eleventh_undo_is_noop() {
    let mut store = GridStore::open(MemoryStore::new());
    paint_row(&mut store, 10);
    for _ in 0..10 {
        assert!(store.undo());
    }
    assert!(store.grid().is_blank());
    assert!(!store.undo());
    assert!(store.grid().is_blank());
}

#[test]
fn test_clear_can_be_undone() {
    let mut store = GridStore::open(MemoryStore::new());
    paint_row(&mut store, 3);
    store.clear();
    assert!(store.grid().is_blank());
    assert_eq!(store.paint_count(), 3);
    assert!(store.undo());
    assert_eq!(*store.grid(), grid_after(3));
}

#[test]
fn test_save_and_load_roundtrip() {
    let mut store = GridStore::open(MemoryStore::new());
    store.paint(0, 0, RED).unwrap();
    store.paint(GRID_SIZE - 1, GRID_SIZE - 1, Color::rgb(0x12, 0xAB, 0xEF)).unwrap();
    store.save().unwrap();
    let saved = store.grid().clone();

    let reopened = GridStore::open(store.into_storage());
    assert_eq!(*reopened.grid(), saved);
    assert_eq!(reopened.high_score(), 2);
    assert_eq!(reopened.paint_count(), 0);
    assert!(!reopened.can_undo());
}

#[test]
fn test_changes_are_saved_immediately() {
    let mut store = GridStore::open(MemoryStore::new());
    store.execute(Command::Paint { row: 5, col: 6, color: RED }).unwrap();

    let json = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    let rows: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(rows.len(), GRID_SIZE);
    assert_eq!(rows[5][6], "#FF0000");
    assert_eq!(rows[0][0], "#FFFFFF");
    assert_eq!(store.storage().get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("1"));
}

#[test]
fn test_corrupt_state_falls_back_to_blank() {
    for bad in ["not json", "[[\"#FFFFFF\"]]", "[]", "{\"grid\": 1}"] {
        let storage = MemoryStore::new()
            .with_entry(STORAGE_KEY, bad)
            .with_entry(HIGH_SCORE_KEY, "17");
        let store = GridStore::open(storage);
        assert!(store.grid().is_blank(), "{bad}");
        assert_eq!(store.high_score(), 17);
    }
}

#[test]
fn test_invalid_color_in_saved_grid_falls_back() {
    let mut rows = vec![vec!["#FFFFFF".to_owned(); GRID_SIZE]; GRID_SIZE];
    rows[3][3] = "red".to_owned();
    let storage = MemoryStore::new().with_entry(STORAGE_KEY, serde_json::to_string(&rows).unwrap());
    assert!(GridStore::open(storage).grid().is_blank());
}

#[test]
fn test_lowercase_saved_colors_are_accepted() {
    let mut rows = vec![vec!["#ffffff".to_owned(); GRID_SIZE]; GRID_SIZE];
    rows[1][2] = "#ff0000".to_owned();
    let storage = MemoryStore::new().with_entry(STORAGE_KEY, serde_json::to_string(&rows).unwrap());
    assert_eq!(GridStore::open(storage).grid().at(1, 2), RED);
}

#[test]
fn test_bad_high_score_reads_as_zero() {
    let storage = MemoryStore::new().with_entry(HIGH_SCORE_KEY, "lots");
    assert_eq!(GridStore::open(storage).high_score(), 0);
}

#[test]
fn test_high_score_tracks_best_session() {
    let storage = MemoryStore::new().with_entry(HIGH_SCORE_KEY, "3");
    let mut store = GridStore::open(storage);

    paint_row(&mut store, 2);
    assert_eq!(store.high_score(), 3);
    paint_row_from(&mut store, 2, 5);
    assert_eq!(store.paint_count(), 5);
    assert_eq!(store.high_score(), 5);

    store.execute(Command::ResetScore).unwrap();
    assert_eq!(store.paint_count(), 0);
    assert_eq!(store.high_score(), 5);

    // undo does not give points back
    store.undo();
    assert_eq!(store.paint_count(), 0);
}

fn paint_row_from(store: &mut GridStore<MemoryStore>, from: usize, to: usize) {
    for col in from..to {
        store.paint(0, col, Color::BLACK).unwrap();
    }
}

#[test]
fn test_paint_after_undo_discards_redo_states() {
    let mut store = GridStore::open(MemoryStore::new());
    paint_row(&mut store, 3);
    store.undo();
    store.undo();
    store.paint(1, 0, RED).unwrap();

    let mut expected = grid_after(1);
    expected.set(1, 0, RED).unwrap();
    assert_eq!(*store.grid(), expected);

    assert!(store.undo());
    assert_eq!(*store.grid(), grid_after(1));
    assert!(store.undo());
    assert!(store.grid().is_blank());
    assert!(!store.undo());
}

#[test]
fn test_shapes_reflect_current_grid() {
    let mut store = GridStore::open(MemoryStore::new());
    assert!(store.shapes().is_empty());
    paint_row(&mut store, 6);
    let shapes = store.shapes();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].label(), "Horizontal Line");
}
