#![allow(clippy::unwrap_used)]

use roomplan::editing::{Change, Selection, Tool};
use roomplan::math::{Point2, ViewTransform};
use roomplan::model::{OpeningKind, Room};
use roomplan::operations::build::PieceKind;
use roomplan::persistence::{load_room, save_room, MemoryStorage};
use roomplan::topology::{derive_segments, WallRef, WallSide};
use roomplan::{Editor, EditorConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Editor with a view fitted to an 800x600 stage, so every click goes
/// through a non-trivial screen transform.
fn editor() -> Editor {
    init_tracing();
    let mut ed = Editor::new(EditorConfig::default()).unwrap();
    ed.fit_view(800.0, 600.0);
    ed
}

fn screen(ed: &Editor, x: f64, y: f64) -> Point2 {
    ed.view().to_screen(&Point2::new(x, y))
}

fn click(ed: &mut Editor, x: f64, y: f64) -> Option<Change> {
    let p = screen(ed, x, y);
    ed.click(&p)
}

#[test]
fn rectangle_placement_on_top_wall() {
    let mut ed = editor();
    ed.start_placement(OpeningKind::Window);
    assert_eq!(click(&mut ed, 200.0, 1.0), Some(Change::Openings));

    let (id, opening) = ed.room().openings().next().unwrap();
    assert_eq!(opening.wall, WallRef::Side(WallSide::Top));
    assert!((opening.position - 200.0).abs() < 1e-9);
    assert_eq!(ed.selection(), Selection::Opening(id));
    // Placement is single-shot.
    assert_eq!(ed.tool(), &Tool::Select);
    assert_eq!(click(&mut ed, 200.0, 1.0), None);
    assert_eq!(ed.room().openings().count(), 1);
}

#[test]
fn polygon_close_keeps_three_points_and_stays_drawing() {
    let mut ed = editor();
    ed.toggle_chain_drawing();
    assert_eq!(click(&mut ed, 0.0, 0.0), None);
    assert_eq!(click(&mut ed, 300.0, 0.0), None);
    assert_eq!(click(&mut ed, 300.0, 300.0), None);
    assert_eq!(click(&mut ed, 6.0, 4.0), Some(Change::Boundary));

    let expected = vec![
        Point2::new(0.0, 0.0),
        Point2::new(300.0, 0.0),
        Point2::new(300.0, 300.0),
    ];
    assert_eq!(ed.room().chains(), &[expected.clone()]);
    assert!(ed.room().is_polygon_mode());
    assert!(matches!(ed.tool(), Tool::DrawChain(_)));
    assert!(ed.drawing_points().is_empty());

    // Derivation reproduces the polyline.
    let segments = derive_segments(ed.room().chains());
    assert_eq!(segments.len(), expected.len() - 1);
    for (seg, pair) in segments.iter().zip(expected.windows(2)) {
        assert_eq!(seg.start, pair[0]);
        assert_eq!(seg.end, pair[1]);
    }

    ed.escape();
    assert_eq!(ed.tool(), &Tool::Select);
}

#[test]
fn double_click_finishes_open_chain() {
    let mut ed = editor();
    ed.toggle_chain_drawing();
    click(&mut ed, 0.0, 0.0);
    click(&mut ed, 250.0, 0.0);
    click(&mut ed, 250.0, 0.0);
    let p = screen(&ed, 250.0, 0.0);
    assert_eq!(ed.double_click(&p), Some(Change::Boundary));
    assert_eq!(
        ed.room().chains(),
        &[vec![Point2::new(0.0, 0.0), Point2::new(250.0, 0.0)]]
    );
}

#[test]
fn interior_wall_removal_cascades_to_door() {
    let mut ed = editor();
    ed.toggle_interior_drawing();
    click(&mut ed, 50.0, 50.0);
    assert_eq!(click(&mut ed, 50.0, 250.0), Some(Change::InteriorWalls));
    let Selection::InteriorWall(iw) = ed.selection() else {
        panic!("interior wall not selected");
    };

    ed.start_placement(OpeningKind::Door);
    click(&mut ed, 47.0, 150.0);
    let (_, door) = ed.room().openings().next().unwrap();
    assert_eq!(door.wall, WallRef::Interior(iw));

    assert_eq!(ed.remove_interior_wall(iw).unwrap(), 1);
    assert_eq!(ed.room().interior_walls().count(), 0);
    assert_eq!(ed.room().openings().count(), 0);
    assert_eq!(ed.selection(), Selection::None);
}

#[test]
fn equidistant_interior_wall_wins_over_side() {
    let mut ed = editor();
    // Identity view keeps the click exactly halfway between the walls.
    ed.set_view(ViewTransform::default());
    ed.toggle_interior_drawing();
    click(&mut ed, 40.0, 100.0);
    click(&mut ed, 40.0, 400.0);
    ed.escape();
    assert_eq!(ed.tool(), &Tool::Select);

    ed.start_placement(OpeningKind::Window);
    click(&mut ed, 20.0, 250.0);
    let (_, opening) = ed.room().openings().next().unwrap();
    assert!(matches!(opening.wall, WallRef::Interior(_)));
}

#[test]
fn dragged_door_is_clamped_to_wall_end() {
    let mut ed = editor();
    ed.set_room_size(300.0, 500.0);
    ed.fit_view(800.0, 600.0);
    ed.start_placement(OpeningKind::Door);
    click(&mut ed, 150.0, 2.0);
    let (id, _) = ed.room().openings().next().unwrap();

    let drop = screen(&ed, 10.0, 37.0);
    let anchor = ed.drag_opening_end(id, &drop).unwrap();
    assert!((ed.room().opening(id).unwrap().position - 45.0).abs() < 1e-9);
    assert!((anchor - Point2::new(45.0, 0.0)).norm() < 1e-9);
}

#[test]
fn reset_walls_returns_to_rectangle_and_purges_chain_openings() {
    let mut ed = editor();
    ed.start_placement(OpeningKind::Window);
    click(&mut ed, 200.0, 0.0);

    ed.toggle_chain_drawing();
    click(&mut ed, 0.0, 0.0);
    click(&mut ed, 600.0, 0.0);
    click(&mut ed, 600.0, 0.0);
    let p = screen(&ed, 600.0, 0.0);
    ed.double_click(&p);
    assert!(ed.room().is_polygon_mode());
    ed.escape();

    ed.fit_view(800.0, 600.0);
    ed.start_placement(OpeningKind::BalconyDoor);
    click(&mut ed, 500.0, 3.0);
    assert_eq!(ed.room().openings().count(), 2);

    assert_eq!(ed.reset_walls(), 1);
    assert!(!ed.room().is_polygon_mode());
    let (_, remaining) = ed.room().openings().next().unwrap();
    assert_eq!(remaining.wall, WallRef::Side(WallSide::Top));
}

#[test]
fn door_toggle_shows_in_build() {
    let mut ed = editor();
    ed.start_placement(OpeningKind::Door);
    click(&mut ed, 200.0, 0.0);
    let (id, _) = ed.room().openings().next().unwrap();

    assert!(ed.double_click_opening(id).unwrap());
    let build = ed.build();
    let top = build
        .walls
        .iter()
        .find(|w| w.wall == WallRef::Side(WallSide::Top))
        .unwrap();
    assert_eq!(top.build.doors.len(), 1);
    assert!((top.build.doors[0].swing_angle + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert_eq!(top.build.pieces_of(PieceKind::Glass).count(), 0);
}

#[test]
fn saved_state_excludes_transient_editor_state() {
    let mut ed = editor();
    ed.start_placement(OpeningKind::Window);
    click(&mut ed, 0.0, 250.0);
    ed.toggle_chain_drawing();
    click(&mut ed, 100.0, 100.0);

    let mut storage = MemoryStorage::new();
    save_room(&mut storage, ed.room()).unwrap();

    let mut restored = editor();
    let room: Room = load_room(&storage).unwrap().unwrap();
    restored.replace_room(room);
    assert_eq!(restored.room().openings().count(), 1);
    assert!(restored.room().chains().is_empty());
    assert_eq!(restored.tool(), &Tool::Select);
    assert_eq!(restored.selection(), Selection::None);
}
