//! Interaction gate integration tests.
//!
//! Build a world with a player and a grid, bind them through
//! `bind_scene_refs`, then resolve positions through `InteractionGate`.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec2;
use proptest::prelude::*;

use sandcraft::components::grid::{CellCoord, Grid};
use sandcraft::components::mapposition::MapPosition;
use sandcraft::components::player::Player;
use sandcraft::components::sceneroles::{DragParent, HighlightTracker, Tooltip};
use sandcraft::resources::camera2d::{Camera2D, Camera2DRes};
use sandcraft::resources::pointer::PointerState;
use sandcraft::resources::scenerefs::SceneRefs;
use sandcraft::systems::interaction::{
    InteractionGate, clamp_to_reach, update_highlighted_cell,
};
use sandcraft::systems::scenerefs::{bind_scene_refs, clear_scene_refs};

const EPSILON: f32 = 1e-3;

fn tick_bind(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(bind_scene_refs);
    schedule.run(world);
}

fn tick_clear(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(clear_scene_refs);
    schedule.run(world);
}

fn tick_highlight(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_highlighted_cell);
    schedule.run(world);
}

fn make_world(player_pos: Vec2, reach: f32, grid: Grid) -> World {
    let mut world = World::new();
    world.insert_resource(SceneRefs::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Camera2DRes::default());
    world.spawn((MapPosition::from_vec(player_pos), Player::new(reach)));
    world.spawn(grid);
    world.spawn(HighlightTracker::default());
    tick_bind(&mut world);
    world
}

fn resolve(
    world: &World,
    state: &mut SystemState<InteractionGate<'static, 'static>>,
    target: Vec2,
) -> (CellCoord, Vec2) {
    let gate = state.get(world);
    (gate.cell_at_position(target), gate.clamp_position(target))
}

#[test]
fn far_target_is_clamped_to_reach() {
    let mut world = make_world(Vec2::ZERO, 5.0, Grid::default());
    let mut state = SystemState::<InteractionGate>::new(&mut world);

    let (cell, point) = resolve(&world, &mut state, Vec2::new(10.0, 0.0));
    assert!((point - Vec2::new(5.0, 0.0)).length() < EPSILON);
    assert_eq!(cell, Grid::default().cell_at(Vec2::new(5.0, 0.0)));
}

#[test]
fn target_within_reach_resolves_directly() {
    let grid = Grid::new(Vec2::new(-8.0, -8.0), 2.0);
    let mut world = make_world(Vec2::new(1.0, 1.0), 5.0, grid);
    let mut state = SystemState::<InteractionGate>::new(&mut world);

    for target in [Vec2::new(1.0, 1.0), Vec2::new(3.5, -1.0), Vec2::new(-2.0, 4.9)] {
        let (cell, point) = resolve(&world, &mut state, target);
        assert_eq!(point, target);
        assert_eq!(cell, grid.cell_at(target));
    }
}

#[test]
fn clamping_follows_the_player() {
    let mut world = make_world(Vec2::new(100.0, 50.0), 3.0, Grid::default());
    let mut state = SystemState::<InteractionGate>::new(&mut world);

    let (cell, point) = resolve(&world, &mut state, Vec2::new(100.0, 0.0));
    assert!((point - Vec2::new(100.0, 47.0)).length() < EPSILON);
    assert_eq!(cell, Grid::default().cell_at(point));

    let player = world.resource::<SceneRefs>().player().unwrap();
    world.get_mut::<MapPosition>(player).unwrap().translate(0.0, -40.0);
    let (_, point) = resolve(&world, &mut state, Vec2::new(100.0, 0.0));
    assert!((point - Vec2::new(100.0, 7.0)).length() < EPSILON);
}

#[test]
fn pointer_resolution_goes_through_the_camera() {
    let mut world = make_world(Vec2::ZERO, 5.0, Grid::default());
    world.insert_resource(Camera2DRes(Camera2D {
        offset: Vec2::new(320.0, 180.0),
        target: Vec2::ZERO,
        rotation: 0.0,
        zoom: 16.0,
    }));
    // 2 world units right and 1 down of the camera target.
    world.insert_resource(PointerState::new(352.0, 196.0));

    let mut state = SystemState::<InteractionGate>::new(&mut world);
    let gate = state.get(&world);
    assert!((gate.pointer_world() - Vec2::new(2.0, 1.0)).length() < EPSILON);
    let (cell, point) = gate.cell_at_pointer();
    assert_eq!(cell, CellCoord::new(2, 1));
    assert!((point - Vec2::new(2.0, 1.0)).length() < EPSILON);
}

#[test]
fn pointer_far_away_is_clamped_and_returns_point() {
    let mut world = make_world(Vec2::ZERO, 5.0, Grid::default());
    world.insert_resource(PointerState::new(-1000.0, 0.0));

    let mut state = SystemState::<InteractionGate>::new(&mut world);
    let (cell, point) = state.get(&world).cell_at_pointer();
    assert!((point - Vec2::new(-5.0, 0.0)).length() < EPSILON);
    assert_eq!(cell, Grid::default().cell_at(point));
}

#[test]
fn highlight_tracker_follows_pointer() {
    let mut world = make_world(Vec2::ZERO, 5.0, Grid::default());
    world.insert_resource(PointerState::new(2.5, 3.5));
    tick_highlight(&mut world);

    let tracker_entity = world.resource::<SceneRefs>().highlight_tracker().unwrap();
    let tracker = world.get::<HighlightTracker>(tracker_entity).unwrap();
    assert_eq!(tracker.cell, Some(CellCoord::new(2, 3)));
    assert!((tracker.point - Vec2::new(2.5, 3.5)).length() < EPSILON);
}

#[test]
fn selected_cell_reports_the_highlighted_cell() {
    let mut world = make_world(Vec2::ZERO, 5.0, Grid::default());
    let mut state = SystemState::<InteractionGate>::new(&mut world);
    assert_eq!(state.get(&world).selected_cell(), None);

    world.insert_resource(PointerState::new(2.5, 3.5));
    tick_highlight(&mut world);
    assert_eq!(state.get(&world).selected_cell(), Some(CellCoord::new(2, 3)));

    // Far pointer: the selection is the clamped cell, not the one under the pointer.
    world.insert_resource(PointerState::new(-1000.0, 0.0));
    tick_highlight(&mut world);
    assert_eq!(
        state.get(&world).selected_cell(),
        Some(Grid::default().cell_at(Vec2::new(-5.0, 0.0)))
    );
}

#[test]
fn selected_cell_is_none_without_tracker() {
    let mut world = World::new();
    world.insert_resource(SceneRefs::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Camera2DRes::default());
    let mut state = SystemState::<InteractionGate>::new(&mut world);
    assert_eq!(state.get(&world).selected_cell(), None);
}

#[test]
fn highlight_without_tracker_is_a_no_op() {
    let mut world = World::new();
    world.insert_resource(SceneRefs::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Camera2DRes::default());
    tick_highlight(&mut world);
}

#[test]
fn bind_and_clear_scene_refs() {
    let mut world = World::new();
    world.insert_resource(SceneRefs::default());
    let player = world.spawn((MapPosition::default(), Player::default())).id();
    let grid = world.spawn(Grid::default()).id();
    let tooltip = world.spawn(Tooltip::default()).id();
    let drag = world.spawn(DragParent).id();

    tick_bind(&mut world);
    let refs = *world.resource::<SceneRefs>();
    assert_eq!(refs.player(), Some(player));
    assert_eq!(refs.grid(), Some(grid));
    assert_eq!(refs.tooltip(), Some(tooltip));
    assert_eq!(refs.drag_parent(), Some(drag));
    assert_eq!(refs.highlight_tracker(), None);
    assert!(refs.can_resolve_positions());

    tick_clear(&mut world);
    assert_eq!(*world.resource::<SceneRefs>(), SceneRefs::default());
}

#[test]
#[should_panic(expected = "without a bound player")]
fn resolution_without_player_panics() {
    let mut world = World::new();
    world.insert_resource(SceneRefs::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Camera2DRes::default());
    world.spawn(Grid::default());
    tick_bind(&mut world);

    let mut state = SystemState::<InteractionGate>::new(&mut world);
    state.get(&world).cell_at_position(Vec2::ONE);
}

#[test]
#[should_panic(expected = "without a bound grid")]
fn resolution_without_grid_panics() {
    let mut world = World::new();
    world.insert_resource(SceneRefs::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Camera2DRes::default());
    world.spawn((MapPosition::default(), Player::default()));
    tick_bind(&mut world);

    let mut state = SystemState::<InteractionGate>::new(&mut world);
    state.get(&world).cell_at_position(Vec2::ONE);
}

proptest! {
    #[test]
    fn resolved_point_never_exceeds_reach(
        px in -1.0e3f32..1.0e3,
        py in -1.0e3f32..1.0e3,
        tx in -1.0e6f32..1.0e6,
        ty in -1.0e6f32..1.0e6,
        reach in 0.0f32..50.0,
    ) {
        let origin = Vec2::new(px, py);
        let point = clamp_to_reach(origin, reach, Vec2::new(tx, ty));
        let tolerance = 1e-3 * (1.0 + origin.length().max(reach));
        prop_assert!(point.distance(origin) <= reach + tolerance);
    }

    #[test]
    fn gate_cell_matches_grid_at_clamped_point(
        tx in -1.0e4f32..1.0e4,
        ty in -1.0e4f32..1.0e4,
        reach in 0.5f32..20.0,
        cell_size in 0.25f32..8.0,
    ) {
        let grid = Grid::new(Vec2::ZERO, cell_size);
        let mut world = make_world(Vec2::new(3.0, -2.0), reach, grid);
        let mut state = SystemState::<InteractionGate>::new(&mut world);
        let (cell, point) = resolve(&world, &mut state, Vec2::new(tx, ty));
        prop_assert!(point.distance(Vec2::new(3.0, -2.0)) <= reach + 1e-3);
        prop_assert_eq!(cell, grid.cell_at(point));
    }
}
