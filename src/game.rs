//! Game-state hook systems.
//!
//! These are registered in [`HookStore`] and run by the game-state observer:
//! - [`setup`] spawns the collaborators described by [`GameConfig`] and then
//!   queues the scene-reference binding, so binding always sees them.
//! - [`enter_play`] checks the session is ready to resolve positions.
//! - [`quit_game`] despawns the collaborators and clears their references.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{error, info};

use crate::components::grid::Grid;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sceneroles::{DragParent, HighlightTracker, Tooltip};
use crate::resources::contentregistry::ContentRegistry;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hookstore::{HookStore, StateHook};
use crate::resources::interactionstate::InteractionState;
use crate::resources::scenerefs::SceneRefs;

/// Register every hook system in a fresh [`HookStore`] resource.
pub fn register_hooks(world: &mut World) {
    let mut hooks = HookStore::new();
    hooks.insert(StateHook::Setup, world.register_system(setup));
    hooks.insert(
        StateHook::BindSceneRefs,
        world.register_system(crate::systems::scenerefs::bind_scene_refs),
    );
    hooks.insert(StateHook::EnterPlay, world.register_system(enter_play));
    hooks.insert(StateHook::QuitGame, world.register_system(quit_game));
    hooks.insert(
        StateHook::ClearSceneRefs,
        world.register_system(crate::systems::scenerefs::clear_scene_refs),
    );
    world.insert_resource(hooks);
}

/// Queue the system registered for `hook`.
///
/// # Panics
///
/// Panics if `hook` was never registered.
pub fn run_hook(commands: &mut Commands, hooks: &HookStore, hook: StateHook) {
    let Some(id) = hooks.get(hook) else {
        panic!("{:?} hook not registered in HookStore", hook);
    };
    commands.run_system(id);
}

/// Spawn the player, grid and UI collaborators, then bind them.
pub fn setup(mut commands: Commands, config: Res<GameConfig>, hooks: Res<HookStore>) {
    commands.spawn((
        MapPosition::new(0.0, 0.0),
        Player::new(config.max_interaction_distance),
    ));
    commands.spawn(Grid::new(Vec2::ZERO, config.cell_size));
    commands.spawn(HighlightTracker::default());
    commands.spawn(Tooltip::default());
    commands.spawn(DragParent);
    info!(
        "Spawned collaborators: reach {}, cell size {}",
        config.max_interaction_distance, config.cell_size
    );

    run_hook(&mut commands, &hooks, StateHook::BindSceneRefs);
}

pub fn enter_play(
    refs: Res<SceneRefs>,
    registry: Res<ContentRegistry>,
    state: Res<InteractionState>,
) {
    if !refs.can_resolve_positions() {
        error!("Entered Playing without a bound player and grid");
    }
    info!(
        "Playing: debug={}, help level={}, {} recipes",
        state.debug_mode(),
        state.help_level(),
        registry.recipes().len()
    );
}

/// Despawn collaborators and clear their references.
pub fn quit_game(
    mut commands: Commands,
    hooks: Res<HookStore>,
    collaborators: Query<
        Entity,
        Or<(
            With<Player>,
            With<Grid>,
            With<HighlightTracker>,
            With<Tooltip>,
            With<DragParent>,
        )>,
    >,
) {
    run_hook(&mut commands, &hooks, StateHook::ClearSceneRefs);
    for entity in collaborators.iter() {
        commands.entity(entity).despawn();
    }
    info!("Quitting");
}
