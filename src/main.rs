//! Sandcraft headless session.
//!
//! Builds the ECS world around the content registry and interaction gate,
//! runs it through `Setup → Playing → Quitting`, and resolves the requested
//! targets to grid cells along the way.
//!
//! # Startup order
//!
//! 1. Load `config.ini` (or `--config`) into [`GameConfig`]; apply CLI overrides
//! 2. Load the content tables (or fall back to the built-in set) and validate them
//! 3. Insert resources, register hooks and observers
//! 4. Enter `Setup`: collaborators are spawned, then bound into `SceneRefs`
//! 5. Enter `Playing`: each `--target` is resolved and highlighted
//! 6. Enter `Quitting`: collaborators despawned, references cleared
//!
//! # Running
//!
//! ```sh
//! cargo run -- --target 10 0 --target -2.5 1 --help-level 2
//! ```

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use clap::Parser;
use glam::Vec2;
use log::{error, info};
use std::path::{Path, PathBuf};

use sandcraft::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use sandcraft::events::helplevel::set_help_level_observer;
use sandcraft::events::switchdebug::{set_debug_mode_observer, switch_debug_observer};
use sandcraft::game;
use sandcraft::resources::camera2d::{Camera2D, Camera2DRes};
use sandcraft::resources::contentregistry::{ContentConfig, ContentRegistry};
use sandcraft::resources::gameconfig::GameConfig;
use sandcraft::resources::gamestate::{GameState, GameStates, NextGameState};
use sandcraft::resources::interactionstate::InteractionState;
use sandcraft::resources::pointer::PointerState;
use sandcraft::resources::scenerefs::SceneRefs;
use sandcraft::systems::gamestate::{check_pending_state, state_is_playing};
use sandcraft::systems::interaction::{InteractionGate, update_highlighted_cell};

/// Sandcraft content registry and interaction gate
#[derive(Parser)]
#[command(version, about = "Headless session of the sandcraft content registry.")]
struct Cli {
    /// Settings file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Content tables (JSON). Overrides the path from the settings file.
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Initial debug mode, overriding the settings file.
    #[arg(long, value_name = "BOOL")]
    debug: Option<bool>,

    /// Help level to switch to once playing.
    #[arg(long, value_name = "LEVEL", allow_hyphen_values = true)]
    help_level: Option<i32>,

    /// World position to resolve to a cell; may be repeated.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_hyphen_values = true)]
    target: Vec<f32>,
}

/// Load the content tables. A missing default file falls back to the
/// built-in content; an explicitly requested file must load.
fn load_registry(path: &Path, explicit: bool) -> Option<ContentRegistry> {
    match ContentRegistry::load_from_file(path) {
        Ok(registry) => Some(registry),
        Err(e) if explicit => {
            error!("Failed to load content: {:?}", e);
            None
        }
        Err(e) => {
            info!("{}, using built-in content", e);
            Some(ContentRegistry::from_config(ContentConfig::builtin()))
        }
    }
}

fn request_state(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Settings & content ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{}, using defaults", e);
    }
    if let Some(debug) = cli.debug {
        config.debug_mode = debug;
    }
    let content_path = cli.content.clone().unwrap_or_else(|| config.content_path.clone());
    let Some(registry) = load_registry(&content_path, cli.content.is_some()) else {
        std::process::exit(1);
    };
    if let Err(e) = registry.validate() {
        error!("Refusing to start: {}", e);
        std::process::exit(1);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let mut interaction = InteractionState::new(config.debug_mode, config.help_level_bounds());
    interaction.on_debug_mode_changed(|enabled| info!("[subscriber] debug mode -> {}", enabled));
    interaction.on_help_level_changed(|level| info!("[subscriber] help level -> {}", level));
    world.insert_resource(interaction);
    world.insert_resource(registry);
    world.insert_resource(config);
    world.insert_resource(SceneRefs::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Camera2DRes(Camera2D {
        offset: Vec2::new(320.0, 180.0),
        target: Vec2::ZERO,
        rotation: 0.0,
        zoom: 16.0,
    }));
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    game::register_hooks(&mut world);

    world.add_observer(observe_gamestate_change_event);
    world.add_observer(switch_debug_observer);
    world.add_observer(set_debug_mode_observer);
    world.add_observer(set_help_level_observer);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(update_highlighted_cell.run_if(state_is_playing));

    // --------------- Session ---------------
    request_state(&mut world, GameStates::Setup);
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    update.run(&mut world);

    if let Some(level) = cli.help_level {
        world.trigger(sandcraft::events::helplevel::SetHelpLevelEvent { level });
    }

    let mut gate_state = SystemState::<InteractionGate>::new(&mut world);
    for pair in cli.target.chunks_exact(2) {
        let target = Vec2::new(pair[0], pair[1]);

        let gate = gate_state.get(&world);
        let cell = gate.cell_at_position(target);
        let point = gate.clamp_position(target);
        info!("Target {} -> point {} -> cell {}", target, point, cell);

        // Aim the pointer at the same spot and let the highlight follow it.
        let screen = world.resource::<Camera2DRes>().0.world_to_screen(target);
        world.resource_mut::<PointerState>().set_screen(screen);
        update.run(&mut world);
        info!("Selected cell: {:?}", gate_state.get(&world).selected_cell());
    }

    let registry = world.resource::<ContentRegistry>();
    for recipe in registry.recipes() {
        match registry.placeable_item(recipe.output) {
            Some(block) => info!(
                "Recipe {:?} x{} places '{}'",
                recipe.output, recipe.count, block
            ),
            None => info!(
                "Recipe {:?} x{} yields a non-placeable item",
                recipe.output, recipe.count
            ),
        }
    }

    world.trigger(sandcraft::events::switchdebug::SwitchDebugEvent {});
    request_state(&mut world, GameStates::Quitting);
}
