//! Game state transition event and observer.
//!
//! Systems request a change by updating [`NextGameState`]. Emitting a
//! [`GameStateChangedEvent`] then triggers [`observe_gamestate_change_event`],
//! which applies the transition to [`GameState`] and runs the hooks stored in
//! [`HookStore`].
use crate::game::run_hook;
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::hookstore::{HookStore, StateHook};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Apply the pending transition in [`NextGameState`], if any.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets the request
///   and queues the enter hook of the new state.
/// - If either state resource is missing, logs a warning and returns.
///
/// # Panics
///
/// Panics if the hook for the entered state was never registered.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    hooks: Res<HookStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state);
            next_game_state.reset();
            on_state_enter(new_state, &mut commands, &hooks);
        }
        Unchanged => debug!("No state change pending."),
    }
}

fn on_state_enter(state: GameStates, commands: &mut Commands, hooks: &HookStore) {
    let hook = match state {
        GameStates::None => return,
        GameStates::Setup => StateHook::Setup,
        GameStates::Playing => StateHook::EnterPlay,
        GameStates::Quitting => StateHook::QuitGame,
    };
    run_hook(commands, hooks, hook);
}
