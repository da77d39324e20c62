//! High-level game state resources.
//!
//! [`GameState`] is the authoritative current state; [`NextGameState`] holds a
//! requested transition until
//! `crate::events::gamestate::observe_gamestate_change_event` applies it and
//! runs the hooks registered in
//! [`HookStore`](crate::resources::hookstore::HookStore).

use bevy_ecs::prelude::Resource;

/// Discrete high-level states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Collaborators are being created and bound.
    Setup,
    Playing,
    Quitting,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> GameStates {
        self.current
    }

    /// Update the current state without running hooks.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Mark a transition to `next` as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextGameStates::Pending(_))
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
