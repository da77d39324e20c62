//! Registry of state-transition hook systems.
//!
//! Hooks are registered once in `main` (or a test) and looked up by the
//! game-state observer when a transition happens, so the observer does not
//! need to know the concrete systems.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Well-known hook slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateHook {
    /// Spawns or locates collaborators when entering `Setup`.
    Setup,
    /// Binds collaborator references; run after `Setup` has spawned them.
    BindSceneRefs,
    /// Runs when entering `Playing`.
    EnterPlay,
    /// Teardown when entering `Quitting`.
    QuitGame,
    /// Forgets collaborator references; run by the `QuitGame` hook.
    ClearSceneRefs,
}

/// Map of hook slots to system IDs.
#[derive(Resource, Debug, Default)]
pub struct HookStore {
    map: FxHashMap<StateHook, SystemId>,
}

impl HookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for `hook`, replacing any previous system.
    pub fn insert(&mut self, hook: StateHook, id: SystemId) {
        self.map.insert(hook, id);
    }

    pub fn get(&self, hook: StateHook) -> Option<SystemId> {
        self.map.get(&hook).copied()
    }
}
