//! Cross-scene collaborator references.
//!
//! [`SceneRefs`] records which entities play the player, grid, highlight
//! tracker, tooltip and drag-parent roles. It is filled by
//! [`bind_scene_refs`](crate::systems::scenerefs::bind_scene_refs) once the
//! collaborators exist and emptied by
//! [`clear_scene_refs`](crate::systems::scenerefs::clear_scene_refs) at
//! teardown. The entities themselves are owned by whoever spawned them.

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneRefs {
    player: Option<Entity>,
    grid: Option<Entity>,
    highlight_tracker: Option<Entity>,
    tooltip: Option<Entity>,
    drag_parent: Option<Entity>,
}

impl SceneRefs {
    pub fn player(&self) -> Option<Entity> {
        self.player
    }
    pub fn set_player(&mut self, entity: Option<Entity>) {
        self.player = entity;
    }
    pub fn grid(&self) -> Option<Entity> {
        self.grid
    }
    pub fn set_grid(&mut self, entity: Option<Entity>) {
        self.grid = entity;
    }
    pub fn highlight_tracker(&self) -> Option<Entity> {
        self.highlight_tracker
    }
    pub fn set_highlight_tracker(&mut self, entity: Option<Entity>) {
        self.highlight_tracker = entity;
    }
    pub fn tooltip(&self) -> Option<Entity> {
        self.tooltip
    }
    pub fn set_tooltip(&mut self, entity: Option<Entity>) {
        self.tooltip = entity;
    }
    pub fn drag_parent(&self) -> Option<Entity> {
        self.drag_parent
    }
    pub fn set_drag_parent(&mut self, entity: Option<Entity>) {
        self.drag_parent = entity;
    }

    /// Whether position resolution can run (player and grid are bound).
    pub fn can_resolve_positions(&self) -> bool {
        self.player.is_some() && self.grid.is_some()
    }

    /// Forget every reference.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
