//! Binding and clearing of collaborator references.
//!
//! [`bind_scene_refs`] must run after the collaborators have been spawned;
//! the setup hook queues it right behind its spawn commands so ordering is
//! explicit rather than frame-based.

use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryFilter;
use log::{info, warn};

use crate::components::grid::Grid;
use crate::components::player::Player;
use crate::components::sceneroles::{DragParent, HighlightTracker, Tooltip};
use crate::resources::scenerefs::SceneRefs;

fn find_role<F: QueryFilter>(query: &Query<Entity, F>, role: &str) -> Option<Entity> {
    let mut found = query.iter();
    let first = found.next();
    match first {
        None => warn!("No {} found while binding scene references", role),
        Some(entity) if found.next().is_some() => {
            warn!("Several {} entities found, binding {:?}", role, entity)
        }
        Some(_) => {}
    }
    first
}

/// Locate every collaborator role and store it in [`SceneRefs`].
pub fn bind_scene_refs(
    mut refs: ResMut<SceneRefs>,
    players: Query<Entity, With<Player>>,
    grids: Query<Entity, With<Grid>>,
    trackers: Query<Entity, With<HighlightTracker>>,
    tooltips: Query<Entity, With<Tooltip>>,
    drag_parents: Query<Entity, With<DragParent>>,
) {
    refs.set_player(find_role(&players, "player"));
    refs.set_grid(find_role(&grids, "grid"));
    refs.set_highlight_tracker(find_role(&trackers, "highlight tracker"));
    refs.set_tooltip(find_role(&tooltips, "tooltip"));
    refs.set_drag_parent(find_role(&drag_parents, "drag parent"));
    info!("Scene references bound: {:?}", *refs);
}

/// Forget every collaborator reference.
pub fn clear_scene_refs(mut refs: ResMut<SceneRefs>) {
    refs.clear();
    info!("Scene references cleared");
}
