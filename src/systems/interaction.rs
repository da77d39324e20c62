//! Position-to-cell resolution clamped to the player's reach.
//!
//! [`InteractionGate`] is a system parameter bundling everything needed to
//! answer "which cell would the player interact with if they aimed here":
//! the bound player (position and reach), the bound grid, the pointer and
//! the camera. It also reports the cell currently held by the highlight
//! tracker.
//!
//! Resolution requires the player and grid references in
//! [`SceneRefs`] to be bound. Calling it before setup, or after teardown,
//! is a programming error and panics.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use glam::Vec2;

use crate::components::grid::{CellCoord, Grid};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sceneroles::HighlightTracker;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::pointer::PointerState;
use crate::resources::scenerefs::SceneRefs;

/// Move `target` towards `origin` until it is at most `max_distance` away.
///
/// Targets already within reach are returned unchanged.
pub fn clamp_to_reach(origin: Vec2, max_distance: f32, target: Vec2) -> Vec2 {
    origin + (target - origin).clamp_length_max(max_distance)
}

/// Read-only access to the collaborators used for interaction targeting.
#[derive(SystemParam)]
pub struct InteractionGate<'w, 's> {
    refs: Res<'w, SceneRefs>,
    players: Query<'w, 's, (&'static MapPosition, &'static Player)>,
    grids: Query<'w, 's, &'static Grid>,
    pointer: Res<'w, PointerState>,
    camera: Res<'w, Camera2DRes>,
    trackers: Query<'w, 's, &'static HighlightTracker>,
}

impl InteractionGate<'_, '_> {
    /// Player position and maximum interaction distance.
    ///
    /// # Panics
    ///
    /// Panics if no player is bound or the bound entity lacks
    /// [`MapPosition`] or [`Player`].
    pub fn player_reach(&self) -> (Vec2, f32) {
        let Some(entity) = self.refs.player() else {
            panic!("interaction gate used without a bound player");
        };
        let Ok((position, player)) = self.players.get(entity) else {
            panic!("bound player {:?} has no MapPosition/Player", entity);
        };
        (position.pos, player.max_interaction_distance)
    }

    /// The bound grid.
    ///
    /// # Panics
    ///
    /// Panics if no grid is bound or the bound entity lacks [`Grid`].
    pub fn grid(&self) -> &Grid {
        let Some(entity) = self.refs.grid() else {
            panic!("interaction gate used without a bound grid");
        };
        let Ok(grid) = self.grids.get(entity) else {
            panic!("bound grid {:?} has no Grid component", entity);
        };
        grid
    }

    /// `target` clamped to the player's reach.
    pub fn clamp_position(&self, target: Vec2) -> Vec2 {
        let (origin, reach) = self.player_reach();
        clamp_to_reach(origin, reach, target)
    }

    /// Cell the player would interact with when aiming at `target`.
    pub fn cell_at_position(&self, target: Vec2) -> CellCoord {
        let point = self.clamp_position(target);
        self.grid().cell_at(point)
    }

    /// Current pointer position projected into world space.
    pub fn pointer_world(&self) -> Vec2 {
        self.camera.0.screen_to_world(self.pointer.screen)
    }

    /// Cell under the pointer, clamped to reach, plus the clamped world point.
    pub fn cell_at_pointer(&self) -> (CellCoord, Vec2) {
        let point = self.clamp_position(self.pointer_world());
        (self.grid().cell_at(point), point)
    }

    /// Cell last written into the bound [`HighlightTracker`].
    ///
    /// `None` while no tracker is bound or nothing has been highlighted yet.
    pub fn selected_cell(&self) -> Option<CellCoord> {
        let entity = self.refs.highlight_tracker()?;
        self.trackers.get(entity).ok()?.cell
    }
}

/// Write the pointer-targeted cell into the bound [`HighlightTracker`].
///
/// Does nothing while no tracker is bound. Only touches the component when
/// the target actually moved, so change detection stays meaningful.
pub fn update_highlighted_cell(
    mut params: ParamSet<(InteractionGate, Query<&mut HighlightTracker>)>,
) {
    let gate = params.p0();
    let Some(entity) = gate.refs.highlight_tracker() else {
        return;
    };
    if !gate.trackers.contains(entity) {
        return;
    }
    let (cell, point) = gate.cell_at_pointer();

    let mut trackers = params.p1();
    let Ok(mut tracker) = trackers.get_mut(entity) else {
        return;
    };
    if tracker.cell != Some(cell) || tracker.point != point {
        tracker.cell = Some(cell);
        tracker.point = point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_clamp_far_target_to_reach() {
        let clamped = clamp_to_reach(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0));
        assert!((clamped - Vec2::new(5.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_clamp_keeps_target_within_reach() {
        let target = Vec2::new(1.0, -2.0);
        assert_eq!(clamp_to_reach(Vec2::ZERO, 5.0, target), target);
    }

    #[test]
    fn test_clamp_relative_to_origin() {
        let origin = Vec2::new(3.0, 4.0);
        let clamped = clamp_to_reach(origin, 2.0, Vec2::new(3.0, -100.0));
        assert!((clamped - Vec2::new(3.0, 2.0)).length() < EPSILON);
    }

    #[test]
    fn test_clamp_target_on_origin() {
        let origin = Vec2::new(-1.0, 1.0);
        assert_eq!(clamp_to_reach(origin, 5.0, origin), origin);
    }

    #[test]
    fn test_zero_reach_pins_to_origin() {
        let origin = Vec2::new(2.0, 2.0);
        let clamped = clamp_to_reach(origin, 0.0, Vec2::new(9.0, 9.0));
        assert!((clamped - origin).length() < EPSILON);
    }
}
