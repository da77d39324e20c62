//! Player collaborator component.
//!
//! Only the data the interaction gate needs is modelled here: the player's
//! maximum interaction reach. Movement and rendering live elsewhere.

use bevy_ecs::prelude::Component;

/// Default reach in world units when no configuration overrides it.
pub const DEFAULT_MAX_INTERACTION_DISTANCE: f32 = 5.0;

/// Marks the player entity and carries its interaction reach.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Maximum distance from the player's [`MapPosition`] at which cells can
    /// be targeted.
    ///
    /// [`MapPosition`]: crate::components::mapposition::MapPosition
    pub max_interaction_distance: f32,
}

impl Player {
    pub fn new(max_interaction_distance: f32) -> Self {
        Self {
            max_interaction_distance,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INTERACTION_DISTANCE)
    }
}
