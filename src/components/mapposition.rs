//! World-space position component.
//!
//! The [`MapPosition`] component stores an entity's position in world
//! coordinates. The interaction gate reads it on the bound player to compute
//! the reach-clamped interaction point.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    /// 2D coordinates in world units.
    pub pos: Vec2,
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Create a MapPosition from an existing Vec2.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Get the underlying Vec2.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Set the entire position.
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Translate by delta.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }
}
