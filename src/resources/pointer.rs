//! Pointer position resource.
//!
//! The input layer writes the current pointer (mouse/touch) position in
//! screen pixels into [`PointerState`]; the interaction gate projects it into
//! world space through the camera.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in screen pixels.
    pub screen: Vec2,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            screen: Vec2::new(x, y),
        }
    }

    pub fn set_screen(&mut self, screen: Vec2) {
        self.screen = screen;
    }
}
