//! Shared 2D camera resource.
//!
//! Systems agree on a single world/screen transform through [`Camera2DRes`].
//! The transform follows the usual 2D camera convention: `target` is the
//! world point shown at screen position `offset`, the view is rotated by
//! `rotation` degrees around it and scaled by `zoom`.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// 2D camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Screen-space displacement of the target (usually half the screen).
    pub offset: Vec2,
    /// World point the camera looks at.
    pub target: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Scale factor, 1.0 is one screen pixel per world unit.
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

impl Camera2D {
    /// Project a world position to screen space.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let rotation = Vec2::from_angle(self.rotation.to_radians());
        rotation.rotate((world - self.target) * self.zoom) + self.offset
    }

    /// Project a screen position back into world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let inverse = Vec2::from_angle(-self.rotation.to_radians());
        inverse.rotate((screen - self.offset) / self.zoom) + self.target
    }
}

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Camera2DRes(pub Camera2D);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_camera() {
        let cam = Camera2D::default();
        let p = Vec2::new(12.0, -3.0);
        assert!(approx_eq(cam.screen_to_world(p), p));
        assert!(approx_eq(cam.world_to_screen(p), p));
    }

    #[test]
    fn test_offset_target_zoom() {
        let cam = Camera2D {
            offset: Vec2::new(400.0, 300.0),
            target: Vec2::new(10.0, 20.0),
            rotation: 0.0,
            zoom: 2.0,
        };
        // Screen centre shows the target.
        assert!(approx_eq(cam.screen_to_world(Vec2::new(400.0, 300.0)), cam.target));
        assert!(approx_eq(
            cam.screen_to_world(Vec2::new(420.0, 300.0)),
            Vec2::new(20.0, 20.0)
        ));
    }

    #[test]
    fn test_rotation_roundtrip() {
        let cam = Camera2D {
            offset: Vec2::new(320.0, 180.0),
            target: Vec2::new(-5.0, 8.0),
            rotation: 90.0,
            zoom: 4.0,
        };
        let world = Vec2::new(3.5, -2.25);
        assert!(approx_eq(cam.screen_to_world(cam.world_to_screen(world)), world));
        // A quarter turn maps a world step along +x to a screen step along +y.
        let step = cam.world_to_screen(cam.target + Vec2::X) - cam.offset;
        assert!(approx_eq(step, Vec2::new(0.0, 4.0)));
    }
}
