//! Collaborator role components.
//!
//! Entities tagged with these components are picked up by
//! [`bind_scene_refs`](crate::systems::scenerefs::bind_scene_refs) and stored
//! in [`SceneRefs`](crate::resources::scenerefs::SceneRefs) so other systems
//! can find them without searching the world.

use crate::components::grid::CellCoord;
use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Tracks the cell currently targeted by the pointer.
///
/// Updated every frame by
/// [`update_highlighted_cell`](crate::systems::interaction::update_highlighted_cell).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightTracker {
    /// Targeted cell, `None` until the first update.
    pub cell: Option<CellCoord>,
    /// Reach-clamped world point that produced `cell`.
    pub point: Vec2,
}

/// Tooltip widget owned by the UI layer.
#[derive(Component, Clone, Debug, Default)]
pub struct Tooltip {
    pub text: String,
    pub visible: bool,
}

/// Container that dragged UI items are reparented to while being dragged.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DragParent;
