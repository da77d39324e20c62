//! Sandcraft content registry library.
//!
//! Exposes the ECS components, resources, systems and events that make up the
//! content registry and interaction gate of a 2D sandbox/crafting game:
//! prefab lookup by content tag, debug/help-level state with change
//! notification, collaborator references and reach-clamped cell targeting.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
