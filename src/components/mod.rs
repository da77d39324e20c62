//! ECS components for entities.
//!
//! Components carry the data of the collaborators the registry reads:
//! positions, the player's reach, the grid geometry and the UI roles bound
//! into [`SceneRefs`](crate::resources::scenerefs::SceneRefs).
//!
//! Submodules overview:
//! - [`grid`] – grid geometry and world-to-cell resolution
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – player marker carrying the maximum interaction distance
//! - [`sceneroles`] – highlight tracker, tooltip and drag-parent roles

pub mod grid;
pub mod mapposition;
pub mod player;
pub mod sceneroles;
