//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world once at startup and read by
//! systems during execution.
//!
//! Overview
//! - `camera2d` – shared 2D camera used for screen/world transforms
//! - `changenotifier` – ordered subscriber list used for flag changes
//! - `contentregistry` – tag-to-prefab tables and crafting recipes
//! - `contenttypes` – the content-type tag enums
//! - `gameconfig` – INI-backed startup settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `hookstore` – state-transition hook systems
//! - `interactionstate` – debug mode and help level with change notification
//! - `pointer` – pointer position in screen pixels
//! - `scenerefs` – references to the player, grid and UI collaborators
pub mod camera2d;
pub mod changenotifier;
pub mod contentregistry;
pub mod contenttypes;
pub mod gameconfig;
pub mod gamestate;
pub mod hookstore;
pub mod interactionstate;
pub mod pointer;
pub mod scenerefs;
