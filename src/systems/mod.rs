//! ECS systems.
//!
//! - [`gamestate`] – pending-transition detection and state run conditions
//! - [`interaction`] – reach-clamped position and pointer to cell resolution
//! - [`scenerefs`] – binding and clearing collaborator references
pub mod gamestate;
pub mod interaction;
pub mod scenerefs;
