//! Event types and observers.
//!
//! Events let engine-side code request changes without holding the
//! resources themselves.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`helplevel`] – set the help level
//! - [`switchdebug`] – toggle or set debug mode
pub mod gamestate;
pub mod helplevel;
pub mod switchdebug;
