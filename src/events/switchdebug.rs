//! Events and observers that change debug mode.
//!
//! Emitting a [`SwitchDebugEvent`] flips
//! [`InteractionState::debug_mode`](crate::resources::interactionstate::InteractionState::debug_mode);
//! a [`SetDebugModeEvent`] sets it explicitly. Both go through the state's
//! setter, so subscribers are notified once per actual change.
use crate::resources::interactionstate::InteractionState;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Toggle debug mode on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Set debug mode to a specific value.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetDebugModeEvent {
    pub enabled: bool,
}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut state: ResMut<InteractionState>,
) {
    let enabled = state.toggle_debug_mode();
    info!("Debug mode {}", if enabled { "enabled" } else { "disabled" });
}

pub fn set_debug_mode_observer(trigger: On<SetDebugModeEvent>, mut state: ResMut<InteractionState>) {
    if state.set_debug_mode(trigger.event().enabled) {
        info!("Debug mode set to {}", trigger.event().enabled);
    }
}
