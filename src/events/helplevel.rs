//! Event and observer to change the help level.
//!
//! The level is passed through unchanged; see
//! [`InteractionState::set_help_level`](crate::resources::interactionstate::InteractionState::set_help_level)
//! for the advisory-bounds behaviour.
use crate::resources::interactionstate::InteractionState;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SetHelpLevelEvent {
    pub level: i32,
}

pub fn set_help_level_observer(trigger: On<SetHelpLevelEvent>, mut state: ResMut<InteractionState>) {
    let level = trigger.event().level;
    if state.set_help_level(level) {
        info!("Help level changed to {}", level);
    }
}
