//! Debug-mode and help-level state with change notification.
//!
//! Both values live in the [`InteractionState`] resource. Setting a value
//! equal to the current one does nothing; setting a different value stores
//! it and then calls every subscriber of that value, in subscription order.
//!
//! The help-level [`HelpLevelBounds`] are advisory. The setter never clamps
//! or rejects out-of-range levels; UI code reads the bounds to decide what to
//! offer.

use crate::resources::changenotifier::{ChangeNotifier, SubscriptionId};
use bevy_ecs::prelude::Resource;
use log::debug;

/// Configured range and starting value of the help level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLevelBounds {
    pub min: i32,
    pub max: i32,
    pub start: i32,
}

impl Default for HelpLevelBounds {
    fn default() -> Self {
        Self {
            min: 0,
            max: 2,
            start: 2,
        }
    }
}

impl HelpLevelBounds {
    /// Whether `level` lies within `min..=max`.
    pub fn contains(&self, level: i32) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

/// Debug mode is on by default in development builds only.
pub fn default_debug_mode() -> bool {
    cfg!(debug_assertions)
}

/// Interaction flags shared by gameplay and UI systems.
#[derive(Resource, Debug)]
pub struct InteractionState {
    debug_mode: bool,
    help_level: i32,
    bounds: HelpLevelBounds,
    debug_mode_listeners: ChangeNotifier<bool>,
    help_level_listeners: ChangeNotifier<i32>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(default_debug_mode(), HelpLevelBounds::default())
    }
}

impl InteractionState {
    /// Create the state with the help level at `bounds.start`.
    pub fn new(debug_mode: bool, bounds: HelpLevelBounds) -> Self {
        Self {
            debug_mode,
            help_level: bounds.start,
            bounds,
            debug_mode_listeners: ChangeNotifier::new(),
            help_level_listeners: ChangeNotifier::new(),
        }
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Returns `true` if the value changed and subscribers were notified.
    pub fn set_debug_mode(&mut self, enabled: bool) -> bool {
        if self.debug_mode == enabled {
            return false;
        }
        self.debug_mode = enabled;
        debug!("Debug mode {}", if enabled { "enabled" } else { "disabled" });
        self.debug_mode_listeners.notify(&enabled);
        true
    }

    /// Flip debug mode and return the new value.
    pub fn toggle_debug_mode(&mut self) -> bool {
        let enabled = !self.debug_mode;
        self.set_debug_mode(enabled);
        enabled
    }

    pub fn help_level(&self) -> i32 {
        self.help_level
    }

    /// Returns `true` if the value changed and subscribers were notified.
    ///
    /// Levels outside [`HelpLevelBounds`] are stored as given.
    pub fn set_help_level(&mut self, level: i32) -> bool {
        if self.help_level == level {
            return false;
        }
        if !self.bounds.contains(level) {
            debug!(
                "Help level {} is outside the configured range {}..={}",
                level, self.bounds.min, self.bounds.max
            );
        }
        self.help_level = level;
        debug!("Help level set to {}", level);
        self.help_level_listeners.notify(&level);
        true
    }

    pub fn bounds(&self) -> HelpLevelBounds {
        self.bounds
    }

    pub fn on_debug_mode_changed<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&bool) + Send + Sync + 'static,
    {
        self.debug_mode_listeners.subscribe(callback)
    }

    pub fn unsubscribe_debug_mode(&mut self, id: SubscriptionId) -> bool {
        self.debug_mode_listeners.unsubscribe(id)
    }

    pub fn on_help_level_changed<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&i32) + Send + Sync + 'static,
    {
        self.help_level_listeners.subscribe(callback)
    }

    pub fn unsubscribe_help_level(&mut self, id: SubscriptionId) -> bool {
        self.help_level_listeners.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder<T: Copy + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |v: &T| sink.lock().unwrap().push(*v))
    }

    #[test]
    fn test_help_level_starts_at_configured_start() {
        let bounds = HelpLevelBounds {
            min: 0,
            max: 5,
            start: 2,
        };
        let state = InteractionState::new(false, bounds);
        assert_eq!(state.help_level(), 2);
        assert_eq!(state.bounds(), bounds);
        assert!(!state.debug_mode());
    }

    #[test]
    fn test_default_bounds_start_at_the_top_level() {
        let state = InteractionState::new(false, HelpLevelBounds::default());
        assert_eq!(state.help_level(), 2);
        assert_eq!(
            state.bounds(),
            HelpLevelBounds {
                min: 0,
                max: 2,
                start: 2
            }
        );
        assert!(state.bounds().contains(0));
        assert!(!state.bounds().contains(3));
    }

    #[test]
    fn test_same_value_does_not_notify() {
        let mut state = InteractionState::new(true, HelpLevelBounds::default());
        let (debug_seen, debug_cb) = recorder::<bool>();
        let (help_seen, help_cb) = recorder::<i32>();
        state.on_debug_mode_changed(debug_cb);
        state.on_help_level_changed(help_cb);

        assert!(!state.set_debug_mode(true));
        assert!(!state.set_help_level(2));
        assert!(debug_seen.lock().unwrap().is_empty());
        assert!(help_seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_new_value_notifies_each_subscriber_once() {
        let mut state = InteractionState::new(false, HelpLevelBounds::default());
        let (first, cb1) = recorder::<bool>();
        let (second, cb2) = recorder::<bool>();
        state.on_debug_mode_changed(cb1);
        state.on_debug_mode_changed(cb2);

        assert!(state.set_debug_mode(true));
        assert!(state.debug_mode());
        assert_eq!(*first.lock().unwrap(), vec![true]);
        assert_eq!(*second.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_help_level_is_not_clamped() {
        let mut state = InteractionState::new(false, HelpLevelBounds::default());
        let (seen, cb) = recorder::<i32>();
        state.on_help_level_changed(cb);

        assert!(state.set_help_level(42));
        assert!(state.set_help_level(-7));
        assert_eq!(state.help_level(), -7);
        assert_eq!(*seen.lock().unwrap(), vec![42, -7]);
        assert!(!state.bounds().contains(42));
    }

    #[test]
    fn test_toggle_and_unsubscribe() {
        let mut state = InteractionState::new(false, HelpLevelBounds::default());
        let (seen, cb) = recorder::<bool>();
        let id = state.on_debug_mode_changed(cb);

        assert!(state.toggle_debug_mode());
        assert!(state.unsubscribe_debug_mode(id));
        assert!(!state.toggle_debug_mode());
        assert_eq!(*seen.lock().unwrap(), vec![true]);
        assert!(!state.unsubscribe_debug_mode(id));
    }

    #[test]
    fn test_default_debug_mode_follows_build_profile() {
        assert_eq!(InteractionState::default().debug_mode(), cfg!(debug_assertions));
    }
}
