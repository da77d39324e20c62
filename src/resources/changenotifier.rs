//! Ordered subscriber list for value-change notifications.
//!
//! [`ChangeNotifier`] stores callbacks in subscription order and calls them
//! synchronously with the new value. Each subscription is identified by a
//! [`SubscriptionId`] that can later be passed to
//! [`ChangeNotifier::unsubscribe`].

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T) + Send + Sync>;

/// Callbacks notified when a value changes.
pub struct ChangeNotifier<T> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Append `callback` to the end of the notification order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Remaining subscribers keep their order.
    ///
    /// Returns `false` if `id` is unknown or was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.subscribers.iter().position(|(sid, _)| *sid == id) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Call every subscriber with `value`, oldest subscription first.
    pub fn notify(&mut self, value: &T) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
