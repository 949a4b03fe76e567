//! Progress signals
//!
//! A `ProgressSignal` holds the latest value of a continuously updated scalar
//! (scroll progress, smoothed progress) and notifies a fixed set of subscriber
//! callbacks once per update. There is exactly one writer; every subscriber
//! sees the same value in the same update.
//!
//! Subscriptions are released explicitly with [`ProgressSignal::unsubscribe`]
//! or all at once with [`ProgressSignal::clear`], which is what the owning
//! view does on unmount.

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// Handle to a registered subscriber
    pub struct Subscription;
}

type Callback = Box<dyn FnMut(f32)>;

/// A single-writer scalar with change notification
pub struct ProgressSignal {
    value: f32,
    subscribers: SlotMap<Subscription, Callback>,
}

impl ProgressSignal {
    /// Create a signal holding `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            subscribers: SlotMap::with_key(),
        }
    }

    /// Current value
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Store a new value and notify every subscriber.
    ///
    /// Subscribers are notified even if the value did not change; callers
    /// decide whether an update is meaningful.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        trace!(value, subscribers = self.subscribers.len(), "progress signal update");
        for callback in self.subscribers.values_mut() {
            callback(value);
        }
    }

    /// Register a callback invoked with every subsequent value
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(f32) + 'static,
    {
        self.subscribers.insert(Box::new(callback))
    }

    /// Remove a subscriber. Returns false if the handle was already released.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.subscribers.remove(subscription).is_some()
    }

    /// Drop every subscriber
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ProgressSignal {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl std::fmt::Debug for ProgressSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressSignal")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
