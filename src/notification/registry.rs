//! Ordered subscription bookkeeping and synchronous fan-out.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::notification::Subscriber;

/// Maps channel labels to the subscribers registered under them.
///
/// The registry is an explicitly constructed value owned by whoever composes
/// the application, typically shared behind an `Arc`. Labels are
/// uninterpreted keys: no case folding is applied, so "email" and "Email"
/// address different subscriber lists. Lists live for the lifetime of the
/// registry.
#[derive(Default)]
pub struct SubscriptionRegistry {
    subscribers: Mutex<HashMap<String, Vec<Arc<dyn Subscriber>>>>,
}

impl SubscriptionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` under `channel`, creating the channel's list on
    /// first use.
    ///
    /// Always succeeds. Duplicate registrations are kept and produce one
    /// callback each on fan-out.
    pub fn subscribe(&self, channel: &str, subscriber: Arc<dyn Subscriber>) {
        let mut subscribers = self.subscribers.lock().unwrap();
        let entries = subscribers.entry(channel.to_string()).or_default();
        entries.push(subscriber);
        debug!(channel, count = entries.len(), "subscriber registered");
    }

    /// Invokes `receive` on every subscriber registered under `channel`, in
    /// subscription order. A label with no subscribers is a no-op.
    pub fn notify(&self, channel: &str, subject: &str, message: &str) {
        // Snapshot the list so a subscriber can re-enter the registry from
        // its callback without deadlocking on the map lock.
        let entries: Vec<Arc<dyn Subscriber>> = {
            let subscribers = self.subscribers.lock().unwrap();
            match subscribers.get(channel) {
                Some(entries) => entries.clone(),
                None => return,
            }
        };
        debug!(channel, count = entries.len(), "fanning out notification");
        for subscriber in entries {
            subscriber.receive(subject, message);
        }
    }
}
