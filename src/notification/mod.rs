//! Handles the registration and fan-out of notifications to subscribers.
//!
//! This module defines the core trait and structures for a decoupled
//! publish/subscribe mechanism: callers register [`Subscriber`]s under a
//! channel label, and a later fan-out delivers a subject/message pair to
//! everything registered under that label without the publisher being aware
//! of the specific subscriber implementations that are listening.

pub mod console_subscriber;
pub mod registry;

pub use console_subscriber::ConsoleSubscriber;
pub use registry::SubscriptionRegistry;

/// A recipient of notifications for a channel label.
///
/// Identity matters only for registry membership: the same subscriber may be
/// registered more than once and is then called back once per registration.
pub trait Subscriber: Send + Sync {
    /// Called synchronously for each notification fanned out to a channel
    /// this subscriber is registered under.
    fn receive(&self, subject: &str, message: &str);
}
