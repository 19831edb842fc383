//! The single external entry point for sending and subscribing.

use std::sync::Arc;

use tracing::debug;

use crate::channels;
use crate::error::Error;
use crate::notification::{Subscriber, SubscriptionRegistry};

/// Facade over the send and subscribe flows.
///
/// Sending resolves the label against the fixed channel set and writes the
/// channel's rendering to stdout. Subscribing forwards the raw label to the
/// shared registry. The two flows are disjoint: a send never fans out to
/// registered subscribers; fan-out happens only through
/// [`SubscriptionRegistry::notify`].
pub struct NotificationFacade {
    registry: Arc<SubscriptionRegistry>,
}

impl NotificationFacade {
    /// Creates a facade over `registry`.
    pub fn new(registry: Arc<SubscriptionRegistry>) -> Self {
        Self { registry }
    }

    /// Registers `subscriber` under the raw `channel` label.
    ///
    /// No case normalization happens at this layer.
    pub fn subscribe(&self, channel: &str, subscriber: Arc<dyn Subscriber>) {
        self.registry.subscribe(channel, subscriber);
    }

    /// Resolves `channel` and prints its rendering of the subject/message
    /// pair.
    ///
    /// Fails with [`Error::InvalidChannel`] before producing any output if
    /// the label is unknown.
    pub fn send_notification(
        &self,
        channel: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), Error> {
        let variant = channels::resolve(channel)?;
        debug!(channel = variant.name(), "sending notification");
        print!("{}", variant.render(subject, message));
        Ok(())
    }
}
