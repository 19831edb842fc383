//! Courier - console notification dispatch.
//!
//! This library wires channel selection and subscription fan-out behind a
//! single facade: resolve a channel label, render a subject/message pair in
//! the channel's form, and print it. Separately, register subscribers under
//! channel labels and fan notifications out to them in subscription order.

pub mod channels;
pub mod cli;
pub mod error;
pub mod facade;
pub mod notification;

// Re-export the crate surface for convenience
pub use channels::{Channel, EmailChannel, SmsChannel};
pub use error::Error;
pub use facade::NotificationFacade;
pub use notification::{ConsoleSubscriber, Subscriber, SubscriptionRegistry};
