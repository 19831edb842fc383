//! A subscriber that prints received notifications to the console.
//!
//! This is the built-in subscriber implementation used by the binary's
//! startup registrations, and is handy for eyeballing the fan-out path.

use tracing::debug;

use crate::notification::Subscriber;

/// A named console-printing subscriber.
pub struct ConsoleSubscriber {
    name: String,
}

impl ConsoleSubscriber {
    /// Creates a subscriber that announces itself as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn render(&self, subject: &str, message: &str) -> String {
        format!(
            "{} received a notification:\nSubject: {}\nMessage: {}\n\n",
            self.name, subject, message
        )
    }
}

impl Subscriber for ConsoleSubscriber {
    fn receive(&self, subject: &str, message: &str) {
        debug!(name = %self.name, "subscriber received notification");
        print!("{}", self.render(subject, message));
    }
}
