//! Notification channel variants and their selector.
//!
//! Each channel kind renders a subject/message pair into its own fixed text
//! form. Channels carry no state: the selector constructs a fresh value per
//! send and the caller writes the rendering out.

use crate::error::Error;

/// A notification channel that renders subject/message pairs.
pub trait Channel: Send + Sync + std::fmt::Debug {
    /// A unique, descriptive name for the channel (e.g., "email", "sms").
    /// Used for logging.
    fn name(&self) -> &'static str;

    /// Renders the notification text for this channel.
    ///
    /// Pure: identical inputs produce identical output on every call.
    fn render(&self, subject: &str, message: &str) -> String;
}

/// Renders notifications in the email form.
#[derive(Debug)]
pub struct EmailChannel;

impl Channel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    fn render(&self, subject: &str, message: &str) -> String {
        format!(
            "Sending email notification:\nSubject: {}\nMessage: {}\n\n",
            subject, message
        )
    }
}

/// Renders notifications in the SMS form.
#[derive(Debug)]
pub struct SmsChannel;

impl Channel for SmsChannel {
    fn name(&self) -> &'static str {
        "sms"
    }

    fn render(&self, subject: &str, message: &str) -> String {
        format!(
            "Sending SMS notification:\nSubject: {}\nMessage: {}\n\n",
            subject, message
        )
    }
}

/// Resolves a channel label to its variant.
///
/// Matching is ASCII case-insensitive against the fixed set {"Email", "SMS"};
/// any other label is rejected with [`Error::InvalidChannel`].
pub fn resolve(label: &str) -> Result<Box<dyn Channel>, Error> {
    if label.eq_ignore_ascii_case("email") {
        Ok(Box::new(EmailChannel))
    } else if label.eq_ignore_ascii_case("sms") {
        Ok(Box::new(SmsChannel))
    } else {
        Err(Error::InvalidChannel {
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        for label in ["email", "EMAIL", "Email", "eMaIl"] {
            let channel = resolve(label).unwrap();
            assert_eq!(channel.name(), "email", "label: {}", label);
        }
        for label in ["sms", "SMS", "Sms"] {
            let channel = resolve(label).unwrap();
            assert_eq!(channel.name(), "sms", "label: {}", label);
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_label() {
        let err = resolve("Fax").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidChannel {
                label: "Fax".to_string()
            }
        );
        assert!(err.to_string().contains("Fax"));
    }

    #[test]
    fn test_email_render_format() {
        let text = EmailChannel.render("Hi", "Hello");
        assert_eq!(
            text,
            "Sending email notification:\nSubject: Hi\nMessage: Hello\n\n"
        );
    }

    #[test]
    fn test_sms_render_format() {
        let text = SmsChannel.render("Outage", "All clear");
        assert_eq!(
            text,
            "Sending SMS notification:\nSubject: Outage\nMessage: All clear\n\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        for label in ["Email", "SMS"] {
            let channel = resolve(label).unwrap();
            let first = channel.render("Hi", "Hello");
            let second = channel.render("Hi", "Hello");
            assert_eq!(first, second);
        }
    }
}
