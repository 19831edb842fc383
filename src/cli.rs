//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the binary using the
//! `clap` crate. The channel label stays a raw string here so an unknown
//! label surfaces as a dispatch error, distinct from clap's usage errors for
//! missing arguments.

use clap::Parser;

/// Dispatches a console notification over one of the supported channels.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Channel to send over: "Email" or "SMS" (case-insensitive).
    pub channel: String,

    /// Subject line of the notification.
    pub subject: String,

    /// Body text of the notification.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_three_positional_arguments() {
        let cli = Cli::try_parse_from(["courier", "Email", "Hi", "Hello"]).unwrap();
        assert_eq!(cli.channel, "Email");
        assert_eq!(cli.subject, "Hi");
        assert_eq!(cli.message, "Hello");
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["courier", "Email", "Hi"]).is_err());
        assert!(Cli::try_parse_from(["courier"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["courier", "Email", "Hi", "Hello", "extra"]).is_err());
    }
}
