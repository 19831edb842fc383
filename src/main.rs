//! Courier - console notification dispatch CLI.
//!
//! Composes the subscription registry and facade, registers the built-in
//! demo subscribers, and dispatches one notification from the command line.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use courier::{cli::Cli, ConsoleSubscriber, NotificationFacade, SubscriptionRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the rendered
    // notification.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    info!("courier starting up");

    let registry = Arc::new(SubscriptionRegistry::new());
    let facade = NotificationFacade::new(registry);

    // Stand-in recipients. Sends do not fan out to them; delivery to
    // subscribers happens only through SubscriptionRegistry::notify.
    facade.subscribe("Email", Arc::new(ConsoleSubscriber::new("User1")));
    facade.subscribe("SMS", Arc::new(ConsoleSubscriber::new("User2")));

    facade.send_notification(&cli.channel, &cli.subject, &cli.message)?;

    Ok(())
}
