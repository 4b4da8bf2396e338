//! Notification stack handler

use anyhow::Result;
use patterns_core::SharedConsole;
use patterns_structural::{build_notifier, Channel};

/// Send one message through email plus `channels`
pub fn handle_decorate(console: &SharedConsole, channels: &[Channel], message: &str) -> Result<()> {
    tracing::debug!(?channels, "building notifier stack");
    build_notifier(channels, console.clone()).send(message);
    Ok(())
}

/// Email alone, then email + SMS, then email + SMS + Slack
pub fn handle_decorator_tour(console: &SharedConsole) -> Result<()> {
    handle_decorate(console, &[], "Hello World!")?;
    console.print_line("----");
    handle_decorate(console, &[Channel::Sms], "System Alert!")?;
    console.print_line("----");
    handle_decorate(console, &[Channel::Sms, Channel::Slack], "Deployment Done!")
}
