//! Notification decorators
//!
//! [`EmailNotifier`] is the base channel. [`SmsNotifier`] and
//! [`SlackNotifier`] each own exactly one inner notifier and forward to it
//! before sending on their own channel, so a stack runs innermost first:
//! `Slack(Sms(Email))` sends email, then SMS, then Slack.

use patterns_core::{PatternError, SharedConsole};
use std::fmt;
use std::str::FromStr;

/// Anything that can deliver a message
pub trait Notifier: Send + Sync {
    fn send(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send(&self, message: &str) {
        (**self).send(message);
    }
}

/// Base notifier
pub struct EmailNotifier {
    console: SharedConsole,
}

impl EmailNotifier {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) {
        self.console.print_line(&format!("Sending EMAIL: {message}"));
    }
}

/// Adds an SMS after the wrapped notifier
pub struct SmsNotifier<N> {
    inner: N,
    console: SharedConsole,
}

impl<N: Notifier> SmsNotifier<N> {
    pub fn new(inner: N, console: SharedConsole) -> Self {
        Self { inner, console }
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Notifier> Notifier for SmsNotifier<N> {
    fn send(&self, message: &str) {
        self.inner.send(message);
        self.console.print_line(&format!("Sending SMS: {message}"));
    }
}

/// Adds a Slack post after the wrapped notifier
pub struct SlackNotifier<N> {
    inner: N,
    console: SharedConsole,
}

impl<N: Notifier> SlackNotifier<N> {
    pub fn new(inner: N, console: SharedConsole) -> Self {
        Self { inner, console }
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Notifier> Notifier for SlackNotifier<N> {
    fn send(&self, message: &str) {
        self.inner.send(message);
        self.console.print_line(&format!("Sending Slack: {message}"));
    }
}

/// Notification channels that can be layered over email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Sms,
    Slack,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sms => write!(f, "sms"),
            Self::Slack => write!(f, "slack"),
        }
    }
}

impl FromStr for Channel {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sms" => Ok(Self::Sms),
            "slack" => Ok(Self::Slack),
            other => Err(PatternError::invalid(format!(
                "Unknown channel '{other}' (expected sms or slack)"
            ))),
        }
    }
}

/// Wrap email in `channels`, first entry innermost.
///
/// `[Sms, Slack]` builds `Slack(Sms(Email))`. Repeating a channel layers it
/// again.
pub fn build_notifier(channels: &[Channel], console: SharedConsole) -> Box<dyn Notifier> {
    let mut notifier: Box<dyn Notifier> = Box::new(EmailNotifier::new(console.clone()));
    for channel in channels {
        notifier = match channel {
            Channel::Sms => Box::new(SmsNotifier::new(notifier, console.clone())),
            Channel::Slack => Box::new(SlackNotifier::new(notifier, console.clone())),
        };
    }
    notifier
}
