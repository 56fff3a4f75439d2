//! Plain-text rendering of chat events.
//!
//! Each event becomes one line: a left-aligned label (channel or sender),
//! a local timestamp, and the body.

use crate::app::event::ChatEvent;
use chrono::Local;
use std::fmt::Write as _;
use std::io::{self, Write};
use tokio::sync::mpsc;

pub struct Printer {
    /// Stands in for a missing origin (lines without a prefix come from
    /// the server itself).
    host: String,
    timestamp_format: String,
}

impl Printer {
    pub fn new(host: &str, timestamp_format: &str) -> Self {
        Self {
            host: host.to_string(),
            timestamp_format: timestamp_format.to_string(),
        }
    }

    /// The label column and body text for an event.
    pub fn label_and_body(&self, event: &ChatEvent) -> (String, String) {
        match event {
            ChatEvent::Chat { target, sender, text } => {
                let sender = sender.as_deref().unwrap_or(&self.host);
                (target.clone(), format!("<{}> {}", sender, text))
            }
            ChatEvent::Notice {
                origin,
                command,
                params,
                trailing,
            } => {
                let origin = origin.as_deref().unwrap_or(&self.host);
                let body = format!(
                    ">< {} ({}): {}",
                    command,
                    params.join(" "),
                    trailing.as_deref().unwrap_or("")
                );
                (origin.to_string(), body)
            }
            ChatEvent::Error { text } => (String::new(), text.clone()),
        }
    }

    pub fn format(&self, event: &ChatEvent) -> String {
        let (label, body) = self.label_and_body(event);
        let mut timestamp = String::new();
        if write!(timestamp, "{}", Local::now().format(&self.timestamp_format)).is_err() {
            // Unusable format string: show no timestamp rather than fail
            timestamp.clear();
        }
        format!("{:<12}: {} {}", label, timestamp, body)
    }

    pub fn print<W: Write>(&self, out: &mut W, event: &ChatEvent) -> io::Result<()> {
        writeln!(out, "{}", self.format(event))?;
        out.flush()
    }

    /// Print events to stdout until every sender is gone.
    pub async fn run(self, mut events: mpsc::UnboundedReceiver<ChatEvent>) {
        while let Some(event) = events.recv().await {
            let mut stdout = io::stdout().lock();
            if self.print(&mut stdout, &event).is_err() {
                break;
            }
        }
    }
}
