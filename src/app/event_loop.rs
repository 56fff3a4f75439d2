//! The client's main loop.
//!
//! Waits on the server connection, local input and an idle timer at once.
//! An idle wake-up either sends a keepalive `PING` or, when the server has
//! been silent past the dead-man threshold, ends the loop.

use crate::app::action::Action;
use crate::app::event::ChatEvent;
use crate::app::handler::{handle_server_line, handle_user_command};
use crate::app::session::Session;
use crate::error::{Error, Result, Stream};
use crate::irc::channel::LineChannel;
use crate::irc::codec::{LineCodec, DEFAULT_MAX_LINE};
use crate::irc::commands::parse_input;
use crate::irc::outbound::Outbound;
use crate::irc::retry::Uninterrupted;
use futures::StreamExt;
use std::convert::Infallible;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::codec::FramedRead;
use tracing::{debug, warn};

/// Timing and input settings for [`EventLoop`].
#[derive(Debug, Clone)]
pub struct LoopSettings {
    /// Server host, used as the keepalive `PING` argument.
    pub host: String,
    pub command_prefix: char,
    pub part_message: String,
    /// Longest idle wait before a keepalive is considered.
    pub ping_interval: Duration,
    /// Server silence after which the connection is presumed dead.
    pub timeout: Duration,
    pub max_line_length: usize,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            command_prefix: '/',
            part_message: "Leaving".to_string(),
            ping_interval: Duration::from_secs(120),
            timeout: Duration::from_secs(300),
            max_line_length: DEFAULT_MAX_LINE,
        }
    }
}

/// What ended a readiness wait.
enum Wake {
    Server(Option<io::Result<String>>),
    Input(Option<io::Result<String>>),
    Idle,
}

pub struct EventLoop<S, I> {
    server: LineChannel<Uninterrupted<S>>,
    input: FramedRead<Uninterrupted<I>, LineCodec>,
    session: Session,
    settings: LoopSettings,
    events: mpsc::UnboundedSender<ChatEvent>,
}

impl<S, I> EventLoop<S, I>
where
    S: AsyncRead + AsyncWrite + Unpin,
    I: AsyncRead + Unpin,
{
    pub fn new(
        server: S,
        input: I,
        session: Session,
        settings: LoopSettings,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        Self {
            server: LineChannel::new(Uninterrupted::new(server), settings.max_line_length),
            input: FramedRead::new(
                Uninterrupted::new(input),
                LineCodec::with_max_len(settings.max_line_length),
            ),
            session,
            settings,
            events,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register with the server: optional `PASS`, then `NICK` and `USER`.
    pub async fn login(&mut self, password: Option<&str>) -> Result<()> {
        let nick = self.session.nickname().to_string();
        if let Some(password) = password {
            self.send(Outbound::Pass(password.to_string())).await?;
        }
        self.send(Outbound::Nick(nick.clone())).await?;
        self.send(Outbound::User {
            nick,
            host: self.settings.host.clone(),
        })
        .await
    }

    /// Run until a fatal condition. Never returns `Ok`.
    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            let wake = tokio::select! {
                line = self.server.next_line() => Wake::Server(line),
                line = self.input.next() => Wake::Input(line),
                _ = tokio::time::sleep(self.settings.ping_interval) => Wake::Idle,
            };

            match wake {
                Wake::Server(None) => return Err(Error::StreamClosed(Stream::Server)),
                Wake::Input(None) => return Err(Error::StreamClosed(Stream::Input)),
                Wake::Server(Some(Err(e))) | Wake::Input(Some(Err(e))) => {
                    return Err(Error::Io(e));
                }
                Wake::Server(Some(Ok(line))) => {
                    debug!(line = %line, "received");
                    let actions = handle_server_line(&mut self.session, &line, Instant::now());
                    self.perform(actions).await?;
                }
                Wake::Input(Some(Ok(line))) => {
                    let command = parse_input(&line, self.settings.command_prefix);
                    let actions = handle_user_command(
                        &mut self.session,
                        command,
                        &self.settings.part_message,
                    );
                    self.perform(actions).await?;
                }
                Wake::Idle => {
                    let silence = self.session.silence(Instant::now());
                    if silence >= self.settings.timeout {
                        warn!(silence_secs = silence.as_secs(), "server silent too long");
                        return Err(Error::ProtocolTimeout);
                    }
                    debug!("idle, sending keepalive");
                    self.send(Outbound::Ping(self.settings.host.clone())).await?;
                }
            }
        }
    }

    async fn perform(&mut self, actions: Vec<Action>) -> Result<()> {
        for action in actions {
            match action {
                Action::Send(out) => self.send(out).await?,
                Action::Show(event) => {
                    // A closed display only means nobody is watching
                    let _ = self.events.send(event);
                }
            }
        }
        Ok(())
    }

    async fn send(&mut self, out: Outbound) -> Result<()> {
        self.server.write_line(&out.to_string()).await?;
        Ok(())
    }
}
