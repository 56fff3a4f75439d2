//! Fatal error conditions.
//!
//! Every variant ends the client: components return these up to `main`,
//! which prints the diagnostic and exits with a non-zero status. Local
//! misuse (e.g. chatting with no channel set) is not an error here, it is
//! shown as a [`ChatEvent::Error`](crate::app::event::ChatEvent::Error).

use std::fmt;
use std::io;
use thiserror::Error;

/// Which side of the client a closed stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Server,
    Input,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Server => f.write_str("remote host closed connection"),
            Stream::Input => f.write_str("broken pipe"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot resolve hostname '{host}': {reason}")]
    Resolution { host: String, reason: String },

    #[error("cannot connect to host '{host}'")]
    Connection { host: String },

    #[error("{0}")]
    StreamClosed(Stream),

    #[error("parse timeout")]
    ProtocolTimeout,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
