use crate::irc::codec::LineCodec;
use futures::{SinkExt, StreamExt};
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::Framed;
use tracing::debug;

/// A line-framed, bidirectional connection to the server.
///
/// Reads are bounded by the codec's line limit. Every write is flushed
/// before [`write_line`](Self::write_line) returns.
pub struct LineChannel<S> {
    framed: Framed<S, LineCodec>,
}

impl<S> LineChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, max_line: usize) -> Self {
        Self {
            framed: Framed::new(stream, LineCodec::with_max_len(max_line)),
        }
    }

    /// Next line from the server with the newline stripped, or `None` once
    /// the stream has ended. Safe to race inside `tokio::select!`.
    pub async fn next_line(&mut self) -> Option<io::Result<String>> {
        self.framed.next().await
    }

    pub async fn write_line(&mut self, line: &str) -> io::Result<()> {
        debug!(line, "sending");
        self.framed.send(line).await
    }
}
