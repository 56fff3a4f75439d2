use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Longest nickname kept, in bytes.
pub const NICK_MAX: usize = 31;
/// Longest channel name kept, in bytes.
pub const CHANNEL_MAX: usize = 255;

/// A string holding at most `MAX` bytes.
///
/// Longer input is truncated at the last character boundary that fits;
/// it is never rejected and never grows past the bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedString<const MAX: usize> {
    value: String,
}

impl<const MAX: usize> BoundedString<MAX> {
    pub fn new(s: &str) -> Self {
        let mut end = s.len().min(MAX);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            value: s[..end].to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<const MAX: usize> fmt::Display for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Mutable per-connection state: who we are, where plain chat goes, and
/// when the server last said anything.
#[derive(Debug)]
pub struct Session {
    nickname: BoundedString<NICK_MAX>,
    channel: BoundedString<CHANNEL_MAX>,
    last_server_read: Instant,
}

impl Session {
    pub fn new(nickname: &str) -> Self {
        Self {
            nickname: BoundedString::new(nickname),
            channel: BoundedString::default(),
            last_server_read: Instant::now(),
        }
    }

    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        self.nickname = BoundedString::new(nickname);
    }

    /// The current channel; empty when none is set.
    pub fn channel(&self) -> &str {
        self.channel.as_str()
    }

    pub fn has_channel(&self) -> bool {
        !self.channel.is_empty()
    }

    pub fn set_channel(&mut self, channel: &str) {
        self.channel = BoundedString::new(channel);
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_server_read = now;
    }

    /// Time since the last server read, as of `now`.
    pub fn silence(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_server_read)
    }
}
