//! Inbound protocol lines.
//!
//! Implements the simplified grammar
//! `[":" origin " "] command " " params [":" trailing]`. The user/host part
//! of the origin (everything from the first `!`) is dropped. Parsing never
//! fails: lines with nothing to act on parse to `None`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerMessage {
    pub origin: Option<String>,
    pub command: String,
    pub params: Vec<String>,
    pub trailing: Option<String>,
}

impl ServerMessage {
    pub fn parse(line: &str) -> Option<ServerMessage> {
        if line.is_empty() {
            return None;
        }

        let (origin, rest) = match line.strip_prefix(':') {
            Some(prefixed) => {
                let (prefix, rest) = prefixed.split_once(' ')?;
                if rest.is_empty() {
                    return None;
                }
                let nick = prefix.split('!').next().unwrap_or(prefix);
                (Some(nick.to_string()), rest)
            }
            None => (None, line),
        };

        let rest = rest.split('\r').next().unwrap_or(rest);
        let (command, rest) = rest.split_once(' ').unwrap_or((rest, ""));
        if command.is_empty() {
            return None;
        }

        let (middle, trailing) = match rest.split_once(':') {
            Some((middle, trailing)) => (middle, Some(trailing.to_string())),
            None => (rest, None),
        };

        Some(ServerMessage {
            origin,
            command: command.to_string(),
            params: middle.split_whitespace().map(str::to_string).collect(),
            trailing,
        })
    }

    /// The trailing text, or the first middle parameter for servers that
    /// send single-word arguments without the `:` marker (`PING token`).
    pub fn last_arg(&self) -> &str {
        self.trailing
            .as_deref()
            .or_else(|| self.params.first().map(String::as_str))
            .unwrap_or("")
    }
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(origin) = &self.origin {
            write!(f, ":{} ", origin)?;
        }
        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        if let Some(trailing) = &self.trailing {
            write!(f, " :{}", trailing)?;
        }
        Ok(())
    }
}
