use std::fmt;

/// A protocol command written by the client. `Display` yields the wire
/// text without the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Pass(String),
    Nick(String),
    User { nick: String, host: String },
    Join(String),
    Part { channel: String, message: String },
    Privmsg { target: String, text: String },
    Ping(String),
    Pong(String),
    /// Passed through unmodified.
    Raw(String),
}

impl fmt::Display for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outbound::Pass(password) => write!(f, "PASS {}", password),
            Outbound::Nick(nick) => write!(f, "NICK {}", nick),
            Outbound::User { nick, host } => {
                write!(f, "USER {} localhost {} :{}", nick, host, nick)
            }
            Outbound::Join(channel) => write!(f, "JOIN {}", channel),
            Outbound::Part { channel, message } => write!(f, "PART {} :{}", channel, message),
            Outbound::Privmsg { target, text } => write!(f, "PRIVMSG {} :{}", target, text),
            Outbound::Ping(host) => write!(f, "PING {}", host),
            Outbound::Pong(token) => write!(f, "PONG {}", token),
            Outbound::Raw(line) => f.write_str(line),
        }
    }
}
