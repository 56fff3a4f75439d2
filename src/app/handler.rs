//! Dispatch of server lines and local commands.
//!
//! Handlers mutate the [`Session`] and return the [`Action`]s to perform.
//! They never touch the network themselves.

use crate::app::action::Action;
use crate::app::event::ChatEvent;
use crate::app::session::Session;
use crate::irc::commands::UserCommand;
use crate::irc::message::ServerMessage;
use crate::irc::outbound::Outbound;
use tokio::time::Instant;

/// Shown when plain chat is typed before any channel is set.
pub const NO_CHANNEL: &str = "No channel to send to";

/// Handle one raw line read from the server at `now`.
///
/// Any line counts as proof of life, including lines that parse to nothing.
pub fn handle_server_line(session: &mut Session, line: &str, now: Instant) -> Vec<Action> {
    session.touch(now);
    match ServerMessage::parse(line) {
        Some(message) => handle_server_message(session, message),
        None => vec![],
    }
}

pub fn handle_server_message(session: &mut Session, message: ServerMessage) -> Vec<Action> {
    match message.command.as_str() {
        "PONG" => vec![],
        "PRIVMSG" => {
            let target = message.params.into_iter().next().unwrap_or_default();
            vec![Action::Show(ChatEvent::Chat {
                target,
                sender: message.origin,
                text: message.trailing.unwrap_or_default(),
            })]
        }
        "PING" => vec![Action::Send(Outbound::Pong(message.last_arg().to_string()))],
        _ => {
            if message.command == "NICK" && message.origin.as_deref() == Some(session.nickname()) {
                session.set_nickname(message.last_arg());
            }
            vec![Action::Show(ChatEvent::Notice {
                origin: message.origin,
                command: message.command,
                params: message.params,
                trailing: message.trailing,
            })]
        }
    }
}

/// Handle one parsed line of local input. `default_part` is the parting
/// message used when `/l` gives none.
pub fn handle_user_command(
    session: &mut Session,
    command: UserCommand,
    default_part: &str,
) -> Vec<Action> {
    match command {
        UserCommand::Chat(text) => {
            let target = session.channel().to_string();
            send_chat(session, target, text)
        }
        UserCommand::Join(channel) => {
            if !session.has_channel() {
                session.set_channel(&channel);
            }
            vec![Action::Send(Outbound::Join(channel))]
        }
        UserCommand::Part { channel, message } => {
            let channel = channel.unwrap_or_else(|| session.channel().to_string());
            let message = message.unwrap_or_else(|| default_part.to_string());
            vec![Action::Send(Outbound::Part { channel, message })]
        }
        UserCommand::DirectMessage { target, text } => send_chat(session, target, text),
        UserCommand::SetChannel(channel) => {
            session.set_channel(&channel);
            vec![]
        }
        UserCommand::Raw(line) if line.is_empty() => vec![],
        UserCommand::Raw(line) => vec![Action::Send(Outbound::Raw(line))],
    }
}

/// Echo a chat line locally and send it, unless there is nowhere to send it.
fn send_chat(session: &Session, target: String, text: String) -> Vec<Action> {
    if target.is_empty() {
        return vec![Action::Show(ChatEvent::Error {
            text: NO_CHANNEL.to_string(),
        })];
    }
    vec![
        Action::Show(ChatEvent::Chat {
            target: target.clone(),
            sender: Some(session.nickname().to_string()),
            text: text.clone(),
        }),
        Action::Send(Outbound::Privmsg { target, text }),
    ]
}
