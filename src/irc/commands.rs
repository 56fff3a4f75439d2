//! Local input parser.
//!
//! A line is a command only when it is the prefix character, one key
//! character and then whitespace (`/j #rust`). A lone `/l` also parts.
//! Every other line starting with the prefix is sent raw with the prefix
//! removed; lines without the prefix are chat for the current channel.

/// A parsed line of local input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Chat(String),
    Join(String),
    Part {
        channel: Option<String>,
        message: Option<String>,
    },
    DirectMessage {
        target: String,
        text: String,
    },
    SetChannel(String),
    Raw(String),
}

/// Parse one line of local input. Anything after a newline is ignored.
pub fn parse_input(line: &str, prefix: char) -> UserCommand {
    let line = line.split('\n').next().unwrap_or(line);
    let Some(rest) = line.strip_prefix(prefix) else {
        return UserCommand::Chat(line.to_string());
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('l'), None) => UserCommand::Part {
            channel: None,
            message: None,
        },
        (Some(key), Some(sep)) if sep.is_whitespace() => {
            let args = &rest[key.len_utf8() + sep.len_utf8()..];
            match key {
                'j' => UserCommand::Join(args.to_string()),
                'l' => {
                    let (channel, message) = split_word(args);
                    UserCommand::Part {
                        channel: non_empty(channel),
                        message: non_empty(message),
                    }
                }
                'm' => {
                    let (target, text) = split_word(args);
                    UserCommand::DirectMessage {
                        target: target.to_string(),
                        text: text.to_string(),
                    }
                }
                's' => UserCommand::SetChannel(args.to_string()),
                _ => UserCommand::Raw(rest.to_string()),
            }
        }
        _ => UserCommand::Raw(rest.to_string()),
    }
}

/// Split off the first whitespace-delimited word. The remainder starts
/// after the single whitespace character that ended the word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => (&s[..i], &s[i + c.len_utf8()..]),
        None => (s, ""),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> UserCommand {
        parse_input(line, '/')
    }

    fn part(channel: Option<&str>, message: Option<&str>) -> UserCommand {
        UserCommand::Part {
            channel: channel.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_plain_chat() {
        assert_eq!(
            parse("hello world"),
            UserCommand::Chat("hello world".into())
        );
        assert_eq!(parse("hi\nignored"), UserCommand::Chat("hi".into()));
    }

    #[test]
    fn test_empty_line_is_chat() {
        assert_eq!(parse(""), UserCommand::Chat(String::new()));
    }

    #[test]
    fn test_join_and_set_channel() {
        assert_eq!(parse("/j #test"), UserCommand::Join("#test".into()));
        assert_eq!(parse("/s #other"), UserCommand::SetChannel("#other".into()));
    }

    #[test]
    fn test_part_variants() {
        assert_eq!(parse("/l "), part(None, None));
        assert_eq!(parse("/l #rust"), part(Some("#rust"), None));
        assert_eq!(
            parse("/l   #rust see you later"),
            part(Some("#rust"), Some("see you later"))
        );
    }

    #[test]
    fn test_direct_message() {
        assert_eq!(
            parse("/m ferris hi there"),
            UserCommand::DirectMessage {
                target: "ferris".into(),
                text: "hi there".into(),
            }
        );
        assert_eq!(
            parse("/m ferris"),
            UserCommand::DirectMessage {
                target: "ferris".into(),
                text: String::new(),
            }
        );
    }

    #[test]
    fn test_unknown_key_is_raw_without_prefix() {
        assert_eq!(
            parse("/x WHOIS crab"),
            UserCommand::Raw("x WHOIS crab".into())
        );
    }

    #[test]
    fn test_no_whitespace_after_key_is_raw() {
        assert_eq!(parse("/quit"), UserCommand::Raw("quit".into()));
        assert_eq!(parse("/join #rust"), UserCommand::Raw("join #rust".into()));
        assert_eq!(parse("/"), UserCommand::Raw(String::new()));
    }

    #[test]
    fn test_only_part_works_as_a_bare_key() {
        assert_eq!(parse("/l"), part(None, None));
        assert_eq!(parse("/j"), UserCommand::Raw("j".into()));
        assert_eq!(parse("/s"), UserCommand::Raw("s".into()));
        assert_eq!(parse("/m"), UserCommand::Raw("m".into()));
        assert_eq!(parse("/x"), UserCommand::Raw("x".into()));
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(parse_input(":j #c", ':'), UserCommand::Join("#c".into()));
        assert_eq!(parse_input("/j #c", ':'), UserCommand::Chat("/j #c".into()));
    }
}
