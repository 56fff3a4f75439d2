//! Newline framing with a hard per-line bound.
//!
//! Long lines are cut at `max_len` bytes and the remainder of that line is
//! dropped, so a misbehaving peer can never make a single line grow without
//! limit. The caller sees the truncated head as an ordinary line.

use bytes::{Buf, BytesMut};
use std::io;
use tokio_util::codec::{Decoder, Encoder};

/// Default line bound, in bytes, excluding the terminator.
pub const DEFAULT_MAX_LINE: usize = 4096;

pub struct LineCodec {
    max_len: usize,
    /// Index of the next byte to check for a newline.
    next_index: usize,
    /// Head of an over-long line whose tail is still being discarded.
    truncated: Option<BytesMut>,
}

impl LineCodec {
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
            next_index: 0,
            truncated: None,
        }
    }
}

fn into_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> io::Result<Option<String>> {
        if self.truncated.is_some() {
            return match src.iter().position(|b| *b == b'\n') {
                Some(pos) => {
                    src.advance(pos + 1);
                    let head = self.truncated.take().unwrap_or_default();
                    Ok(Some(into_line(&head)))
                }
                None => {
                    src.clear();
                    Ok(None)
                }
            };
        }

        // A newline may sit at most one byte past the bound.
        let window_end = src.len().min(self.max_len + 1);
        let start = self.next_index.min(window_end);
        if let Some(offset) = src[start..window_end].iter().position(|b| *b == b'\n') {
            let line = src.split_to(start + offset + 1);
            self.next_index = 0;
            return Ok(Some(into_line(&line[..line.len() - 1])));
        }

        if src.len() > self.max_len {
            self.next_index = 0;
            self.truncated = Some(src.split_to(self.max_len));
            return self.decode(src);
        }

        self.next_index = src.len();
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> io::Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if let Some(head) = self.truncated.take() {
            src.clear();
            return Ok(Some(into_line(&head)));
        }
        if src.is_empty() {
            return Ok(None);
        }
        self.next_index = 0;
        let rest = src.split_to(src.len());
        Ok(Some(into_line(&rest)))
    }
}

impl<T: AsRef<str>> Encoder<T> for LineCodec {
    type Error = io::Error;

    fn encode(&mut self, line: T, dst: &mut BytesMut) -> io::Result<()> {
        let line = line.as_ref();
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(codec: &mut LineCodec, input: &[u8]) -> Vec<String> {
        let mut buf = BytesMut::from(input);
        let mut lines = Vec::new();
        while let Some(line) = codec.decode(&mut buf).unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_splits_on_newline_and_keeps_carriage_return() {
        let mut codec = LineCodec::with_max_len(DEFAULT_MAX_LINE);
        let lines = decode_all(&mut codec, b"PING :a\r\nNOTICE x :y\r\npartial");
        assert_eq!(lines, vec!["PING :a\r", "NOTICE x :y\r"]);
    }

    #[test]
    fn test_partial_line_completes_on_later_read() {
        let mut codec = LineCodec::with_max_len(DEFAULT_MAX_LINE);
        let mut buf = BytesMut::from(&b"PRIVMSG #c :hel"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b"lo\n");
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some("PRIVMSG #c :hello".to_string())
        );
    }

    #[test]
    fn test_long_line_is_truncated_and_tail_discarded() {
        let mut codec = LineCodec::with_max_len(8);
        let mut buf = BytesMut::from(&b"0123456789abc"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b"def\nnext\n");
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some("01234567".to_string())
        );
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("next".to_string()));
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_line_exactly_at_bound_is_kept() {
        let mut codec = LineCodec::with_max_len(4);
        assert_eq!(decode_all(&mut codec, b"abcd\nef\n"), vec!["abcd", "ef"]);
    }

    #[test]
    fn test_eof_yields_unterminated_fragment() {
        let mut codec = LineCodec::with_max_len(DEFAULT_MAX_LINE);
        let mut buf = BytesMut::from(&b"last words"[..]);
        assert_eq!(
            codec.decode_eof(&mut buf).unwrap(),
            Some("last words".to_string())
        );
        assert_eq!(codec.decode_eof(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut codec = LineCodec::with_max_len(DEFAULT_MAX_LINE);
        let lines = decode_all(&mut codec, b"caf\xff\n");
        assert_eq!(lines, vec!["caf\u{fffd}"]);
    }

    #[test]
    fn test_encode_appends_crlf() {
        let mut codec = LineCodec::with_max_len(DEFAULT_MAX_LINE);
        let mut out = BytesMut::new();
        codec.encode("NICK crab", &mut out).unwrap();
        codec.encode(String::from("JOIN #rust"), &mut out).unwrap();
        assert_eq!(&out[..], b"NICK crab\r\nJOIN #rust\r\n");
    }
}
