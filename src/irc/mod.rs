//! IRC protocol layer: dialing, line framing, and message parsing.

pub mod channel;
pub mod codec;
pub mod commands;
pub mod dial;
pub mod message;
pub mod outbound;
pub mod retry;
