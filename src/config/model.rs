//! Configuration data model.
//!
//! All structs derive `Deserialize` for loading from TOML.
//! Every field has a sensible default so the client works without a file.

use serde::Deserialize;
use std::time::Duration;

use super::nickname::default_nickname;
use crate::app::event_loop::LoopSettings;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn loop_settings(&self) -> LoopSettings {
        LoopSettings {
            host: self.server.host.clone(),
            command_prefix: self.behavior.command_prefix,
            part_message: self.behavior.part_message.clone(),
            ping_interval: Duration::from_secs(self.behavior.ping_interval_secs),
            timeout: Duration::from_secs(self.behavior.timeout_secs),
            max_line_length: self.behavior.max_line_length,
        }
    }
}

/// The one server to talk to.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Hostname or IP address of the IRC server.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_nickname")]
    pub nickname: String,
    /// Sent as `PASS` before registering, when set.
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            nickname: default_nickname(),
            password: None,
        }
    }
}

/// Input syntax and connection liveness settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_command_prefix")]
    pub command_prefix: char,
    #[serde(default = "default_part_message")]
    pub part_message: String,
    #[serde(default = "default_ping_interval")]
    pub ping_interval_secs: u64,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            part_message: default_part_message(),
            ping_interval_secs: default_ping_interval(),
            timeout_secs: default_timeout(),
            max_line_length: default_max_line_length(),
        }
    }
}

/// Output appearance.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_host() -> String {
    "irc.libera.chat".to_string()
}
fn default_port() -> u16 {
    6667
}
fn default_command_prefix() -> char {
    '/'
}
fn default_part_message() -> String {
    "Leaving".to_string()
}
fn default_ping_interval() -> u64 {
    120
}
fn default_timeout() -> u64 {
    300
}
fn default_max_line_length() -> usize {
    crate::irc::codec::DEFAULT_MAX_LINE
}
fn default_timestamp_format() -> String {
    "%F %R".to_string()
}
