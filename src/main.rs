mod app;
mod config;
mod error;
mod irc;
mod logging;
mod ui;

use crate::app::event::ChatEvent;
use crate::app::event_loop::EventLoop;
use crate::app::session::Session;
use crate::ui::Printer;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::info;

/// A simple single-server IRC client
#[derive(Parser, Debug)]
#[command(name = "crabsic")]
#[command(version)]
struct Args {
    /// Server to connect to
    #[arg(short = 's', long = "server")]
    host: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Nickname to register with
    #[arg(short, long)]
    nick: Option<String>,

    /// Server password
    #[arg(short = 'k', long)]
    password: Option<String>,

    /// Command prefix character for local input
    #[arg(long)]
    prefix: Option<char>,

    /// Config file (default: <config dir>/crabsic/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn apply(self, cfg: &mut config::AppConfig) {
        if let Some(host) = self.host {
            cfg.server.host = host;
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
        if let Some(nick) = self.nick {
            cfg.server.nickname = nick;
        }
        if self.password.is_some() {
            cfg.server.password = self.password;
        }
        if let Some(prefix) = self.prefix {
            cfg.behavior.command_prefix = prefix;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let mut cfg = config::load_config(args.config.as_deref())?;
    args.apply(&mut cfg);

    if let Err(e) = run(cfg).await {
        eprintln!("crabsic: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Connect, log in and run until the connection dies.
async fn run(cfg: config::AppConfig) -> std::result::Result<(), error::Error> {
    let stream = irc::dial::dial(&cfg.server.host, cfg.server.port).await?;
    info!(host = %cfg.server.host, port = cfg.server.port, "logging in");

    let (event_tx, event_rx) = mpsc::unbounded_channel::<ChatEvent>();
    let printer = Printer::new(&cfg.server.host, &cfg.ui.timestamp_format);
    let display = tokio::spawn(printer.run(event_rx));

    let session = Session::new(&cfg.server.nickname);
    let mut event_loop = EventLoop::new(
        stream,
        tokio::io::stdin(),
        session,
        cfg.loop_settings(),
        event_tx,
    );

    let result = match event_loop.login(cfg.server.password.as_deref()).await {
        Ok(()) => event_loop.run().await.map(|never| match never {}),
        Err(e) => Err(e),
    };

    // Let the display catch up before reporting
    drop(event_loop);
    let _ = display.await;
    result
}
