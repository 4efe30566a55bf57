//! Hotseat chess in the terminal.
//!
//! Two players share one keyboard and take turns entering squares. The rules
//! live in `hotseat-engine`; this binary only reads input and draws text.

mod command;
mod config;
mod render;
mod terminal;

use anyhow::Context;
use clap::Parser;
use config::{Config, GlyphStyle};
use hotseat_engine::GameSession;
use render::Renderer;
use std::path::PathBuf;
use terminal::Terminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player chess on one keyboard")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "hotseat.toml")]
    config: PathBuf,

    /// Start from a FEN position (placement and side to move)
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if args.ascii {
        config.glyphs = GlyphStyle::Ascii;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = match &args.fen {
        Some(fen) => GameSession::from_fen(fen)
            .with_context(|| format!("invalid position '{}'", fen))?,
        None => GameSession::new(),
    };
    tracing::info!(config = %args.config.display(), turn = %session.turn(), "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(
        stdin.lock(),
        stdout.lock(),
        Renderer::new(&config),
        session,
    );
    terminal.run()?;
    Ok(())
}
