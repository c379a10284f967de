//! Terminal runner (default binary).
//!
//! Builds a scene from `GameConfig::from_env()` and hands it to the director.
//! Set `RUST_LOG` to write a trace to `tui-rfk.log`; the terminal itself is
//! owned by the game.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;

use tui_rfk::core::{build_cast, GameConfig, MessageBook, SimpleRng, WindowSignal};
use tui_rfk::engine::Director;
use tui_rfk::input::TerminalKeyboard;
use tui_rfk::term::TerminalVideo;

const LOG_FILE: &str = "tui-rfk.log";

fn main() -> Result<()> {
    init_tracing()?;

    let config = GameConfig::from_env()?;
    let messages = match &config.messages_path {
        Some(path) => MessageBook::load(path)?,
        None => MessageBook::builtin(),
    };

    let mut rng = SimpleRng::new(config.seed);
    let mut cast = build_cast(&config, &messages, &mut rng);
    info!(
        seed = config.seed,
        artifacts = cast.artifacts().len(),
        messages = messages.len(),
        "starting game"
    );

    let signal = WindowSignal::new();
    let keyboard = TerminalKeyboard::with_cell_size(signal.clone(), config.cell_size);
    let video = TerminalVideo::new(&config, signal);

    let mut director = Director::new(keyboard, video);
    director.start_game(&mut cast)
}

fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
