//! Match-3 runner (default binary).
//!
//! `match3 [play]` opens the interactive board; `match3 trace` plays hinted
//! moves headless and prints every effect as a JSON line on stdout.
//! Rendering uses crossterm and the framebuffer renderer from `match3-term`.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use match3::autoplay::autoplay;
use match3::config::{parse_args, Command, GameConfig};
use match3::input::{handle_key_event, should_quit};
use match3::observe::{board_lines, JsonLinesListener};
use match3::session::Session;
use match3::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args, GameConfig::from_env()?)?;

    init_logging(cli.command == Command::Play)?;
    info!(config = ?cli.config, "starting");

    match cli.command {
        Command::Play => play(&cli.config),
        Command::Trace { moves } => trace(&cli.config, moves),
    }
}

/// `MATCH3_LOG` sets the filter, `MATCH3_LOG_FILE` the destination. The
/// interactive game owns the terminal, so without a file it logs nowhere.
fn init_logging(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("MATCH3_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = std::env::var_os("MATCH3_LOG_FILE") {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open log file {}", path.to_string_lossy()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn trace(config: &GameConfig, moves: u32) -> Result<()> {
    let mut game = config.new_game()?;
    for line in board_lines(game.board()) {
        info!(row = %line, "initial board");
    }

    let mut listener = JsonLinesListener::new(io::stdout().lock());
    let summary = autoplay(&mut game, moves, &mut listener)?;
    listener.finish().context("write effect trace")?;

    info!(
        moves = summary.moves_played,
        longest_chain = summary.longest_chain,
        stalled = summary.stalled,
        "trace done"
    );
    Ok(())
}

fn play(config: &GameConfig) -> Result<()> {
    let mut session = Session::new(config.new_game()?);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            session.game().board(),
            &session.play_state(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Nothing moves on its own: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply(action)?;
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
