//! Blockfall terminal runner (default binary).
//!
//! Renders session snapshots through the framebuffer renderer and drives
//! gravity from a deadline that restarts after every lock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, Session};
use blockfall::input::{is_actionable, map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::load();
    config.init_tracing()?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn gravity_interval(session: &Session) -> Duration {
    Duration::from_millis(u64::from(session.drop_interval_ms()))
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = Session::new(config.seed);
    info!(seed = ?config.seed, "session started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut deadline = Instant::now() + gravity_interval(&session);

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if session.is_game_over() {
            // Final screen stays up until a key press.
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => return Ok(()),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        let timeout = deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit by player");
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        session.on_command(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if Instant::now() >= deadline {
            session.on_tick();
            deadline = Instant::now() + gravity_interval(&session);
        }

        if let Some(lock) = session.take_last_event() {
            debug!(
                kind = lock.kind.as_str(),
                lines = lock.lines_cleared,
                score_delta = lock.score_delta,
                "piece locked"
            );
            deadline = Instant::now() + gravity_interval(&session);
        }
    }
}
