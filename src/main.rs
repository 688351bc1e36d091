//! Terminal Snake runner (default binary).
//!
//! Key presses and timer ticks are pushed into one event queue and applied to
//! the engine in order by this loop, which is also the only place that renders.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::config::Config;
use tui_snake::core::{Dispatched, EventQueue, GameEngine, GameSnapshot, Ticker};
use tui_snake::input::{map_key_event, should_quit};
use tui_snake::logging;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, "session started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snap = result?;
    info!(
        phase = snap.phase.as_str(),
        snapshot = %serde_json::to_string(&snap)?,
        "session ended"
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<GameSnapshot> {
    let mut engine = GameEngine::new(config.seed);
    let mut queue = EventQueue::new();
    let events = queue.sender();

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let mut ticker = Ticker::new(engine.tick_interval_ms(), now_ms());

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        engine.snapshot_into(&mut snap);
        GameView::fitting(viewport).render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(ticker.timeout_ms(now_ms()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        engine.snapshot_into(&mut snap);
                        return Ok(snap);
                    }
                    if let Some(k) = map_key_event(key) {
                        events.key(k);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if ticker.due(now_ms()) {
            events.tick();
        }

        queue.drain_with(&mut engine, |engine, _, result| {
            if let Dispatched::Tick(_) | Dispatched::Key(true) = result {
                ticker.set_interval_ms(engine.tick_interval_ms());
            }
        });
    }
}
