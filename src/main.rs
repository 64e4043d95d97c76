//! Terminal Tetris runner.
//!
//! One background thread reads keys and queues input events; this loop is
//! the only place engine state mutates. Each frame drains the whole event
//! queue in FIFO order, advances gravity at the drop interval, renders, then
//! sleeps.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use term_tetris::core::GameState;
use term_tetris::input::InputSource;
use term_tetris::term::{GameView, TerminalRenderer, Viewport};
use term_tetris::types::{FRAME_MS, STARTUP_DELAY_MS};

fn main() -> Result<()> {
    println!("Starting Tetris in 1 second...");
    thread::sleep(Duration::from_millis(STARTUP_DELAY_MS));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore the terminal (Drop covers unwinds too).
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let mut input = InputSource::spawn();
    let view = GameView::default();

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_drop = Instant::now();

    loop {
        // Drain every queued event before rendering; a burst of keys is
        // applied in arrival order, never collapsed to the last one.
        while let Some(event) = input.poll_event() {
            if !game.apply_input(event) {
                return Ok(());
            }
        }

        // Gravity, checked once per frame.
        if last_drop.elapsed() >= game.drop_interval() {
            game.tick();
            last_drop = Instant::now();
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        thread::sleep(frame);
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
