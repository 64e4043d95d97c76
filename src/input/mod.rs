//! Input module - decodes terminal keys into discrete game events.
//!
//! A background thread polls crossterm for key events, maps them onto the
//! closed `InputEvent` set, and pushes them into an unbounded channel. The
//! game loop drains that channel each frame without blocking, so all engine
//! mutation stays on one thread and only the channel is shared.
//!
//! Keys that decode to nothing are dropped here; the engine never sees raw
//! input.

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{InputEvent, INPUT_POLL_MS};

/// Map a keyboard event to a game event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    // Ctrl+C arrives as a key event in raw mode; treat it as quit.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up => Some(InputEvent::Rotate),
        KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Down => Some(InputEvent::SoftDrop),
        KeyCode::Char(' ') => Some(InputEvent::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Receiving end of the input event stream.
pub struct InputSource {
    rx: Receiver<InputEvent>,
}

impl InputSource {
    /// Start the reader thread and return the consumer handle.
    ///
    /// The thread exits on its own after sending a quit event or when the
    /// consumer side is dropped.
    pub fn spawn() -> Self {
        let (tx, rx) = channel::<InputEvent>();

        thread::spawn(move || loop {
            match event::poll(Duration::from_millis(INPUT_POLL_MS)) {
                Ok(true) => {
                    let Ok(ev) = event::read() else { break };
                    let Event::Key(key) = ev else { continue };
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(input) = map_key_event(key) {
                        let quit = input == InputEvent::Quit;
                        if tx.send(input).is_err() || quit {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }

    /// Wrap an existing receiver (for tests and headless drivers).
    pub fn from_receiver(rx: Receiver<InputEvent>) -> Self {
        Self { rx }
    }

    /// Take the next queued event, if any. Never blocks.
    ///
    /// Calling this in a loop drains the queue in FIFO order.
    pub fn poll_event(&mut self) -> Option<InputEvent> {
        self.rx.try_recv().ok()
    }
}
