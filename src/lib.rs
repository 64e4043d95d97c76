//! Terminal Tetris.
//!
//! `core` holds the pure game logic (board, pieces, engine). `input` decodes
//! terminal keys into discrete game events on a background thread. `term`
//! turns a game snapshot into styled terminal output.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
