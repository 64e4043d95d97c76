//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod spawner;

pub use board::Board;
pub use game_state::{ActivePiece, GameState, MoveOutcome};
pub use pieces::{rotation_count, shape};
pub use snapshot::GameSnapshot;
pub use spawner::PieceSpawner;
