//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor for new pieces: the 4x4 shape frame is horizontally centered
/// and starts at the top row.
pub const SPAWN_X: i8 = ((BOARD_WIDTH - 4) / 2) as i8;
pub const SPAWN_Y: i8 = 0;

/// Game timing constants (in milliseconds)
pub const DROP_INTERVAL_MS: u64 = 500;
pub const FRAME_MS: u64 = 50;
pub const INPUT_POLL_MS: u64 = 10;
pub const STARTUP_DELAY_MS: u64 = 1000;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Discrete input events fed to the game engine.
///
/// The input source is responsible for decoding raw key sequences into this
/// closed set; the engine never sees raw bytes. Unknown keys are dropped at
/// the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Rotate,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    TogglePause,
    Quit,
}
