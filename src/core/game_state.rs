//! Game state module - manages the complete game state
//!
//! Ties together board, shape catalog and spawner. Handles piece movement,
//! rotation, gravity, the lock sequence (lock, clear, score, respawn), and
//! the pause/game-over lifecycle.
//!
//! All mutation goes through `tick` and `apply_input`; callers are expected
//! to invoke both from a single thread of control.

use std::time::Duration;

use crate::core::pieces::{self, PieceShape};
use crate::core::scoring::line_clear_score;
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::{Board, PieceSpawner};
use crate::types::{InputEvent, PieceKind, DROP_INTERVAL_MS, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the shape (cell offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four occupied cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut out = self.shape();
        for cell in &mut out {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        out
    }

    /// Check that the piece rests at a valid position on the board
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.shape(), self.x, self.y)
    }
}

/// Result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The anchor change was committed.
    Moved,
    /// A downward move was blocked; the piece was locked and the next one
    /// spawned (or the game ended).
    Locked,
    /// A sideways move was blocked by a wall or the stack; nothing changed.
    Blocked,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    spawner: PieceSpawner,
    score: u32,
    paused: bool,
    game_over: bool,
    drop_interval: Duration,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let mut spawner = PieceSpawner::new(seed);
        let first = spawner.next();
        let next = spawner.next();

        Self {
            board: Board::new(),
            active: ActivePiece::spawn(first),
            next,
            spawner,
            score: 0,
            paused: false,
            game_over: false,
            drop_interval: Duration::from_millis(DROP_INTERVAL_MS),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// A blocked downward move triggers the lock sequence; a blocked sideways
    /// move is a no-op (the standard wall/stack outcome, not an error).
    pub fn try_move(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Blocked;
        }

        let shape = self.active.shape();
        if self
            .board
            .can_place(&shape, self.active.x + dx, self.active.y + dy)
        {
            self.active.x += dx;
            self.active.y += dy;
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            self.lock_active();
            return MoveOutcome::Locked;
        }

        MoveOutcome::Blocked
    }

    /// Lock sequence: merge the piece into the board, clear full rows, add
    /// the line-clear score, then spawn the next piece.
    fn lock_active(&mut self) {
        let shape = self.active.shape();
        self.board
            .lock(&shape, self.active.x, self.active.y, self.active.kind);

        let cleared = self.board.clear_full_rows();
        self.score += line_clear_score(cleared);

        self.spawn_next();
    }

    /// Promote the next kind to active and draw a new next kind.
    ///
    /// The game ends when the fresh piece does not fit at the spawn anchor.
    fn spawn_next(&mut self) {
        self.active = ActivePiece::spawn(self.next);
        self.next = self.spawner.next();

        if !self.active.fits(&self.board) {
            self.game_over = true;
        }
    }

    /// Rotate the active piece to its next rotation state.
    ///
    /// Rejection-only: if the rotated shape does not fit at the unchanged
    /// anchor the rotation is dropped (no wall-kick search). Returns whether
    /// the rotation was committed.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let count = pieces::rotation_count(self.active.kind);
        if count == 1 {
            return false;
        }

        let next_rotation = (self.active.rotation + 1) % count;
        let shape = pieces::shape(self.active.kind, next_rotation);
        if self.board.can_place(&shape, self.active.x, self.active.y) {
            self.active.rotation = next_rotation;
            return true;
        }

        false
    }

    /// Drop the piece straight down until it locks.
    ///
    /// Synchronous: no input is processed mid-drop. Since a resting piece is
    /// always validly placed, the loop always terminates in a lock.
    pub fn hard_drop(&mut self) {
        while self.try_move(0, 1) == MoveOutcome::Moved {}
    }

    /// Gravity tick: move the piece down one row.
    ///
    /// No-op while paused or after game over. Returns whether the tick
    /// advanced the game.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.try_move(0, 1);
        true
    }

    /// Dispatch one input event.
    ///
    /// Returns false when the event asks the run loop to terminate. After
    /// game over only quit is honored; while paused only toggle-pause and
    /// quit act.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => return false,
            _ if self.game_over => {}
            InputEvent::TogglePause => self.paused = !self.paused,
            _ if self.paused => {}
            InputEvent::Rotate => {
                self.rotate();
            }
            InputEvent::MoveLeft => {
                self.try_move(-1, 0);
            }
            InputEvent::MoveRight => {
                self.try_move(1, 0);
            }
            InputEvent::SoftDrop => {
                self.try_move(0, 1);
            }
            InputEvent::HardDrop => self.hard_drop(),
        }

        true
    }

    /// Fill a reusable snapshot with the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = if self.game_over {
            None
        } else {
            Some(ActiveSnapshot {
                kind: self.active.kind,
                cells: self.active.cells(),
            })
        };
        out.next = self.next;
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    /// Build a fresh render snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
