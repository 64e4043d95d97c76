//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a
//! piece kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the board (y < 0) are not stored; pieces may
//! occupy them transiently while spawning.

use crate::core::pieces::PieceShape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a single cell position can hold part of a piece.
    ///
    /// Positions above the board (y < 0) are open as long as x is within the
    /// column range, so freshly spawned pieces may extend past the top edge.
    #[inline]
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        self.cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)].is_none()
    }

    /// Check whether a whole shape can be placed with its anchor at (x, y).
    pub fn can_place(&self, shape: &PieceShape, x: i8, y: i8) -> bool {
        shape.iter().all(|&(dx, dy)| self.is_open(x + dx, y + dy))
    }

    /// Lock a shape onto the board at the given anchor.
    ///
    /// Cells above the top edge (y < 0) are silently dropped; they never
    /// become part of the grid.
    pub fn lock(&mut self, shape: &PieceShape, x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y` and shift every row above it down by one, inserting an
    /// empty row at the top.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear all full rows and return how many were cleared.
    ///
    /// Scans bottom to top. After a clear, the row now at the same index is
    /// re-tested (the rows above shifted down into it), so multiple
    /// non-contiguous full rows clear correctly in one call.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared: u32 = 0;
        let mut y = BOARD_HEIGHT as usize - 1;

        loop {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else if y == 0 {
                break;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a 2D array (row-major), for snapshots.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_open_above_board() {
        let board = Board::new();

        // Above the visible board: open as long as x is in range.
        assert!(board.is_open(0, -1));
        assert!(board.is_open(9, -3));
        assert!(!board.is_open(-1, -1));
        assert!(!board.is_open(10, -1));

        // Below the bottom edge is never open.
        assert!(!board.is_open(0, BOARD_HEIGHT as i8));
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut board = Board::new();
        board.set(0, 3, Some(PieceKind::I));
        board.set(1, 4, Some(PieceKind::O));
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 5, Some(PieceKind::T));
        }

        board.remove_row(5);

        assert_eq!(board.get(1, 5), Some(Some(PieceKind::O)));
        assert_eq!(board.get(0, 4), Some(Some(PieceKind::I)));
        assert_eq!(board.get(0, 3), Some(None));
    }
}
