//! A single player's 10x10 board of cell states.

use core::fmt;

use crate::bitboard::{BitBoard, Cells};
use crate::common::GridError;
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Occupied,
    Destroyed,
}

/// Cell states for one player, stored as two masks.
///
/// `ships` marks every cell a ship was ever placed on and is never
/// cleared; `destroyed` marks every attacked cell. A destroyed cell
/// therefore still knows whether it was a hit or a miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    ships: BB,
    destroyed: BB,
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Grid {
            ships: BB::new(),
            destroyed: BB::new(),
        }
    }

    /// State of the cell at (row, col).
    pub fn status(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        if self.destroyed.contains(row, col)? {
            Ok(CellState::Destroyed)
        } else if self.ships.contains(row, col)? {
            Ok(CellState::Occupied)
        } else {
            Ok(CellState::Empty)
        }
    }

    /// `Empty → Occupied`.
    pub fn mark_occupied(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        match self.status(row, col)? {
            CellState::Empty => {
                self.ships.insert(row, col)?;
                Ok(())
            }
            from => Err(GridError::InvalidTransition { row, col, from }),
        }
    }

    /// `Empty → Destroyed` or `Occupied → Destroyed`, returning the prior
    /// state so the caller can tell a hit from a miss.
    pub fn mark_destroyed(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        let prior = self.status(row, col)?;
        if prior == CellState::Destroyed {
            return Err(GridError::AlreadyDestroyed { row, col });
        }
        self.destroyed.insert(row, col)?;
        Ok(prior)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        let board = !BB::new();
        match state {
            CellState::Destroyed => (self.destroyed & board).len(),
            CellState::Occupied => (self.ships & !self.destroyed).len(),
            CellState::Empty => (!(self.ships | self.destroyed)).len(),
        }
    }

    /// Both masks stay inside the 10x10 board.
    pub fn is_within_board(&self) -> bool {
        self.ships.is_within_board() && self.destroyed.is_within_board()
    }

    /// Destroyed cells in row-major order.
    pub fn destroyed_coordinates(&self) -> Cells<u128, { BOARD_SIZE as usize }> {
        self.destroyed.iter()
    }

    /// Destroyed cells that held a ship.
    pub fn hits(&self) -> Cells<u128, { BOARD_SIZE as usize }> {
        (self.ships & self.destroyed).iter()
    }

    /// Destroyed cells that were empty.
    pub fn misses(&self) -> Cells<u128, { BOARD_SIZE as usize }> {
        (self.destroyed & !self.ships).iter()
    }

    /// Cells still holding an intact ship segment.
    pub fn occupied(&self) -> Cells<u128, { BOARD_SIZE as usize }> {
        (self.ships & !self.destroyed).iter()
    }

    /// `true` if no cell has ever been occupied or attacked.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty() && self.destroyed.is_empty()
    }

    /// Display adapter. With `reveal_ships` off, intact ship cells render as
    /// empty water, which is the view an opponent is allowed to see.
    pub fn render(&self, reveal_ships: bool) -> GridView<'_> {
        GridView {
            grid: self,
            reveal_ships,
        }
    }
}

/// Text rendering of a grid: `-` water, `+` ship, `X` hit, `o` miss.
pub struct GridView<'a> {
    grid: &'a Grid,
    reveal_ships: bool,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = BOARD_SIZE as usize;
        write!(f, "  ")?;
        for c in 0..n {
            write!(f, " {}", c)?;
        }
        for r in 0..n {
            writeln!(f)?;
            write!(f, "{} ", r)?;
            for c in 0..n {
                let ship = self.grid.ships.contains(r, c).unwrap_or(false);
                let destroyed = self.grid.destroyed.contains(r, c).unwrap_or(false);
                let ch = match (ship, destroyed) {
                    (true, true) => 'X',
                    (false, true) => 'o',
                    (true, false) if self.reveal_ships => '+',
                    _ => '-',
                };
                write!(f, " {}", ch)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(true), f)
    }
}
