//! Attack outcomes and the error types returned by grid, placement,
//! attack and game operations.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::game::{PlayerId, Seat};
use crate::grid::CellState;
use crate::ship::ShipType;

/// Result of an attack on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The cell was empty.
    Miss,
    /// The cell held part of a ship that is still afloat.
    Hit,
    /// The cell held the last intact segment of the named ship.
    Sunk(ShipType),
}

impl AttackOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::Miss => write!(f, "miss"),
            AttackOutcome::Hit => write!(f, "hit"),
            AttackOutcome::Sunk(ship) => write!(f, "sunk {}", ship),
        }
    }
}

/// Errors returned by `Grid` cell operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column outside `[0, 9]`.
    OutOfBounds { row: usize, col: usize },
    /// Only empty cells can become occupied.
    InvalidTransition { row: usize, col: usize, from: CellState },
    /// Destroyed cells never change again.
    AlreadyDestroyed { row: usize, col: usize },
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GridError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
            GridError::InvalidTransition { row, col, from } => {
                write!(f, "cell ({}, {}) is {:?} and cannot be occupied", row, col, from)
            }
            GridError::AlreadyDestroyed { row, col } => {
                write!(f, "cell ({}, {}) is already destroyed", row, col)
            }
        }
    }
}

/// Errors returned while parsing, validating or applying a ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship name did not match any catalog entry.
    UnknownShipType,
    /// Orientation was neither horizontal nor vertical.
    UnknownOrientation,
    /// The ship would start or extend outside the grid.
    OutOfBounds { ship: ShipType, row: i32, col: i32 },
    /// The ship would cover a cell that is not empty.
    Overlap { ship: ShipType, row: usize, col: usize },
    /// Random placement found no free spot.
    UnableToPlaceShip(ShipType),
    /// Underlying grid transition failed.
    Grid(GridError),
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        PlacementError::Grid(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::UnknownShipType => write!(
                f,
                "unknown ship type, expected one of: carrier, battleship, submarine, destroyer, patrol boat"
            ),
            PlacementError::UnknownOrientation => {
                write!(f, "orientation must be horizontal or vertical")
            }
            PlacementError::OutOfBounds { ship, row, col } => write!(
                f,
                "{} is size {} and cannot fit at ({}, {})",
                ship,
                ship.length(),
                row,
                col
            ),
            PlacementError::Overlap { ship, row, col } => {
                write!(f, "{} would overlap another ship at ({}, {})", ship, row, col)
            }
            PlacementError::UnableToPlaceShip(ship) => write!(f, "unable to place {}", ship),
            PlacementError::Grid(e) => write!(f, "grid error: {}", e),
        }
    }
}

/// Errors returned by the attack resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// Row or column outside `[0, 9]`.
    OutOfBounds { row: i32, col: i32 },
    /// The target cell was attacked before.
    AlreadyDestroyed { row: usize, col: usize },
    /// An occupied cell is missing from the ship location index. The
    /// board state is corrupt; this is never caused by caller input.
    CoordinateNotIndexed { row: usize, col: usize },
}

impl AttackError {
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, AttackError::CoordinateNotIndexed { .. })
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds { row, col } => write!(
                f,
                "invalid move ({}, {}): rows and columns must be between 0 and 9",
                row, col
            ),
            AttackError::AlreadyDestroyed { row, col } => {
                write!(f, "cell ({}, {}) is already destroyed", row, col)
            }
            AttackError::CoordinateNotIndexed { row, col } => write!(
                f,
                "occupied cell ({}, {}) is not in the ship location index",
                row, col
            ),
        }
    }
}

/// Errors returned by `GameState` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Placement(PlacementError),
    Attack(AttackError),
    /// Ships may be inserted once per player.
    ShipsAlreadyPlaced(Seat),
    /// The same ship type appeared twice in one insertion request.
    DuplicatePlacementInBatch(ShipType),
    /// An insertion request lacked this ship type.
    IncompleteFleet(ShipType),
    NotYourTurn,
    /// At least one player has no ships on their grid.
    ShipsNotReady,
    UnknownPlayer(PlayerId),
    /// Both seats were given the same player.
    DuplicatePlayer,
    GameOver,
    /// `end_game` named a player whose opponent still has ships afloat.
    NotWon(PlayerId),
    /// A loaded board failed its integrity check.
    CorruptSnapshot { seat: Seat, reason: &'static str },
    /// A loaded snapshot's turn, winner or phase fields are inconsistent.
    CorruptGame(&'static str),
}

impl GameError {
    /// Data-integrity failures, as opposed to rejected user input.
    pub fn is_integrity_violation(&self) -> bool {
        match self {
            GameError::Attack(e) => e.is_integrity_violation(),
            GameError::CorruptSnapshot { .. } | GameError::CorruptGame(_) => true,
            _ => false,
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl From<AttackError> for GameError {
    fn from(err: AttackError) -> Self {
        GameError::Attack(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Placement(e) => write!(f, "invalid ship insert: {}", e),
            GameError::Attack(e) => write!(f, "invalid attack: {}", e),
            GameError::ShipsAlreadyPlaced(seat) => {
                write!(f, "player {} has already inserted ships", seat)
            }
            GameError::DuplicatePlacementInBatch(ship) => {
                write!(f, "more than one {} in a single insert", ship)
            }
            GameError::IncompleteFleet(ship) => write!(f, "fleet is missing a {}", ship),
            GameError::NotYourTurn => write!(f, "it's not your turn"),
            GameError::ShipsNotReady => write!(
                f,
                "both players must insert ships before the game begins"
            ),
            GameError::UnknownPlayer(id) => write!(f, "player {} is not in this game", id),
            GameError::DuplicatePlayer => write!(f, "a player cannot play against themselves"),
            GameError::GameOver => write!(f, "the game is already over"),
            GameError::NotWon(id) => {
                write!(f, "player {} has not sunk the opposing fleet", id)
            }
            GameError::CorruptSnapshot { seat, reason } => {
                write!(f, "corrupt snapshot for player {}: {}", seat, reason)
            }
            GameError::CorruptGame(reason) => write!(f, "corrupt snapshot: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AttackError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Placement(e) => Some(e),
            GameError::Attack(e) => Some(e),
            _ => None,
        }
    }
}
