//! Ship catalog: the closed set of ship types, their lengths and the
//! placement limits derived from them.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::common::PlacementError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board. Vertical ships extend down the
/// rows from their start cell, horizontal ships along the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// The five ship types of the canonical fleet.
///
/// Declaration order is catalog order, so ordered maps keyed by
/// `ShipType` iterate largest ship first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
    PatrolBoat,
}

impl ShipType {
    pub const ALL: [ShipType; 5] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Submarine,
        ShipType::Destroyer,
        ShipType::PatrolBoat,
    ];

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 3,
            ShipType::PatrolBoat => 2,
        }
    }

    /// Placement limit along the orientation axis: a start offset must be
    /// strictly below this value. The board is square, so both
    /// orientations share the same limit.
    pub const fn max_start(self, _orientation: Orientation) -> usize {
        BOARD_SIZE as usize - self.length()
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
            ShipType::PatrolBoat => "Patrol Boat",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Lowercase, with `_`, `-` and runs of whitespace folded to single spaces.
fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let words = name
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty());
    for word in words {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word.to_ascii_lowercase());
    }
    out
}

impl FromStr for ShipType {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "carrier" | "aircraft carrier" => Ok(ShipType::Carrier),
            "battleship" => Ok(ShipType::Battleship),
            "submarine" => Ok(ShipType::Submarine),
            "destroyer" => Ok(ShipType::Destroyer),
            "patrol boat" | "patrolboat" => Ok(ShipType::PatrolBoat),
            _ => Err(PlacementError::UnknownShipType),
        }
    }
}

impl FromStr for Orientation {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Ok(Orientation::Horizontal),
            Some('v') => Ok(Orientation::Vertical),
            _ => Err(PlacementError::UnknownOrientation),
        }
    }
}

/// A request to put one ship on a grid. Coordinates are signed so that
/// malformed requests can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub ship: ShipType,
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(ship: ShipType, row: i32, col: i32, orientation: Orientation) -> Self {
        Placement {
            ship,
            row,
            col,
            orientation,
        }
    }

    /// Start offset along the axis the ship extends on.
    pub const fn axis_start(&self) -> i32 {
        match self.orientation {
            Orientation::Vertical => self.row,
            Orientation::Horizontal => self.col,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {}",
            self.ship, self.row, self.col, self.orientation
        )
    }
}
