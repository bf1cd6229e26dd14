//! Ship placement: validation against the catalog rules and the grid,
//! application to a grid, and the per-player bookkeeping it updates.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::PlacementError;
use crate::config::{board_cell, BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Placement, ShipType};

/// Cells still intact for each ship type on one player's grid.
///
/// A ship type is present exactly while at least one of its cells is
/// intact; the resolver removes it when its last cell is destroyed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipLocationIndex {
    cells: BTreeMap<ShipType, Vec<(usize, usize)>>,
}

impl ShipLocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell to `ship`'s list.
    pub fn insert(&mut self, ship: ShipType, cell: (usize, usize)) {
        self.cells.entry(ship).or_default().push(cell);
    }

    /// Ship type whose list holds `cell`, if any.
    pub fn locate(&self, cell: (usize, usize)) -> Option<ShipType> {
        self.cells
            .iter()
            .find(|(_, cells)| cells.contains(&cell))
            .map(|(ship, _)| *ship)
    }

    /// Remove `cell` from `ship`'s list. Returns `true` when that empties
    /// the list, in which case the ship is dropped from the index.
    pub fn remove(&mut self, ship: ShipType, cell: (usize, usize)) -> bool {
        let Some(cells) = self.cells.get_mut(&ship) else {
            return false;
        };
        cells.retain(|c| *c != cell);
        if cells.is_empty() {
            self.cells.remove(&ship);
            true
        } else {
            false
        }
    }

    /// Intact cells of `ship`, in placement order.
    pub fn cells(&self, ship: ShipType) -> Option<&[(usize, usize)]> {
        self.cells.get(&ship).map(Vec::as_slice)
    }

    pub fn contains(&self, ship: ShipType) -> bool {
        self.cells.contains_key(&ship)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipType, &[(usize, usize)])> + '_ {
        self.cells.iter().map(|(ship, cells)| (*ship, cells.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Number of ships of each type placed and still afloat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipInventory {
    counts: BTreeMap<ShipType, u32>,
}

impl Default for ShipInventory {
    fn default() -> Self {
        ShipInventory {
            counts: FLEET.iter().map(|ship| (*ship, 0)).collect(),
        }
    }
}

impl ShipInventory {
    /// Every type at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, ship: ShipType) -> u32 {
        self.counts.get(&ship).copied().unwrap_or(0)
    }

    /// Ships afloat across all types.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn increment(&mut self, ship: ShipType) {
        *self.counts.entry(ship).or_insert(0) += 1;
    }

    pub fn decrement(&mut self, ship: ShipType) {
        let count = self.counts.entry(ship).or_insert(0);
        *count = count.saturating_sub(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipType, u32)> + '_ {
        self.counts.iter().map(|(ship, n)| (*ship, *n))
    }
}

/// Cells covered by a validated placement.
#[derive(Clone, Copy, Debug)]
pub struct Span {
    row: usize,
    col: usize,
    orientation: Orientation,
    step: usize,
    len: usize,
}

impl Iterator for Span {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.len {
            return None;
        }
        let cell = match self.orientation {
            Orientation::Vertical => (self.row + self.step, self.col),
            Orientation::Horizontal => (self.row, self.col + self.step),
        };
        self.step += 1;
        Some(cell)
    }
}

/// Check a placement against the catalog limits.
///
/// The start cell must lie on the grid and the start offset along the
/// ship's axis must be below `max_start` for its type.
pub fn validate(placement: &Placement) -> Result<(), PlacementError> {
    let out_of_bounds = PlacementError::OutOfBounds {
        ship: placement.ship,
        row: placement.row,
        col: placement.col,
    };
    if board_cell(placement.row, placement.col).is_none() {
        return Err(out_of_bounds);
    }
    let limit = placement.ship.max_start(placement.orientation) as i32;
    if placement.axis_start() >= limit {
        return Err(out_of_bounds);
    }
    Ok(())
}

/// Cells a placement would cover, after validating it.
pub fn cells(placement: &Placement) -> Result<Span, PlacementError> {
    validate(placement)?;
    Ok(Span {
        row: placement.row as usize,
        col: placement.col as usize,
        orientation: placement.orientation,
        step: 0,
        len: placement.ship.length(),
    })
}

/// `validate` plus collision detection against ships already on `grid`.
pub fn validate_on(grid: &Grid, placement: &Placement) -> Result<(), PlacementError> {
    for (row, col) in cells(placement)? {
        if grid.status(row, col)? != CellState::Empty {
            return Err(PlacementError::Overlap {
                ship: placement.ship,
                row,
                col,
            });
        }
    }
    Ok(())
}

/// Put a ship on the grid and record it in the index and inventory.
///
/// Everything is validated before the first cell is touched, so a failed
/// call leaves all three structures unchanged.
pub fn apply(
    grid: &mut Grid,
    index: &mut ShipLocationIndex,
    inventory: &mut ShipInventory,
    placement: &Placement,
) -> Result<(), PlacementError> {
    validate_on(grid, placement)?;
    for (row, col) in cells(placement)? {
        grid.mark_occupied(row, col)?;
        index.insert(placement.ship, (row, col));
    }
    inventory.increment(placement.ship);
    log::debug!("placed {}", placement);
    Ok(())
}

/// A random legal placement for `ship` that does not overlap `grid`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
    ship: ShipType,
) -> Result<Placement, PlacementError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let along = rng.random_range(0..ship.max_start(orientation) as i32);
        let across = rng.random_range(0..BOARD_SIZE as i32);
        let (row, col) = match orientation {
            Orientation::Vertical => (along, across),
            Orientation::Horizontal => (across, along),
        };
        let placement = Placement::new(ship, row, col, orientation);
        if validate_on(grid, &placement).is_ok() {
            return Ok(placement);
        }
    }
    Err(PlacementError::UnableToPlaceShip(ship))
}

/// One non-overlapping placement per ship type, in catalog order.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Placement>, PlacementError> {
    let mut grid = Grid::new();
    let mut index = ShipLocationIndex::new();
    let mut inventory = ShipInventory::new();
    let mut fleet = Vec::with_capacity(FLEET.len());
    for ship in FLEET {
        let placement = random_placement(rng, &grid, ship)?;
        apply(&mut grid, &mut index, &mut inventory, &placement)?;
        fleet.push(placement);
    }
    Ok(fleet)
}
