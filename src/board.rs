//! One player's half of a game: grid, ship location index and inventory.

use crate::attack;
use crate::common::{AttackError, AttackOutcome, PlacementError};
use crate::grid::{CellState, Grid};
use crate::placer::{self, ShipInventory, ShipLocationIndex};
use crate::ship::Placement;

/// Grid plus the ship bookkeeping that must stay consistent with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    grid: Grid,
    locations: ShipLocationIndex,
    inventory: ShipInventory,
}

impl Board {
    /// Empty grid, no ships.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn locations(&self) -> &ShipLocationIndex {
        &self.locations
    }

    pub fn inventory(&self) -> &ShipInventory {
        &self.inventory
    }

    /// Place a single ship.
    pub fn place(&mut self, placement: &Placement) -> Result<(), PlacementError> {
        placer::apply(
            &mut self.grid,
            &mut self.locations,
            &mut self.inventory,
            placement,
        )
    }

    /// Place every ship or none: placements are staged on a copy and only
    /// committed once all of them succeed.
    pub fn place_fleet(&mut self, placements: &[Placement]) -> Result<(), PlacementError> {
        let mut staged = self.clone();
        for placement in placements {
            staged.place(placement)?;
        }
        *self = staged;
        Ok(())
    }

    /// Resolve an opponent's attack on this board.
    pub fn receive_attack(&mut self, row: i32, col: i32) -> Result<AttackOutcome, AttackError> {
        attack::resolve(
            &mut self.grid,
            &mut self.locations,
            &mut self.inventory,
            row,
            col,
        )
    }

    /// Any intact ship cell on the grid.
    pub fn has_ships(&self) -> bool {
        self.ship_cells_remaining() > 0
    }

    /// Ships still afloat, summed over all types.
    pub fn ships_afloat(&self) -> u32 {
        self.inventory.total()
    }

    pub fn ship_cells_remaining(&self) -> usize {
        self.grid.count(CellState::Occupied)
    }

    pub fn destroyed_cells(&self) -> usize {
        self.grid.count(CellState::Destroyed)
    }

    /// Ships were placed and every one of their cells is destroyed.
    pub fn fleet_destroyed(&self) -> bool {
        self.grid.hits().next().is_some() && !self.has_ships()
    }

    /// Check that grid, index and inventory agree with each other.
    ///
    /// The grid may not mark cells past the board edge. Every indexed cell
    /// must be intact, every intact cell must be indexed exactly once, and
    /// each type's inventory count must match whether the type is still in
    /// the index.
    pub fn verify(&self) -> Result<(), &'static str> {
        if !self.grid.is_within_board() {
            return Err("grid has cells outside the board");
        }
        let mut indexed = 0;
        for (_, cells) in self.locations.iter() {
            for &(row, col) in cells {
                match self.grid.status(row, col) {
                    Ok(CellState::Occupied) => indexed += 1,
                    Ok(_) => return Err("indexed cell is not occupied"),
                    Err(_) => return Err("indexed cell is off the grid"),
                }
            }
        }
        if indexed != self.ship_cells_remaining() {
            return Err("occupied cells and ship index disagree");
        }
        for cell in self.grid.occupied() {
            if self.locations.locate(cell).is_none() {
                return Err("occupied cell is not indexed");
            }
        }
        for (ship, count) in self.inventory.iter() {
            if (count > 0) != self.locations.contains(ship) {
                return Err("inventory and ship index disagree");
            }
        }
        Ok(())
    }
}
