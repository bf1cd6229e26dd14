//! Attack resolution against one player's grid.

use crate::common::{AttackError, AttackOutcome, GridError};
use crate::config::board_cell;
use crate::grid::{CellState, Grid};
use crate::placer::{ShipInventory, ShipLocationIndex};

/// Destroy the cell at (row, col) and report what was there.
///
/// On a hit the owning ship is looked up in `index` before anything is
/// mutated; an occupied cell with no owner is reported as
/// `CoordinateNotIndexed` and leaves every structure untouched. When the
/// hit removes a ship's last cell the ship leaves the index, its
/// inventory count drops by one and the outcome is `Sunk`.
pub fn resolve(
    grid: &mut Grid,
    index: &mut ShipLocationIndex,
    inventory: &mut ShipInventory,
    row: i32,
    col: i32,
) -> Result<AttackOutcome, AttackError> {
    let (r, c) = board_cell(row, col).ok_or(AttackError::OutOfBounds { row, col })?;
    let status = grid.status(r, c).map_err(|_| AttackError::OutOfBounds { row, col })?;

    let outcome = match status {
        CellState::Destroyed => return Err(AttackError::AlreadyDestroyed { row: r, col: c }),
        CellState::Empty => {
            destroy(grid, r, c, row, col)?;
            AttackOutcome::Miss
        }
        CellState::Occupied => {
            let Some(ship) = index.locate((r, c)) else {
                log::warn!("occupied cell ({}, {}) has no owning ship", r, c);
                return Err(AttackError::CoordinateNotIndexed { row: r, col: c });
            };
            destroy(grid, r, c, row, col)?;
            if index.remove(ship, (r, c)) {
                inventory.decrement(ship);
                AttackOutcome::Sunk(ship)
            } else {
                AttackOutcome::Hit
            }
        }
    };
    log::debug!("attack at ({}, {}): {}", r, c, outcome);
    Ok(outcome)
}

fn destroy(grid: &mut Grid, r: usize, c: usize, row: i32, col: i32) -> Result<(), AttackError> {
    grid.mark_destroyed(r, c).map(|_| ()).map_err(|e| match e {
        GridError::AlreadyDestroyed { row, col } => AttackError::AlreadyDestroyed { row, col },
        _ => AttackError::OutOfBounds { row, col },
    })
}
