use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIP_TYPES: usize = 5;

/// Canonical fleet, one of each type, in catalog order.
pub const FLEET: [ShipType; NUM_SHIP_TYPES] = ShipType::ALL;

/// Total number of ship cells in the canonical fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Attempts made by random placement before giving up on a ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Convert a signed request coordinate into a board cell, if it lies on the board.
pub fn board_cell(row: i32, col: i32) -> Option<(usize, usize)> {
    let size = BOARD_SIZE as i32;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}
