#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod attack;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placer;
pub mod prelude;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placer::{ShipInventory, ShipLocationIndex};
pub use ship::*;
