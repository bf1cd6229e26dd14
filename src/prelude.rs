//! Commonly used types for ease of import.

pub use crate::{
    AttackOutcome, Board, GameError, GameObserver, GameResult, GameState, Orientation, Phase,
    Placement, PlayerId, ShipType,
};
