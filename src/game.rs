//! Two-player game state: ship insertion, turn order, attacks, history
//! and win detection.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::{AttackError, AttackOutcome, GameError};
use crate::config::{board_cell, FLEET};
use crate::grid::GridView;
use crate::placer::ShipInventory;
use crate::ship::Placement;

/// Opaque player token supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of the game a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::One => write!(f, "1"),
            Seat::Two => write!(f, "2"),
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At least one player has not inserted ships.
    AwaitingShips,
    /// Both fleets are on the board; players alternate attacks.
    InProgress,
    /// A winner is recorded. Terminal.
    Finished,
}

/// One attack in a player's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub row: usize,
    pub col: usize,
    pub outcome: AttackOutcome,
}

/// Winner/loser pair handed to the scoring collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// Receives the end-of-game event, e.g. to record a win/loss pair in a
/// score ledger.
pub trait GameObserver {
    fn game_ended(&mut self, result: &GameResult);
}

impl GameObserver for () {
    fn game_ended(&mut self, _result: &GameResult) {}
}

impl GameObserver for Vec<GameResult> {
    fn game_ended(&mut self, result: &GameResult) {
        self.push(*result);
    }
}

/// What happened on a successful attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    /// Player to move next, `None` once the game is over.
    pub next_move: Option<PlayerId>,
    /// Set when this attack won the game.
    pub result: Option<GameResult>,
}

/// Serializable value copy of a game, handed to the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub user_1: PlayerId,
    pub user_2: PlayerId,
    pub boards: [Board; 2],
    pub next_move: PlayerId,
    /// Attacks made by user 1 and user 2 respectively.
    pub history: [Vec<MoveRecord>; 2],
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

/// Authoritative state of one game between two players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    players: [PlayerId; 2],
    boards: [Board; 2],
    next_move: Seat,
    history: [Vec<MoveRecord>; 2],
    game_over: bool,
    winner: Option<Seat>,
}

impl GameState {
    /// New game with empty boards; `user_1` moves first.
    pub fn new(user_1: PlayerId, user_2: PlayerId) -> Result<Self, GameError> {
        if user_1 == user_2 {
            return Err(GameError::DuplicatePlayer);
        }
        Ok(GameState {
            players: [user_1, user_2],
            boards: [Board::new(), Board::new()],
            next_move: Seat::One,
            history: [Vec::new(), Vec::new()],
            game_over: false,
            winner: None,
        })
    }

    pub fn players(&self) -> (PlayerId, PlayerId) {
        (self.players[0], self.players[1])
    }

    pub fn player(&self, seat: Seat) -> PlayerId {
        self.players[seat.index()]
    }

    pub fn seat_of(&self, player: PlayerId) -> Result<Seat, GameError> {
        if player == self.players[0] {
            Ok(Seat::One)
        } else if player == self.players[1] {
            Ok(Seat::Two)
        } else {
            Err(GameError::UnknownPlayer(player))
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Finished
        } else if self.boards.iter().all(|b| b.ships_afloat() > 0) {
            Phase::InProgress
        } else {
            Phase::AwaitingShips
        }
    }

    pub fn next_move(&self) -> PlayerId {
        self.player(self.next_move)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner.map(|seat| self.player(seat))
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The player's own board.
    pub fn board(&self, player: PlayerId) -> Result<&Board, GameError> {
        let seat = self.seat_of(player)?;
        Ok(&self.boards[seat.index()])
    }

    /// Attacks the player has made, oldest first.
    pub fn history(&self, player: PlayerId) -> Result<&[MoveRecord], GameError> {
        let seat = self.seat_of(player)?;
        Ok(&self.history[seat.index()])
    }

    /// The player's ships still afloat, by type.
    pub fn ships_remaining(&self, player: PlayerId) -> Result<&ShipInventory, GameError> {
        Ok(self.board(player)?.inventory())
    }

    /// The opponent's grid as `player` may see it: hits and misses only.
    pub fn attack_view(&self, player: PlayerId) -> Result<GridView<'_>, GameError> {
        let seat = self.seat_of(player)?;
        Ok(self.boards[seat.opponent().index()].grid().render(false))
    }

    /// Insert a player's whole fleet, once.
    ///
    /// The request must name every ship type exactly once. Nothing is
    /// written unless every placement is legal.
    pub fn insert_ships(
        &mut self,
        player: PlayerId,
        placements: &[Placement],
    ) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let seat = self.seat_of(player)?;
        if self.boards[seat.index()].has_ships() {
            return Err(GameError::ShipsAlreadyPlaced(seat));
        }

        let mut seen = BTreeSet::new();
        for placement in placements {
            if !seen.insert(placement.ship) {
                return Err(GameError::DuplicatePlacementInBatch(placement.ship));
            }
        }
        if let Some(missing) = FLEET.iter().find(|ship| !seen.contains(*ship)) {
            return Err(GameError::IncompleteFleet(*missing));
        }

        self.boards[seat.index()].place_fleet(placements)?;
        log::info!("player {} ({}) inserted {} ships", seat, player, placements.len());
        Ok(())
    }

    /// `player` attacks (row, col) on the opponent's grid.
    ///
    /// The move is appended to the attacker's history. If it leaves the
    /// opponent with no intact ship cells the attacker wins, `end_game`
    /// runs and `observer` is notified; otherwise the turn passes.
    pub fn attack(
        &mut self,
        player: PlayerId,
        row: i32,
        col: i32,
        observer: &mut dyn GameObserver,
    ) -> Result<AttackReport, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let seat = self.seat_of(player)?;
        if self.boards.iter().any(|b| b.ships_afloat() == 0) {
            return Err(GameError::ShipsNotReady);
        }
        if seat != self.next_move {
            return Err(GameError::NotYourTurn);
        }

        let target = seat.opponent();
        let outcome = self.boards[target.index()]
            .receive_attack(row, col)
            .map_err(|e| {
                if e.is_integrity_violation() {
                    log::warn!("board of player {} is corrupt: {}", target, e);
                }
                e
            })?;
        let (r, c) = board_cell(row, col).ok_or(AttackError::OutOfBounds { row, col })?;
        self.history[seat.index()].push(MoveRecord {
            row: r,
            col: c,
            outcome,
        });

        let (one_won, two_won) = self.check_winner();
        let attacker_won = match seat {
            Seat::One => one_won,
            Seat::Two => two_won,
        };
        if attacker_won {
            let result = self.end_game(player, observer)?;
            return Ok(AttackReport {
                outcome,
                next_move: None,
                result: Some(result),
            });
        }

        self.next_move = target;
        Ok(AttackReport {
            outcome,
            next_move: Some(self.player(target)),
            result: None,
        })
    }

    /// `(player_1_won, player_2_won)`: a player has won once every ship
    /// cell on the opponent's grid is destroyed.
    pub fn check_winner(&self) -> (bool, bool) {
        (
            self.boards[Seat::Two.index()].fleet_destroyed(),
            self.boards[Seat::One.index()].fleet_destroyed(),
        )
    }

    /// Close the game with `winner` and notify `observer`.
    ///
    /// `winner` must have destroyed every ship cell of the opponent, so a
    /// finished game always agrees with `check_winner`.
    pub fn end_game(
        &mut self,
        winner: PlayerId,
        observer: &mut dyn GameObserver,
    ) -> Result<GameResult, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let seat = self.seat_of(winner)?;
        if !self.boards[seat.opponent().index()].fleet_destroyed() {
            return Err(GameError::NotWon(winner));
        }
        self.game_over = true;
        self.winner = Some(seat);
        let result = GameResult {
            winner,
            loser: self.player(seat.opponent()),
        };
        log::info!("game over: player {} ({}) won", seat, winner);
        observer.game_ended(&result);
        Ok(result)
    }

    /// Value copy of the full state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            user_1: self.players[0],
            user_2: self.players[1],
            boards: self.boards.clone(),
            next_move: self.next_move(),
            history: self.history.clone(),
            game_over: self.game_over,
            winner: self.winner(),
        }
    }

    /// Rebuild a game from a snapshot, rejecting inconsistent ones.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, GameError> {
        let GameSnapshot {
            user_1,
            user_2,
            boards,
            next_move,
            history,
            game_over,
            winner,
        } = snapshot;

        let mut game = GameState::new(user_1, user_2)?;
        for seat in [Seat::One, Seat::Two] {
            boards[seat.index()]
                .verify()
                .map_err(|reason| GameError::CorruptSnapshot { seat, reason })?;
        }
        game.next_move = game
            .seat_of(next_move)
            .map_err(|_| GameError::CorruptGame("next move is not a player in this game"))?;
        game.winner = match winner {
            Some(id) => Some(
                game.seat_of(id)
                    .map_err(|_| GameError::CorruptGame("winner is not a player in this game"))?,
            ),
            None => None,
        };
        if game.winner.is_some() != game_over {
            return Err(GameError::CorruptGame("winner and game over flag disagree"));
        }
        game.boards = boards;
        game.history = history;
        game.game_over = game_over;

        let (one_won, two_won) = game.check_winner();
        let reason = match game.winner {
            None if one_won || two_won => Some("a fleet is destroyed but the game is open"),
            Some(Seat::One) if !one_won => Some("winner has not sunk the opposing fleet"),
            Some(Seat::Two) if !two_won => Some("winner has not sunk the opposing fleet"),
            _ => None,
        };
        if let Some(reason) = reason {
            return Err(GameError::CorruptGame(reason));
        }
        Ok(game)
    }

    /// Check that the game may be abandoned. Only open games can be
    /// cancelled; removing the stored game is up to the caller.
    pub fn cancel(&self) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        log::info!(
            "game between {} and {} cancelled",
            self.players[0],
            self.players[1]
        );
        Ok(())
    }

    /// Snapshot encoded with bincode.
    #[cfg(feature = "std")]
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode and verify a bincode snapshot.
    #[cfg(feature = "std")]
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let snapshot: GameSnapshot = bincode::deserialize(bytes)?;
        Ok(GameState::from_snapshot(snapshot)?)
    }
}
