use battlegrid::{
    placer, AttackError, AttackOutcome, GameError, GameResult, GameState, Phase, PlayerId,
    BOARD_SIZE, NUM_SHIP_TYPES, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};

const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);

fn ready_game(rng: &mut SmallRng) -> GameState {
    let mut game = GameState::new(P1, P2).unwrap();
    game.insert_ships(P1, &placer::random_fleet(rng).unwrap()).unwrap();
    game.insert_ships(P2, &placer::random_fleet(rng).unwrap()).unwrap();
    game
}

fn shuffled_cells(rng: &mut SmallRng) -> Vec<(i32, i32)> {
    let n = BOARD_SIZE as i32;
    let mut cells: Vec<_> = (0..n).flat_map(|r| (0..n).map(move |c| (r, c))).collect();
    cells.shuffle(rng);
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_games_finish_consistently(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = ready_game(&mut rng);
        let mut queues = [shuffled_cells(&mut rng), shuffled_cells(&mut rng)];
        let mut results: Vec<GameResult> = Vec::new();

        while !game.is_over() {
            let player = game.next_move();
            let queue = if player == P1 { &mut queues[0] } else { &mut queues[1] };
            let (row, col) = queue.pop().unwrap();
            game.attack(player, row, col, &mut results).unwrap();

            for p in [P1, P2] {
                let board = game.board(p).unwrap();
                prop_assert_eq!(board.verify(), Ok(()));
                prop_assert_eq!(
                    board.ship_cells_remaining() + board.grid().hits().count(),
                    TOTAL_SHIP_CELLS
                );
            }
        }

        prop_assert_eq!(game.phase(), Phase::Finished);
        prop_assert_eq!(results.len(), 1);
        let result = results[0];
        prop_assert_eq!(game.winner(), Some(result.winner));
        prop_assert_ne!(result.winner, result.loser);

        let loser = game.board(result.loser).unwrap();
        prop_assert!(!loser.has_ships());
        prop_assert_eq!(loser.ships_afloat(), 0);
        prop_assert!(game.board(result.winner).unwrap().has_ships());

        let winner_moves = game.history(result.winner).unwrap();
        let loser_moves = game.history(result.loser).unwrap();
        let sunk = winner_moves
            .iter()
            .filter(|m| matches!(m.outcome, AttackOutcome::Sunk(_)))
            .count();
        prop_assert_eq!(sunk, NUM_SHIP_TYPES);
        prop_assert_eq!(loser.destroyed_cells(), winner_moves.len());

        // Player 1 moves first, so only a player 1 win leaves histories uneven.
        let expected_gap = if result.winner == P1 { 1 } else { 0 };
        prop_assert_eq!(winner_moves.len(), loser_moves.len() + expected_gap);

        let (one, two) = game.check_winner();
        prop_assert_eq!(one, result.winner == P1);
        prop_assert_eq!(two, result.winner == P2);
        prop_assert_eq!(game.attack(result.loser, 0, 0, &mut results), Err(GameError::GameOver));
    }

    #[test]
    fn repeated_attack_changes_nothing(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE as i32,
        col in 0..BOARD_SIZE as i32,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = ready_game(&mut rng);
        game.attack(P1, row, col, &mut ()).unwrap();
        game.attack(P2, row, col, &mut ()).unwrap();

        let before = game.clone();
        prop_assert_eq!(
            game.attack(P1, row, col, &mut ()),
            Err(GameError::Attack(AttackError::AlreadyDestroyed {
                row: row as usize,
                col: col as usize,
            }))
        );
        prop_assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_attack_changes_nothing(
        seed in any::<u64>(),
        row in -20i32..30,
        col in -20i32..30,
    ) {
        prop_assume!(!(0..BOARD_SIZE as i32).contains(&row) || !(0..BOARD_SIZE as i32).contains(&col));
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = ready_game(&mut rng);
        let before = game.clone();
        prop_assert_eq!(
            game.attack(P1, row, col, &mut ()),
            Err(GameError::Attack(AttackError::OutOfBounds { row, col }))
        );
        prop_assert_eq!(game, before);
    }
}
