#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(feature = "std")]
mod cli {
    use std::path::PathBuf;

    use anyhow::{anyhow, Context};
    use battlegrid::{
        init_logging, placer, GameResult, GameState, Orientation, Placement, PlayerId, Seat,
        ShipType,
    };
    use clap::{Parser, Subcommand};
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use serde_json::json;

    #[derive(Parser)]
    #[command(author, version, about, long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Play a full game between two random players.
        Simulate {
            #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
            seed: Option<u64>,
            /// Print a JSON summary instead of the boards.
            #[arg(long)]
            json: bool,
            /// Write the final game snapshot to this file.
            #[arg(long)]
            save: Option<PathBuf>,
        },
        /// Load a saved snapshot, verify it and print its state.
        Inspect { path: PathBuf },
        /// Validate one ship placement on an empty grid.
        Check {
            ship: String,
            #[arg(allow_negative_numbers = true)]
            row: i32,
            #[arg(allow_negative_numbers = true)]
            col: i32,
            orientation: String,
        },
    }

    pub fn run() -> anyhow::Result<()> {
        init_logging();
        let cli = Cli::parse();
        match cli.command {
            Commands::Simulate { seed, json, save } => simulate(seed, json, save),
            Commands::Inspect { path } => inspect(path),
            Commands::Check {
                ship,
                row,
                col,
                orientation,
            } => check(&ship, row, col, &orientation),
        }
    }

    fn simulate(seed: Option<u64>, json: bool, save: Option<PathBuf>) -> anyhow::Result<()> {
        let mut rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let (p1, p2) = (PlayerId(1), PlayerId(2));
        let mut game = GameState::new(p1, p2)?;
        game.insert_ships(p1, &placer::random_fleet(&mut rng)?)?;
        game.insert_ships(p2, &placer::random_fleet(&mut rng)?)?;

        // Each player fires at every cell once, in a shuffled order.
        let mut targets: [Vec<(i32, i32)>; 2] = Default::default();
        for queue in targets.iter_mut() {
            *queue = (0..10).flat_map(|r| (0..10).map(move |c| (r, c))).collect();
            queue.shuffle(&mut rng);
        }

        let mut results: Vec<GameResult> = Vec::new();
        while !game.is_over() {
            let player = game.next_move();
            let queue = match game.seat_of(player)? {
                Seat::One => &mut targets[0],
                Seat::Two => &mut targets[1],
            };
            let (row, col) = queue
                .pop()
                .ok_or_else(|| anyhow!("player {} ran out of targets", player))?;
            let report = game.attack(player, row, col, &mut results)?;
            log::debug!("player {} -> ({}, {}): {}", player, row, col, report.outcome);
        }

        let result = results
            .first()
            .copied()
            .ok_or_else(|| anyhow!("game ended without a result"))?;

        if json {
            let summary = json!({
                "seed": seed,
                "winner": result.winner.0,
                "loser": result.loser.0,
                "moves": {
                    "player1": game.history(p1)?.len(),
                    "player2": game.history(p2)?.len(),
                },
                "ships_remaining": {
                    "player1": game.board(p1)?.ships_afloat(),
                    "player2": game.board(p2)?.ships_afloat(),
                },
            });
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            print_game(&game)?;
        }

        if let Some(path) = save {
            std::fs::write(&path, game.to_bytes()?)
                .with_context(|| format!("writing snapshot to {}", path.display()))?;
            log::info!("snapshot saved to {}", path.display());
        }
        Ok(())
    }

    fn inspect(path: PathBuf) -> anyhow::Result<()> {
        let bytes =
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let game = GameState::from_bytes(&bytes)?;
        print_game(&game)
    }

    fn check(ship: &str, row: i32, col: i32, orientation: &str) -> anyhow::Result<()> {
        let ship: ShipType = ship.parse()?;
        let orientation: Orientation = orientation.parse()?;
        let placement = Placement::new(ship, row, col, orientation);
        let cells: Vec<_> = placer::cells(&placement)?.collect();
        println!("{} is valid, covering {:?}", placement, cells);
        Ok(())
    }

    fn print_game(game: &GameState) -> anyhow::Result<()> {
        println!("Phase: {:?}", game.phase());
        match game.winner() {
            Some(winner) => println!("Winner: player {}", winner),
            None => println!("Next move: player {}", game.next_move()),
        }
        let (p1, p2) = game.players();
        for player in [p1, p2] {
            let board = game.board(player)?;
            println!();
            println!(
                "Player {} ({} ships afloat, {} moves made):",
                player,
                board.ships_afloat(),
                game.history(player)?.len()
            );
            for (ship, count) in board.inventory().iter() {
                println!("  {:<12} {}", ship.name(), count);
            }
            println!("{}", board.grid());
        }
        Ok(())
    }
}
