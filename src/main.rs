#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    default_ship_positions, init_logging, ship_positions_from_json, ui, AutonomousOpponent,
    ChannelInput, MatchController, PlacementMethod, Player, Presenter, ScriptedInput,
    ShipPosition,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::io::{BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer, entering targets like `B7` on stdin.
    Play {
        #[arg(long, help = "Fix the opponent's RNG seed for reproducible games")]
        seed: Option<u64>,
        #[arg(long, help = "JSON file with five {row, col, shipName, direction} records")]
        ships: Option<PathBuf>,
        #[arg(long, default_value = "random")]
        placement: String,
        #[arg(long, help = "Give up if no target is entered within this many seconds")]
        attack_timeout: Option<u64>,
    },
    /// Non-interactive match: the human side sweeps the board row by row.
    Auto {
        #[arg(long, help = "Fix the opponent's RNG seed for reproducible games")]
        seed: Option<u64>,
        #[arg(long)]
        ships: Option<PathBuf>,
        #[arg(long, default_value = "random")]
        placement: String,
    },
}

#[cfg(feature = "std")]
fn build_opponent(seed: Option<u64>) -> AutonomousOpponent {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            AutonomousOpponent::seeded(Player::new(), s)
        }
        None => AutonomousOpponent::new(Player::new()),
    }
}

#[cfg(feature = "std")]
fn load_positions(path: Option<PathBuf>) -> anyhow::Result<Vec<ShipPosition>> {
    match path {
        Some(path) => ship_positions_from_json(&std::fs::read_to_string(path)?),
        None => Ok(default_ship_positions()),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            ships,
            placement,
            attack_timeout,
        } => {
            let placement: PlacementMethod = placement.parse()?;
            let (input, handle) = ChannelInput::new();
            let mut input = match attack_timeout {
                Some(secs) => input.with_timeout(Duration::from_secs(secs)),
                None => input,
            };
            for position in load_positions(ships)? {
                handle.record_ship(position);
            }

            let mut controller =
                MatchController::new(Player::new(), build_opponent(seed)).with_placement(placement);
            controller.setup_game(&mut input).await?;

            std::thread::spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    match ui::parse_coord(&line) {
                        Ok(coord) => {
                            if handle.record_attack(coord).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            print!("{}. Try again: ", e);
                            let _ = std::io::stdout().flush();
                        }
                    }
                }
            });

            let mut presenter = ui::TerminalPresenter;
            while !controller.is_finished() {
                ui::print_boards(
                    controller.human().board(),
                    controller.opponent().player().board(),
                );
                print!("\nYour target (e.g. B7): ");
                std::io::stdout().flush()?;
                controller
                    .play_round(Some(&mut input), &mut presenter)
                    .await?;
            }
            ui::print_boards(
                controller.human().board(),
                controller.opponent().player().board(),
            );
            if let Some(winner) = controller.winner() {
                presenter.announce_winner(winner);
            }
        }
        Commands::Auto {
            seed,
            ships,
            placement,
        } => {
            let placement: PlacementMethod = placement.parse()?;
            let mut input = ScriptedInput::sweep(load_positions(ships)?);
            let mut controller =
                MatchController::new(Player::new(), build_opponent(seed)).with_placement(placement);
            let mut presenter = ui::TerminalPresenter;
            controller.play_match(&mut input, &mut presenter).await?;
            println!("Match decided in {} rounds.", controller.rounds());
        }
    }
    Ok(())
}
