#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use broadside::{
        default_ship_positions, AutonomousOpponent, LogPresenter, MatchController, Player,
        ScriptedInput,
    };
    use serde_json::json;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let opponent = AutonomousOpponent::seeded(Player::new(), seed);
    let mut controller = MatchController::new(Player::new(), opponent);
    let mut input = ScriptedInput::sweep(default_ship_positions());
    let winner = controller
        .play_match(&mut input, &mut LogPresenter)
        .await?;

    let result = json!({
        "winner": winner,
        "rounds": controller.rounds(),
        "human_shots_landed": controller.opponent().player().board().landed_attacks().len(),
        "opponent_shots_landed": controller.human().board().landed_attacks().len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
