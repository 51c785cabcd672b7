use std::time::Duration;

use broadside::{
    default_ship_positions, AttackOutcome, AutonomousOpponent, ChannelInput, Coordinate,
    MatchController, MatchPhase, Orientation, PlacementLimits, Player, Presenter, ScriptedInput,
    Shot, ShipPosition, ShipType, Side, BOARD_SIZE,
};

#[derive(Debug, Default)]
struct RecordingPresenter {
    shots: Vec<(Side, Shot)>,
    winners: Vec<Side>,
}

impl Presenter for RecordingPresenter {
    fn cell_outcome(&mut self, side: Side, shot: Shot) {
        self.shots.push((side, shot));
    }

    fn announce_winner(&mut self, winner: Side) {
        self.winners.push(winner);
    }
}

fn controller(seed: u64) -> MatchController {
    MatchController::new(Player::new(), AutonomousOpponent::seeded(Player::new(), seed))
}

#[tokio::test]
async fn test_full_match_terminates_with_winner() {
    for seed in [1, 2, 3, 99] {
        let mut controller = controller(seed);
        let mut input = ScriptedInput::sweep(default_ship_positions());
        let mut presenter = RecordingPresenter::default();

        let winner = controller
            .play_match(&mut input, &mut presenter)
            .await
            .unwrap();

        assert!(controller.is_finished());
        assert_eq!(controller.phase(), MatchPhase::Finished);
        assert_eq!(controller.winner(), Some(winner));
        assert!(controller.rounds() <= 100);
        assert_eq!(presenter.winners, vec![winner]);

        let loser_board = match winner {
            Side::Human => controller.opponent().player().board(),
            Side::Opponent => controller.human().board(),
        };
        assert!(loser_board.report_ship_status());
    }
}

#[tokio::test]
async fn test_turns_alternate_human_first() {
    let mut controller = controller(4);
    let mut input = ScriptedInput::sweep(default_ship_positions());
    let mut presenter = RecordingPresenter::default();
    controller.setup_game(&mut input).await.unwrap();
    assert_eq!(controller.phase(), MatchPhase::InProgress);

    for _ in 0..3 {
        controller
            .play_round(Some(&mut input), &mut presenter)
            .await
            .unwrap();
    }
    let sides: Vec<_> = presenter.shots.iter().map(|(side, _)| *side).collect();
    assert_eq!(
        sides,
        vec![
            Side::Opponent,
            Side::Human,
            Side::Opponent,
            Side::Human,
            Side::Opponent,
            Side::Human
        ]
    );
    assert_eq!(controller.current_turn(), Side::Human);
    assert_eq!(controller.rounds(), 3);

    let human_targets: Vec<_> = presenter
        .shots
        .iter()
        .filter(|(side, _)| *side == Side::Opponent)
        .map(|(_, shot)| (shot.row, shot.col))
        .collect();
    assert_eq!(human_targets, vec![(0, 0), (0, 1), (0, 2)]);
}

#[tokio::test]
async fn test_round_without_input_fires_default() {
    let mut controller = controller(5);
    let mut setup = ScriptedInput::new(default_ship_positions(), []);
    let mut presenter = RecordingPresenter::default();
    controller.setup_game(&mut setup).await.unwrap();

    controller.play_round(None, &mut presenter).await.unwrap();
    controller.play_round(None, &mut presenter).await.unwrap();

    let opponent_board = controller.opponent().player().board();
    assert_eq!(opponent_board.attacked().len(), 1);
    assert!(opponent_board.attacked().contains(0, 0).unwrap());
    assert_eq!(presenter.shots[2].1.outcome, AttackOutcome::AlreadyAttacked);
    assert_eq!(controller.human().board().attacked().len(), 2);
}

#[tokio::test]
async fn test_round_before_setup_is_rejected() {
    let mut controller = controller(6);
    let mut presenter = RecordingPresenter::default();
    assert!(controller.play_round(None, &mut presenter).await.is_err());
    assert!(presenter.shots.is_empty());
}

#[tokio::test]
async fn test_finished_round_is_noop() {
    let mut controller = controller(7);
    let mut input = ScriptedInput::sweep(default_ship_positions());
    let mut presenter = RecordingPresenter::default();
    controller
        .play_match(&mut input, &mut presenter)
        .await
        .unwrap();
    let shots = presenter.shots.len();
    let rounds = controller.rounds();

    controller
        .play_round(Some(&mut input), &mut presenter)
        .await
        .unwrap();
    assert_eq!(presenter.shots.len(), shots);
    assert_eq!(controller.rounds(), rounds);
}

#[tokio::test]
async fn test_overlapping_human_fleet_aborts_setup() {
    let mut positions = default_ship_positions();
    positions[4] = ShipPosition::new(0, 3, ShipType::Destroyer, Orientation::Vertical);
    let mut input = ScriptedInput::sweep(positions);
    let mut controller = controller(8);

    assert!(controller.setup_game(&mut input).await.is_err());
    assert_eq!(controller.phase(), MatchPhase::AwaitingSetup);
    assert_eq!(controller.human().board().ships_placed(), 0);
    assert_eq!(controller.opponent().player().board().ships_placed(), 0);
}

#[tokio::test]
async fn test_malformed_positions_abort_setup() {
    let mut bad_name = default_ship_positions();
    bad_name[2].ship_name = "patrol".to_string();
    let mut bad_direction = default_ship_positions();
    bad_direction[0].direction = "diagonal".to_string();
    let mut duplicate = default_ship_positions();
    duplicate[4] = ShipPosition::new(9, 0, ShipType::Carrier, Orientation::Horizontal);
    let short = default_ship_positions()[..4].to_vec();

    for positions in [bad_name, bad_direction, duplicate, short] {
        let mut controller = controller(9);
        let mut input = ScriptedInput::sweep(positions);
        assert!(controller.setup_game(&mut input).await.is_err());
        assert_eq!(controller.phase(), MatchPhase::AwaitingSetup);
        assert_eq!(controller.human().board().ships_placed(), 0);
    }
}

#[tokio::test]
async fn test_opponent_placement_failure_is_fatal() {
    let limits = PlacementLimits {
        max_fleet_attempts: 2,
        max_ship_attempts: 0,
    };
    let opponent = AutonomousOpponent::seeded(Player::new(), 10).with_limits(limits);
    let mut controller = MatchController::new(Player::new(), opponent);
    let mut input = ScriptedInput::sweep(default_ship_positions());

    assert!(controller.setup_game(&mut input).await.is_err());
    assert_eq!(controller.phase(), MatchPhase::AwaitingSetup);
    assert_eq!(controller.human().board().ships_placed(), 0);
}

#[tokio::test]
async fn test_reset_allows_replay() {
    let mut controller = controller(12);
    let mut input = ScriptedInput::sweep(default_ship_positions());
    let mut presenter = RecordingPresenter::default();
    controller
        .play_match(&mut input, &mut presenter)
        .await
        .unwrap();

    controller.reset();
    assert_eq!(controller.phase(), MatchPhase::AwaitingSetup);
    assert_eq!(controller.winner(), None);
    assert_eq!(controller.rounds(), 0);
    assert!(controller.human().board().attacked().is_empty());

    let mut input = ScriptedInput::sweep(default_ship_positions());
    let winner = controller
        .play_match(&mut input, &mut presenter)
        .await
        .unwrap();
    assert_eq!(presenter.winners.len(), 2);
    assert_eq!(presenter.winners[1], winner);
}

#[tokio::test]
async fn test_channel_input_waits_for_five_ships() {
    let (mut input, handle) = ChannelInput::new();
    let mut controller = controller(13);

    let feeder = tokio::spawn(async move {
        for position in default_ship_positions() {
            tokio::task::yield_now().await;
            handle.record_ship(position);
        }
        handle.record_attack(Coordinate::new(BOARD_SIZE - 1, 0)).unwrap();
        handle
    });

    controller.setup_game(&mut input).await.unwrap();
    assert!(controller.human().board().is_fleet_complete());

    let mut presenter = RecordingPresenter::default();
    controller
        .play_round(Some(&mut input), &mut presenter)
        .await
        .unwrap();
    assert_eq!(presenter.shots[0].0, Side::Opponent);
    assert_eq!(
        (presenter.shots[0].1.row, presenter.shots[0].1.col),
        (BOARD_SIZE - 1, 0)
    );
    drop(feeder.await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_channel_input_times_out() {
    let (input, handle) = ChannelInput::new();
    let mut input = input.with_timeout(Duration::from_secs(5));
    let mut controller = controller(14);
    for position in default_ship_positions() {
        handle.record_ship(position);
    }
    controller.setup_game(&mut input).await.unwrap();

    let mut presenter = RecordingPresenter::default();
    let err = controller
        .play_round(Some(&mut input), &mut presenter)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timed out"));
    assert!(presenter.shots.is_empty());
    drop(handle);
}

#[tokio::test]
async fn test_channel_input_closed() {
    let (mut input, handle) = ChannelInput::new();
    handle.record_ship(default_ship_positions()[0].clone());
    drop(handle);
    let mut controller = controller(15);
    assert!(controller.setup_game(&mut input).await.is_err());
}
