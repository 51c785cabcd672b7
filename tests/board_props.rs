use broadside::{AttackOutcome, Board, Orientation, ShipType, BOARD_SIZE, FLEET};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn ship_type() -> impl Strategy<Value = ShipType> {
    (0..FLEET.len()).prop_map(|i| FLEET[i])
}

fn cells(row: usize, col: usize, t: ShipType, o: Orientation) -> Vec<(usize, usize)> {
    o.cells(row, col, t.length()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_covers_exact_cells(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        t in ship_type(),
        o in orientation(),
    ) {
        let mut board = Board::new();
        let expected = cells(row, col, t, o);
        let fits = expected.iter().all(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE);
        prop_assert_eq!(board.place_ship(row, col, t, o).unwrap(), fits);

        let grid = board.grid();
        let occupied: Vec<_> = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| grid[r][c].is_some())
            .collect();
        if fits {
            let mut expected = expected;
            expected.sort();
            prop_assert_eq!(occupied, expected);
        } else {
            prop_assert!(occupied.is_empty());
        }
    }

    #[test]
    fn intersecting_placements_conflict(
        first in ship_type(),
        second in ship_type(),
        a in (0..BOARD_SIZE, 0..BOARD_SIZE, orientation()),
        b in (0..BOARD_SIZE, 0..BOARD_SIZE, orientation()),
    ) {
        prop_assume!(first != second);
        let on_board = |cells: &[(usize, usize)]| {
            cells.iter().all(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE)
        };
        let ca = cells(a.0, a.1, first, a.2);
        let cb = cells(b.0, b.1, second, b.2);

        let mut board = Board::new();
        let placed_first = board.place_ship(a.0, a.1, first, a.2).unwrap();
        prop_assert_eq!(placed_first, on_board(&ca));

        let intersects = placed_first && cb.iter().any(|cell| ca.contains(cell));
        let placed_second = board.place_ship(b.0, b.1, second, b.2).unwrap();
        prop_assert_eq!(placed_second, on_board(&cb) && !intersects);
        prop_assert_eq!(board.ships_placed(), placed_first as usize + placed_second as usize);
    }

    #[test]
    fn repeat_attack_is_idempotent(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        shots in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..30),
    ) {
        let mut board = Board::new();
        board.place_ship(0, 0, ShipType::Carrier, Orientation::Horizontal).unwrap();
        board.place_ship(2, 3, ShipType::Battleship, Orientation::Vertical).unwrap();
        board.place_ship(9, 5, ShipType::Destroyer, Orientation::Horizontal).unwrap();
        for (r, c) in shots {
            board.receive_attack(r, c).unwrap();
        }

        board.receive_attack(row, col).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.receive_attack(row, col).unwrap(), AttackOutcome::AlreadyAttacked);
        prop_assert_eq!(&board, &after_first);
        prop_assert!((board.missed_attacks() & board.landed_attacks()).is_empty());
    }

    #[test]
    fn every_landed_shot_counts_against_a_ship(
        shots in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..60),
    ) {
        let mut board = Board::new();
        board.place_ship(0, 0, ShipType::Carrier, Orientation::Horizontal).unwrap();
        board.place_ship(2, 3, ShipType::Battleship, Orientation::Vertical).unwrap();
        board.place_ship(9, 5, ShipType::Destroyer, Orientation::Horizontal).unwrap();
        for (r, c) in shots {
            let outcome = board.receive_attack(r, c).unwrap();
            if outcome.is_hit() {
                prop_assert!(board.ship_at(r, c).unwrap().is_some());
            }
        }

        let hits: usize = board.ships().iter().flatten().map(|s| s.hit_count()).sum();
        prop_assert_eq!(hits, board.landed_attacks().len());
    }
}
