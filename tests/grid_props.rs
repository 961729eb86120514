use std::collections::HashSet;

use battleship_engine::{
    BoardError, FleetGenerator, GuessCell, GuessResult, Grid, Opponent, DEFAULT_SHIP_SIZES,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

fn random_opponent(seed: u64) -> Opponent {
    let mut rng = SmallRng::seed_from_u64(seed);
    Opponent::standard(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleets_are_disjoint_and_in_bounds(
        seed in any::<u64>(),
        columns in 1..12usize,
        rows in 1..12usize,
        sizes in proptest::collection::vec(1..6usize, 0..6),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let generator = FleetGenerator::new(columns, rows).with_max_attempts(200);
        match generator.generate(&sizes, &mut rng) {
            Ok(ships) => {
                let placed: Vec<_> = ships.iter().map(|s| s.size()).collect();
                prop_assert_eq!(placed, sizes.clone());
                let mut seen = HashSet::new();
                for ship in &ships {
                    for (c, r) in ship.cells() {
                        prop_assert!(c < columns && r < rows);
                        prop_assert!(seen.insert((c, r)));
                    }
                }
                prop_assert!(Opponent::new(columns, rows, ships).is_ok());
            }
            Err(BoardError::UnplaceableShip { size }) => {
                prop_assert!(size > columns && size > rows);
            }
            Err(BoardError::PlacementExhausted { attempts, .. }) => {
                prop_assert_eq!(attempts, 200);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn hit_accounting(seed in any::<u64>()) {
        let opponent = random_opponent(seed);
        let mut grid = Grid::for_opponent(&opponent);
        for (index, ship) in opponent.ships().iter().enumerate() {
            let cells: Vec<_> = ship.cells().collect();
            for (n, &(c, r)) in cells.iter().enumerate() {
                prop_assert!(!grid.ships_sunk()[index]);
                let result = grid.shoot_at(c, r).unwrap();
                if n + 1 == ship.size() {
                    prop_assert_eq!(result, GuessResult::Sunk(index));
                } else {
                    prop_assert_eq!(result, GuessResult::Hit(index));
                }
            }
            prop_assert!(grid.ships_sunk()[index]);
            prop_assert_eq!(grid.hit_counts()[index], ship.size());
            for &(c, r) in &cells {
                prop_assert_eq!(grid.get(c, r).unwrap(), GuessCell::Sunk(index));
            }
        }
        prop_assert!(grid.is_finished());
    }

    #[test]
    fn shooting_every_cell_finishes(seed in any::<u64>()) {
        let opponent = random_opponent(seed);
        let mut grid = Grid::for_opponent(&opponent);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut targets: Vec<_> = grid.cells().map(|(c, r, _)| (c, r)).collect();
        targets.shuffle(&mut rng);

        let mut sunk_results = 0;
        for (c, r) in targets {
            prop_assert_eq!(grid.is_finished(), grid.ships_sunk().iter().all(|s| *s));
            if let GuessResult::Sunk(_) = grid.shoot_at(c, r).unwrap() {
                sunk_results += 1;
            }
        }
        prop_assert_eq!(sunk_results, DEFAULT_SHIP_SIZES.len());
        prop_assert!(grid.is_finished());
        let sunk_cells = grid
            .cells()
            .filter(|(_, _, cell)| matches!(cell, GuessCell::Sunk(_)))
            .count();
        prop_assert_eq!(sunk_cells, opponent.fleet_cells());
        prop_assert!(grid.cells().all(|(_, _, cell)| matches!(cell, GuessCell::Miss | GuessCell::Sunk(_))));
    }

    #[test]
    fn duplicate_shot_is_rejected(seed in any::<u64>(), column in 0..10usize, row in 0..10usize) {
        let opponent = random_opponent(seed);
        let mut grid = Grid::for_opponent(&opponent);
        grid.shoot_at(column, row).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        let hits = grid.hit_counts().to_vec();

        let err = grid.shoot_at(column, row).unwrap_err();
        prop_assert_eq!(err, BoardError::DuplicateShot { column, row });
        prop_assert_eq!(grid.cells().collect::<Vec<_>>(), cells);
        prop_assert_eq!(grid.hit_counts().to_vec(), hits);
    }

    #[test]
    fn get_is_idempotent(seed in any::<u64>(), shots in 0..40usize) {
        let opponent = random_opponent(seed);
        let mut grid = Grid::for_opponent(&opponent);
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..shots {
            let _ = grid.shoot_at(rng.random_range(0..10), rng.random_range(0..10));
        }
        for (c, r, cell) in grid.cells() {
            prop_assert_eq!(grid.get(c, r).unwrap(), cell);
            prop_assert_eq!(grid.get(c, r).unwrap(), cell);
        }
    }
}
