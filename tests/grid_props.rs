use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    random_grid, BoardError, CellState, Coordinate, GameConfig, Grid, Orientation, ShotResult,
    Vessel,
};

fn seeded_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_grid(&GameConfig::default(), &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vessel_cells_are_collinear(
        x in -5i32..10,
        y in -5i32..10,
        length in 1usize..6,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let cells = Vessel::new(Coordinate::new(x, y), length, orientation).occupied_coordinates();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coordinate::new(x, y));
        for (i, c) in cells.iter().enumerate() {
            let i = i as i32;
            let expected = if vertical {
                Coordinate::new(x + i, y)
            } else {
                Coordinate::new(x, y + i)
            };
            prop_assert_eq!(*c, expected);
        }
    }

    #[test]
    fn random_fleets_never_touch(seed in any::<u64>()) {
        let grid = seeded_grid(seed);
        let vessels = grid.vessels();
        prop_assert_eq!(vessels.len(), 7);
        for (i, a) in vessels.iter().enumerate() {
            for b in vessels.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(ca.chebyshev(&cb) > 1, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
        prop_assert_eq!(grid.occupied_coordinates().len(), 3 + 2 + 2 + 1 + 1 + 1 + 1);
        for v in vessels {
            for c in v.cells() {
                prop_assert!(grid.contains(c));
                prop_assert!(grid.occupied_coordinates().contains(&c));
                prop_assert_eq!(grid.cell(c), Some(CellState::Occupied));
            }
        }
    }

    #[test]
    fn second_shot_is_always_rejected(seed in any::<u64>(), x in 0i32..6, y in 0i32..6) {
        let mut grid = seeded_grid(seed);
        let target = Coordinate::new(x, y);
        grid.fire_at(target).unwrap();
        prop_assert_eq!(grid.fire_at(target).unwrap_err(), BoardError::AlreadyTargeted(target));
    }

    #[test]
    fn sinking_takes_exactly_length_shots(seed in any::<u64>()) {
        let mut grid = seeded_grid(seed);
        let vessels: Vec<Vessel> = grid.vessels().to_vec();
        for (sunk_before, vessel) in vessels.iter().enumerate() {
            prop_assert_eq!(grid.sunk_count(), sunk_before);
            let cells = vessel.occupied_coordinates();
            for (i, c) in cells.iter().enumerate() {
                let result = grid.fire_at(*c).unwrap();
                if i + 1 == cells.len() {
                    prop_assert_eq!(result, ShotResult::Sunk);
                } else {
                    prop_assert_eq!(result, ShotResult::Hit);
                }
            }
            prop_assert_eq!(grid.sunk_count(), sunk_before + 1);
        }
        prop_assert!(grid.all_sunk());
    }

    #[test]
    fn sunk_count_tracks_vessels(
        seed in any::<u64>(),
        shots in prop::collection::vec((0i32..6, 0i32..6), 0..60),
    ) {
        let mut grid = seeded_grid(seed);
        for (x, y) in shots {
            let _ = grid.fire_at(Coordinate::new(x, y));
        }
        let sunk = grid.vessels().iter().filter(|v| v.is_sunk()).count();
        prop_assert_eq!(grid.sunk_count(), sunk);
        for v in grid.vessels() {
            for c in v.cells() {
                let state = grid.cell(c).unwrap();
                prop_assert!(matches!(state, CellState::Occupied | CellState::Hit));
            }
        }
    }
}
