use battleship_engine::{
    random_fleet, validate_fleet, BoardError, FleetGenerator, Orientation, Ship,
    MAX_PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_sizes_placed_in_order() -> Result<(), BoardError> {
    let mut rng = SmallRng::seed_from_u64(42);
    let ships = random_fleet(10, 10, &[5, 4, 3, 3, 2], &mut rng)?;
    let sizes: Vec<_> = ships.iter().map(Ship::size).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
    validate_fleet(&ships, 10, 10)?;
    Ok(())
}

#[test]
fn test_same_seed_same_fleet() -> Result<(), BoardError> {
    let generator = FleetGenerator::new(8, 6);
    let a = generator.generate(&[4, 3, 2], &mut SmallRng::seed_from_u64(99))?;
    let b = generator.generate(&[4, 3, 2], &mut SmallRng::seed_from_u64(99))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_forced_vertical_when_too_wide() -> Result<(), BoardError> {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = random_fleet(2, 8, &[5], &mut rng)?;
        assert_eq!(ships[0].orientation(), Orientation::Vertical);
        assert!(ships[0].bottom() < 8);
    }
    Ok(())
}

#[test]
fn test_forced_horizontal_when_too_tall() -> Result<(), BoardError> {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = random_fleet(8, 2, &[5], &mut rng)?;
        assert_eq!(ships[0].orientation(), Orientation::Horizontal);
        assert!(ships[0].right() < 8);
    }
    Ok(())
}

#[test]
fn test_unplaceable_ship() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        random_fleet(3, 3, &[2, 4], &mut rng).unwrap_err(),
        BoardError::UnplaceableShip { size: 4 }
    );
    assert_eq!(
        random_fleet(0, 5, &[1], &mut rng).unwrap_err(),
        BoardError::UnplaceableShip { size: 1 }
    );
}

#[test]
fn test_zero_size_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        random_fleet(5, 5, &[0], &mut rng).unwrap_err(),
        BoardError::InvalidGeometry
    );
}

#[test]
fn test_placement_exhausted() {
    let mut rng = SmallRng::seed_from_u64(5);
    let generator = FleetGenerator::new(2, 2).with_max_attempts(50);
    assert_eq!(generator.max_attempts(), 50);
    assert_eq!(
        generator.generate(&[2, 2, 2], &mut rng).unwrap_err(),
        BoardError::PlacementExhausted {
            size: 2,
            attempts: 50
        }
    );
}

#[test]
fn test_default_attempt_ceiling() {
    assert_eq!(FleetGenerator::new(10, 10).max_attempts(), MAX_PLACEMENT_ATTEMPTS);
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        random_fleet(1, 1, &[1, 1], &mut rng).unwrap_err(),
        BoardError::PlacementExhausted {
            size: 1,
            attempts: MAX_PLACEMENT_ATTEMPTS
        }
    );
}

#[test]
fn test_tight_fit_is_found() -> Result<(), BoardError> {
    let mut rng = SmallRng::seed_from_u64(11);
    let ships = random_fleet(3, 1, &[1, 1, 1], &mut rng)?;
    let mut columns: Vec<_> = ships.iter().map(Ship::left).collect();
    columns.sort();
    assert_eq!(columns, vec![0, 1, 2]);
    Ok(())
}
