use seabattle::{Coordinate, Orientation, Vessel};

#[test]
fn test_horizontal_cells_advance_along_column() {
    let vessel = Vessel::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    assert_eq!(
        vessel.occupied_coordinates(),
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3)
        ]
    );
}

#[test]
fn test_vertical_cells_advance_along_row() {
    let vessel = Vessel::new(Coordinate::new(2, 1), 3, Orientation::Vertical);
    assert_eq!(
        vessel.occupied_coordinates(),
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(3, 1),
            Coordinate::new(4, 1)
        ]
    );
}

#[test]
fn test_is_hit_by() {
    let vessel = Vessel::new(Coordinate::new(0, 0), 2, Orientation::Vertical);
    assert!(vessel.is_hit_by(Coordinate::new(0, 0)));
    assert!(vessel.is_hit_by(Coordinate::new(1, 0)));
    assert!(!vessel.is_hit_by(Coordinate::new(0, 1)));
    assert!(!vessel.is_hit_by(Coordinate::new(2, 0)));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut vessel = Vessel::new(Coordinate::new(1, 1), 2, Orientation::Horizontal);
    assert_eq!(vessel.hit_points(), 2);
    assert!(!vessel.register_hit());
    assert!(!vessel.is_sunk());
    assert!(vessel.register_hit());
    assert!(vessel.is_sunk());
    // already sunk: nothing left to take
    assert!(!vessel.register_hit());
    assert_eq!(vessel.hit_points(), 0);
}

#[test]
fn test_construction_does_not_check_bounds() {
    let vessel = Vessel::new(Coordinate::new(-3, 10), 2, Orientation::Horizontal);
    assert_eq!(vessel.origin(), Coordinate::new(-3, 10));
    assert_eq!(vessel.length(), 2);
    assert_eq!(vessel.orientation(), Orientation::Horizontal);
}

#[test]
fn test_zero_length_is_raised_to_one() {
    let vessel = Vessel::new(Coordinate::new(0, 0), 0, Orientation::Vertical);
    assert_eq!(vessel.length(), 1);
    assert_eq!(vessel.occupied_coordinates().len(), 1);
}
