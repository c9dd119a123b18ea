use battlefield::{
    inspect, touching_pairs, validate, validate_rows, scan, FleetRules, Grid, GridError, ShipKind,
    Validator, Violation,
};

const GOOD_FIELD: [[u8; 10]; 10] = [
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 0],
    [1, 0, 1, 0, 0, 0, 0, 0, 1, 0],
    [1, 0, 1, 0, 1, 1, 1, 0, 1, 0],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

fn good_grid() -> Grid {
    Grid::from_rows(&GOOD_FIELD).unwrap()
}

#[test]
fn test_standard_fleet_is_valid() {
    let report = inspect(&good_grid());
    assert!(report.is_valid(), "{:?}", report.violations);
    assert_eq!(report.ships.len(), 10);
    assert_eq!(report.tally.count(ShipKind::Battleship), 1);
    assert_eq!(report.tally.count(ShipKind::Cruiser), 2);
    assert_eq!(report.tally.count(ShipKind::Destroyer), 3);
    assert_eq!(report.tally.count(ShipKind::Submarine), 4);
    assert_eq!(
        report.tally.iter().collect::<Vec<_>>(),
        vec![
            (ShipKind::Submarine, 4),
            (ShipKind::Destroyer, 3),
            (ShipKind::Cruiser, 2),
            (ShipKind::Battleship, 1),
        ]
    );
    assert!(validate(&good_grid()));
}

#[test]
fn test_empty_field_is_invalid() {
    let grid = Grid::new(10, 10).unwrap();
    assert!(!validate(&grid));
    let report = inspect(&grid);
    assert_eq!(report.tally.total(), 0);
    assert_eq!(
        report.violations,
        vec![
            Violation::FleetMismatch { kind: ShipKind::Battleship, expected: 1, found: 0 },
            Violation::FleetMismatch { kind: ShipKind::Cruiser, expected: 2, found: 0 },
            Violation::FleetMismatch { kind: ShipKind::Destroyer, expected: 3, found: 0 },
            Violation::FleetMismatch { kind: ShipKind::Submarine, expected: 4, found: 0 },
        ]
    );
}

#[test]
fn test_diagonal_touch_is_invalid() {
    let mut grid = good_grid();
    grid.set(8, 7, false).unwrap();
    grid.set(7, 7, true).unwrap();

    let report = inspect(&grid);
    assert_eq!(report.tally, inspect(&good_grid()).tally);
    assert_eq!(
        report.violations,
        vec![Violation::ShipsTouching { first: 7, second: 9 }]
    );
    assert!(!validate(&grid));
}

#[test]
fn test_extra_submarine_is_invalid() {
    let mut grid = good_grid();
    grid.set(9, 0, true).unwrap();

    let report = inspect(&grid);
    assert_eq!(
        report.violations,
        vec![Violation::FleetMismatch {
            kind: ShipKind::Submarine,
            expected: 4,
            found: 5
        }]
    );
}

#[test]
fn test_missing_destroyer_is_invalid() {
    let mut grid = good_grid();
    grid.set(0, 5, false).unwrap();
    grid.set(0, 6, false).unwrap();
    assert!(!validate(&grid));
}

#[test]
fn test_overlong_run_is_caught_by_adjacency() {
    let ships = scan(&Grid::from_rows(&[[1u8, 1, 1, 1, 1]]).unwrap());
    assert_eq!(touching_pairs(&ships), vec![(0, 1)]);
}

#[test]
fn test_corner_touching_battleships() {
    let field: [[u8; 10]; 10] = [
        [0, 1, 1, 1, 1, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 0, 1, 1, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];
    let report = inspect(&Grid::from_rows(&field).unwrap());
    assert_eq!(
        report.violations,
        vec![
            Violation::FleetMismatch { kind: ShipKind::Battleship, expected: 1, found: 2 },
            Violation::FleetMismatch { kind: ShipKind::Cruiser, expected: 2, found: 1 },
            Violation::FleetMismatch { kind: ShipKind::Destroyer, expected: 3, found: 1 },
            Violation::FleetMismatch { kind: ShipKind::Submarine, expected: 4, found: 0 },
            Violation::ShipsTouching { first: 0, second: 1 },
        ]
    );
}

#[test]
fn test_custom_rules() {
    let validator = Validator::new(FleetRules::new(0, 0, 1, 1));
    let grid = Grid::from_rows(&[[1u8, 1, 0], [0, 0, 0], [0, 0, 1]]).unwrap();
    assert!(validator.validate(&grid));
    assert!(!validate(&grid));
    assert_eq!(validator.rules().ship_count(), 2);
    assert_eq!(validator.rules().total_cells(), 3);
}

#[test]
fn test_standard_rules() {
    let rules = FleetRules::STANDARD;
    assert_eq!(rules.ship_count(), 10);
    assert_eq!(rules.total_cells(), 20);
    assert_eq!(rules.expected(ShipKind::Cruiser), 2);
    assert_eq!(FleetRules::default(), rules);
}

#[test]
fn test_validate_rows_checks_input_first() {
    let rows: Vec<Vec<u8>> = GOOD_FIELD.iter().map(|r| r.to_vec()).collect();
    assert_eq!(validate_rows(&rows), Ok(true));

    let mut ragged = rows.clone();
    ragged[3].pop();
    assert_eq!(
        validate_rows(&ragged),
        Err(GridError::Ragged { row: 3, expected: 10, found: 9 })
    );

    let mut non_binary = rows;
    non_binary[0][0] = 7;
    assert_eq!(
        validate_rows(&non_binary),
        Err(GridError::NonBinary { row: 0, col: 0, value: 7 })
    );
}
