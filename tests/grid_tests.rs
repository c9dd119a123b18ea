use battlefield::{Coord, Grid, GridError, MaskError, MAX_CELLS};

#[test]
fn test_from_rows() {
    let grid = Grid::from_rows(&[[1u8, 0, 0], [0, 0, 1]]).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.occupied_count(), 2);
    assert!(grid.is_occupied(Coord::new(0, 0)));
    assert!(grid.is_occupied(Coord::new(1, 2)));
    assert!(!grid.is_occupied(Coord::new(1, 1)));
    assert_eq!(grid.to_rows(), vec![vec![1, 0, 0], vec![0, 0, 1]]);
}

#[test]
fn test_outside_cells_are_empty() {
    let grid = Grid::from_rows(&[[1u8, 1], [1, 1]]).unwrap();
    assert!(!grid.is_occupied(Coord::new(-1, 0)));
    assert!(!grid.is_occupied(Coord::new(0, 2)));
    assert!(!grid.contains(Coord::new(2, 0)));
    assert!(grid.contains(Coord::new(1, 1)));
}

#[test]
fn test_rejects_empty() {
    let none: [Vec<u8>; 0] = [];
    assert_eq!(Grid::from_rows(&none).unwrap_err(), GridError::Empty);
    assert_eq!(
        Grid::from_rows(&[Vec::<u8>::new(), Vec::new()]).unwrap_err(),
        GridError::Empty
    );
    assert_eq!(Grid::new(0, 4).unwrap_err(), GridError::Empty);
}

#[test]
fn test_rejects_ragged_rows() {
    let rows = vec![vec![0u8, 1, 0], vec![1, 0], vec![0, 0, 0]];
    assert_eq!(
        Grid::from_rows(&rows).unwrap_err(),
        GridError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_rejects_non_binary() {
    let rows = vec![vec![0u8, 1], vec![2, 0]];
    assert_eq!(
        Grid::from_rows(&rows).unwrap_err(),
        GridError::NonBinary {
            row: 1,
            col: 0,
            value: 2
        }
    );
}

#[test]
fn test_parse_text() {
    let grid: Grid = "1 0 1\n\n0,1,0\r\n000\n".parse().unwrap();
    assert_eq!(grid.to_rows(), vec![vec![1, 0, 1], vec![0, 1, 0], vec![0, 0, 0]]);
}

#[test]
fn test_parse_rejects_stray_characters() {
    let err = "1 0\n0 x\n".parse::<Grid>().unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidCharacter {
            line: 1,
            col: 2,
            ch: 'x'
        }
    );
    assert_eq!("\n  \n".parse::<Grid>().unwrap_err(), GridError::Empty);
}

#[test]
fn test_display_roundtrips_through_parse() {
    let grid = Grid::from_rows(&[[0u8, 1, 1], [1, 0, 0]]).unwrap();
    assert_eq!(grid.to_string(), "0 1 1\n1 0 0");
    let parsed: Grid = grid.to_string().parse().unwrap();
    assert_eq!(parsed, grid);
}

#[test]
fn test_set_and_bounds() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.set(1, 0, true).unwrap();
    assert_eq!(grid.occupied_cells().collect::<Vec<_>>(), vec![Coord::new(1, 0)]);
    grid.set(1, 0, false).unwrap();
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(
        grid.set(2, 0, true).unwrap_err(),
        GridError::MaskError(MaskError::IndexOutOfBounds { row: 2, col: 0 })
    );
}

#[test]
fn test_invalid_character_reports_source_line() {
    let err = "\n\n1 x\n".parse::<Grid>().unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidCharacter {
            line: 2,
            col: 2,
            ch: 'x'
        }
    );
    assert_eq!(err.to_string(), "Unexpected character 'x' at line 3, column 3");
}

#[test]
fn test_rejects_oversized_dimensions() {
    assert_eq!(
        Grid::new(usize::MAX, 2).unwrap_err(),
        GridError::TooLarge {
            rows: usize::MAX,
            cols: 2
        }
    );
    assert_eq!(
        Grid::new(1 << 20, 1 << 20).unwrap_err(),
        GridError::TooLarge {
            rows: 1 << 20,
            cols: 1 << 20
        }
    );
    assert_eq!(
        Grid::new(i32::MAX as usize + 1, 1).unwrap_err(),
        GridError::TooLarge {
            rows: i32::MAX as usize + 1,
            cols: 1
        }
    );
    let widest = Grid::new(1, MAX_CELLS).unwrap();
    assert_eq!(widest.cols(), MAX_CELLS);
}
