//! Validates grid construction, bounds handling, and occupancy state

use wordweave::PlacementError;
use wordweave::spatial::Grid;

#[test]
fn test_degenerate_shapes_rejected() {
    assert!(matches!(
        Grid::new(0, 5),
        Err(PlacementError::InvalidGridShape { rows: 0, cols: 5 })
    ));
    assert!(matches!(
        Grid::new(5, 0),
        Err(PlacementError::InvalidGridShape { rows: 5, cols: 0 })
    ));
    assert!(matches!(
        Grid::new(10_001, 5),
        Err(PlacementError::InvalidGridShape { .. })
    ));
}

#[test]
fn test_bounds_checks() {
    let Ok(grid) = Grid::new(3, 4) else {
        unreachable!("3x4 is a valid shape");
    };

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 4);
    assert!(grid.is_in_bounds([0, 0]));
    assert!(grid.is_in_bounds([2, 3]));
    assert!(!grid.is_in_bounds([3, 0]));
    assert!(!grid.is_in_bounds([0, 4]));
    assert!(!grid.is_in_bounds([-1, 0]));
    assert!(!grid.is_in_bounds([0, -1]));
}

#[test]
fn test_letter_lookup_fails_silently_out_of_range() {
    let Ok(grid) = Grid::new(3, 3) else {
        unreachable!("3x3 is a valid shape");
    };

    assert_eq!(grid.letter_at([-1, 0]), None);
    assert_eq!(grid.letter_at([0, 99]), None);
    assert_eq!(grid.letter_at([1, 1]), None);
    assert!(!grid.is_occupied([-1, -1]));
}

#[test]
fn test_commit_and_occupancy() {
    let Ok(mut grid) = Grid::new(3, 3) else {
        unreachable!("3x3 is a valid shape");
    };

    grid.commit_letter([1, 2], b'x');
    assert_eq!(grid.letter_at([1, 2]), Some(b'x'));
    assert!(grid.is_occupied([1, 2]));
    assert!(!grid.is_occupied([1, 1]));
    assert_eq!(grid.occupied_count(), 1);

    // Out-of-range commits are ignored
    grid.commit_letter([5, 5], b'z');
    assert_eq!(grid.occupied_count(), 1);

    let cells: Vec<_> = grid.occupied_cells().collect();
    assert_eq!(cells, vec![([1, 2], b'x')]);
}

#[test]
fn test_reset_is_idempotent() {
    let Ok(mut grid) = Grid::new(4, 4) else {
        unreachable!("4x4 is a valid shape");
    };

    grid.commit_letter([0, 0], b'a');
    grid.commit_letter([3, 3], b'b');
    assert_eq!(grid.occupied_count(), 2);

    grid.reset();
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(grid.letter_at([0, 0]), None);

    grid.reset();
    assert_eq!(grid.occupied_count(), 0);
}
