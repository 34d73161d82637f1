//! Validates candidate enumeration for first and subsequent words

use wordweave::algorithm::Vocabulary;
use wordweave::algorithm::search::find_candidates;
use wordweave::spatial::{Grid, Orientation};

fn vocabulary() -> Vocabulary {
    let Ok(vocabulary) =
        Vocabulary::from_words(["seat", "set", "eat", "east", "tea", "fog", "yeast"])
    else {
        unreachable!("all test words are ASCII");
    };
    vocabulary
}

fn grid_with_seat() -> Grid {
    let Ok(mut grid) = Grid::new(7, 7) else {
        unreachable!("7x7 is a valid shape");
    };
    for (index, letter) in b"seat".iter().enumerate() {
        grid.commit_letter([3, 3 + index as i32], *letter);
    }
    grid
}

#[test]
fn test_empty_grid_offers_both_centre_orientations() {
    let Ok(grid) = Grid::new(7, 7) else {
        unreachable!("7x7 is a valid shape");
    };

    let candidates = find_candidates(&grid, &vocabulary(), "seat");

    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.span.start == [3, 3]));
    assert!(candidates.iter().all(|c| c.intersection.is_none()));
    assert!(
        candidates
            .iter()
            .any(|c| c.span.orientation == Orientation::Across)
    );
    assert!(
        candidates
            .iter()
            .any(|c| c.span.orientation == Orientation::Down)
    );
}

#[test]
fn test_word_overflowing_from_centre_has_no_candidates() {
    let Ok(grid) = Grid::new(7, 7) else {
        unreachable!("7x7 is a valid shape");
    };

    // Five letters starting at (3,3) run past the edge in both orientations
    let candidates = find_candidates(&grid, &vocabulary(), "yeast");
    assert!(candidates.is_empty());
}

#[test]
fn test_connecting_candidates_declare_their_intersection() {
    let grid = grid_with_seat();

    let candidates = find_candidates(&grid, &vocabulary(), "tea");
    assert!(!candidates.is_empty());

    for candidate in &candidates {
        let Some(intersection) = candidate.intersection else {
            unreachable!("connecting candidates always declare an intersection");
        };
        assert!(candidate.span.contains(intersection));
        let index = candidate
            .span
            .cells()
            .position(|cell| cell == intersection);
        // The word's letter at the intersection matches the grid letter
        assert!(index.is_some_and(|i| {
            "tea".as_bytes().get(i).copied() == grid.letter_at(intersection)
        }));
    }
}

#[test]
fn test_no_shared_letter_yields_no_candidates() {
    let grid = grid_with_seat();

    // "fog" shares no letter with "seat"
    let candidates = find_candidates(&grid, &vocabulary(), "fog");
    assert!(candidates.is_empty());
}
