//! Validates rendering and PNG export of placement results

use wordweave::io::image::export_result_as_png;
use wordweave::io::render::{render_grid, render_report};
use wordweave::{PlacementError, PlacementResult, WordPlacer};

fn placed_result() -> PlacementResult {
    let Ok(mut placer) = WordPlacer::new(7, 7, ["seat", "tea", "east"], 42) else {
        unreachable!("test shapes and words are valid");
    };
    placer.place_words()
}

#[test]
fn test_render_grid_dimensions() {
    let result = placed_result();
    let rendered = render_grid(&result);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), result.rows);
    for line in &lines {
        // Letters separated by single spaces
        assert_eq!(line.chars().count(), result.cols * 2 - 1);
    }

    let letters = rendered.chars().filter(char::is_ascii_lowercase).count();
    assert_eq!(letters, result.letters.len());
}

#[test]
fn test_report_lists_every_word_once() {
    let result = placed_result();
    let report = render_report(&result);

    assert!(report.contains(&format!("Placed ({}):", result.placed.len())));
    for placed in &result.placed {
        assert!(report.contains(&placed.word));
    }
    for word in &result.unplaced {
        assert!(report.contains(word.as_str()));
    }
}

#[test]
fn test_png_export_writes_file() {
    let result = placed_result();
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory creation");
    };
    let path = dir.path().join("layout.png");
    let Some(path_str) = path.to_str() else {
        unreachable!("temp paths are UTF-8");
    };

    assert!(export_result_as_png(&result, path_str).is_ok());
    assert!(path.exists());
}

#[test]
fn test_png_export_rejects_empty_grid() {
    let Ok(mut placer) = WordPlacer::new(7, 7, Vec::<&str>::new(), 42) else {
        unreachable!("an empty word list is valid");
    };
    let result = placer.place_words();

    assert!(matches!(
        export_result_as_png(&result, "unused.png"),
        Err(PlacementError::EmptyGrid)
    ));
}
