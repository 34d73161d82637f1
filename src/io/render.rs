//! Plain-text rendering of placement results
//!
//! The engine's contract ends at the placement result; this is the thin
//! textual presentation the CLI writes next to each input file.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::algorithm::placer::PlacementResult;
use crate::spatial::Orientation;

/// Render the grid as lines of letters with `.` for empty cells
pub fn render_grid(result: &PlacementResult) -> String {
    let letters: HashMap<[i32; 2], char> = result
        .letters
        .iter()
        .map(|cell| (cell.position, cell.letter))
        .collect();

    let mut output = String::with_capacity((result.cols * 2 + 1) * result.rows);
    for row in 0..result.rows {
        for col in 0..result.cols {
            if col > 0 {
                output.push(' ');
            }
            let letter = letters
                .get(&[row as i32, col as i32])
                .copied()
                .unwrap_or('.');
            output.push(letter);
        }
        output.push('\n');
    }
    output
}

/// Render the grid plus a placed/unplaced word summary
pub fn render_report(result: &PlacementResult) -> String {
    let mut output = render_grid(result);
    output.push('\n');

    let _ = writeln!(output, "Placed ({}):", result.placed.len());
    for placed in &result.placed {
        let _ = writeln!(
            output,
            "  {} at ({}, {}) {}",
            placed.word,
            placed.span.start[0],
            placed.span.start[1],
            orientation_label(placed.span.orientation),
        );
    }

    if !result.unplaced.is_empty() {
        let _ = writeln!(output, "Unplaced ({}):", result.unplaced.len());
        for word in &result.unplaced {
            let _ = writeln!(output, "  {word}");
        }
    }

    output
}

const fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Across => "across",
        Orientation::Down => "down",
    }
}
