//! PNG export with automatic cropping and transparency handling
//!
//! Each occupied cell becomes a colored square tile; empty cells are
//! transparent and the image is cropped to the occupied bounding box.

use image::{ImageBuffer, Rgba};

use crate::algorithm::placer::PlacementResult;
use crate::io::configuration::EXPORT_CELL_PIXELS;
use crate::io::error::{PlacementError, Result};

#[derive(Debug)]
struct BoundingBox {
    min_row: i32,
    max_row: i32,
    min_col: i32,
    max_col: i32,
}

// Finds the minimal rectangle containing all occupied cells
fn calculate_bounding_box(result: &PlacementResult) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for cell in &result.letters {
        let [row, col] = cell.position;
        bbox = Some(match bbox {
            None => BoundingBox {
                min_row: row,
                max_row: row,
                min_col: col,
                max_col: col,
            },
            Some(current) => BoundingBox {
                min_row: current.min_row.min(row),
                max_row: current.max_row.max(row),
                min_col: current.min_col.min(col),
                max_col: current.max_col.max(col),
            },
        });
    }

    bbox
}

/// Stable tile color for a letter
///
/// Letters map onto an evenly spaced hue wheel so adjacent alphabet letters
/// stay visually distinct without a configured palette.
fn letter_color(letter: char) -> Rgba<u8> {
    let index = (letter as u32).saturating_sub('a' as u32) % 26;
    let hue = f64::from(index) / 26.0 * 6.0;
    let sector = hue as u32 % 6;
    let fraction = hue - hue.floor();

    let low = 64u8;
    let high = 224u8;
    let rising = (f64::from(low) + fraction * f64::from(high - low)) as u8;
    let falling = (f64::from(high) - fraction * f64::from(high - low)) as u8;

    let [r, g, b] = match sector {
        0 => [high, rising, low],
        1 => [falling, high, low],
        2 => [low, high, rising],
        3 => [low, falling, high],
        4 => [rising, low, high],
        _ => [high, low, falling],
    };

    Rgba([r, g, b, 255])
}

/// Export a placement result as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - No letters have been placed (nothing to export)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_result_as_png(result: &PlacementResult, output_path: &str) -> Result<()> {
    let bbox = calculate_bounding_box(result).ok_or(PlacementError::EmptyGrid)?;

    let scale = EXPORT_CELL_PIXELS;
    let width = (bbox.max_col - bbox.min_col + 1) as u32 * scale;
    let height = (bbox.max_row - bbox.min_row + 1) as u32 * scale;

    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for cell in &result.letters {
        let tile_x = (cell.position[1] - bbox.min_col) as u32 * scale;
        let tile_y = (cell.position[0] - bbox.min_row) as u32 * scale;
        let color = letter_color(cell.letter);

        for dy in 0..scale {
            for dx in 0..scale {
                // One-pixel dark border separates adjacent tiles
                let pixel = if dx == 0 || dy == 0 || dx == scale - 1 || dy == scale - 1 {
                    Rgba([32, 32, 32, 255])
                } else {
                    color
                };
                img.put_pixel(tile_x + dx, tile_y + dy, pixel);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| PlacementError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PlacementError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
