use super::errors::{AnalysisError, AnalysisPhase};
use super::model::ParkingSpot;
use super::value_objects::BoundingBox;

/// Splits an image into a `rows` x `columns` grid of parking spots.
///
/// Spots are numbered row-major from 1 and labelled `<column><row letter>`,
/// so the first spot of the second row is `1B`. Boxes are `[x, y, width, height]`.
pub fn map_grid(
    image_width: i32,
    image_height: i32,
    rows: i32,
    columns: i32,
) -> Result<Vec<ParkingSpot>, AnalysisError> {
    if image_width <= 0 || image_height <= 0 {
        return Err(AnalysisError::validation(
            AnalysisPhase::Extract,
            format!(
                "image dimensions must be positive, got {}x{}",
                image_width, image_height
            ),
        ));
    }
    if rows <= 0 || columns <= 0 {
        return Err(AnalysisError::validation(
            AnalysisPhase::Extract,
            format!("grid layout must be positive, got {}x{}", rows, columns),
        ));
    }

    let cell_width = image_width / columns;
    let cell_height = image_height / rows;
    if cell_width == 0 || cell_height == 0 {
        return Err(AnalysisError::validation(
            AnalysisPhase::Extract,
            format!(
                "a {}x{} image is too small for a {}x{} grid",
                image_width, image_height, rows, columns
            ),
        ));
    }

    let mut spots = Vec::with_capacity((rows as usize) * (columns as usize));
    let mut id = 1u32;
    for row in 0..rows {
        let letter = row_letters(row as u32);
        for column in 0..columns {
            spots.push(ParkingSpot {
                id,
                label: format!("{}{}", column + 1, letter),
                bounding_box: BoundingBox::from_rect(
                    column * cell_width,
                    row * cell_height,
                    cell_width,
                    cell_height,
                ),
            });
            id += 1;
        }
    }
    Ok(spots)
}

/// Spreadsheet-style row name: 0 -> A, 25 -> Z, 26 -> AA.
fn row_letters(row: u32) -> String {
    let mut letters = Vec::new();
    let mut n = row + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
