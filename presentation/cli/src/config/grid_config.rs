use business::domain::vision::value_objects::GridLayout;

use super::env;

/// Default parking layout.
///
/// Environment variables:
/// - VISION_GRID_ROWS (default: 2)
/// - VISION_GRID_COLUMNS (default: 7)
pub fn from_env() -> anyhow::Result<GridLayout> {
    let defaults = GridLayout::default();
    let rows = env::parsed_or("VISION_GRID_ROWS", defaults.rows)?;
    let columns = env::parsed_or("VISION_GRID_COLUMNS", defaults.columns)?;
    Ok(GridLayout::new(rows, columns)?)
}
