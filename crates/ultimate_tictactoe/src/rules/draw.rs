//! Fullness detection.

use tracing::instrument;

/// Checks if every cell of the grid is claimed.
///
/// A full grid with no completed line is a draw.
#[instrument(level = "trace", skip(cells))]
pub fn is_full<T>(cells: &[Option<T>; 9]) -> bool {
    cells.iter().all(Option::is_some)
}
