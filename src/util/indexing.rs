use crate::util::*;

/// Number of nodes needed to cover `length` with steps of `delta`,
/// truncated towards zero.
pub fn node_count(length: f64, delta: f64) -> usize {
    (length / delta) as usize
}

pub fn coord_to_linear(row: usize, col: usize, cols: usize) -> usize {
    debug_assert!(col < cols);
    row * cols + col
}

pub fn linear_to_coord(linear_index: usize, cols: usize) -> (usize, usize) {
    (linear_index / cols, linear_index % cols)
}

/// Map a mesh coordinate (`[x, y]`) to a `(row, col)` pair,
/// or `None` if it falls outside of `rows` x `cols`.
pub fn mesh_to_row_col(
    coord: &Coord<2>,
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let col = usize::try_from(coord[0]).ok()?;
    let row = usize::try_from(coord[1]).ok()?;
    (row < rows && col < cols).then_some((row, col))
}
