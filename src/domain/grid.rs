use crate::error::GridError;
use crate::util::*;

/// Dense row-major layer of node values.
/// Every accessor is bounds checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    buffer: Vec<f64>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Grid {
            rows,
            cols,
            buffer: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn linear_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(coord_to_linear(row, col, self.cols))
        } else {
            Err(GridError::OutOfBounds {
                row: row as isize,
                col: col as isize,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, GridError> {
        let index = self.linear_index(row, col)?;
        Ok(self.buffer[index])
    }

    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        value: f64,
    ) -> Result<(), GridError> {
        let index = self.linear_index(row, col)?;
        self.buffer[index] = value;
        Ok(())
    }

    /// Lookup by mesh coordinate, `[x, y]`.
    /// Negative coordinates are reported as out of bounds.
    pub fn view(&self, mesh_coord: &Coord<2>) -> Result<f64, GridError> {
        match mesh_to_row_col(mesh_coord, self.rows, self.cols) {
            Some((row, col)) => self.get(row, col),
            None => Err(GridError::OutOfBounds {
                row: mesh_coord[1] as isize,
                col: mesh_coord[0] as isize,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    pub fn fill(&mut self, value: f64) {
        self.buffer.fill(value);
    }

    /// Change the dimensions, all values are reset to zero.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.buffer.clear();
        self.buffer.resize(rows * cols, 0.0);
    }

    /// Copy other grid into self, shapes must match.
    pub fn copy_from(&mut self, other: &Grid) -> Result<(), GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        self.buffer.copy_from_slice(&other.buffer);
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[f64], GridError> {
        if row >= self.rows {
            return Err(GridError::OutOfBounds {
                row: row as isize,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(&self.buffer[start..start + self.cols])
    }

    /// Rows in order, starting from row 0.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.buffer.chunks(self.cols.max(1))
    }

    /// Smallest and largest value, `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.buffer.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
