//! Shapes module - piece occupancy matrices and clockwise rotation
//!
//! A shape is a small row-major boolean matrix (at most 4x4). Shapes are
//! values: rotating one returns a new shape and leaves the input untouched.

use arrayvec::ArrayVec;

use crate::config::ConfigError;
use crate::types::PieceKind;

/// Largest supported side of a shape's bounding box
pub const MAX_SHAPE_SIDE: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

/// Immutable occupancy matrix of a piece in one orientation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    /// Row-major occupancy (r * cols + c)
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// Rejects empty, ragged, oversized, and cell-less matrices.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ConfigError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ConfigError::EmptyShape);
        }
        if rows.iter().any(|r| r.len() != cols) {
            return Err(ConfigError::RaggedShape);
        }
        if rows.len() > MAX_SHAPE_SIDE || cols > MAX_SHAPE_SIDE {
            return Err(ConfigError::ShapeTooLarge {
                rows: rows.len(),
                cols,
            });
        }
        let shape = Self::build(rows);
        if shape.cell_count() == 0 {
            return Err(ConfigError::EmptyShape);
        }
        Ok(shape)
    }

    /// Canonical spawn orientation of a catalog piece
    pub fn for_kind(kind: PieceKind) -> Self {
        let rows = match kind {
            PieceKind::I => I_ROWS,
            PieceKind::O => O_ROWS,
            PieceKind::T => T_ROWS,
            PieceKind::L => L_ROWS,
            PieceKind::J => J_ROWS,
            PieceKind::S => S_ROWS,
            PieceKind::Z => Z_ROWS,
        };
        Self::build(rows)
    }

    // Static tables above are rectangular and within bounds.
    fn build(rows: &[&[u8]]) -> Self {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let cells = rows
            .iter()
            .flat_map(|r| r.iter().map(|&v| v != 0))
            .collect();
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Occupancy at (row, col). Out of range reads as empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    /// Iterate occupied cells as (row, col)
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rotate 90° clockwise
    ///
    /// `rotated[i][j] = self[rows - 1 - j][i]`; the result has `cols` rows
    /// and `rows` columns.
    pub fn rotate_clockwise(&self) -> Shape {
        let mut cells = ArrayVec::new();
        for i in 0..self.cols {
            for j in 0..self.rows {
                cells.push(self.cells[(self.rows - 1 - j) * self.cols + i]);
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Free-function form of [`Shape::rotate_clockwise`]
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    shape.rotate_clockwise()
}

/// The seven canonical shapes in catalog order (I, O, T, L, J, S, Z)
pub fn standard_catalog() -> Vec<Shape> {
    PieceKind::ALL.iter().map(|&k| Shape::for_kind(k)).collect()
}
