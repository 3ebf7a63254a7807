//! Grid module - the playfield
//!
//! The grid is a `height x width` matrix where each cell is either empty (0)
//! or holds the color index of a locked piece. Uses a flat array in row-major
//! order. Dimensions are fixed at construction.
//!
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Pieces may hang above row 0 (negative y) while spawning.

use crate::shapes::Shape;
use crate::types::{ColorIndex, EMPTY};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<ColorIndex>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<ColorIndex> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: ColorIndex) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    /// Check if a row has no empty cells
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// One row of cells. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[ColorIndex] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Raw row-major cells
    pub fn cells(&self) -> &[ColorIndex] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Check whether `shape` anchored at (x, y) is blocked
    ///
    /// A cell collides when it falls outside the side walls, at or below the
    /// floor, or onto a filled cell. Cells above row 0 only take part in the
    /// side-wall check.
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.occupied().any(|(r, c)| {
            let gx = x + c as i32;
            let gy = y + r as i32;
            if gx < 0 || gx >= self.width as i32 || gy >= self.height as i32 {
                return true;
            }
            gy >= 0 && self.is_occupied(gx, gy)
        })
    }

    /// Write `color` into every cell covered by `shape` at (x, y)
    ///
    /// Cells above the grid are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i32, y: i32, color: ColorIndex) {
        for (r, c) in shape.occupied() {
            let gy = y + r as i32;
            if gy >= 0 {
                self.set(x + c as i32, gy, color);
            }
        }
    }

    /// Remove every full row and return how many were removed
    ///
    /// Surviving rows keep their relative order and settle to the bottom;
    /// the same number of empty rows appear at the top. Two-pointer pass,
    /// no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_y = height;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(EMPTY);

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(grid: &mut Grid, y: i32, color: ColorIndex) {
        for x in 0..grid.width() as i32 {
            grid.set(x, y, color);
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_collides_side_walls_and_floor() {
        let grid = Grid::new(10, 20);
        let o = Shape::for_kind(PieceKind::O);

        assert!(!grid.collides(&o, 0, 0));
        assert!(!grid.collides(&o, 8, 18));
        assert!(grid.collides(&o, -1, 0));
        assert!(grid.collides(&o, 9, 0));
        assert!(grid.collides(&o, 0, 19));
    }

    #[test]
    fn test_collides_above_grid_only_checks_walls() {
        let mut grid = Grid::new(10, 20);
        fill_row(&mut grid, 0, 1);
        let i = Shape::for_kind(PieceKind::I);

        // Entirely above the grid: no floor/occupancy collision.
        assert!(!grid.collides(&i, 3, -1));
        // But side walls still apply.
        assert!(grid.collides(&i, -1, -1));
        assert!(grid.collides(&i, 7, -1));
        // Row 0 is filled.
        assert!(grid.collides(&i, 3, 0));
    }

    #[test]
    fn test_collides_with_filled_cell() {
        let mut grid = Grid::new(10, 20);
        grid.set(5, 10, 3);
        let t = Shape::for_kind(PieceKind::T);

        // T at (4, 9) covers (5, 9), (4, 10), (5, 10), (6, 10)
        assert!(grid.collides(&t, 4, 9));
        // Anchored at (5, 10) only the empty top-left corner covers (5, 10)
        assert!(!grid.collides(&t, 5, 10));
    }

    #[test]
    fn test_merge_drops_cells_above_grid() {
        let mut grid = Grid::new(10, 20);
        let t = Shape::for_kind(PieceKind::T);
        grid.merge(&t, 0, -1, 3);

        // Only the bottom row of the T lands.
        assert_eq!(grid.get(0, 0), Some(3));
        assert_eq!(grid.get(1, 0), Some(3));
        assert_eq!(grid.get(2, 0), Some(3));
        assert_eq!(grid.cells().iter().filter(|&&c| c != EMPTY).count(), 3);
    }

    #[test]
    fn test_clear_full_lines_no_full_rows() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 3, 1);
        grid.set(2, 2, 2);
        let before = grid.clone();

        assert_eq!(grid.clear_full_lines(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_full_lines_preserves_order() {
        let mut grid = Grid::new(3, 5);
        grid.set(0, 0, 7);
        fill_row(&mut grid, 1, 1);
        grid.set(1, 2, 2);
        fill_row(&mut grid, 3, 1);
        grid.set(2, 4, 4);

        assert_eq!(grid.clear_full_lines(), 2);
        let rows: Vec<&[ColorIndex]> = grid.rows().collect();
        assert_eq!(rows[0], &[0, 0, 0]);
        assert_eq!(rows[1], &[0, 0, 0]);
        assert_eq!(rows[2], &[7, 0, 0]);
        assert_eq!(rows[3], &[0, 2, 0]);
        assert_eq!(rows[4], &[0, 0, 4]);
    }

    #[test]
    fn test_clear_full_lines_not_capped_at_four() {
        let mut grid = Grid::new(2, 6);
        for y in 0..6 {
            fill_row(&mut grid, y, 1);
        }
        assert_eq!(grid.clear_full_lines(), 6);
        assert!(grid.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut grid = Grid::new(10, 20);
        fill_row(&mut grid, 19, 5);
        grid.clear();
        assert_eq!(grid, Grid::new(10, 20));
    }
}
