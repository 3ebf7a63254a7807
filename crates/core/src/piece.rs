//! Piece state - the falling piece and the queued next piece

use crate::grid::Grid;
use crate::shapes::Shape;
use crate::types::{ColorIndex, PieceKind};

/// The queued piece shown in the preview
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub shape: Shape,
    pub color: ColorIndex,
}

impl NextPiece {
    /// Catalog piece for this color, if it is one of the standard seven
    pub fn kind(&self) -> Option<PieceKind> {
        PieceKind::from_color(self.color)
    }
}

/// Active falling piece
///
/// `(x, y)` is the top-left corner of the shape's bounding box in grid
/// coordinates. `y` may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub color: ColorIndex,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Place `next` horizontally centered on row 0
    pub fn spawn(next: NextPiece, grid_width: u16) -> Self {
        let x = (grid_width as i32 - next.shape.cols() as i32).div_euclid(2);
        Self {
            shape: next.shape,
            color: next.color,
            x,
            y: 0,
        }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        PieceKind::from_color(self.color)
    }

    /// Grid coordinates of every occupied cell, including ones above row 0
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }

    /// Whether this piece overlaps a wall, the floor, or a locked cell
    pub fn collides(&self, grid: &Grid) -> bool {
        grid.collides(&self.shape, self.x, self.y)
    }
}
