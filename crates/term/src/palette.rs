//! Piece colors and shared UI styles.

use crate::fb::{CellStyle, Rgb};
use crate::types::{ColorIndex, PieceKind};

pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GRAY: Rgb = Rgb::new(128, 128, 128);

pub const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
pub const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
pub const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
pub const TITLE: CellStyle = CellStyle::fg(WHITE).bold();

/// Display color of a catalog piece
pub fn piece_rgb(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

/// Display color of a grid cell value. Colors past the standard seven
/// (custom catalogs) render gray.
pub fn color_rgb(color: ColorIndex) -> Rgb {
    PieceKind::from_color(color).map(piece_rgb).unwrap_or(GRAY)
}
