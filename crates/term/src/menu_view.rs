//! MenuView: main menu, leaderboard, and name prompt screens.
//!
//! Pure rendering into a framebuffer; the caller supplies plain data.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::palette;

const TITLE_BLUE: Rgb = Rgb::new(0, 0, 255);
const HINT: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200)).dim();

#[derive(Debug, Clone, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_main_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let top = begin(fb, viewport, 7);
        let w = viewport.width;
        fb.put_str_centered(0, w, top, "BLOCKFALL", CellStyle::fg(TITLE_BLUE).bold());
        for (i, item) in ["1. Start Game", "2. Ranking", "3. Quit"].iter().enumerate() {
            fb.put_str_centered(0, w, top + 2 + i as u16 * 2, item, palette::VALUE);
        }
    }

    /// Leaderboard, best first. `entries` yields `(name, score)`.
    pub fn render_ranking_into<'a>(
        &self,
        entries: impl IntoIterator<Item = (&'a str, u32)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let top = begin(fb, viewport, 10);
        let w = viewport.width;
        fb.put_str_centered(0, w, top, "TOP RANKING", CellStyle::fg(TITLE_BLUE).bold());

        let left = w.saturating_sub(20) / 2;
        let mut y = top + 2;
        for (i, (name, score)) in entries.into_iter().enumerate() {
            fb.put_u32(left, y, i as u32 + 1, palette::VALUE);
            fb.put_char(left + 1, y, '.', palette::VALUE);
            fb.put_str(left + 3, y, name, palette::LABEL);
            fb.put_u32(left + 11, y, score, palette::VALUE);
            y += 1;
        }
        if y == top + 2 {
            fb.put_str_centered(0, w, y, "No scores yet!", CellStyle::fg(palette::GRAY));
        }

        fb.put_str_centered(0, w, top + 9, "Press M to return to menu", HINT);
    }

    /// Name prompt shown after a finished round.
    pub fn render_name_entry_into(
        &self,
        name: &str,
        score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let top = begin(fb, viewport, 7);
        let w = viewport.width;
        fb.put_str_centered(0, w, top, "Enter your name (max 6 chars):", palette::TITLE);

        let field_x = w.saturating_sub(8) / 2;
        fb.put_char(field_x, top + 2, '[', palette::BORDER);
        fb.put_str(field_x + 1, top + 2, name, CellStyle::fg(Rgb::new(80, 160, 255)).bold());
        let cursor_x = field_x + 1 + name.chars().count() as u16;
        if cursor_x < field_x + 7 {
            fb.put_char(cursor_x, top + 2, '_', HINT);
        }
        fb.put_char(field_x + 7, top + 2, ']', palette::BORDER);

        let label = "Score: ";
        let score_x = w.saturating_sub(label.len() as u16 + 6) / 2;
        fb.put_str(score_x, top + 4, label, palette::VALUE);
        fb.put_u32(score_x + label.len() as u16, top + 4, score, palette::VALUE);

        fb.put_str_centered(0, w, top + 6, "ENTER to save", HINT);
    }
}

/// Clear the frame and return the first row of a block `rows` tall,
/// vertically centered.
fn begin(fb: &mut FrameBuffer, viewport: Viewport, rows: u16) -> u16 {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().cell(' '));
    viewport.height.saturating_sub(rows) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(fb: &FrameBuffer, text: &str) -> Option<u16> {
        (0..fb.height()).find(|&y| fb.row_text(y).contains(text))
    }

    #[test]
    fn test_main_menu_items() {
        let mut fb = FrameBuffer::new(1, 1);
        MenuView::new().render_main_into(Viewport::new(40, 20), &mut fb);
        let start = find(&fb, "1. Start Game").unwrap();
        let ranking = find(&fb, "2. Ranking").unwrap();
        let quit = find(&fb, "3. Quit").unwrap();
        assert!(start < ranking && ranking < quit);
        assert!(find(&fb, "BLOCKFALL").unwrap() < start);
    }

    #[test]
    fn test_ranking_rows_in_order() {
        let mut fb = FrameBuffer::new(1, 1);
        let entries: [(&str, u32); 2] = [("ann", 900), ("bob", 400)];
        MenuView::new().render_ranking_into(
            entries.iter().copied(),
            Viewport::new(40, 20),
            &mut fb,
        );
        let first = find(&fb, "1. ann").unwrap();
        let second = find(&fb, "2. bob").unwrap();
        assert_eq!(second, first + 1);
        assert!(fb.row_text(first).contains("900"));
        assert!(find(&fb, "No scores yet!").is_none());
        assert!(find(&fb, "Press M").is_some());
    }

    #[test]
    fn test_empty_ranking() {
        let mut fb = FrameBuffer::new(1, 1);
        MenuView::new().render_ranking_into(std::iter::empty(), Viewport::new(40, 20), &mut fb);
        assert!(find(&fb, "No scores yet!").is_some());
    }

    #[test]
    fn test_name_prompt() {
        let mut fb = FrameBuffer::new(1, 1);
        MenuView::new().render_name_entry_into("zed", 1200, Viewport::new(40, 20), &mut fb);
        assert!(find(&fb, "Enter your name").is_some());
        assert!(find(&fb, "[zed_  ]").is_some());
        assert!(find(&fb, "Score: 1200").is_some());

        MenuView::new().render_name_entry_into("abcdef", 0, Viewport::new(40, 20), &mut fb);
        assert!(find(&fb, "[abcdef]").is_some());
    }
}
