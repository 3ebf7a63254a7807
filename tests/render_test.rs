//! Render pipeline tests: session -> snapshot -> framebuffer -> terminal bytes
//!
//! Nothing here touches a real terminal; the encoders write into byte buffers.

use blockfall::core::{GameConfig, ScriptedIndices, Session};
use blockfall::term::{encode_frame_into, FrameBuffer, GameView, Viewport};
use blockfall::types::GameCommand;

fn render(session: &Session<ScriptedIndices>) -> FrameBuffer {
    GameView::default().render(&session.snapshot(), Viewport::new(60, 24))
}

fn bytes_contain(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

#[test]
fn test_full_frame_contains_panel_text() {
    let session = Session::new(GameConfig::default(), ScriptedIndices::repeat(1)).unwrap();
    let fb = render(&session);

    let mut out = Vec::new();
    encode_frame_into(None, &fb, &mut out).unwrap();
    assert!(bytes_contain(&out, "SCORE"));
    assert!(bytes_contain(&out, "NEXT"));
}

#[test]
fn test_moving_piece_yields_small_diff() {
    let mut session = Session::new(GameConfig::default(), ScriptedIndices::repeat(1)).unwrap();
    let before = render(&session);
    session.apply(GameCommand::MoveLeft);
    let after = render(&session);

    let mut full = Vec::new();
    encode_frame_into(None, &after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_frame_into(Some(&before), &after, &mut diff).unwrap();

    let mut unchanged = Vec::new();
    encode_frame_into(Some(&after), &after, &mut unchanged).unwrap();

    assert!(unchanged.is_empty());
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);
}

#[test]
fn test_resize_redraws_every_row() {
    let session = Session::new(GameConfig::default(), ScriptedIndices::repeat(1)).unwrap();
    let small = GameView::default().render(&session.snapshot(), Viewport::new(30, 22));
    let large = render(&session);

    let mut diff = Vec::new();
    encode_frame_into(Some(&small), &large, &mut diff).unwrap();
    // A cursor jump to the start of every row of the new frame.
    for y in 0..large.height() {
        assert!(bytes_contain(&diff, &format!("\x1b[{};1H", y + 1)));
    }
}
