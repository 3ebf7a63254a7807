//! Per-frame key collection from the terminal event queue.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Keys handled in a single frame. Extra presses wait for the next frame.
pub const MAX_KEYS_PER_FRAME: usize = 32;

pub type KeyBatch = ArrayVec<KeyEvent, MAX_KEYS_PER_FRAME>;

/// Keep key presses; drop releases, auto-repeats, and non-key events
pub fn key_press(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

/// Wait up to `timeout` for input, then drain whatever else is queued
pub fn drain_key_presses(timeout: Duration) -> io::Result<KeyBatch> {
    let mut batch = KeyBatch::new();
    let mut wait = timeout;
    while !batch.is_full() && event::poll(wait)? {
        if let Some(key) = key_press(event::read()?) {
            batch.push(key);
        }
        wait = Duration::ZERO;
    }
    Ok(batch)
}
