//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! Each frame is encoded against the last one that reached the screen. Rows
//! that did not change are skipped, changed cells are grouped into runs, and
//! SGR/cursor sequences are only emitted when the terminal state differs from
//! what the run needs. A missing or differently sized previous frame means a
//! full repaint.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Unchanged cells allowed between two changes before a run is split
const MERGE_GAP: usize = 3;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.last = None;
        Ok(())
    }

    /// Undo everything `enter` did
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Put `fb` on screen, then hand the previous frame back through `fb`.
    ///
    /// The caller redraws into the returned buffer next frame, so the two
    /// buffers ping-pong without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        if !self.buf.is_empty() {
            self.stdout.write_all(&self.buf)?;
            self.stdout.flush()?;
        }

        match self.last.as_mut() {
            Some(shown) => std::mem::swap(shown, fb),
            None => {
                let blank = FrameBuffer::new(fb.width(), fb.height());
                self.last = Some(std::mem::replace(fb, blank));
            }
        }
        Ok(())
    }
}

/// Append the bytes that turn `prev` into `next` on screen.
///
/// `None`, or a `prev` of another size, repaints every cell. Identical
/// frames append nothing.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    let mut pen = Pen::default();

    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    for y in 0..next.height() {
        let row = next.row(y);
        match prev {
            Some(prev) => {
                for run in changed_runs(prev.row(y), row) {
                    pen.print_run(out, run.start as u16, y, &row[run])?;
                }
            }
            None => pen.print_run(out, 0, y, row)?,
        }
    }

    if pen.style.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Terminal cursor and SGR state as known while encoding one frame
#[derive(Debug, Default)]
struct Pen {
    style: Option<CellStyle>,
    cursor: Option<(u16, u16)>,
}

impl Pen {
    fn print_run(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        if cells.is_empty() {
            return Ok(());
        }
        if self.cursor != Some((x, y)) {
            out.queue(cursor::MoveTo(x, y))?;
        }
        for cell in cells {
            self.set_style(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        self.cursor = Some((x.saturating_add(cells.len() as u16), y));
        Ok(())
    }

    fn set_style(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.style == Some(style) {
            return Ok(());
        }

        // Bold and dim can only be switched off by a full reset, which also
        // clears both colors.
        let base = match self.style {
            Some(prev) if (style.bold || !prev.bold) && (style.dim || !prev.dim) => Some(prev),
            _ => {
                out.queue(SetAttribute(Attribute::Reset))?;
                None
            }
        };

        if base.map(|b| b.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(style.fg.into()))?;
        }
        if base.map(|b| b.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(style.bg.into()))?;
        }
        if style.bold && !base.is_some_and(|b| b.bold) {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim && !base.is_some_and(|b| b.dim) {
            out.queue(SetAttribute(Attribute::Dim))?;
        }

        self.style = Some(style);
        Ok(())
    }
}

fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> ChangedRuns<'a> {
    ChangedRuns { old, new, pos: 0 }
}

/// Column ranges where two equally long rows differ
///
/// Changes at most `MERGE_GAP` unchanged cells apart share one range.
struct ChangedRuns<'a> {
    old: &'a [Cell],
    new: &'a [Cell],
    pos: usize,
}

impl Iterator for ChangedRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let (old, new) = (self.old, self.new);
        let len = new.len().min(old.len());
        let start = (self.pos..len).find(|&i| old[i] != new[i])?;

        let mut end = start + 1;
        let mut i = end;
        while i < len && i - end <= MERGE_GAP {
            if old[i] != new[i] {
                end = i + 1;
            }
            i += 1;
        }

        self.pos = end;
        Some(start..end)
    }
}
