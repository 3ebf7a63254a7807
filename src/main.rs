//! Blockfall terminal runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. Each frame
//! drains pending keys, advances the fall timer by the elapsed time, and
//! redraws the current screen.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use blockfall::core::{GameConfig, RandomIndex, Session, SimpleRng, SystemRandom};
use blockfall::input::drain_key_presses;
use blockfall::ranking::RankingStore;
use blockfall::term::{FrameBuffer, TerminalRenderer, Viewport};
use blockfall::{logging, App, AppConfig, AppControl};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let rng: Box<dyn RandomIndex> = match config.seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(SystemRandom::new()),
    };
    let session = Session::new(GameConfig::default(), rng)?;
    let ranking = RankingStore::open(&config.ranking_path);
    info!(
        ranking = %config.ranking_path.display(),
        seed = ?config.seed,
        fps = config.fps,
        "starting"
    );
    let mut app = App::new(session, ranking);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run<R: RandomIndex>(term: &mut TerminalRenderer, app: &mut App<R>, config: &AppConfig) -> Result<()> {
    let frame = Duration::from_millis(config.frame_ms());
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        for key in drain_key_presses(timeout)? {
            if app.handle_key(key) == AppControl::Quit {
                return Ok(());
            }
        }

        // Gravity.
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        if elapsed >= frame {
            last_frame = now;
            app.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
