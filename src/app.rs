//! Application screens: main menu, round, leaderboard, and name prompt.
//!
//! `App` owns the session and the ranking store and routes each key press
//! according to the current [`Screen`]. It has no terminal I/O of its own;
//! the binary feeds it keys and elapsed time and flushes what it renders.

use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

use crate::core::{RandomIndex, Session, SessionSnapshot};
use crate::input::{
    game_over_choice, handle_key_event, is_back, is_interrupt, main_menu_choice, should_quit,
    GameOverChoice, MenuChoice, NameEntry, NameEntryEvent,
};
use crate::ranking::RankingStore;
use crate::term::{FrameBuffer, GameView, MenuView, Viewport};
use crate::types::Screen;

/// What the frame loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Quit,
}

pub struct App<R> {
    screen: Screen,
    session: Session<R>,
    ranking: RankingStore,
    name: NameEntry,
    snapshot: SessionSnapshot,
    game_view: GameView,
    menu_view: MenuView,
}

impl<R: RandomIndex> App<R> {
    /// Start on the main menu
    pub fn new(session: Session<R>, ranking: RankingStore) -> Self {
        let snapshot = session.snapshot();
        Self {
            screen: Screen::Main,
            session,
            ranking,
            name: NameEntry::new(),
            snapshot,
            game_view: GameView::default(),
            menu_view: MenuView::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn ranking(&self) -> &RankingStore {
        &self.ranking
    }

    /// Current contents of the name prompt
    pub fn pending_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppControl {
        if is_interrupt(key) {
            return AppControl::Quit;
        }

        match self.screen {
            Screen::Main => match main_menu_choice(key) {
                Some(MenuChoice::Start) => {
                    // A finished round is never resumed.
                    if self.session.game_over() {
                        self.session.reset();
                    }
                    self.go_to(Screen::Playing);
                }
                Some(MenuChoice::Ranking) => self.go_to(Screen::Ranking),
                Some(MenuChoice::Quit) => return AppControl::Quit,
                None => {}
            },
            Screen::Ranking => {
                if is_back(key) {
                    self.go_to(Screen::Main);
                }
            }
            Screen::Playing => {
                if should_quit(key) {
                    return AppControl::Quit;
                }
                if let Some(command) = handle_key_event(key) {
                    self.session.apply(command);
                    self.check_round_end();
                }
            }
            Screen::GameOver => match game_over_choice(key) {
                Some(GameOverChoice::Restart) => {
                    self.session.reset();
                    self.go_to(Screen::Playing);
                }
                Some(GameOverChoice::EnterName) => {
                    self.name.clear();
                    self.go_to(Screen::NameEntry);
                }
                Some(GameOverChoice::Quit) => return AppControl::Quit,
                None => {}
            },
            Screen::NameEntry => {
                if let NameEntryEvent::Submit(name) = self.name.handle_key(key) {
                    let score = self.session.score();
                    if let Err(err) = self.ranking.submit(&name, score) {
                        warn!(error = %err, "failed to save ranking");
                    }
                    self.go_to(Screen::Main);
                }
            }
        }

        AppControl::Continue
    }

    /// Advance the round clock; only runs on the playing screen
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        let ticked = self.session.advance(elapsed_ms);
        if let Some(event) = self.session.take_last_event() {
            if event.lines_cleared > 0 {
                debug!(
                    lines = event.lines_cleared,
                    points = event.points,
                    score = self.session.score(),
                    "lines cleared"
                );
            }
        }
        self.check_round_end();
        ticked
    }

    /// Draw the current screen
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Main => self.menu_view.render_main_into(viewport, fb),
            Screen::Ranking => self.menu_view.render_ranking_into(
                self.ranking
                    .entries()
                    .iter()
                    .map(|e| (e.name.as_str(), e.score)),
                viewport,
                fb,
            ),
            Screen::Playing | Screen::GameOver => {
                self.session.snapshot_into(&mut self.snapshot);
                self.game_view.render_into(&self.snapshot, viewport, fb);
            }
            Screen::NameEntry => self.menu_view.render_name_entry_into(
                self.name.as_str(),
                self.session.score(),
                viewport,
                fb,
            ),
        }
    }

    fn check_round_end(&mut self) {
        if self.screen == Screen::Playing && self.session.game_over() {
            self.go_to(Screen::GameOver);
        }
    }

    fn go_to(&mut self, screen: Screen) {
        if self.screen != screen {
            info!(from = self.screen.as_str(), to = screen.as_str(), "screen change");
            self.screen = screen;
        }
    }
}
