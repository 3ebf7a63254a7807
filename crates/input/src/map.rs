//! Key mapping from terminal events to game commands and menu choices.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Ranking,
    Quit,
}

/// Keys accepted on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Restart,
    /// Record the score, then return to the main menu
    EnterName,
    Quit,
}

/// Map keyboard input to in-round commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameCommand::Rotate),

        // Pause
        KeyCode::Char(' ') => Some(GameCommand::TogglePause),

        _ => None,
    }
}

/// Map keyboard input on the main menu.
pub fn main_menu_choice(key: KeyEvent) -> Option<MenuChoice> {
    match key.code {
        KeyCode::Char('1') => Some(MenuChoice::Start),
        KeyCode::Char('2') => Some(MenuChoice::Ranking),
        KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Map keyboard input on the game-over screen.
pub fn game_over_choice(key: KeyEvent) -> Option<GameOverChoice> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameOverChoice::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameOverChoice::EnterName),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameOverChoice::Quit),
        _ => None,
    }
}

/// Check if key leaves the ranking screen.
pub fn is_back(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc)
}

/// Ctrl-C, honored on every screen.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should quit the game during a round.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_interrupt(key)
}
