//! Shared types - plain data used by the engine, input, view, and app layers
//!
//! Everything here is a pure value type with no dependencies, so it can be
//! used from the deterministic engine as well as from terminal glue.
//!
//! # Grid Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Rows are indexed top to
//! bottom, columns left to right. Pieces spawn horizontally centered on row 0.
//!
//! # Levels
//!
//! Level is 1-based. Reaching a score threshold raises the level and shortens
//! the fall interval:
//!
//! | Level | Threshold | Fall interval |
//! |-------|-----------|---------------|
//! | 1 | 0 | 500ms |
//! | 2 | 1000 | 400ms |
//! | 3 | 2500 | 300ms |
//! | 4 | 5000 | 200ms |
//! | 5 | 10000 | 150ms |
//! | 6 | 20000 | 100ms |
//!
//! # Scoring
//!
//! Clearing `n` lines at once awards `n * 100 * multiplier[n] * level`,
//! with multipliers `[0, 1, 1.5, 2, 3]` (see [`SCORE_MULTIPLIERS`]).
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color(), 3);
//! assert_eq!(PieceKind::from_color(3), Some(PieceKind::T));
//!
//! assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Default grid width in cells (10 columns)
pub const GRID_WIDTH: u16 = 10;

/// Default grid height in cells (20 rows)
pub const GRID_HEIGHT: u16 = 20;

/// Default frame rate of the terminal loop
pub const DEFAULT_FPS: u32 = 60;

/// Cumulative score required to reach level `i + 1`
///
/// Index 0 is the starting level and is never used for a level-up.
pub const LEVEL_THRESHOLDS: [u32; 6] = [0, 1000, 2500, 5000, 10000, 20000];

/// Fall interval per level in milliseconds (index 0 = level 1)
///
/// Levels beyond the table use the last entry.
pub const LEVEL_SPEEDS_MS: [u32; 6] = [500, 400, 300, 200, 150, 100];

/// Points per cleared line before multipliers
pub const LINE_BASE_POINTS: u32 = 100;

/// Score multiplier indexed by lines cleared in one lock (0-4)
pub const SCORE_MULTIPLIERS: [f64; 5] = [0.0, 1.0, 1.5, 2.0, 3.0];

/// Number of entries kept on the leaderboard
pub const MAX_RANKING: usize = 5;

/// Maximum length of a player name on the leaderboard
pub const NAME_MAX_LEN: usize = 6;

/// A grid cell value: 0 is empty, 1.. is a catalog color
pub type ColorIndex = u8;

/// The empty-cell sentinel. Never assigned to a piece.
pub const EMPTY: ColorIndex = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_tables_line_up() {
        assert_eq!(LEVEL_THRESHOLDS.len(), LEVEL_SPEEDS_MS.len());
        assert_eq!(LEVEL_THRESHOLDS[0], 0);
        assert!(LEVEL_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
        assert!(LEVEL_SPEEDS_MS.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn piece_colors_are_one_based_catalog_positions() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.color() as usize, i + 1);
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_color(kind.color()), Some(*kind));
        }
        assert_eq!(PieceKind::from_color(EMPTY), None);
        assert_eq!(PieceKind::from_color(8), None);
    }

    #[test]
    fn piece_letters_parse_back() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.letter().len(), 1);
            assert_eq!(PieceKind::from_str(kind.letter()), Some(kind));
        }
    }

    #[test]
    fn command_names_roundtrip() {
        for cmd in [
            GameCommand::MoveLeft,
            GameCommand::MoveRight,
            GameCommand::SoftDrop,
            GameCommand::Rotate,
            GameCommand::TogglePause,
            GameCommand::Reset,
        ] {
            assert_eq!(GameCommand::from_str(cmd.as_str()), Some(cmd));
        }
    }
}

/// The seven catalog pieces, in catalog order
///
/// The order is stable: a piece's color index is its position plus one.
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All pieces in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Zero-based catalog position
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Color index written into the grid when this piece locks
    pub fn color(&self) -> ColorIndex {
        self.index() as ColorIndex + 1
    }

    /// Inverse of [`PieceKind::color`]. Returns `None` for the empty sentinel.
    pub fn from_color(color: ColorIndex) -> Option<Self> {
        match color {
            1..=7 => Some(Self::ALL[color as usize - 1]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter used in logs
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Player commands accepted by a game session
///
/// Every command is a no-op when its preconditions do not hold
/// (wrong round state, or the target position is blocked).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Move the piece one row down without locking
    SoftDrop,
    /// Rotate the piece 90° clockwise in place
    Rotate,
    /// Pause or resume the round
    TogglePause,
    /// Start a fresh round
    Reset,
}

impl GameCommand {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("softDrop"), Some(GameCommand::SoftDrop));
    /// assert_eq!(GameCommand::from_str("ROTATE"), Some(GameCommand::Rotate));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "togglepause" => Some(GameCommand::TogglePause),
            "reset" => Some(GameCommand::Reset),
            _ => None,
        }
    }

    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Reset => "reset",
        }
    }
}

/// State of the round owned by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Ticks and movement are processed
    Playing,
    /// Only `TogglePause` and `Reset` have an effect
    Paused,
    /// Terminal until the next reset
    GameOver,
}

/// Top-level application screens
///
/// `Playing` covers both running and paused rounds; the pause flag lives on
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Main,
    Playing,
    Ranking,
    GameOver,
    NameEntry,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Main => "main",
            Screen::Playing => "playing",
            Screen::Ranking => "ranking",
            Screen::GameOver => "game_over",
            Screen::NameEntry => "name_entry",
        }
    }
}
