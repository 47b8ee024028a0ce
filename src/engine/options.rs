//! Session configuration.

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use super::SelectionPolicy;
use crate::board::Color;

/// Default number of applied moves before another hint is offered.
pub const DEFAULT_HINT_COOLDOWN: u32 = 3;
/// Default number of moves during which back-rank moves earn a bonus.
pub const DEFAULT_OPENING_WINDOW: u32 = 10;
/// Saved games older than this are discarded.
pub const DEFAULT_SAVED_STATE_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Strength of the automated opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The selection policy this difficulty plays with.
    #[must_use]
    pub const fn policy(self) -> SelectionPolicy {
        match self {
            Difficulty::Easy => SelectionPolicy::UniformRandom,
            Difficulty::Medium => SelectionPolicy::TopKRandom(3),
            Difficulty::Hard => SelectionPolicy::GreedyBest,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Whether `undo` may roll back a finished game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoPolicy {
    #[default]
    BlockedAfterGameOver,
    /// Undo clears the game-over flag and play resumes.
    AllowedAfterGameOver,
}

/// The side played by the engine and how strongly it plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opponent {
    pub color: Color,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// `None` for two humans sharing the board.
    pub opponent: Option<Opponent>,
    pub undo_policy: UndoPolicy,
    pub hint_cooldown: u32,
    pub opening_window: u32,
    pub saved_state_max_age: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            opponent: None,
            undo_policy: UndoPolicy::default(),
            hint_cooldown: DEFAULT_HINT_COOLDOWN,
            opening_window: DEFAULT_OPENING_WINDOW,
            saved_state_max_age: DEFAULT_SAVED_STATE_MAX_AGE,
        }
    }
}

impl GameOptions {
    /// Options for a game against the engine playing `color`.
    #[must_use]
    pub fn against_computer(color: Color, difficulty: Difficulty) -> Self {
        GameOptions {
            opponent: Some(Opponent { color, difficulty }),
            ..Self::default()
        }
    }

    /// The color the engine plays, if any.
    #[must_use]
    pub fn automated_color(&self) -> Option<Color> {
        self.opponent.map(|o| o.color)
    }

    /// Apply a named string setting.
    ///
    /// Recognised names (case-insensitive): `difficulty` (easy, medium,
    /// hard), `opponent` (white, black, none), `undo after game over`
    /// (true, false), `hint cooldown` and `opening window` (integers).
    /// Unknown names and unparsable values leave the options unchanged.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) {
        let normalized = name.trim().to_ascii_lowercase();
        let applied = match normalized.as_str() {
            "difficulty" => value.and_then(Difficulty::parse).map(|difficulty| {
                let color = self.automated_color().unwrap_or(Color::Black);
                self.opponent = Some(Opponent { color, difficulty });
            }),
            "opponent" => value.and_then(|v| {
                let difficulty = self.opponent.map(|o| o.difficulty).unwrap_or_default();
                let opponent = match v.trim().to_ascii_lowercase().as_str() {
                    "white" => Some(Some(Opponent { color: Color::White, difficulty })),
                    "black" => Some(Some(Opponent { color: Color::Black, difficulty })),
                    "none" | "off" => Some(None),
                    _ => None,
                };
                opponent.map(|opponent| self.opponent = opponent)
            }),
            "undo after game over" => value.and_then(parse_bool).map(|allowed| {
                self.undo_policy = if allowed {
                    UndoPolicy::AllowedAfterGameOver
                } else {
                    UndoPolicy::BlockedAfterGameOver
                };
            }),
            "hint cooldown" => value
                .and_then(|v| v.trim().parse::<u32>().ok())
                .map(|v| self.hint_cooldown = v),
            "opening window" => value
                .and_then(|v| v.trim().parse::<u32>().ok())
                .map(|v| self.opening_window = v),
            _ => {
                warn!("ignoring unknown option '{name}'");
                return;
            }
        };
        if applied.is_none() {
            warn!("ignoring option '{name}' with unusable value {value:?}");
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}
