//! Game session layer on top of the rules in [`crate::board`].
//!
//! A [`GameState`] owns one board together with its undo stack, the
//! displayed move list, captured pieces and the configured automated
//! opponent. Every operation is synchronous; callers decide when to ask
//! the engine for its move.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameStatus, Square};
//! use chess_rules::engine::{GameOptions, GameState};
//!
//! let mut game = GameState::new(GameOptions::default());
//! let outcome = game.apply_move(Square(6, 4), Square(4, 4), None).unwrap();
//! assert_eq!(outcome.notation, "e4");
//! assert_eq!(outcome.status, GameStatus::Normal);
//! assert!(game.undo());
//! ```

mod error;
mod game;
mod history;
mod options;
mod selector;
mod snapshot;

pub use error::GameError;
pub use game::{GameState, MoveOutcome, StatusReport};
pub use history::{CapturedPieces, HistoryFrame, MoveRecord};
pub use options::{
    Difficulty, GameOptions, Opponent, UndoPolicy, DEFAULT_HINT_COOLDOWN, DEFAULT_OPENING_WINDOW,
    DEFAULT_SAVED_STATE_MAX_AGE,
};
pub use selector::{
    HeuristicSelector, SelectionPolicy, CAPTURE_WEIGHT, CHECK_BONUS, DEVELOPMENT_BONUS,
};
pub use snapshot::GameSnapshot;
