//! Saved-game shape and JSON persistence.
//!
//! The undo stack belongs to the running session and is not saved; a
//! resumed game starts with nothing to undo.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{CapturedPieces, GameError, GameOptions, GameState, MoveRecord, Opponent};
use crate::board::{Board, CastlingRights, Color, Square};

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 8 rows of 8 piece codes, row 0 (rank 8) first; `""` when empty.
    pub board: Vec<Vec<String>>,
    pub side_to_move: Color,
    pub move_history: Vec<MoveRecord>,
    pub captured: CapturedPieces,
    pub move_count: u32,
    pub elapsed_secs: u64,
    pub game_over: bool,
    #[serde(default)]
    pub opponent: Option<Opponent>,
    /// Inferred from king and rook placement when absent.
    #[serde(default)]
    pub castling_rights: Option<CastlingRights>,
    #[serde(default)]
    pub en_passant_target: Option<Square>,
    /// Milliseconds since the Unix epoch.
    pub saved_at_ms: u64,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

fn corrupted(reason: impl Into<String>) -> GameError {
    let reason = reason.into();
    warn!("discarding saved game: {reason}");
    GameError::CorruptedSavedState { reason }
}

impl GameState {
    /// Snapshot the game as of `saved_at_ms`.
    #[must_use]
    pub fn snapshot_at(&self, saved_at_ms: u64) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_codes(),
            side_to_move: self.board.side_to_move(),
            move_history: self.records.clone(),
            captured: self.captured.clone(),
            move_count: self.move_count,
            elapsed_secs: self.elapsed_secs,
            game_over: self.game_over,
            opponent: self.options.opponent,
            castling_rights: Some(self.board.castling_rights()),
            en_passant_target: self.board.en_passant_target(),
            saved_at_ms,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot_at(now_ms())
    }

    /// Serialize the current game, stamped with the current time.
    pub fn save_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// Resume a game saved by `save_json`.
    pub fn resume_json(json: &str, options: GameOptions) -> Result<Self, GameError> {
        Self::resume_json_at(json, options, now_ms())
    }

    /// Resume a saved game as if the current time were `now_ms`.
    ///
    /// Fails with `CorruptedSavedState` when the JSON does not parse, the
    /// board is malformed, the side that just moved is left in check, or
    /// the save is older than `options.saved_state_max_age`.
    pub fn resume_json_at(json: &str, options: GameOptions, now_ms: u64) -> Result<Self, GameError> {
        let snapshot: GameSnapshot =
            serde_json::from_str(json).map_err(|e| corrupted(e.to_string()))?;
        Self::restore_at(snapshot, options, now_ms)
    }

    /// Rebuild a game from a snapshot taken no longer ago than the options
    /// allow.
    pub fn restore_at(
        snapshot: GameSnapshot,
        mut options: GameOptions,
        now_ms: u64,
    ) -> Result<Self, GameError> {
        let age_ms = now_ms.saturating_sub(snapshot.saved_at_ms);
        let max_age_ms = u64::try_from(options.saved_state_max_age.as_millis()).unwrap_or(u64::MAX);
        if age_ms > max_age_ms {
            return Err(corrupted(format!(
                "saved {}s ago, limit is {}s",
                age_ms / 1000,
                max_age_ms / 1000
            )));
        }

        let mut board = Board::from_codes(&snapshot.board, snapshot.side_to_move)
            .map_err(|e| corrupted(e.to_string()))?;
        let waiting = snapshot.side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(corrupted(format!(
                "{waiting} king is attacked with {} to move",
                snapshot.side_to_move
            )));
        }
        if let Some(rights) = snapshot.castling_rights {
            board.castling_rights = rights;
        }
        if let Some(target) = snapshot.en_passant_target {
            if Square::new(target.row(), target.col()).is_none() {
                return Err(corrupted(format!("en passant target {target:?} off the board")));
            }
            board.en_passant_target = Some(target);
        }
        if snapshot.opponent.is_some() {
            options.opponent = snapshot.opponent;
        }

        let mut game = GameState::from_board(board, options);
        game.records = snapshot.move_history;
        game.captured = snapshot.captured;
        game.move_count = snapshot.move_count;
        game.elapsed_secs = snapshot.elapsed_secs;
        game.game_over = game.game_over || snapshot.game_over;
        debug!(
            "resumed game at move {} with {:?} to move",
            game.move_count,
            game.board.side_to_move()
        );
        Ok(game)
    }
}
