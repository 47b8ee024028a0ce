//! The game session: one board, its undo stack and move list, and the
//! rules a caller plays by.

use log::{debug, info};
use rand::Rng;

use super::{
    CapturedPieces, GameError, GameOptions, HeuristicSelector, HistoryFrame, MoveRecord,
    SelectionPolicy, UndoPolicy,
};
use crate::board::{move_notation, Board, Color, GameStatus, Move, Piece, Square};

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Classification of the new position for the side now to move.
    pub status: GameStatus,
    pub notation: String,
    pub captured: Option<Piece>,
}

/// Status of the side to move, with the king to highlight when in check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub status: GameStatus,
    pub side_to_move: Color,
    pub checked_king: Option<Square>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) options: GameOptions,
    pub(crate) history: Vec<HistoryFrame>,
    pub(crate) records: Vec<MoveRecord>,
    pub(crate) captured: CapturedPieces,
    selected: Option<Square>,
    selected_destinations: Vec<Square>,
    pub(crate) game_over: bool,
    pub(crate) move_count: u32,
    hint_cooldown: u32,
    pub(crate) elapsed_secs: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

impl GameState {
    /// A fresh game from the standard initial position.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self::from_board(Board::new(), options)
    }

    /// A game continuing from an arbitrary position.
    #[must_use]
    pub fn from_board(mut board: Board, options: GameOptions) -> Self {
        let game_over = board.status().is_terminal();
        GameState {
            board,
            options,
            history: Vec::new(),
            records: Vec::new(),
            captured: CapturedPieces::default(),
            selected: None,
            selected_destinations: Vec::new(),
            game_over,
            move_count: 0,
            hint_cooldown: 0,
            elapsed_secs: 0,
        }
    }

    /// Start over from the initial position, keeping the options.
    pub fn reset(&mut self) {
        let options = self.options.clone();
        *self = Self::new(options);
        info!("game reset");
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Mutable options; takes effect from the next operation.
    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.records
    }

    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Number of moves that can currently be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Moves left before another hint is offered.
    #[must_use]
    pub fn hint_cooldown(&self) -> u32 {
        self.hint_cooldown
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Record the elapsed time kept by the caller's clock.
    pub fn set_elapsed_secs(&mut self, secs: u64) {
        self.elapsed_secs = secs;
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[must_use]
    pub fn selected_destinations(&self) -> &[Square] {
        &self.selected_destinations
    }

    /// Whether the side to move is played by the engine.
    #[must_use]
    pub fn is_automated_turn(&self) -> bool {
        self.options.automated_color() == Some(self.board.side_to_move())
    }

    /// Legal destinations for the piece on `square`, whoever owns it.
    pub fn legal_destinations(&mut self, square: Square) -> Vec<Square> {
        self.board.legal_destinations(square)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.selected_destinations.clear();
    }

    /// Select one of the mover's pieces and return where it may go.
    ///
    /// A piece with no legal moves yields an empty list and no selection.
    pub fn select_square(&mut self, square: Square) -> Result<Vec<Square>, GameError> {
        if self.game_over {
            self.clear_selection();
            return Err(GameError::GameOver);
        }
        let side = self.board.side_to_move();
        if self.board.color_on(square) != Some(side) || self.is_automated_turn() {
            self.clear_selection();
            return Err(GameError::IllegalSelection { square });
        }

        let destinations = self.board.legal_destinations(square);
        if destinations.is_empty() {
            self.clear_selection();
        } else {
            self.selected = Some(square);
            self.selected_destinations = destinations.clone();
        }
        Ok(destinations)
    }

    /// Move the selected piece to `to`.
    pub fn play_selected(
        &mut self,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, GameError> {
        let from = self
            .selected
            .ok_or(GameError::IllegalSelection { square: to })?;
        self.apply_move(from, to, promotion)
    }

    /// Validate and apply a move for the side to move.
    ///
    /// `promotion` picks the piece a pawn becomes on the last rank (queen
    /// when `None`) and is ignored for other moves.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let invalid = GameError::InvalidMove { from, to };
        let Some((color, piece)) = self.board.piece_at(from) else {
            return Err(invalid);
        };
        if color != self.board.side_to_move() {
            return Err(invalid);
        }
        if promotion.is_some_and(|p| !p.is_promotion_choice()) {
            return Err(invalid);
        }
        if !self.board.legal_destinations(from).contains(&to) {
            return Err(invalid);
        }

        self.history.push(HistoryFrame {
            board: self.board.clone(),
            captured: self.captured.clone(),
            move_count: self.move_count,
        });

        let mv = match promotion {
            Some(choice) => Move::with_promotion(from, to, choice),
            None => Move::new(from, to),
        };
        let info = self.board.make_move(mv);
        let captured = info.captured().map(|(_, p)| p);
        let promoted_to = if info.promoted() {
            self.board.piece_on(to)
        } else {
            None
        };

        if let Some(taken) = captured {
            self.captured.push(color, taken);
        }
        self.move_count += 1;
        self.hint_cooldown = self.hint_cooldown.saturating_sub(1);
        self.clear_selection();

        let status = self.board.status();
        let notation = move_notation(piece, mv, captured.is_some(), promoted_to, status);
        debug!("{color:?} played {notation} ({mv})");

        self.records.push(MoveRecord {
            from,
            to,
            color,
            piece,
            captured,
            promotion: promoted_to,
            notation: notation.clone(),
        });

        if status.is_terminal() {
            self.game_over = true;
            info!("game over after {notation}: {status}");
        }

        Ok(MoveOutcome {
            status,
            notation,
            captured,
        })
    }

    fn pop_frame(&mut self) -> bool {
        let Some(frame) = self.history.pop() else {
            return false;
        };
        self.board = frame.board;
        self.captured = frame.captured;
        self.move_count = frame.move_count;
        self.records.pop();
        true
    }

    /// Take back the last move, or the last move pair against the engine
    /// so that the human is to move again.
    ///
    /// Returns false when nothing was undone: the history is empty, or the
    /// game is over and the undo policy forbids it.
    pub fn undo(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        if self.game_over && self.options.undo_policy == UndoPolicy::BlockedAfterGameOver {
            return false;
        }

        let mut undone = usize::from(self.pop_frame());
        if self.is_automated_turn() && self.pop_frame() {
            undone += 1;
        }

        self.game_over = false;
        self.clear_selection();
        debug!(
            "undid {undone} move(s), {:?} to move",
            self.board.side_to_move()
        );
        true
    }

    /// Classify the current position.
    pub fn status(&mut self) -> StatusReport {
        let side_to_move = self.board.side_to_move();
        let status = self.board.status();
        let checked_king = if status.is_check() {
            self.board.king_square(side_to_move)
        } else {
            None
        };
        StatusReport {
            status,
            side_to_move,
            checked_king,
        }
    }

    /// The best-scoring move for the side to move, then start the hint
    /// cooldown.
    pub fn hint(&mut self) -> Result<Move, GameError> {
        if self.hint_cooldown > 0 {
            return Err(GameError::HintUnavailable {
                remaining: self.hint_cooldown,
            });
        }
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let moves = self.board.all_legal_moves(self.board.side_to_move());
        let best = HeuristicSelector::new(self.move_count, self.options.opening_window)
            .best(&self.board, &moves)
            .ok_or(GameError::GameOver)?;
        self.hint_cooldown = self.options.hint_cooldown;
        debug!("hint: {best}");
        Ok(best)
    }

    /// Pick a move for `color` under `policy` without playing it.
    pub fn select_automated_move<R: Rng + ?Sized>(
        &mut self,
        color: Color,
        policy: SelectionPolicy,
        rng: &mut R,
    ) -> Option<Move> {
        let moves = self.board.all_legal_moves(color);
        HeuristicSelector::new(self.move_count, self.options.opening_window).select(
            &mut self.board,
            &moves,
            policy,
            rng,
        )
    }

    /// Play the engine's move when it is the engine's turn.
    ///
    /// Returns `Ok(None)` when no opponent is configured or the human is to
    /// move.
    pub fn play_automated_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveOutcome>, GameError> {
        let Some(opponent) = self.options.opponent else {
            return Ok(None);
        };
        if opponent.color != self.board.side_to_move() {
            return Ok(None);
        }
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let Some(mv) =
            self.select_automated_move(opponent.color, opponent.difficulty.policy(), rng)
        else {
            return Err(GameError::GameOver);
        };
        self.apply_move(mv.from(), mv.to(), mv.promotion()).map(Some)
    }
}
