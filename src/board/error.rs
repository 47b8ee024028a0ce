//! Error types for board operations.

use std::fmt;

use super::Color;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for piece-code grid parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCodeError {
    /// Grid does not have 8 rows
    WrongRowCount { found: usize },
    /// A row does not have 8 squares
    WrongRowLength { row: usize, found: usize },
    /// Unknown piece code
    InvalidCode {
        row: usize,
        col: usize,
        code: String,
    },
    /// A color does not have exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for BoardCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardCodeError::WrongRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            BoardCodeError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 8 squares, found {found}")
            }
            BoardCodeError::InvalidCode { row, col, code } => {
                write!(f, "Invalid piece code '{code}' at row {row}, column {col}")
            }
            BoardCodeError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for BoardCodeError {}
