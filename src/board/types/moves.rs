//! Move type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A source/destination pair, with an optional promotion choice.
///
/// Castling and en passant are not flagged: they are recognised from the
/// position when the move is made.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the requested promotion piece, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4` or `a7a8n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_choice() => {
                    Ok(Move::with_promotion(from, to, piece))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiet_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from(), Square(6, 4));
        assert_eq!(mv.to(), Square(4, 4));
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_promotion() {
        let mv: Move = "a7a8n".parse().unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.to_string(), "a7a8n");
        assert_eq!(format!("{mv:?}"), "Move(a7a8=N)");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            "a7a8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }
}
