//! Piece, color, and occupant types, plus the static movement table.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::direction::Direction::{
    East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West,
};

/// Chess piece categories.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece categories in index order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from a FEN letter, either case (p, n, b, r, q, k).
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter for this piece.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// FEN letter with case based on color (uppercase for White).
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Static movement descriptor for this piece as moved by `color`.
    /// Only pawns are color-dependent.
    #[must_use]
    pub(crate) fn movement(self, color: Color) -> &'static Movement {
        match (self, color) {
            (Piece::Pawn, Color::White) => &WHITE_PAWN,
            (Piece::Pawn, Color::Black) => &BLACK_PAWN,
            (Piece::Knight, _) => &KNIGHT,
            (Piece::Bishop, _) => &BISHOP,
            (Piece::Rook, _) => &ROOK,
            (Piece::Queen, _) => &QUEEN,
            (Piece::King, _) => &KING,
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn starting rank index (1 for White, 6 for Black).
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one square: empty, or a colored piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Occupant {
    Empty,
    Piece(Color, Piece),
}

impl Occupant {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// The colored piece on the square, if any.
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<(Color, Piece)> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(color, piece) => Some((color, piece)),
        }
    }

    /// Board-dump character: FEN letter, or '.' when empty.
    #[inline]
    #[must_use]
    pub fn to_board_char(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Piece(color, piece) => piece.to_fen_char(color),
        }
    }
}

impl Default for Occupant {
    fn default() -> Self {
        Occupant::Empty
    }
}

/// A movement token: one compass step, or a fixed multi-step path walked
/// in order (knight leaps, the pawn double push).
#[derive(Clone, Copy, Debug)]
pub(crate) enum Token {
    Step(Direction),
    Path(&'static [Direction]),
}

/// Static movement descriptor: ordered tokens plus how far a step token
/// repeats (1 for leapers and the king, 7 for sliders).
#[derive(Debug)]
pub(crate) struct Movement {
    pub(crate) tokens: &'static [Token],
    pub(crate) range: u8,
}

static WHITE_PAWN: Movement = Movement {
    tokens: &[
        Token::Path(&[North, North]),
        Token::Step(North),
        Token::Step(NorthWest),
        Token::Step(NorthEast),
    ],
    range: 1,
};

static BLACK_PAWN: Movement = Movement {
    tokens: &[
        Token::Path(&[South, South]),
        Token::Step(South),
        Token::Step(SouthWest),
        Token::Step(SouthEast),
    ],
    range: 1,
};

static KNIGHT: Movement = Movement {
    tokens: &[
        Token::Path(&[North, North, West]),
        Token::Path(&[North, North, East]),
        Token::Path(&[North, East, East]),
        Token::Path(&[North, West, West]),
        Token::Path(&[South, East, East]),
        Token::Path(&[South, West, West]),
        Token::Path(&[South, South, West]),
        Token::Path(&[South, South, East]),
    ],
    range: 1,
};

static ROOK: Movement = Movement {
    tokens: &[
        Token::Step(North),
        Token::Step(South),
        Token::Step(East),
        Token::Step(West),
    ],
    range: 7,
};

static BISHOP: Movement = Movement {
    tokens: &[
        Token::Step(NorthWest),
        Token::Step(SouthWest),
        Token::Step(NorthEast),
        Token::Step(SouthEast),
    ],
    range: 7,
};

static QUEEN: Movement = Movement {
    tokens: &[
        Token::Step(North),
        Token::Step(South),
        Token::Step(East),
        Token::Step(West),
        Token::Step(NorthWest),
        Token::Step(SouthWest),
        Token::Step(NorthEast),
        Token::Step(SouthEast),
    ],
    range: 7,
};

static KING: Movement = Movement {
    tokens: &[
        Token::Step(North),
        Token::Step(South),
        Token::Step(East),
        Token::Step(West),
        Token::Step(NorthWest),
        Token::Step(SouthWest),
        Token::Step(NorthEast),
        Token::Step(SouthEast),
    ],
    range: 1,
};
