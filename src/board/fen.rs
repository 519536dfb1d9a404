use std::str::FromStr;

use super::error::FenError;
use super::{
    Color, Occupant, Piece, Position, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The placement field is read rank 8 down to rank 1, files a to h;
    /// digits skip that many empty files. The fullmove field may be
    /// omitted and defaults to 1. Construction is atomic: on error,
    /// nothing half-initialized escapes.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount { found: ranks.len() });
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 7 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: rank + 1,
                            files: file + 1,
                        });
                    }
                    pos.set(Square::from_coords(file, rank), Occupant::Piece(color, piece));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        match parts[1] {
            "w" => pos.white_to_move = true,
            "b" => pos.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        for c in parts[2].chars() {
            match c {
                'K' => pos.castling_rights |= CASTLE_WHITE_K,
                'Q' => pos.castling_rights |= CASTLE_WHITE_Q,
                'k' => pos.castling_rights |= CASTLE_BLACK_K,
                'q' => pos.castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        pos.en_passant_target = if parts[3] == "-" {
            None
        } else {
            match parts[3].parse::<Square>() {
                Ok(sq) => Some(sq),
                Err(_) => {
                    return Err(FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })
                }
            }
        };

        // Clock fields are bookkeeping only; parse forgivingly.
        if let Some(halfmove) = parts.get(4) {
            pos.halfmove_clock = halfmove.parse().unwrap_or(0);
        }
        pos.fullmove_number = match parts.get(5) {
            Some(fullmove) => fullmove.parse().unwrap_or(1),
            None => 1,
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "loaded position: {} to move, {} occupied squares",
            pos.side_to_move(),
            pos.squares.iter().filter(|occ| !occ.is_empty()).count()
        );

        Ok(pos)
    }

    /// Replace this position with one parsed from FEN.
    ///
    /// On error the position is left untouched; the same square topology
    /// serves any number of loads.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Position::try_from_fen(fen)?;
        Ok(())
    }

    /// Render the position as FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.occupant(Square::from_coords(file, rank)) {
                    Occupant::Empty => empty += 1,
                    Occupant::Piece(color, piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        if self.castling_rights & CASTLE_WHITE_K != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WHITE_Q != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BLACK_K != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BLACK_Q != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
