//! FEN parsing and serialization.
//!
//! Xiangqi FEN lists the ten ranks from Black's back rank (row 0) down to
//! Red's (row 9), uppercase letters for Red. The fields after the placement
//! are `side - - halfmove fullmove`; the two dashes are unused in Xiangqi.

use std::str::FromStr;

use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::player::Player;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

/// The fields of a full FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FenFields {
    pub(crate) board: Board,
    pub(crate) side_to_move: Player,
    pub(crate) fullmove_number: u16,
}

/// Parse `placement [side [- - halfmove fullmove]]`. The side defaults to Red.
pub(crate) fn parse_fen(fen: &str) -> Result<FenFields, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.is_empty() {
        return Err(FenError::Empty);
    }
    if fields.len() > 6 {
        return Err(FenError::TooManyFields { found: fields.len() });
    }

    let board = parse_placement(fields[0])?;

    let side_to_move = match fields.get(1) {
        None => Player::Red,
        Some(&side) => Player::from_fen(side).ok_or_else(|| FenError::InvalidSide {
            found: side.to_string(),
        })?,
    };

    if let Some(&halfmove) = fields.get(4) {
        halfmove.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: halfmove.to_string(),
        })?;
    }

    let fullmove_number = match fields.get(5) {
        None => 1,
        Some(&fullmove) => fullmove.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fullmove.to_string(),
        })?,
    };

    Ok(FenFields {
        board,
        side_to_move,
        fullmove_number,
    })
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != Square::ROWS as usize {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let row = rank_index as u8;
        let mut col: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=9).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::new(col as u8, row).ok_or(FenError::BadRankLength {
                rank_index,
                length: col + 1,
            })?;
            board.set(sq, Some(piece));
            col += 1;
        }

        if col != Square::COLS as usize {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }

    board.validate()?;
    Ok(board)
}

/// Parses a full FEN string or a bare placement; only the placement is kept.
impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).map(|fields| fields.board)
    }
}

impl Board {
    /// Serialize the piece placement as a FEN field.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for row in 0..Square::ROWS {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0u8;
            for col in 0..Square::COLS {
                let piece = Square::new(col, row).and_then(|sq| self.piece_on(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push((b'0' + empty) as char);
            }
        }

        fen
    }
}
