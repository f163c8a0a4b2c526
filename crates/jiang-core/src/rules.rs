//! Position legality: the flying-general rule and check detection.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::ParseRulesetError;
use crate::movegen::attacks;
use crate::player::Player;
use crate::square::Square;

/// How strictly moves are filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ruleset {
    /// Only the flying-general rule rejects moves. A general may be left
    /// en prise; losing it ends the game.
    #[default]
    Basic,
    /// Full Xiangqi legality: a move may not leave the mover's general in check.
    Standard,
}

impl FromStr for Ruleset {
    type Err = ParseRulesetError;

    fn from_str(s: &str) -> Result<Ruleset, ParseRulesetError> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Ruleset::Basic),
            "standard" => Ok(Ruleset::Standard),
            _ => Err(ParseRulesetError { found: s.to_string() }),
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ruleset::Basic => write!(f, "basic"),
            Ruleset::Standard => write!(f, "standard"),
        }
    }
}

/// Why a position reached by a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The generals face each other on an open file.
    FacingGenerals,
    /// The mover's general is attacked.
    GeneralInCheck,
}

/// Return `true` if both generals stand on the same column with nothing between them.
///
/// A missing general yields `false`.
pub fn is_illegal_facing_generals(board: &Board) -> bool {
    let (Some(red), Some(black)) = (
        board.general_square(Player::Red),
        board.general_square(Player::Black),
    ) else {
        return false;
    };

    if red.col() != black.col() {
        return false;
    }

    let (top, bottom) = if black.row() < red.row() {
        (black.row(), red.row())
    } else {
        (red.row(), black.row())
    };

    ((top + 1)..bottom)
        .filter_map(|row| Square::new(red.col(), row))
        .all(|sq| !board.is_occupied(sq))
}

/// Return `true` if any opposing piece attacks `player`'s general.
///
/// A missing general yields `false`. Facing generals are reported by
/// [`is_illegal_facing_generals`], not here.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    let Some(general) = board.general_square(player) else {
        return false;
    };

    board
        .pieces()
        .filter(|(_, piece)| piece.is(player.flip()))
        .any(|(sq, _)| attacks(board, sq).contains(general))
}

/// Check the position `after` that `mover` produced against `ruleset`.
pub fn violation(after: &Board, mover: Player, ruleset: Ruleset) -> Option<Violation> {
    if is_illegal_facing_generals(after) {
        return Some(Violation::FacingGenerals);
    }
    if ruleset == Ruleset::Standard && is_in_check(after, mover) {
        return Some(Violation::GeneralInCheck);
    }
    None
}
