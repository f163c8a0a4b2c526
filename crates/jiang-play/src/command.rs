//! Command parsing.

use jiang_core::{Game, Move, Ruleset, Square};

use crate::error::PlayError;

/// Game setup carried by a `position` command.
#[derive(Debug, Clone)]
pub struct PositionInfo {
    /// Starting point, either the standard position or a parsed FEN.
    pub game: Game,
    /// Moves to replay on top of `game`.
    pub moves: Vec<Move>,
}

/// A runtime option set with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `Rules` -- which moves the game accepts.
    Rules(Ruleset),
}

/// A parsed command line.
#[derive(Debug)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `position` -- set up a game with optional moves applied.
    Position(PositionInfo),
    /// `moves <sq>` -- list destinations of one piece.
    Moves(Square),
    /// `legal` -- list every legal move.
    Legal,
    /// `play <move>` or a bare move.
    Play(Move),
    /// `undo` -- take back one move.
    Undo,
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the position as FEN.
    Fen,
    /// `perft <depth>` -- count leaf nodes with a per-move breakdown.
    Perft(usize),
    /// `setoption name <id> value <x>`.
    SetOption(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "new" => Ok(Command::New),
        "position" => parse_position(&tokens[1..]),
        "moves" => {
            let text = tokens.get(1).ok_or(PlayError::MissingArgument { command: "moves" })?;
            parse_square(text).map(Command::Moves)
        }
        "legal" => Ok(Command::Legal),
        "play" => {
            let text = tokens.get(1).ok_or(PlayError::MissingArgument { command: "play" })?;
            parse_move(text).map(Command::Play)
        }
        "undo" => Ok(Command::Undo),
        "board" | "d" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "perft" => {
            let value = tokens.get(1).ok_or(PlayError::MissingArgument { command: "perft" })?;
            let depth = value.parse().map_err(|_| PlayError::InvalidDepth {
                value: value.to_string(),
            })?;
            Ok(Command::Perft(depth))
        }
        "setoption" => parse_setoption(&tokens[1..]),
        "quit" | "exit" => Ok(Command::Quit),
        _ => match Move::from_iccs(first) {
            Some(mv) if tokens.len() == 1 => Ok(Command::Play(mv)),
            _ => Ok(Command::Unknown(first.to_string())),
        },
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves h2e2 h9g7 ...]`
/// - `position fen <fen-fields> [moves h2e2 h9g7 ...]`
///
/// A FEN may carry anywhere from one to six fields; everything up to the
/// `moves` keyword belongs to it.
fn parse_position(tokens: &[&str]) -> Result<Command, PlayError> {
    let Some(&keyword) = tokens.first() else {
        return Err(PlayError::MalformedPosition);
    };

    let rest = &tokens[1..];
    let split = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
    let (setup, moves) = rest.split_at(split);

    let game = match keyword {
        "startpos" => Game::default(),
        "fen" => setup.join(" ").parse::<Game>()?,
        _ => return Err(PlayError::MalformedPosition),
    };

    let moves = moves
        .iter()
        .skip(1)
        .map(|text| parse_move(text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Command::Position(PositionInfo { game, moves }))
}

/// Parse `name <id> value <x>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, PlayError> {
    let ["name", name, "value", value] = tokens else {
        return Err(PlayError::MalformedOption);
    };

    if name.eq_ignore_ascii_case("rules") {
        Ok(Command::SetOption(SessionOption::Rules(value.parse()?)))
    } else {
        Err(PlayError::UnknownOption {
            name: name.to_string(),
        })
    }
}

fn parse_move(text: &str) -> Result<Move, PlayError> {
    Move::from_iccs(text).ok_or_else(|| PlayError::InvalidMove {
        text: text.to_string(),
    })
}

fn parse_square(text: &str) -> Result<Square, PlayError> {
    Square::from_iccs(text).ok_or_else(|| PlayError::InvalidSquare {
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use jiang_core::{Board, Player};

    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("legal").unwrap(), Command::Legal));
        assert!(matches!(parse_command("undo").unwrap(), Command::Undo));
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
        assert!(matches!(parse_command("fen").unwrap(), Command::Fen));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_empty_line() {
        assert!(matches!(parse_command("   ").unwrap(), Command::Unknown(s) if s.is_empty()));
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(parse_command("go depth 5").unwrap(), Command::Unknown(s) if s == "go"));
    }

    #[test]
    fn parse_play_and_bare_move() {
        let expected = Move::from_iccs("h2e2").unwrap();
        match parse_command("play h2e2").unwrap() {
            Command::Play(mv) => assert_eq!(mv, expected),
            other => panic!("expected Play, got {other:?}"),
        }
        match parse_command("h2-e2").unwrap() {
            Command::Play(mv) => assert_eq!(mv, expected),
            other => panic!("expected Play, got {other:?}"),
        }
    }

    #[test]
    fn parse_play_errors() {
        assert!(matches!(
            parse_command("play").unwrap_err(),
            PlayError::MissingArgument { command: "play" }
        ));
        assert!(matches!(
            parse_command("play z9z8").unwrap_err(),
            PlayError::InvalidMove { text } if text == "z9z8"
        ));
    }

    #[test]
    fn parse_moves_square() {
        match parse_command("moves b0").unwrap() {
            Command::Moves(sq) => assert_eq!(sq, Square::new(1, 9).unwrap()),
            other => panic!("expected Moves, got {other:?}"),
        }
        assert!(matches!(
            parse_command("moves j4").unwrap_err(),
            PlayError::InvalidSquare { .. }
        ));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(info) => {
                assert_eq!(*info.game.board(), Board::starting_position());
                assert!(info.moves.is_empty());
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves h2e2 h9g7").unwrap() {
            Command::Position(info) => assert_eq!(info.moves.len(), 2),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command("position fen 4k4/9/9/9/9/9/9/9/9/3K5 b - - 0 7 moves e9e8").unwrap();
        match cmd {
            Command::Position(info) => {
                assert_eq!(info.game.side_to_move(), Player::Black);
                assert_eq!(info.moves, vec![Move::from_iccs("e9e8").unwrap()]);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_short_fen() {
        let cmd = parse_command("position fen 4k4/9/9/9/9/9/9/9/9/3K5").unwrap();
        assert!(matches!(cmd, Command::Position(info) if info.game.side_to_move() == Player::Red));
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(parse_command("position").unwrap_err(), PlayError::MalformedPosition));
        assert!(matches!(
            parse_command("position somewhere").unwrap_err(),
            PlayError::MalformedPosition
        ));
        assert!(matches!(
            parse_command("position fen 4k4/9").unwrap_err(),
            PlayError::InvalidFen { .. }
        ));
        assert!(matches!(
            parse_command("position startpos moves h2e2 nonsense").unwrap_err(),
            PlayError::InvalidMove { .. }
        ));
    }

    #[test]
    fn parse_perft() {
        assert!(matches!(parse_command("perft 3").unwrap(), Command::Perft(3)));
        assert!(matches!(
            parse_command("perft deep").unwrap_err(),
            PlayError::InvalidDepth { value } if value == "deep"
        ));
    }

    #[test]
    fn parse_setoption_rules() {
        assert!(matches!(
            parse_command("setoption name Rules value standard").unwrap(),
            Command::SetOption(SessionOption::Rules(Ruleset::Standard))
        ));
        assert!(matches!(
            parse_command("setoption name rules value Basic").unwrap(),
            Command::SetOption(SessionOption::Rules(Ruleset::Basic))
        ));
    }

    #[test]
    fn parse_setoption_errors() {
        assert!(matches!(
            parse_command("setoption name Hash value 16").unwrap_err(),
            PlayError::UnknownOption { name } if name == "Hash"
        ));
        assert!(matches!(
            parse_command("setoption name Rules value strict").unwrap_err(),
            PlayError::InvalidRuleset(_)
        ));
        assert!(matches!(
            parse_command("setoption Rules standard").unwrap_err(),
            PlayError::MalformedOption
        ));
    }
}
