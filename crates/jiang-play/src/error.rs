//! Front-end errors.

use jiang_core::{FenError, MoveError, ParseRulesetError};

/// Errors that can occur while parsing or executing a command.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        #[from]
        source: FenError,
    },

    /// A token could not be read as an ICCS move.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The text that failed to parse.
        text: String,
    },

    /// A token could not be read as an ICCS square.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// The depth value in `perft` could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// A command was given without its required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// `setoption` without the `name ... value ...` shape.
    #[error("malformed setoption command: expected `setoption name <id> value <x>`")]
    MalformedOption,

    /// `setoption` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// The value given for the `Rules` option is not a ruleset.
    #[error(transparent)]
    InvalidRuleset(#[from] ParseRulesetError),

    /// The game refused a move.
    #[error(transparent)]
    Rejected(#[from] MoveError),

    /// `undo` with no move to take back.
    #[error("nothing to undo")]
    NothingToUndo,

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
