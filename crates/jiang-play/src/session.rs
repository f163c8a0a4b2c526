//! Line-oriented play session over any reader and writer.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use jiang_core::{Game, Ruleset, divide};

use crate::command::{Command, PositionInfo, SessionOption, parse_command};
use crate::error::PlayError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Which moves the game accepts.
    pub ruleset: Ruleset,
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading; the session is over.
    Quit,
}

/// An interactive session holding one game.
#[derive(Debug)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: Game::new(config.ruleset),
            config,
        }
    }

    /// Return the game in progress.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the current configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run on stdin and stdout until `quit` or end of input.
    pub fn run(mut self) -> Result<(), PlayError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run on arbitrary input and output until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), PlayError> {
        info!(ruleset = %self.config.ruleset, "session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if self.handle(trimmed, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        info!("session finished");
        Ok(())
    }

    /// Parse and execute one line.
    ///
    /// Parse errors and rejected moves are reported on `out` as
    /// `error: <message>`; only I/O failures are returned.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, PlayError> {
        debug!(cmd = %line, "received command");
        match parse_command(line).and_then(|cmd| self.execute(cmd, out)) {
            Ok(flow) => Ok(flow),
            Err(PlayError::Io { source }) => Err(PlayError::Io { source }),
            Err(e) => {
                warn!(error = %e, "command failed");
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, PlayError> {
        match cmd {
            Command::New => {
                self.game = Game::new(self.config.ruleset);
                info!("new game");
            }
            Command::Position(info) => self.handle_position(info)?,
            Command::Moves(sq) => {
                let targets: Vec<String> = self.game.moves_from(sq).map(|dst| dst.to_string()).collect();
                writeln!(out, "{sq}: {}", targets.join(" "))?;
            }
            Command::Legal => {
                let moves: Vec<String> = self.game.legal_moves().into_iter().map(|mv| mv.to_iccs()).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            Command::Play(mv) => {
                let captured = self.game.play(mv)?;
                match captured {
                    Some(piece) => writeln!(out, "played {mv} capturing {}", piece.chinese_char())?,
                    None => writeln!(out, "played {mv}")?,
                }
                if let Some(outcome) = self.game.outcome() {
                    writeln!(out, "{outcome}")?;
                } else if self.game.in_check() {
                    writeln!(out, "check")?;
                }
            }
            Command::Undo => {
                let mv = self.game.undo().ok_or(PlayError::NothingToUndo)?;
                writeln!(out, "undid {mv}")?;
            }
            Command::Board => writeln!(out, "{}", self.game)?,
            Command::Fen => writeln!(out, "{}", self.game.fen())?,
            Command::Perft(depth) => {
                if depth == 0 {
                    writeln!(out, "nodes: 1")?;
                    return Ok(Flow::Continue);
                }
                let game = &self.game;
                let breakdown = divide(game.board(), game.side_to_move(), depth, game.ruleset());
                let mut total = 0u64;
                for (mv, nodes) in &breakdown {
                    writeln!(out, "{mv}: {nodes}")?;
                    total += nodes;
                }
                writeln!(out)?;
                writeln!(out, "nodes: {total}")?;
            }
            Command::SetOption(SessionOption::Rules(ruleset)) => {
                self.config.ruleset = ruleset;
                self.game.set_ruleset(ruleset);
                info!(%ruleset, "ruleset changed");
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                warn!(command = %name, "unknown command ignored");
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_position(&mut self, info: PositionInfo) -> Result<(), PlayError> {
        let PositionInfo { mut game, moves } = info;
        game.set_ruleset(self.config.ruleset);
        for mv in moves {
            game.play(mv)?;
        }
        self.game = game;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
