//! Console driver for a game of tic-tac-toe.
//!
//! Prompts for 1-based `row column` pairs, converts them to 0-based
//! coordinates, and drives the [`Game`] through apply, evaluate, and
//! advance until the outcome is terminal. Rejected moves are reported and
//! the same player is asked again.

use anyhow::{Context, Result, bail};
use noughts_board::{Game, Outcome};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// One read attempt: a coordinate pair, or the token that failed to parse.
enum Entry {
    Position(isize, isize),
    Invalid(String),
}

/// Interactive game over any line-oriented input and any output.
pub struct ConsoleGame<R, W> {
    game: Game,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a driver for `game`.
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Returns the game being driven.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the driver, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until someone wins or the board fills up.
    ///
    /// # Errors
    ///
    /// Fails if the input ends before the game does, or on an I/O error.
    #[instrument(skip(self), fields(size = self.game.board().size()))]
    pub fn run(&mut self) -> Result<Outcome> {
        let outcome = loop {
            let player = self.game.to_move();
            writeln!(self.output, "next player to place a mark is: {}", player)?;
            write!(self.output, "{}", self.game.board())?;
            write!(
                self.output,
                "where to place a {}? (input row then column, separated by space)\n> ",
                player
            )?;
            self.output.flush()?;

            loop {
                match self.read_entry()? {
                    Entry::Position(row, column) => {
                        match self
                            .game
                            .apply_move(row.saturating_sub(1), column.saturating_sub(1))
                        {
                            Ok(at) => {
                                debug!(%player, %at, "Move accepted");
                                break;
                            }
                            Err(e) => {
                                debug!(error = %e, "Move rejected");
                                writeln!(self.output, "{}", e)?;
                            }
                        }
                    }
                    Entry::Invalid(token) => {
                        debug!(%token, "Unparseable input");
                        self.pending.clear();
                        writeln!(
                            self.output,
                            "invalid input {:?}: expected two integers",
                            token
                        )?;
                    }
                }
                write!(self.output, "please re-enter a position:\n> ")?;
                self.output.flush()?;
            }

            let outcome = self.game.evaluate_outcome();
            if outcome.is_terminal() {
                break outcome;
            }

            self.game.advance_turn();
            writeln!(self.output)?;
        };

        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()?;

        info!(?outcome, moves = self.game.history().len(), "Game finished");
        Ok(outcome)
    }

    /// Reads the next `row column` pair.
    fn read_entry(&mut self) -> Result<Entry> {
        let mut coordinates = [0isize; 2];
        for slot in &mut coordinates {
            let token = self.next_token()?;
            match token.parse() {
                Ok(value) => *slot = value,
                Err(_) => return Ok(Entry::Invalid(token)),
            }
        }
        Ok(Entry::Position(coordinates[0], coordinates[1]))
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("input ended before the game finished");
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Plays one game on stdin/stdout.
///
/// # Errors
///
/// Fails if stdin closes mid-game or on an I/O error.
pub fn play_stdio(game: Game) -> Result<Outcome> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ConsoleGame::new(game, stdin.lock(), stdout.lock()).run()
}
