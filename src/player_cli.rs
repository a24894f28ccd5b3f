#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotOutcome},
    player::Player,
};

/// Why a line typed by the player could not be read as a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// The line did not hold exactly two tokens.
    WrongTokenCount(usize),
    /// A token was not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::WrongTokenCount(n) => {
                write!(f, "Enter exactly two numbers (row and column), got {}", n)
            }
            MalformedInput::NotANumber(token) => write!(f, "'{}' is not a number", token),
        }
    }
}

impl std::error::Error for MalformedInput {}

/// Errors raised while reading a target from the console.
#[derive(Debug)]
pub enum InputError {
    Malformed(MalformedInput),
    /// Input ended before a target was entered.
    Closed,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(e) => write!(f, "Malformed input: {}", e),
            InputError::Closed => write!(f, "Input closed"),
            InputError::Io(e) => write!(f, "Console error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Malformed(e) => Some(e),
            InputError::Io(e) => Some(e),
            InputError::Closed => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<MalformedInput> for InputError {
    fn from(err: MalformedInput) -> Self {
        InputError::Malformed(err)
    }
}

/// Parse a one-based `row col` pair into a zero-based coordinate.
///
/// Only the shape of the input is checked here; a row or column of `0`, or
/// one past the board edge, is left for the board to reject.
pub fn parse_target(line: &str) -> Result<Coordinate, MalformedInput> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(MalformedInput::WrongTokenCount(line.split_whitespace().count()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, MalformedInput> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedInput::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| MalformedInput::NotANumber(token.to_string()))
}

/// Player driven by lines of text, typically the terminal.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

/// Human player reading stdin and writing stdout.
pub type ConsolePlayer = HumanPlayer<io::StdinLock<'static>, io::Stdout>;

impl ConsolePlayer {
    pub fn console() -> Self {
        HumanPlayer::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt until a well-formed `row col` line arrives.
    pub fn read_target(&mut self) -> Result<Coordinate, InputError> {
        loop {
            write!(self.output, "Your move (row col): ")?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                writeln!(self.output)?;
                return Err(InputError::Closed);
            }
            match parse_target(&self.line) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    debug!("malformed target {:?}: {}", self.line.trim(), e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    // Notifications are best effort: a broken console surfaces on the next
    // `read_target`.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.write_all(b"\n");
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        Ok(self.read_target()?)
    }

    fn handle_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        self.say(format_args!("{}. Try again.", err));
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => self.say(format_args!("{}: miss.", target)),
            ShotOutcome::Hit => self.say(format_args!("{}: hit! Fire again.", target)),
            ShotOutcome::Sunk(_) => {
                self.say(format_args!("{}: vessel sunk!", target))
            }
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => self.say(format_args!("Computer fired at {}: miss.", target)),
            ShotOutcome::Hit => {
                self.say(format_args!("Computer fired at {}: your vessel is hit.", target))
            }
            ShotOutcome::Sunk(_) => {
                self.say(format_args!("Computer fired at {}: your vessel is sunk.", target))
            }
        }
    }
}
