#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::string::String;

use crate::agent::Agent;
use crate::common::{AgentError, BoardError, ShotResult};
use crate::coordinate::Coordinate;
use crate::grid::Grid;

/// Why a typed line could not be read as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    WrongTokenCount,
    NotANumber,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

/// Parse "row column" (1-based) into a 0-based coordinate. Range checks are
/// left to the grid, so "0 7" parses fine and is refused as off the board.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount);
    }
    if !tokens.iter().all(|t| t.bytes().all(|b| b.is_ascii_digit())) {
        return Err(InputError::NotANumber);
    }
    let row: u32 = tokens[0].parse().map_err(|_| InputError::NotANumber)?;
    let col: u32 = tokens[1].parse().map_err(|_| InputError::NotANumber)?;
    let to_index = |v: u32| i32::try_from(v).map(|v| v - 1).map_err(|_| InputError::NotANumber);
    Ok(Coordinate::new(to_index(row)?, to_index(col)?))
}

/// Console player reading shots from `input` and writing prompts to `output`.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<io::StdinLock<'static>, Stdout> {
    /// Player on the process console.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: core::fmt::Arguments<'_>) {
        // A broken console surfaces on the next read.
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn name(&self) -> &str {
        "Player"
    }

    fn choose_target(&mut self, opponent: &Grid) -> Result<Coordinate, AgentError> {
        writeln!(self.output, "Opponent board:\n{}", opponent)?;
        loop {
            write!(self.output, "Your shot: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => self.say(format_args!(" {} ", e)),
            }
        }
    }

    fn handle_rejection(&mut self, _target: Coordinate, error: &BoardError) {
        self.say(format_args!("{}", error));
    }

    fn handle_shot_result(&mut self, _target: Coordinate, result: ShotResult) {
        let msg = match result {
            ShotResult::Miss => "Miss!",
            ShotResult::Hit => "Hit!",
            ShotResult::Sunk => "Sunk!",
        };
        self.say(format_args!("{}", msg));
    }
}
