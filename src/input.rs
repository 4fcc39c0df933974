//! Console input for the interactive simulator session.
//!
//! Integers are read as whitespace-separated tokens that may span any number
//! of lines, so a reference string can be typed on one line or one per line.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::common::types::PageId;
use crate::sim::config::SimulatorConfig;
use crate::sim::error::SimulatorError;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Expected an integer, found '{0}'")]
    NotAnInteger(String),
    #[error("Page number {0} is out of range")]
    OutOfRange(i64),
    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("Invalid input: {0}")]
    Simulator(#[from] SimulatorError),
}

/// Whitespace-separated token reader over any buffered source
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an integer; `what` names the value for error messages
    pub fn next_int(&mut self, what: &'static str) -> Result<i64, InputError> {
        let token = self
            .next_token()?
            .ok_or(InputError::UnexpectedEof(what))?;
        token
            .parse::<i64>()
            .map_err(|_| InputError::NotAnInteger(token))
    }

    pub fn next_page(&mut self) -> Result<PageId, InputError> {
        let value = self.next_int("the page reference string")?;
        PageId::try_from(value).map_err(|_| InputError::OutOfRange(value))
    }
}

/// Everything needed to run one simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    pub reference: Vec<PageId>,
    pub frames: usize,
}

/// Prompt for and read the page count, reference string and frame count
pub fn read_session<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    prompts: &mut W,
    config: &SimulatorConfig,
) -> Result<SimulationInput, InputError> {
    write!(prompts, "Enter number of pages: ")?;
    prompts.flush()?;
    let pages = config.validate_pages(reader.next_int("the number of pages")?)?;

    writeln!(prompts, "Enter the page reference string:")?;
    prompts.flush()?;
    let reference = (0..pages)
        .map(|_| reader.next_page())
        .collect::<Result<Vec<_>, _>>()?;

    write!(prompts, "Enter number of frames: ")?;
    prompts.flush()?;
    let frames = config.validate_frames(reader.next_int("the number of frames")?)?;

    Ok(SimulationInput { reference, frames })
}
