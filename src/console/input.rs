use crate::ElementKind;
use core::fmt::Display;
use std::io::{BufRead, ErrorKind};

/// Error cases of reading a value from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// EndOfInput => The input is exhausted before a value could be read.
    EndOfInput,
    /// Invalid => The token could not be parsed as a value of the expected kind.
    Invalid {
        /// The offending token.
        token: String,
        /// Kind of the value which was expected.
        expected: ElementKind,
    },
    /// Io => The underlying reader failed.
    Io(ErrorKind),
}

impl Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "unexpected end of input"),
            Self::Invalid { token, expected } => write!(f, "'{token}' is not a valid {expected}"),
            Self::Io(kind) => write!(f, "failed to read input: {kind}"),
        }
    }
}

impl core::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}

/// Line oriented reader handing out whitespace delimited tokens or whole lines.
pub struct Input<R> {
    reader: R,
    rest: String,
}

impl<R: BufRead> Input<R> {
    /// Creates a new input reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            rest: String::new(),
        }
    }

    fn fill_line(&mut self) -> Result<bool, InputError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(false),
            _ => {
                self.rest = line;
                Ok(true)
            }
        }
    }

    /// Returns the next whitespace delimited token, reading as many lines as needed;
    /// None if the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            let trimmed = self.rest.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                self.rest = trimmed[end..].to_string();
                return Ok(Some(token));
            }
            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    /// Returns the remainder of the current line if it holds anything but whitespace;
    /// the next line otherwise. Leading whitespace and the line terminator are dropped.
    ///
    /// None if the input is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>, InputError> {
        if self.rest.trim().is_empty() && !self.fill_line()? {
            return Ok(None);
        }
        let line = core::mem::take(&mut self.rest);
        let line = line.trim_start().trim_end_matches(['\n', '\r']);
        Ok(Some(line.to_string()))
    }
}

/// A value which can be read from the console.
///
/// Numbers and characters are single tokens; text is a whole line and may contain spaces.
pub trait ReadValue: Sized {
    /// Reads one value from the `input`.
    fn read_value<R: BufRead>(input: &mut Input<R>) -> Result<Self, InputError>;
}

fn parse_token<R, T>(input: &mut Input<R>, kind: ElementKind) -> Result<T, InputError>
where
    R: BufRead,
    T: core::str::FromStr,
{
    let token = input.next_token()?.ok_or(InputError::EndOfInput)?;
    token.parse().map_err(|_| InputError::Invalid {
        token,
        expected: kind,
    })
}

impl ReadValue for i32 {
    fn read_value<R: BufRead>(input: &mut Input<R>) -> Result<Self, InputError> {
        parse_token(input, ElementKind::Integer)
    }
}

impl ReadValue for f32 {
    fn read_value<R: BufRead>(input: &mut Input<R>) -> Result<Self, InputError> {
        parse_token(input, ElementKind::Float)
    }
}

impl ReadValue for char {
    fn read_value<R: BufRead>(input: &mut Input<R>) -> Result<Self, InputError> {
        parse_token(input, ElementKind::Character)
    }
}

impl ReadValue for String {
    fn read_value<R: BufRead>(input: &mut Input<R>) -> Result<Self, InputError> {
        input.next_line()?.ok_or(InputError::EndOfInput)
    }
}
