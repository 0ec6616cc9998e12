use std::{
    fmt::{self, Display, Formatter},
    io::{self, BufRead},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("a generic IO error")]
    Io(#[from] io::Error),

    #[error("line {line}: error parsing number {token:?}")]
    Number { line: usize, token: String },
}

/// One scene command: a single letter followed by its numeric arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// The 1-based source line, for error messages.
    pub line: usize,
    pub kind: char,
    pub values: Vec<f64>,
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for value in self.values.iter() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

pub struct Tokenizer<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer { reader }
    }

    /// Tokenize from the reader, one command per non-empty line. Lines starting
    /// with `#` are comments.
    pub fn tokenize(self) -> Result<Vec<Command>, TokenizeError> {
        let mut commands = vec![];

        for (i, line) in self.reader.lines().enumerate() {
            let line = line?;
            let mut words = line.split_whitespace();

            let kind = match words.next().and_then(|w| w.chars().next()) {
                Some('#') | None => continue,
                Some(c) => c,
            };

            let values = words
                .map(|w| {
                    w.parse::<f64>().map_err(|_| TokenizeError::Number {
                        line: i + 1,
                        token: w.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            commands.push(Command {
                line: i + 1,
                kind,
                values,
            });
        }

        Ok(commands)
    }
}
