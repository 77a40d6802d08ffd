use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::CheckError;

/// Whitespace separated token reader over any buffered input.
///
/// Tokens may span any number of lines; blank lines and `\r\n` endings are
/// treated as ordinary whitespace.
pub struct TokenScanner<R> {
    reader: R,
    pending: VecDeque<String>,
    consumed: usize,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            consumed: 0,
        }
    }

    /// Read and parse the next token
    ///
    /// `expected` names the value being read and ends up in the error message.
    pub fn next_token<T: FromStr>(&mut self, expected: &'static str) -> Result<T, CheckError> {
        if !self.fill()? {
            return Err(CheckError::UnexpectedEof { expected });
        }
        let Some(token) = self.pending.pop_front() else {
            return Err(CheckError::UnexpectedEof { expected });
        };
        self.consumed += 1;

        token.parse().map_err(|_| CheckError::InvalidToken {
            token,
            position: self.consumed,
            expected,
        })
    }

    /// Whether any non-whitespace input is left
    pub fn has_remaining(&mut self) -> Result<bool, CheckError> {
        self.fill()
    }

    /// Whether tokens from the last line read are still unconsumed, never blocks
    pub fn has_buffered(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of tokens handed out so far
    pub fn tokens_read(&self) -> usize {
        self.consumed
    }

    /// Make sure at least one token is buffered, returns false at end of input
    fn fill(&mut self) -> Result<bool, CheckError> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(line.split_ascii_whitespace().map(str::to_owned));
        }
        Ok(true)
    }
}
