/// Error types for reading and checking a batch of test cases
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid {expected} at token {position}: {token:?}")]
    InvalidToken {
        token: String,
        position: usize,
        expected: &'static str,
    },

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Whether the error comes from malformed or truncated input rather than the stream itself
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
