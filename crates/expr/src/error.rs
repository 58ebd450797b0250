use thiserror::Error;

/// Errors that can occur while parsing an expression.
///
/// Positions are byte offsets into the original input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number at position {pos}")]
    InvalidNumber { pos: usize },

    #[error("unexpected token at position {pos}")]
    UnexpectedToken { pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },

    #[error("unexpected trailing input at position {pos}")]
    TrailingInput { pos: usize },
}
