//! Error types for the Rust-facing runtime API
//!
//! None of these cross the C boundary; the exported entry points collapse
//! every failure into their plain integer return.

use derive_more::{Display, From};

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Display, Debug, From)]
#[display("{kind}")]
pub struct RuntimeError {
    #[from]
    kind: Box<RuntimeErrorKind>,
}

impl<E> From<E> for RuntimeError
where
    RuntimeErrorKind: From<E>,
{
    fn from(error: E) -> Self {
        RuntimeError {
            kind: Box::new(RuntimeErrorKind::from(error)),
        }
    }
}

impl RuntimeError {
    pub fn kind(&self) -> &RuntimeErrorKind {
        &self.kind
    }

    pub(crate) fn unexpected_eof() -> Self {
        RuntimeErrorKind::UnexpectedEof.into()
    }

    pub(crate) fn malformed_integer(token: impl Into<String>) -> Self {
        RuntimeErrorKind::MalformedInteger(token.into()).into()
    }

    pub(crate) fn integer_out_of_range(token: impl Into<String>) -> Self {
        RuntimeErrorKind::IntegerOutOfRange(token.into()).into()
    }

    pub(crate) fn unknown_primitive(symbol: impl Into<String>) -> Self {
        RuntimeErrorKind::UnknownPrimitive(symbol.into()).into()
    }

    pub(crate) fn arity_mismatch(symbol: &'static str, expected: usize, found: usize) -> Self {
        RuntimeErrorKind::ArityMismatch {
            symbol,
            expected,
            found,
        }
        .into()
    }

    pub(crate) fn invalid_config(msg: impl std::fmt::Display) -> Self {
        RuntimeErrorKind::InvalidConfig(msg.to_string()).into()
    }

    /// True when the input stream had no further token to offer.
    pub fn is_eof(&self) -> bool {
        matches!(*self.kind, RuntimeErrorKind::UnexpectedEof)
    }

    /// True for input that was present but could not be read as an integer.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            *self.kind,
            RuntimeErrorKind::MalformedInteger(_) | RuntimeErrorKind::IntegerOutOfRange(_)
        )
    }
}

#[derive(Display, Debug)]
pub enum RuntimeErrorKind {
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    #[display("Unexpected end of input")]
    UnexpectedEof,

    #[display("Malformed integer input: {_0:?}")]
    MalformedInteger(String),

    #[display("Integer out of range: {_0}")]
    IntegerOutOfRange(String),

    #[display("Unknown runtime primitive: {_0}")]
    UnknownPrimitive(String),

    #[display("{symbol} expects {expected} argument(s), got {found}")]
    ArityMismatch {
        symbol: &'static str,
        expected: usize,
        found: usize,
    },

    #[display("Invalid runtime configuration: {_0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for RuntimeErrorKind {
    fn from(error: std::io::Error) -> Self {
        RuntimeErrorKind::Io(error)
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            RuntimeErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}
