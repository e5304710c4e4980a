//! Sentinel codes carried through the integer-only call boundary.
//!
//! Compiled minilang programs report exceptional conditions by passing one of
//! a closed set of reserved negative integers to `print_error`:
//!
//! | Code    | Meaning                                   |
//! |---------|-------------------------------------------|
//! | `-9999` | Invalid operation code selected by the user |
//! | `-222`  | User requested program exit               |
//! | `-111`  | Program has just started (informational)  |
//!
//! The runtime only pattern-matches these codes for display. Deciding whether
//! an integer is a sentinel or an ordinary result is the caller's job.

use std::fmt;

pub const INVALID_OPERATION: i64 = -9999;
pub const EXIT_REQUESTED: i64 = -222;
pub const PROGRAM_STARTED: i64 = -111;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
    InvalidOperation,
    ExitRequested,
    ProgramStarted,
}

impl Sentinel {
    pub const ALL: [Sentinel; 3] = [
        Sentinel::InvalidOperation,
        Sentinel::ExitRequested,
        Sentinel::ProgramStarted,
    ];

    pub const fn code(self) -> i64 {
        match self {
            Sentinel::InvalidOperation => INVALID_OPERATION,
            Sentinel::ExitRequested => EXIT_REQUESTED,
            Sentinel::ProgramStarted => PROGRAM_STARTED,
        }
    }

    /// Text written by `print_error` for this code, without a newline.
    pub const fn message(self) -> &'static str {
        match self {
            Sentinel::InvalidOperation => "Codice non valido",
            Sentinel::ExitRequested => "Stai chiedendo di uscire",
            Sentinel::ProgramStarted => "Programma avviato",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Internal view of a raw boundary integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Value(i64),
    Sentinel(Sentinel),
}

impl Outcome {
    pub fn decode(raw: i64) -> Self {
        match Sentinel::from_code(raw) {
            Some(sentinel) => Outcome::Sentinel(sentinel),
            None => Outcome::Value(raw),
        }
    }

    pub fn encode(self) -> i64 {
        match self {
            Outcome::Value(value) => value,
            Outcome::Sentinel(sentinel) => sentinel.code(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Outcome::Sentinel(_))
    }
}

/// Messages `print_error` emits for `code`.
///
/// Every sentinel is compared on its own rather than through a first-match
/// chain, so a code shared by several entries would yield all of them.
pub fn messages_for(code: i64) -> impl Iterator<Item = &'static str> {
    Sentinel::ALL
        .into_iter()
        .filter(move |s| s.code() == code)
        .map(Sentinel::message)
}
