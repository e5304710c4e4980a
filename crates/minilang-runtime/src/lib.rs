//! minilang runtime library.
//!
//! Provides the native entry points that compiled minilang programs link
//! against. Every entry point takes zero or one `i64` and returns an `i64`:
//! - Menu and prompts (`show_menu`, `print_prompt`)
//! - Integer input (`get_input`)
//! - Result, separator and sentinel output (`print_result`, `print_dash`, `print_error`)
//!
//! The exported functions are thin wrappers binding a [`Console`] to the
//! process's stdin and stdout. Rust callers use [`Console`] directly with
//! any reader and writer.

pub mod abi;
pub mod config;
pub mod console;
pub mod error;
pub mod scan;
pub mod sentinel;


use std::io::{self, StdinLock, StdoutLock};

pub use abi::{DeclarationFormat, Primitive, render_declarations};
pub use config::{MalformedInputPolicy, RuntimeConfig};
pub use console::Console;
pub use error::{RuntimeError, RuntimeErrorKind, RuntimeResult};
pub use sentinel::{Outcome, Sentinel};

/// Console bound to the process's standard streams.
pub type StdConsole = Console<StdinLock<'static>, StdoutLock<'static>>;

/// Lock stdin and stdout and wrap them with the process configuration.
///
/// Unread input stays in the shared stdin buffer after the lock is dropped,
/// so consecutive calls continue where the previous one stopped.
pub fn std_console() -> StdConsole {
    Console::with_config(
        io::stdin().lock(),
        io::stdout().lock(),
        config::process_config(),
    )
}

/// Reduce a primitive's result to what its C export returns: the value on
/// success, `0` (after logging) on any error.
pub fn collapse(primitive: Primitive, result: RuntimeResult<i64>) -> i64 {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(symbol = primitive.symbol(), "{e}");
            0
        }
    }
}

/// Run one primitive against the standard streams.
fn call_std(primitive: Primitive, f: impl FnOnce(&mut StdConsole) -> RuntimeResult<i64>) -> i64 {
    let mut console = std_console();
    collapse(primitive, f(&mut console))
}

// =============================================================================
// Exported entry points
//
// Symbol names are fixed by the code generator; do not rename.
// =============================================================================

/// Write the operation menu, ending on the choice prompt. Returns `0`.
#[unsafe(no_mangle)]
pub extern "C" fn show_menu() -> i64 {
    call_std(Primitive::DisplayMenu, |c| c.display_menu())
}

/// Read the next integer from stdin.
///
/// Returns `0` at end of input, and for malformed input unless
/// `MINILANG_MALFORMED_INPUT=skip` is set.
#[unsafe(no_mangle)]
pub extern "C" fn get_input() -> i64 {
    call_std(Primitive::ReadInput, |c| c.read_input())
}

/// Write the number prompt. Returns `0`.
#[unsafe(no_mangle)]
pub extern "C" fn print_prompt() -> i64 {
    call_std(Primitive::PrintInputPrompt, |c| c.print_input_prompt())
}

/// Write `>> RISULTATO: <value>` and a newline. Returns `0`.
#[unsafe(no_mangle)]
pub extern "C" fn print_result(value: i64) -> i64 {
    call_std(Primitive::PrintResult, |c| c.print_result(value))
}

/// Write a single `-`. The argument is ignored. Returns `0`.
#[unsafe(no_mangle)]
pub extern "C" fn print_dash(value: i64) -> i64 {
    call_std(Primitive::PrintSeparator, |c| c.print_separator(value))
}

/// Write the message for a sentinel code, or nothing. Returns `0`.
#[unsafe(no_mangle)]
pub extern "C" fn print_error(code: i64) -> i64 {
    call_std(Primitive::PrintError, |c| c.print_error(code))
}
