//! Stream-generic implementation of the six runtime primitives.
//!
//! The exported C functions in the crate root bind a [`Console`] to the
//! process's stdin and stdout for the duration of one call. Everything else
//! (tests, the host tool) can hand in any reader and writer.

use std::io::{BufRead, Write};

use crate::config::{MalformedInputPolicy, RuntimeConfig};
use crate::error::RuntimeResult;
use crate::scan::scan_i64;
use crate::sentinel;

pub const MENU: &str = "\n--- CALCOLATRICE MINILANG ---\n\
1. Addizione (+)\n\
2. Sottrazione (-)\n\
3. Moltiplicazione (*)\n\
4. Divisione (/)\n\
5. Esci\n\
Scegli un'operazione: ";

pub const INPUT_PROMPT: &str = "Inserisci numero: ";

pub const RESULT_MARKER: &str = ">> RISULTATO: ";

pub const SEPARATOR: &str = "-";

pub struct Console<R, W> {
    input: R,
    output: W,
    config: RuntimeConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, RuntimeConfig::default())
    }

    pub fn with_config(input: R, output: W, config: RuntimeConfig) -> Self {
        Console {
            input,
            output,
            config,
        }
    }

    /// Give back the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write the operation menu, ending on the choice prompt.
    pub fn display_menu(&mut self) -> RuntimeResult<i64> {
        self.emit(MENU)?;
        Ok(0)
    }

    /// Read the next integer from the input stream.
    ///
    /// Blocks until a token is available. A token that is not an integer is
    /// discarded; with [`MalformedInputPolicy::Skip`] reading continues with
    /// the following token, otherwise the error is returned.
    pub fn read_input(&mut self) -> RuntimeResult<i64> {
        loop {
            match scan_i64(&mut self.input) {
                Ok(value) => {
                    tracing::debug!(value, "read_input");
                    return Ok(value);
                }
                Err(e) if e.is_malformed_input() => {
                    tracing::warn!(policy = %self.config.malformed_input, "{e}");
                    if self.config.malformed_input == MalformedInputPolicy::Zero {
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn print_input_prompt(&mut self) -> RuntimeResult<i64> {
        self.emit(INPUT_PROMPT)?;
        Ok(0)
    }

    /// Write `value` on its own result line. Sentinels get no special treatment.
    pub fn print_result(&mut self, value: i64) -> RuntimeResult<i64> {
        writeln!(self.output, "{RESULT_MARKER}{value}")?;
        self.output.flush()?;
        Ok(0)
    }

    /// Write a single dash. The argument only keeps the signature uniform.
    pub fn print_separator(&mut self, _value: i64) -> RuntimeResult<i64> {
        self.emit(SEPARATOR)?;
        Ok(0)
    }

    /// Write the message for each sentinel equal to `code`; anything else
    /// writes nothing.
    pub fn print_error(&mut self, code: i64) -> RuntimeResult<i64> {
        for message in sentinel::messages_for(code) {
            self.output.write_all(message.as_bytes())?;
        }
        self.output.flush()?;
        Ok(0)
    }

    fn emit(&mut self, text: &str) -> RuntimeResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
