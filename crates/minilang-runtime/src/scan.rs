//! Integer scanning with `%lld` conventions.
//!
//! Leading whitespace is skipped, an optional sign and a run of decimal
//! digits form the value, and the first byte after the digits stays in the
//! stream for the next read. A token with no digits is consumed up to the
//! next whitespace and reported as malformed.

use std::io::{self, BufRead};

use crate::error::{RuntimeError, RuntimeResult};

/// Read the next integer from `reader`.
pub fn scan_i64<R: BufRead + ?Sized>(reader: &mut R) -> RuntimeResult<i64> {
    skip_whitespace(reader)?;

    let mut token = Vec::new();
    if let Some(sign @ (b'+' | b'-')) = peek_byte(reader)? {
        token.push(sign);
        reader.consume(1);
    }

    let sign_len = token.len();
    while let Some(byte) = peek_byte(reader)? {
        if !byte.is_ascii_digit() {
            break;
        }
        token.push(byte);
        reader.consume(1);
    }

    if token.len() == sign_len {
        token.extend(take_token(reader)?);
        return Err(RuntimeError::malformed_integer(
            String::from_utf8_lossy(&token).into_owned(),
        ));
    }

    // Only ASCII sign and digits were collected.
    let text = String::from_utf8_lossy(&token);
    text.parse::<i64>()
        .map_err(|_| RuntimeError::integer_out_of_range(text.into_owned()))
}

/// Consume leading whitespace. Hitting end of input is an error.
fn skip_whitespace<R: BufRead + ?Sized>(reader: &mut R) -> RuntimeResult<()> {
    loop {
        let (skipped, exhausted) = {
            let buf = fill_buf(reader)?;
            if buf.is_empty() {
                return Err(RuntimeError::unexpected_eof());
            }
            let skipped = buf.iter().take_while(|&&b| is_space(b)).count();
            (skipped, skipped == buf.len())
        };
        reader.consume(skipped);
        if !exhausted {
            return Ok(());
        }
    }
}

/// Consume bytes up to (not including) the next whitespace.
fn take_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut taken = Vec::new();
    while let Some(byte) = peek_byte(reader)? {
        if is_space(byte) {
            break;
        }
        taken.push(byte);
        reader.consume(1);
    }
    Ok(taken)
}

fn peek_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    Ok(fill_buf(reader)?.first().copied())
}

/// `fill_buf` retrying on `Interrupted`.
///
/// An empty buffer is returned as-is: asking the reader again would start a
/// new read and swallow an end-of-input signal such as Ctrl-D on a terminal.
fn fill_buf<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<&[u8]> {
    let available = loop {
        match reader.fill_buf() {
            Ok(buf) => break buf.len(),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };
    if available == 0 {
        return Ok(&[]);
    }
    // Data is buffered, so this only re-borrows it.
    reader.fill_buf()
}

/// Whitespace as C `isspace` sees it, which includes vertical tab.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0b'
}
