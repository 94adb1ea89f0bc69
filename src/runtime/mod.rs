//! Run-loop drivers for interactive and batch execution.
//!
//! Both loops parse outside the session's lock and are generic over their
//! reader and writer so tests can drive them with in-memory buffers.

use std::io::{BufRead, Write};

use crate::core::error::AppResult;
use crate::core::{Allocator, Session, Storage};
use crate::parser::{self, ParseError, Tokenizer};

/// Interactive driver: print the prompt, run one command, report errors to
/// `err` and keep going. Only end of input or an I/O failure ends the loop.
///
/// # Errors
///
/// Propagates I/O failures from the reader or writers.
pub fn run_interactive<S, A, R, W, E>(
    session: &Session<S, A>,
    tokenizer: &mut Tokenizer<R>,
    prompt: &str,
    out: &mut W,
    err: &mut E,
) -> std::io::Result<()>
where
    S: Storage,
    A: Allocator,
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        match parser::next_command(tokenizer) {
            Ok(None) => break,
            Ok(Some(command)) => match session.execute(&command) {
                Ok(response) => writeln!(out, "{response}")?,
                Err(error) => writeln!(err, "{error}")?,
            },
            Err(ParseError::Io(error)) => return Err(error),
            Err(error) => writeln!(err, "{error}")?,
        }
    }
    Ok(())
}

/// Batch driver: run commands until end of input, stopping the whole run
/// on the first error. Used when input comes from a file.
///
/// # Errors
///
/// The first parse, lot, or I/O error encountered.
pub fn run_batch<S, A, R, W>(
    session: &Session<S, A>,
    tokenizer: &mut Tokenizer<R>,
    out: &mut W,
) -> AppResult<()>
where
    S: Storage,
    A: Allocator,
    R: BufRead,
    W: Write,
{
    while let Some(command) = parser::next_command(tokenizer)? {
        let response = session.execute(&command)?;
        writeln!(out, "{response}")?;
    }
    Ok(())
}
