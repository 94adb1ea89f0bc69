//! Command parsing: verbs, arity validation, and argument normalization.
//!
//! The parser is the boundary between raw text and the processor. It
//! guarantees that any [`Command`] it hands out has a recognized verb and
//! the argument count that verb requires, so the processor can index
//! arguments without further checks. Multi-word colors ("Crimson Red")
//! are joined into a single argument here.

pub mod tokenizer;

use std::io::{self, BufRead};

use thiserror::Error;

pub use tokenizer::Tokenizer;

/// Parse-time errors. Always input mistakes; they never touch lot state.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input line was empty.
    #[error("empty input line")]
    EmptyLine,
    /// The verb is not one of the recognized commands.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// The verb is recognized but the argument count is wrong.
    #[error("incorrect usage of `{0}`")]
    IncorrectUsage(&'static str),
    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Recognized command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `create_parking_lot <size>`
    CreateParkingLot,
    /// `park <reg-num> <color...>`
    Park,
    /// `leave <slot>`
    Leave,
    /// `status`
    Status,
    /// `registration_numbers_for_cars_with_colour <color...>`
    RegNumsForColor,
    /// `slot_numbers_for_cars_with_colour <color...>`
    SlotsForColor,
    /// `slot_number_for_registration_number <reg-num>`
    SlotForRegNum,
}

/// A single parsed input line: the verb plus its normalized arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The recognized verb.
    pub kind: CommandKind,
    /// Arguments, arity-checked for `kind`. Color arguments are already
    /// joined into one element.
    pub args: Vec<String>,
}

/// Read and parse the next command from `tokenizer`. `Ok(None)` signals
/// end of input, distinguished from every error.
///
/// # Errors
///
/// Any [`ParseError`], including wrapped I/O failures from the reader.
pub fn next_command<R: BufRead>(
    tokenizer: &mut Tokenizer<R>,
) -> Result<Option<Command>, ParseError> {
    match tokenizer.next_line()? {
        Some(line) => parse_line(&line).map(Some),
        None => Ok(None),
    }
}

/// Parse one input line into a [`Command`].
///
/// # Errors
///
/// [`ParseError::EmptyLine`] for blank input,
/// [`ParseError::UnknownCommand`] for an unrecognized verb, or
/// [`ParseError::IncorrectUsage`] when the argument count is wrong.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(ParseError::EmptyLine);
    };
    let args: Vec<&str> = parts.collect();

    match verb {
        "create_parking_lot" => exact(CommandKind::CreateParkingLot, "create_parking_lot", &args, 1),
        "park" => {
            // Reg num plus at least one color word; trailing words are one color.
            if args.len() < 2 {
                return Err(ParseError::IncorrectUsage("park"));
            }
            Ok(Command {
                kind: CommandKind::Park,
                args: vec![args[0].to_owned(), args[1..].join(" ")],
            })
        }
        "leave" => exact(CommandKind::Leave, "leave", &args, 1),
        "status" => exact(CommandKind::Status, "status", &args, 0),
        "registration_numbers_for_cars_with_colour" => color_lookup(
            CommandKind::RegNumsForColor,
            "registration_numbers_for_cars_with_colour",
            &args,
        ),
        "slot_numbers_for_cars_with_colour" => color_lookup(
            CommandKind::SlotsForColor,
            "slot_numbers_for_cars_with_colour",
            &args,
        ),
        "slot_number_for_registration_number" => exact(
            CommandKind::SlotForRegNum,
            "slot_number_for_registration_number",
            &args,
            1,
        ),
        unknown => Err(ParseError::UnknownCommand(unknown.to_owned())),
    }
}

fn exact(
    kind: CommandKind,
    verb: &'static str,
    args: &[&str],
    arity: usize,
) -> Result<Command, ParseError> {
    if args.len() != arity {
        return Err(ParseError::IncorrectUsage(verb));
    }
    Ok(Command {
        kind,
        args: args.iter().map(|&arg| arg.to_owned()).collect(),
    })
}

fn color_lookup(
    kind: CommandKind,
    verb: &'static str,
    args: &[&str],
) -> Result<Command, ParseError> {
    if args.is_empty() {
        return Err(ParseError::IncorrectUsage(verb));
    }
    Ok(Command {
        kind,
        args: vec![args.join(" ")],
    })
}
